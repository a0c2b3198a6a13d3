#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

mod helpers;

use csasg::{AsgError, Graph, Node, NodeId, NodeKind, Schema};
use rstest::rstest;

use helpers::fixtures::class_graph;

#[rstest]
#[case(NodeKind::IfStatementSyntax, "statement:IfStatementSyntax")]
#[case(NodeKind::LiteralExpressionSyntax, "expression:LiteralExpressionSyntax")]
#[case(NodeKind::ClassDeclarationSyntax, "structure:ClassDeclarationSyntax")]
#[case(NodeKind::Positioned, "base:Positioned")]
fn test_tag_names(#[case] kind: NodeKind, #[case] tag: &str) {
    assert_eq!(Schema::csharp().tag_name(kind), tag);
    assert_eq!(Schema::csharp().kind_by_name(kind.name()), Some(kind));
}

#[test]
fn test_schema_has_no_defects() {
    assert!(Schema::csharp().defects().is_empty());
}

fn add_rejection(node: Node) -> AsgError {
    let mut graph = class_graph();
    graph.add_node(node).unwrap_err()
}

#[test]
fn test_add_node_rejections() {
    assert!(matches!(
        add_rejection(Node::new(0, NodeKind::BlockSyntax)),
        AsgError::NullId { .. }
    ));
    assert!(matches!(
        add_rejection(Node::new(2, NodeKind::BlockSyntax)),
        AsgError::DuplicateId { .. }
    ));
    assert!(matches!(
        add_rejection(Node::new(50, NodeKind::StatementSyntax)),
        AsgError::AbstractKind { .. }
    ));
    assert!(matches!(
        add_rejection(Node::new(50, NodeKind::BlockSyntax).with_attribute("token", "x")),
        AsgError::UnknownAttribute { .. }
    ));
    assert!(matches!(
        add_rejection(Node::new(50, NodeKind::LiteralExpressionSyntax).with_attribute("token", 7i64)),
        AsgError::AttributeType { .. }
    ));
}

#[rstest]
// Slot not declared on the kind or its ancestors.
#[case(7, "Condition", 50, "UnknownSlot")]
// Block does not accept an expression.
#[case(7, "Statements", 51, "TargetKind")]
// Return already holds its expression.
#[case(9, "Expression", 51, "SlotOccupied")]
// Parameter 4 is contained by the parameter list.
#[case(7, "Statements", 4, "TargetKind")]
// Block 13 already belongs to method 8.
#[case(2, "Body", 13, "AlreadyContained")]
// Unknown target.
#[case(7, "Statements", 99, "NotFound")]
fn test_link_rejections(
    #[case] source: u32,
    #[case] slot: &str,
    #[case] target: u32,
    #[case] expected: &str,
) {
    let mut graph = class_graph();
    graph.add_node(Node::new(50, NodeKind::BreakStatementSyntax)).unwrap();
    graph
        .add_node(Node::new(51, NodeKind::LiteralExpressionSyntax).with_attribute("token", "1"))
        .unwrap();

    let err = graph.link(NodeId(source), slot, NodeId(target)).unwrap_err();
    let name = match err {
        AsgError::UnknownSlot { .. } => "UnknownSlot",
        AsgError::TargetKind { .. } => "TargetKind",
        AsgError::SlotOccupied { .. } => "SlotOccupied",
        AsgError::NotFound { .. } => "NotFound",
        AsgError::AlreadyContained { .. } => "AlreadyContained",
        other => panic!("unexpected error: {other}"),
    };
    assert_eq!(name, expected);
}

#[test]
fn test_containment_is_a_tree() {
    let mut graph = Graph::new();
    for id in 1..=3 {
        graph.add_node(Node::new(id, NodeKind::BlockSyntax)).unwrap();
    }
    graph.link(NodeId(1), "Statements", NodeId(2)).unwrap();
    graph.link(NodeId(2), "Statements", NodeId(3)).unwrap();

    let err = graph.link(NodeId(3), "Statements", NodeId(1)).unwrap_err();
    assert!(matches!(err, AsgError::ContainmentCycle { .. }));
    let err = graph.link(NodeId(1), "Statements", NodeId(3)).unwrap_err();
    assert!(matches!(err, AsgError::AlreadyContained { parent, .. } if parent == NodeId(2)));

    assert_eq!(graph.roots().collect::<Vec<_>>(), [NodeId(1)]);
    assert_eq!(graph.ancestors(NodeId(3)).collect::<Vec<_>>(), [NodeId(2), NodeId(1)]);
    assert_eq!(graph.subtree(NodeId(1)).unwrap(), [NodeId(1), NodeId(2), NodeId(3)]);
}

#[test]
fn test_queries_over_class() {
    let graph = class_graph();
    assert_eq!(graph.len(), 16);
    assert_eq!(graph.roots().collect::<Vec<_>>(), [NodeId(1)]);
    assert_eq!(graph.parent(NodeId(16)), Some(NodeId(15)));
    assert_eq!(
        graph.children(NodeId(15)).unwrap(),
        [("Expression", NodeId(16))]
    );
    assert_eq!(
        graph.references(NodeId(15)).unwrap(),
        [("MethodCall", NodeId(2))]
    );

    let missing = graph.missing_required();
    assert!(missing.contains(&(NodeId(8), "ParameterList")));
    assert!(missing.contains(&(NodeId(8), "ReturnType")));
    assert!(!missing.contains(&(NodeId(2), "ParameterList")));
    assert!(!missing.iter().any(|(id, _)| *id == NodeId(10)));
}

#[test]
fn test_filter_state_and_guard() {
    let mut graph = class_graph();
    graph.set_filtered(NodeId(8)).unwrap();
    assert!(!graph.is_included(NodeId(8)));
    assert!(!graph.is_included(NodeId(16)));
    assert!(graph.is_included(NodeId(2)));

    graph.set_not_filtered_this_node_only(NodeId(8)).unwrap();
    assert!(graph.is_included(NodeId(8)));
    assert!(!graph.is_included(NodeId(13)));

    {
        let guard = graph.filter_off_guard();
        assert!(!guard.is_filter_turned_on());
        assert!(guard.is_included(NodeId(13)));
    }
    assert!(graph.is_filter_turned_on());
    assert!(!graph.is_included(NodeId(13)));

    assert!(matches!(
        graph.set_filtered(NodeId(99)),
        Err(AsgError::NotFound { .. })
    ));
}
