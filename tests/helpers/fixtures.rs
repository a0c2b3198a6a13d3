//! Syntax graphs used across the integration tests.

use csasg::base::{SourcePosition, Span};
use csasg::{Graph, Node, NodeId, NodeKind};

/// `if (true) { }`: IfStatement 10, Literal 11, Block 12.
pub fn if_statement_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::new(10, NodeKind::IfStatementSyntax)).unwrap();
    graph
        .add_node(Node::new(11, NodeKind::LiteralExpressionSyntax).with_attribute("token", "true"))
        .unwrap();
    graph.add_node(Node::new(12, NodeKind::BlockSyntax)).unwrap();
    graph.link(NodeId(10), "Condition", NodeId(11)).unwrap();
    graph.link(NodeId(10), "Statement", NodeId(12)).unwrap();
    graph
}

/// A class with two methods:
///
/// ```text
/// class Calc {                       // 1
///     int Add(int a, int b) {        // 2, params 3 (4, 5), return type 6, body 7
///         return a + b;              // 9, binary 10, names 11 and 12
///     }
///     int Twice() {                  // 8, body 13
///         return Add();              // 14, invocation 15, callee name 16
///     }
/// }
/// ```
///
/// Names refer to their declarations, the invocation to the called method.
pub fn class_graph() -> Graph {
    let mut graph = Graph::new();
    let file = |line: u32| SourcePosition::new("Calc.cs", Span::from_coords(line, 1, line, 40));

    graph
        .add_node(Node::new(1, NodeKind::ClassDeclarationSyntax).with_attribute("identifier", "Calc"))
        .unwrap();
    graph
        .add_node(
            Node::new(2, NodeKind::MethodDeclarationSyntax)
                .with_attribute("identifier", "Add")
                .with_position(file(2)),
        )
        .unwrap();
    graph.add_node(Node::new(3, NodeKind::ParameterListSyntax)).unwrap();
    graph
        .add_node(Node::new(4, NodeKind::ParameterSyntax).with_attribute("identifier", "a"))
        .unwrap();
    graph
        .add_node(Node::new(5, NodeKind::ParameterSyntax).with_attribute("identifier", "b"))
        .unwrap();
    graph
        .add_node(Node::new(6, NodeKind::IdentifierNameSyntax).with_attribute("identifier", "int"))
        .unwrap();
    graph.add_node(Node::new(7, NodeKind::BlockSyntax)).unwrap();
    graph
        .add_node(
            Node::new(8, NodeKind::MethodDeclarationSyntax)
                .with_attribute("identifier", "Twice")
                .with_position(file(5)),
        )
        .unwrap();
    graph.add_node(Node::new(9, NodeKind::ReturnStatementSyntax)).unwrap();
    graph.add_node(Node::new(10, NodeKind::BinaryExpressionSyntax)).unwrap();
    graph
        .add_node(Node::new(11, NodeKind::IdentifierNameSyntax).with_attribute("identifier", "a"))
        .unwrap();
    graph
        .add_node(Node::new(12, NodeKind::IdentifierNameSyntax).with_attribute("identifier", "b"))
        .unwrap();
    graph.add_node(Node::new(13, NodeKind::BlockSyntax)).unwrap();
    graph.add_node(Node::new(14, NodeKind::ReturnStatementSyntax)).unwrap();
    graph.add_node(Node::new(15, NodeKind::InvocationExpressionSyntax)).unwrap();
    graph
        .add_node(Node::new(16, NodeKind::IdentifierNameSyntax).with_attribute("identifier", "Add"))
        .unwrap();

    graph.link_all(NodeId(1), "Members", [NodeId(2), NodeId(8)]).unwrap();
    graph.link(NodeId(2), "ParameterList", NodeId(3)).unwrap();
    graph.link_all(NodeId(3), "Parameters", [NodeId(4), NodeId(5)]).unwrap();
    graph.link(NodeId(2), "ReturnType", NodeId(6)).unwrap();
    graph.link(NodeId(2), "Body", NodeId(7)).unwrap();
    graph.link(NodeId(7), "Statements", NodeId(9)).unwrap();
    graph.link(NodeId(9), "Expression", NodeId(10)).unwrap();
    graph.link(NodeId(10), "Left", NodeId(11)).unwrap();
    graph.link(NodeId(10), "Right", NodeId(12)).unwrap();
    graph.link(NodeId(11), "Declaration", NodeId(4)).unwrap();
    graph.link(NodeId(12), "Declaration", NodeId(5)).unwrap();

    graph.link(NodeId(8), "Body", NodeId(13)).unwrap();
    graph.link(NodeId(13), "Statements", NodeId(14)).unwrap();
    graph.link(NodeId(14), "Expression", NodeId(15)).unwrap();
    graph.link(NodeId(15), "Expression", NodeId(16)).unwrap();
    graph.link(NodeId(15), "MethodCall", NodeId(2)).unwrap();
    graph.link(NodeId(16), "Declaration", NodeId(2)).unwrap();
    graph
}
