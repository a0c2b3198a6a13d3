#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

mod helpers;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use csasg::interchange::{CsharpMl, CsharpMlOptions, DumpFormat, OutputSink, escape};
use csasg::{Graph, Node, NodeId, NodeKind};
use rstest::rstest;

use helpers::fixtures::{class_graph, if_statement_graph};
use helpers::xml::{elements, structure};

const PREAMBLE: &str = "\
<?xml version='1.0' encoding=\"utf-8\"?>
<!DOCTYPE Project SYSTEM 'csharp-0.9.dtd'>
<Project name='demo' xmlns:base='columbus_csharp_schema/base' xmlns:expression='columbus_csharp_schema/expression' xmlns:statement='columbus_csharp_schema/statement' xmlns:structure='columbus_csharp_schema/structure'>
";

const TRAILER: &str = "<Filtered id='id1'/>\n</Project>\n";

fn render(graph: &Graph, options: CsharpMlOptions) -> String {
    CsharpMl::new(options).render(graph).unwrap()
}

#[test]
fn test_if_statement_example() {
    let xml = render(&if_statement_graph(), CsharpMlOptions::new("demo"));
    let position = "<SourcePosition name='position' endColumn='0' endLine='0' fileName='' startColumn='0' startLine='0'/>";
    let body = format!(
        "\
<statement:IfStatementSyntax id='id10' parent='id0'>
\t{position}
\t<IfStatementSyntax_Condition>
\t\t<expression:LiteralExpressionSyntax id='id11' parent='id10' token='true'>
\t\t\t{position}
\t\t</expression:LiteralExpressionSyntax>
\t</IfStatementSyntax_Condition>
\t<IfStatementSyntax_Statement>
\t\t<statement:BlockSyntax id='id12' parent='id10'>
\t\t\t{position}
\t\t</statement:BlockSyntax>
\t</IfStatementSyntax_Statement>
</statement:IfStatementSyntax>
"
    );
    assert_eq!(xml, format!("{PREAMBLE}{body}{TRAILER}"));
}

#[test]
fn test_empty_graph_is_preamble_and_trailer() {
    let xml = render(&Graph::new(), CsharpMlOptions::new("demo"));
    assert_eq!(xml, format!("{PREAMBLE}{TRAILER}"));
}

#[rstest]
#[case(false, false)]
#[case(true, false)]
#[case(false, true)]
#[case(true, true)]
fn test_output_is_well_formed(#[case] no_id: bool, #[case] no_line_info: bool) {
    let options = CsharpMlOptions::new("Calc & Co")
        .with_no_id(no_id)
        .with_no_line_info(no_line_info);
    let xml = render(&class_graph(), options);
    let all = elements(&xml);

    assert_eq!(all[0].name, "Project");
    assert_eq!(all[0].attr("name"), Some("Calc & Co"));
    assert_eq!(all.last().unwrap().name, "Filtered");
    let positions = all.iter().filter(|e| e.name == "SourcePosition").count();
    assert_eq!(positions, if no_line_info { 0 } else { 16 });
}

#[test]
fn test_child_order_follows_schema() {
    let graph = class_graph();
    let mut out = Vec::new();
    CsharpMl::new(CsharpMlOptions::new("demo").with_no_line_info(true))
        .write_from(&graph, NodeId(2), &mut out)
        .unwrap();
    let xml = String::from_utf8(out).unwrap();

    assert_eq!(
        structure(&xml),
        [
            "structure:MethodDeclarationSyntax",
            "BaseMethodDeclarationSyntax_Body",
            "statement:BlockSyntax",
            "BlockSyntax_Statements",
            "statement:ReturnStatementSyntax",
            "ReturnStatementSyntax_Expression",
            "expression:BinaryExpressionSyntax",
            "BinaryExpressionSyntax_Left",
            "expression:IdentifierNameSyntax",
            "IdentifierNameSyntax_Declaration",
            "BinaryExpressionSyntax_Right",
            "expression:IdentifierNameSyntax",
            "IdentifierNameSyntax_Declaration",
            "BaseMethodDeclarationSyntax_ParameterList",
            "structure:ParameterListSyntax",
            "BaseParameterListSyntax_Parameters",
            "structure:ParameterSyntax",
            "BaseParameterListSyntax_Parameters",
            "structure:ParameterSyntax",
            "MethodDeclarationSyntax_ReturnType",
            "expression:IdentifierNameSyntax",
        ]
    );
    // Method at depth 0, the reference bracket nine levels down.
    assert!(xml.contains("<structure:MethodDeclarationSyntax id='id2' parent='id1' identifier='Add'>\n"));
    assert!(xml.contains(&format!("\n{}<IdentifierNameSyntax_Declaration ref='id4'/>\n", "\t".repeat(9))));
}

#[test]
fn test_sequence_order_is_insertion_order() {
    let mut graph = Graph::new();
    graph.add_node(Node::new(1, NodeKind::BlockSyntax)).unwrap();
    for id in [7, 3, 5] {
        graph.add_node(Node::new(id, NodeKind::BreakStatementSyntax)).unwrap();
    }
    graph.link_all(NodeId(1), "Statements", [NodeId(5), NodeId(7), NodeId(3)]).unwrap();

    let xml = render(&graph, CsharpMlOptions::new("demo"));
    let ids: Vec<_> = elements(&xml)
        .into_iter()
        .filter(|e| e.name == "statement:BreakStatementSyntax")
        .map(|e| e.attr("id").unwrap().to_string())
        .collect();
    assert_eq!(ids, ["id5", "id7", "id3"]);
}

#[test]
fn test_output_is_deterministic() {
    let ml = CsharpMl::new(CsharpMlOptions::new("demo"));
    let first = ml.render(&class_graph()).unwrap();
    let second = ml.render(&class_graph()).unwrap();
    assert_eq!(first, second);

    // Insertion order of non-root nodes does not matter.
    let mut reordered = Graph::new();
    reordered.add_node(Node::new(10, NodeKind::IfStatementSyntax)).unwrap();
    reordered.add_node(Node::new(12, NodeKind::BlockSyntax)).unwrap();
    reordered
        .add_node(Node::new(11, NodeKind::LiteralExpressionSyntax).with_attribute("token", "true"))
        .unwrap();
    reordered.link(NodeId(10), "Statement", NodeId(12)).unwrap();
    reordered.link(NodeId(10), "Condition", NodeId(11)).unwrap();
    assert_eq!(ml.render(&reordered).unwrap(), ml.render(&if_statement_graph()).unwrap());
}

#[test]
fn test_filtered_subtree_is_left_out() {
    let mut graph = class_graph();
    graph.set_filtered(NodeId(7)).unwrap();
    let xml = render(&graph, CsharpMlOptions::new("demo").with_no_line_info(true));

    for hidden in ["id7", "id9", "id10", "id11", "id12"] {
        assert!(!xml.contains(&format!("id='{hidden}'")), "{hidden} should be filtered");
    }
    // The bracket of the filtered body stays, empty.
    assert!(xml.contains(
        "\n\t\t\t<BaseMethodDeclarationSyntax_Body>\n\t\t\t</BaseMethodDeclarationSyntax_Body>\n"
    ));
    assert!(xml.contains("id='id13'"));

    graph.set_not_filtered(NodeId(11)).unwrap();
    let xml = render(&graph, CsharpMlOptions::new("demo"));
    assert!(xml.contains("id='id11'"));
    assert!(xml.contains("id='id9'"));
    assert!(!xml.contains("id='id12'"));

    let guard = graph.filter_off_guard();
    let xml = render(&guard, CsharpMlOptions::new("demo"));
    assert!(xml.contains("id='id12'"));
}

#[test]
fn test_references_are_not_followed() {
    // void F() { F(); }
    let mut graph = Graph::new();
    graph.add_node(Node::new(1, NodeKind::MethodDeclarationSyntax)).unwrap();
    graph.add_node(Node::new(2, NodeKind::BlockSyntax)).unwrap();
    graph.add_node(Node::new(3, NodeKind::ExpressionStatementSyntax)).unwrap();
    graph.add_node(Node::new(4, NodeKind::InvocationExpressionSyntax)).unwrap();
    graph.link(NodeId(1), "Body", NodeId(2)).unwrap();
    graph.link(NodeId(2), "Statements", NodeId(3)).unwrap();
    graph.link(NodeId(3), "Expression", NodeId(4)).unwrap();
    graph.link(NodeId(4), "MethodCall", NodeId(1)).unwrap();

    let xml = render(&graph, CsharpMlOptions::new("demo"));
    let body = xml.strip_suffix(TRAILER).unwrap();
    assert_eq!(body.matches("id='id1'").count(), 1);
    assert!(body.contains("<structure:MethodDeclarationSyntax id='id1' parent='id0'>"));
    assert_eq!(xml.matches("<InvocationExpressionSyntax_MethodCall ref='id1'/>").count(), 1);
    assert!(!xml.contains("</InvocationExpressionSyntax_MethodCall>"));

    let class = render(&class_graph(), CsharpMlOptions::new("demo"));
    assert_eq!(class.matches("id='id2'").count(), 1);
    assert_eq!(class.matches("ref='id2'").count(), 2);
}

#[rstest]
#[case("plain")]
#[case("a < b && c > d")]
#[case("it's \"quoted\"")]
#[case("line\nbreak\r\nand\ttab")]
#[case("&amp; already escaped")]
#[case("ünïcödé ✓")]
#[case("")]
fn test_escaping_round_trips(#[case] raw: &str) {
    let escaped = escape(raw);
    assert!(!escaped.contains(['<', '>', '\'', '"', '\n', '\r', '\t']));
    assert_eq!(quick_xml::escape::unescape(&escaped).unwrap(), raw);

    let mut graph = Graph::new();
    graph
        .add_node(Node::new(1, NodeKind::LiteralExpressionSyntax).with_attribute("token", raw))
        .unwrap();
    let xml = render(&graph, CsharpMlOptions::new(raw));
    let all = elements(&xml);
    assert_eq!(all[0].attr("name"), Some(raw));
    assert_eq!(all[1].attr("token"), Some(raw));
}

#[test]
fn test_no_id_mode() {
    let options = || CsharpMlOptions::new("demo").with_no_id(true);
    let xml = render(&class_graph(), options());
    let body = xml.strip_suffix(TRAILER).unwrap();
    assert!(!body.contains("='id"), "only the Filtered marker may carry an id");
    assert!(body.contains("id='' parent=''"));
    assert!(body.contains("<IdentifierNameSyntax_Declaration ref=''/>"));

    // Same shape, different ids: identical documents.
    let mut renumbered = Graph::new();
    renumbered.add_node(Node::new(100, NodeKind::IfStatementSyntax)).unwrap();
    renumbered
        .add_node(Node::new(200, NodeKind::LiteralExpressionSyntax).with_attribute("token", "true"))
        .unwrap();
    renumbered.add_node(Node::new(300, NodeKind::BlockSyntax)).unwrap();
    renumbered.link(NodeId(100), "Condition", NodeId(200)).unwrap();
    renumbered.link(NodeId(100), "Statement", NodeId(300)).unwrap();
    assert_eq!(
        render(&renumbered, options()),
        render(&if_statement_graph(), options())
    );

    // With ids on, the two documents differ in their digits only.
    let with_ids = || CsharpMlOptions::new("demo");
    let renumbered = render(&renumbered, with_ids());
    let original = render(&if_statement_graph(), with_ids());
    assert_ne!(renumbered, original);
    let strip = |xml: &str| xml.replace(|c: char| c.is_ascii_digit(), "");
    assert_eq!(strip(&renumbered), strip(&original));
    assert!(renumbered.contains("id='id200' parent='id100'"));
}

/// Accepts `limit` bytes, then fails every write.
struct FailingSink {
    written: usize,
    limit: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for FailingSink {}

#[rstest]
#[case(0, false)]
#[case(400, true)]
fn test_io_errors_propagate(#[case] limit: usize, #[case] inside_node: bool) {
    let mut sink = FailingSink { written: 0, limit };
    let err = CsharpMl::new(CsharpMlOptions::new("p"))
        .write(&if_statement_graph(), &mut sink)
        .unwrap_err();

    let io = err.io_error().unwrap();
    assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(io.to_string(), "sink closed");
    assert_eq!(err.location().is_some(), inside_node);
}

#[test]
fn test_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.csharpml");
    let ml = CsharpMl::new(CsharpMlOptions::new("demo"));

    let mut file = BufWriter::new(File::create(&path).unwrap());
    ml.write(&class_graph(), &mut file).unwrap();
    drop(file);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, ml.render(&class_graph()).unwrap());
    assert_eq!(ml.extensions(), ["csharpml", "xml"]);
}

#[test]
fn test_parallel_documents_match_single_root_dumps() {
    let graph = class_graph();
    let ml = CsharpMl::new(CsharpMlOptions::new("demo"));
    let roots = [NodeId(8), NodeId(1), NodeId(2)];

    let docs = ml.write_roots_parallel(&graph, &roots).unwrap();
    assert_eq!(docs.len(), roots.len());
    for (doc, root) in docs.iter().zip(roots) {
        let mut single = Vec::new();
        ml.write_from(&graph, root, &mut single).unwrap();
        assert_eq!(doc, &single);
        elements(std::str::from_utf8(doc).unwrap());
    }
}

#[test]
fn test_parallel_reports_unknown_root() {
    let err = CsharpMl::default()
        .write_roots_parallel(&class_graph(), &[NodeId(1), NodeId(99)])
        .unwrap_err();
    assert!(matches!(err.root_cause(), csasg::AsgError::NotFound { .. }));
}
