//! JSON rendering of the syntax graph.
//!
//! Each node becomes an object; containment edges nest the child object,
//! reference edges become `{"ref": <id>}`:
//!
//! ```json
//! {
//!   "kind": "IfStatementSyntax",
//!   "id": 10,
//!   "parent": null,
//!   "attributes": {},
//!   "position": null,
//!   "edges": { "Condition": [ { "kind": "LiteralExpressionSyntax", ... } ] }
//! }
//! ```

use serde_json::{Map, Value, json};

use super::format::DumpFormat;
use super::sink::OutputSink;
use crate::error::AsgError;
use crate::graph::Graph;
use crate::schema::EdgeKind;
use crate::traverse::Preorder;
use crate::visitor::{EdgeEvent, NodeEvent, Visitor};

struct Frame {
    object: Map<String, Value>,
    edges: Map<String, Value>,
    /// Slot whose containment bracket is open.
    open_slot: Option<&'static str>,
}

impl Frame {
    fn push_edge(&mut self, slot: &str, value: Value) {
        let entry = self
            .edges
            .entry(slot.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = entry {
            items.push(value);
        }
    }

    fn into_value(mut self) -> Value {
        self.object.insert("edges".to_string(), Value::Object(self.edges));
        Value::Object(self.object)
    }
}

/// Visitor that renders the traversal into a [`serde_json::Value`].
///
/// Filtered children are left out, as are empty slots.
#[derive(Default)]
pub struct JsonDump {
    stack: Vec<Frame>,
    roots: Vec<Value>,
}

impl JsonDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered roots, in visiting order.
    pub fn into_value(self) -> Value {
        Value::Array(self.roots)
    }
}

impl Visitor for JsonDump {
    fn begin_visit(&mut self, _graph: &Graph) -> Result<(), AsgError> {
        self.stack.clear();
        self.roots.clear();
        Ok(())
    }

    fn visit(&mut self, ev: &NodeEvent<'_>, _call_ancestor: bool) -> Result<(), AsgError> {
        let node = ev.node;
        let mut object = Map::new();
        object.insert("kind".to_string(), json!(ev.schema().kind_def(ev.kind()).name));
        object.insert("id".to_string(), json!(node.id()));
        object.insert("parent".to_string(), json!(node.parent()));

        let mut attributes = Map::new();
        for group in ev.schema().attribute_groups(ev.kind()) {
            for attr in group.attributes {
                if let Some(value) = node.attribute(attr.name) {
                    let value = serde_json::to_value(value).map_err(|e| AsgError::json(e.to_string()))?;
                    attributes.insert(attr.name.to_string(), value);
                }
            }
        }
        object.insert("attributes".to_string(), Value::Object(attributes));
        object.insert("position".to_string(), json!(node.position()));

        self.stack.push(Frame {
            object,
            edges: Map::new(),
            open_slot: None,
        });
        Ok(())
    }

    fn visit_end(&mut self, _ev: &NodeEvent<'_>, _call_ancestor: bool) -> Result<(), AsgError> {
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };
        let value = frame.into_value();
        match self.stack.last_mut() {
            Some(parent) => match parent.open_slot {
                Some(slot) => parent.push_edge(slot, value),
                None => tracing::warn!("node left outside of a containment edge"),
            },
            None => self.roots.push(value),
        }
        Ok(())
    }

    fn visit_edge(&mut self, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(());
        };
        match ev.slot.kind {
            EdgeKind::Containment => frame.open_slot = Some(ev.slot.name),
            EdgeKind::Reference => frame.push_edge(ev.slot.name, json!({ "ref": ev.target })),
        }
        Ok(())
    }

    fn visit_edge_end(&mut self, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
        if ev.slot.kind == EdgeKind::Containment {
            if let Some(frame) = self.stack.last_mut() {
                frame.open_slot = None;
            }
        }
        Ok(())
    }
}

/// Render every included root of `graph` as a JSON array.
pub fn to_json_value(graph: &Graph) -> Result<Value, AsgError> {
    let mut dump = JsonDump::new();
    Preorder::new(graph).run(&mut dump)?;
    Ok(dump.into_value())
}

/// JSON dump format, pretty-printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DumpFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, graph: &Graph, sink: &mut dyn OutputSink) -> Result<(), AsgError> {
        let value = to_json_value(graph)?;
        serde_json::to_writer_pretty(&mut *sink, &value).map_err(|e| {
            if e.is_io() {
                AsgError::Io(e.into())
            } else {
                AsgError::json(e.to_string())
            }
        })?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{NodeId, SourcePosition, Span};
    use crate::graph::Node;
    use crate::schema::NodeKind;

    fn call_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Node::new(1, NodeKind::MethodDeclarationSyntax)).unwrap();
        graph.add_node(Node::new(2, NodeKind::BlockSyntax)).unwrap();
        graph.add_node(Node::new(3, NodeKind::ExpressionStatementSyntax)).unwrap();
        graph
            .add_node(
                Node::new(4, NodeKind::InvocationExpressionSyntax)
                    .with_position(SourcePosition::new("a.cs", Span::from_coords(2, 5, 2, 11))),
            )
            .unwrap();
        graph.link(NodeId(1), "Body", NodeId(2)).unwrap();
        graph.link(NodeId(2), "Statements", NodeId(3)).unwrap();
        graph.link(NodeId(3), "Expression", NodeId(4)).unwrap();
        graph.link(NodeId(4), "MethodCall", NodeId(1)).unwrap();
        graph
    }

    #[test]
    fn test_nesting_and_references() {
        let value = to_json_value(&call_graph()).unwrap();
        let method = &value[0];
        assert_eq!(method["kind"], "MethodDeclarationSyntax");
        assert_eq!(method["id"], 1);
        assert_eq!(method["parent"], Value::Null);

        let invocation = &method["edges"]["Body"][0]["edges"]["Statements"][0]["edges"]["Expression"][0];
        assert_eq!(invocation["id"], 4);
        assert_eq!(invocation["parent"], 3);
        assert_eq!(invocation["edges"]["MethodCall"], json!([{ "ref": 1 }]));
        assert_eq!(invocation["position"]["file_name"], "a.cs");
        assert_eq!(invocation["position"]["start"]["line"], 2);
    }

    #[test]
    fn test_attributes_and_filtered_children() {
        let mut graph = Graph::new();
        graph.add_node(Node::new(10, NodeKind::IfStatementSyntax)).unwrap();
        graph
            .add_node(Node::new(11, NodeKind::LiteralExpressionSyntax).with_attribute("token", "1"))
            .unwrap();
        graph.add_node(Node::new(12, NodeKind::BlockSyntax)).unwrap();
        graph.link(NodeId(10), "Condition", NodeId(11)).unwrap();
        graph.link(NodeId(10), "Statement", NodeId(12)).unwrap();
        graph.set_filtered(NodeId(12)).unwrap();

        let value = to_json_value(&graph).unwrap();
        let cond = &value[0]["edges"]["Condition"][0];
        assert_eq!(cond["attributes"], json!({ "token": "1" }));
        assert!(value[0]["edges"].get("Statement").is_none());
    }

    #[test]
    fn test_format_writes_pretty_json() {
        let bytes = Json.to_vec(&call_graph()).unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, to_json_value(&call_graph()).unwrap());
        assert_eq!(Json.name(), "JSON");
    }
}
