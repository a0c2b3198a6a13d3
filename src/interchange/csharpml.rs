//! CSHARPML, the XML dump of a C# syntax graph.
//!
//! Output is written straight to the sink with `write!` because the dialect
//! uses single-quoted attributes and a tab per nesting level:
//!
//! ```text
//! <?xml version='1.0' encoding="utf-8"?>
//! <!DOCTYPE Project SYSTEM 'csharp-0.9.dtd'>
//! <Project name='demo' xmlns:base='...' ...>
//! <statement:IfStatementSyntax id='id10' parent='id0'>
//! 	<SourcePosition name='position' endColumn='0' .../>
//! 	<IfStatementSyntax_Condition>
//! 		<expression:LiteralExpressionSyntax id='id11' parent='id10' token='true'>
//! 		...
//! 	</IfStatementSyntax_Condition>
//! </statement:IfStatementSyntax>
//! <Filtered id='id1'/>
//! </Project>
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use rayon::prelude::*;
use smol_str::SmolStr;

use super::format::DumpFormat;
use super::sink::OutputSink;
use crate::base::constants::{
    DTD_NAME, FILTERED_MARKER_ID, ROOT_ELEMENT, SOURCE_POSITION_ELEMENT, namespace,
};
use crate::base::{NodeId, SourcePosition};
use crate::error::AsgError;
use crate::graph::{AttrValue, Graph};
use crate::schema::{AttrDef, AttrType, CompositeType, EdgeKind, NodeKind, Schema};
use crate::traverse::Preorder;
use crate::visitor::{DispatchTable, Dispatched, Dispatcher, EdgeEvent, NodeEvent};

/// Options of a CSHARPML dump.
#[derive(Debug, Clone, Default)]
pub struct CsharpMlOptions {
    /// Value of the root element's `name` attribute.
    pub project_name: SmolStr,
    /// Leave `id`, `parent` and `ref` values empty.
    pub no_id: bool,
    /// Omit `SourcePosition` elements.
    pub no_line_info: bool,
}

impl CsharpMlOptions {
    pub fn new(project_name: impl Into<SmolStr>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    pub fn with_no_id(mut self, no_id: bool) -> Self {
        self.no_id = no_id;
        self
    }

    pub fn with_no_line_info(mut self, no_line_info: bool) -> Self {
        self.no_line_info = no_line_info;
        self
    }
}

/// Escape a value for a single-quoted XML attribute.
///
/// Besides the five predefined entities, line feeds, carriage returns and
/// tabs become character references so values survive attribute
/// normalization.
pub fn escape(raw: &str) -> Cow<'_, str> {
    let escaped = quick_xml::escape::escape(raw);
    if !escaped.contains(['\n', '\r', '\t']) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#09;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Per-run state of the CSHARPML visitor.
pub struct CsharpMlWriter<'a> {
    sink: &'a mut dyn OutputSink,
    options: &'a CsharpMlOptions,
}

impl<'a> CsharpMlWriter<'a> {
    pub fn new(sink: &'a mut dyn OutputSink, options: &'a CsharpMlOptions) -> Self {
        Self { sink, options }
    }

    fn indent(&mut self, depth: usize) -> std::io::Result<()> {
        for _ in 0..depth {
            self.sink.write_all(b"\t")?;
        }
        Ok(())
    }

    /// `idN`, or nothing in no-id mode.
    fn write_id(&mut self, id: NodeId) -> std::io::Result<()> {
        if self.options.no_id {
            return Ok(());
        }
        write!(self.sink, "{id}")
    }

    /// Value of `def`, escaped when the schema asks for it.
    fn write_value(&mut self, def: &AttrDef, value: Option<&AttrValue>) -> std::io::Result<()> {
        match (value, def.ty) {
            (Some(AttrValue::String(s)), _) if def.escaped => self.sink.write_all(escape(s).as_bytes()),
            (Some(other), _) => write!(self.sink, "{other}"),
            (None, AttrType::String) => Ok(()),
            (None, AttrType::Integer) => self.sink.write_all(b"0"),
            (None, AttrType::Boolean) => self.sink.write_all(b"false"),
        }
    }

    fn write_position(&mut self, name: &str, depth: usize, position: &SourcePosition) -> std::io::Result<()> {
        self.indent(depth)?;
        writeln!(
            self.sink,
            "<{SOURCE_POSITION_ELEMENT} name='{name}' endColumn='{}' endLine='{}' fileName='{}' startColumn='{}' startLine='{}'/>",
            position.end_column(),
            position.end_line(),
            escape(&position.file_name),
            position.start_column(),
            position.start_line(),
        )
    }
}

fn begin(w: &mut CsharpMlWriter<'_>, _graph: &Graph) -> Result<(), AsgError> {
    let encoding = w.sink.encoding().to_owned();
    writeln!(w.sink, "<?xml version='1.0' encoding=\"{encoding}\"?>")?;
    writeln!(w.sink, "<!DOCTYPE {ROOT_ELEMENT} SYSTEM '{DTD_NAME}'>")?;
    writeln!(
        w.sink,
        "<{ROOT_ELEMENT} name='{}' xmlns:base='{}' xmlns:expression='{}' xmlns:statement='{}' xmlns:structure='{}'>",
        escape(&w.options.project_name),
        namespace::BASE,
        namespace::EXPRESSION,
        namespace::STATEMENT,
        namespace::STRUCTURE,
    )?;
    Ok(())
}

fn finish(w: &mut CsharpMlWriter<'_>, _graph: &Graph) -> Result<(), AsgError> {
    writeln!(w.sink, "<Filtered id='{FILTERED_MARKER_ID}'/>")?;
    writeln!(w.sink, "</{ROOT_ELEMENT}>")?;
    Ok(())
}

fn open_node(w: &mut CsharpMlWriter<'_>, ev: &NodeEvent<'_>) -> Result<(), AsgError> {
    let schema = ev.schema();
    let node = ev.node;

    w.indent(ev.depth)?;
    write!(w.sink, "<{} id='", schema.tag_name(ev.kind()))?;
    w.write_id(node.id())?;
    w.sink.write_all(b"' parent='")?;
    w.write_id(node.parent().unwrap_or(NodeId::NULL))?;
    w.sink.write_all(b"'")?;

    for group in schema.attribute_groups(ev.kind()) {
        for attr in group.attributes {
            write!(w.sink, " {}='", attr.name)?;
            w.write_value(attr, node.attribute(attr.name))?;
            w.sink.write_all(b"'")?;
        }
    }
    w.sink.write_all(b">\n")?;
    Ok(())
}

fn close_node(w: &mut CsharpMlWriter<'_>, ev: &NodeEvent<'_>) -> Result<(), AsgError> {
    w.indent(ev.depth)?;
    writeln!(w.sink, "</{}>", ev.schema().tag_name(ev.kind()))?;
    Ok(())
}

/// Composite attributes, one level below the element that owns them.
fn open_positioned(w: &mut CsharpMlWriter<'_>, ev: &NodeEvent<'_>) -> Result<(), AsgError> {
    if w.options.no_line_info {
        return Ok(());
    }
    let default = SourcePosition::default();
    let position = ev.node.position().unwrap_or(&default);
    for group in ev.schema().attribute_groups(ev.kind()) {
        for composite in group.composites {
            match composite.ty {
                CompositeType::SourcePosition => {
                    w.write_position(composite.name, ev.depth + 1, position)?
                }
            }
        }
    }
    Ok(())
}

fn close_positioned(_: &mut CsharpMlWriter<'_>, _: &NodeEvent<'_>) -> Result<(), AsgError> {
    Ok(())
}

fn open_containment(w: &mut CsharpMlWriter<'_>, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
    w.indent(ev.depth)?;
    writeln!(w.sink, "<{}>", ev.slot.qualified_name())?;
    Ok(())
}

fn close_containment(w: &mut CsharpMlWriter<'_>, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
    w.indent(ev.depth)?;
    writeln!(w.sink, "</{}>", ev.slot.qualified_name())?;
    Ok(())
}

fn write_reference(w: &mut CsharpMlWriter<'_>, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
    w.indent(ev.depth)?;
    write!(w.sink, "<{} ref='", ev.slot.qualified_name())?;
    w.write_id(ev.target)?;
    w.sink.write_all(b"'/>\n")?;
    Ok(())
}

fn end_reference(_: &mut CsharpMlWriter<'_>, _: &EdgeEvent<'_>) -> Result<(), AsgError> {
    Ok(())
}

/// Handlers of the CSHARPML visitor, resolved against `schema`.
pub fn dispatch_table<'a>(schema: &Schema) -> DispatchTable<CsharpMlWriter<'a>> {
    Dispatcher::new()
        .on_kinds(schema.concrete_kinds(), open_node, close_node)
        .on_kind(NodeKind::Positioned, open_positioned, close_positioned)
        .on_edge(EdgeKind::Containment, open_containment, close_containment)
        .on_edge(EdgeKind::Reference, write_reference, end_reference)
        .on_begin(begin)
        .on_finish(finish)
        .build(schema)
}

/// CSHARPML dump format.
#[derive(Debug, Clone, Default)]
pub struct CsharpMl {
    options: CsharpMlOptions,
}

impl CsharpMl {
    pub fn new(options: CsharpMlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsharpMlOptions {
        &self.options
    }

    /// Dump every included root of `graph` as one document.
    pub fn write(&self, graph: &Graph, sink: &mut dyn OutputSink) -> Result<(), AsgError> {
        self.write_document(graph, None, sink)
    }

    /// Dump the subtree of one root as a complete document.
    pub fn write_from(&self, graph: &Graph, root: NodeId, sink: &mut dyn OutputSink) -> Result<(), AsgError> {
        self.write_document(graph, Some(root), sink)
    }

    fn write_document(
        &self,
        graph: &Graph,
        root: Option<NodeId>,
        sink: &mut dyn OutputSink,
    ) -> Result<(), AsgError> {
        tracing::debug!(
            project = %self.options.project_name,
            no_id = self.options.no_id,
            no_line_info = self.options.no_line_info,
            "writing CSHARPML"
        );
        let table = Arc::new(dispatch_table(graph.schema()));
        {
            let mut visitor = Dispatched::new(CsharpMlWriter::new(&mut *sink, &self.options), table);
            let mut walker = Preorder::new(graph);
            match root {
                Some(root) => walker.run_from(root, &mut visitor)?,
                None => walker.run(&mut visitor)?,
            }
        }
        sink.flush()?;
        Ok(())
    }

    /// Render the whole graph into a string.
    pub fn render(&self, graph: &Graph) -> Result<String, AsgError> {
        let bytes = DumpFormat::to_vec(self, graph)?;
        // Every byte written comes from `&str` values.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Render one document per root on the rayon pool.
    ///
    /// Results are returned in the order of `roots`. Any failure fails the
    /// whole call.
    pub fn write_roots_parallel(&self, graph: &Graph, roots: &[NodeId]) -> Result<Vec<Vec<u8>>, AsgError> {
        tracing::debug!(roots = roots.len(), "rendering CSHARPML documents in parallel");
        roots
            .par_iter()
            .map(|&root| {
                let mut buffer = Vec::new();
                self.write_from(graph, root, &mut buffer)?;
                Ok(buffer)
            })
            .collect()
    }
}

impl DumpFormat for CsharpMl {
    fn name(&self) -> &'static str {
        "CSHARPML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["csharpml", "xml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn write(&self, graph: &Graph, sink: &mut dyn OutputSink) -> Result<(), AsgError> {
        CsharpMl::write(self, graph, sink)
    }
}
