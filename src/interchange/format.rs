//! Common trait for syntax graph dump formats.

use super::sink::OutputSink;
use crate::error::AsgError;
use crate::graph::Graph;

/// A rendering of a [`Graph`] into an external representation.
///
/// Every format is driven by the same preorder traversal; only the visitor
/// differs.
pub trait DumpFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Write the whole graph to `sink`.
    fn write(&self, graph: &Graph, sink: &mut dyn OutputSink) -> Result<(), AsgError>;

    /// Write the whole graph to a fresh buffer.
    fn to_vec(&self, graph: &Graph) -> Result<Vec<u8>, AsgError> {
        let mut buffer = Vec::new();
        self.write(graph, &mut buffer)?;
        Ok(buffer)
    }
}
