//! Target-to-source index over the edges a traversal reports.

use rustc_hash::FxHashMap;

use super::{EdgeEvent, Visitor};
use crate::base::NodeId;
use crate::error::AsgError;
use crate::graph::Graph;
use crate::schema::SlotDef;
use crate::traverse::Preorder;

/// One incoming edge of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReverseEdge {
    pub source: NodeId,
    pub slot: &'static SlotDef,
}

/// Incoming edges per node, both containment and reference.
///
/// Built by a traversal, so filtered subtrees contribute nothing; run it
/// through [`Graph::filter_off_guard`] to index the whole graph.
#[derive(Clone, Debug, Default)]
pub struct ReverseEdges {
    edges: FxHashMap<NodeId, Vec<ReverseEdge>>,
    count: usize,
}

impl ReverseEdges {
    /// Index every edge reachable from the graph's roots.
    pub fn build(graph: &Graph) -> Result<Self, AsgError> {
        let mut index = Self::default();
        Preorder::new(graph).run(&mut index)?;
        tracing::debug!(edges = index.count, targets = index.edges.len(), "built reverse edges");
        Ok(index)
    }

    /// Edges pointing at `target`, in traversal order.
    pub fn sources(&self, target: NodeId) -> &[ReverseEdge] {
        self.edges.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of `target` through the slot named `slot`.
    pub fn sources_via<'a>(&'a self, target: NodeId, slot: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.sources(target)
            .iter()
            .filter(move |edge| edge.slot.name == slot)
            .map(|edge| edge.source)
    }

    /// Total number of indexed edges.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Visitor for ReverseEdges {
    fn visit_edge(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        self.edges.entry(event.target).or_default().push(ReverseEdge {
            source: event.source.id(),
            slot: event.slot,
        });
        self.count += 1;
        Ok(())
    }
}
