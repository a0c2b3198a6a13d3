//! Visitors over the syntax graph.
//!
//! A [`Visitor`] receives the events of a traversal:
//!
//! ```text
//! begin_visit
//!   visit(node)                      depth d
//!     visit_edge(slot, target)       depth d+1
//!       visit(target) ...            depth d+2   (containment only)
//!     visit_edge_end(slot, target)   depth d+1
//!   visit_end(node)                  depth d
//! finish_visit
//! ```
//!
//! Per-kind behavior is not expressed with one method per kind. Instead a
//! [`DispatchTable`] maps each [`NodeKind`](crate::schema::NodeKind) to a
//! handler pair and [`Dispatched`] turns a table plus some state into a
//! visitor.

mod dispatch;
mod reverse_edges;

pub use dispatch::{
    DispatchTable, Dispatched, Dispatcher, EdgeHandler, HandlerPair, NodeHandler, SessionHandler,
};
pub use reverse_edges::{ReverseEdge, ReverseEdges};

use crate::base::NodeId;
use crate::error::AsgError;
use crate::graph::{Graph, Node};
use crate::schema::{NodeKind, Schema, SlotDef};

/// A node being entered or left.
#[derive(Clone, Copy, Debug)]
pub struct NodeEvent<'a> {
    pub graph: &'a Graph,
    pub node: &'a Node,
    /// Nesting depth of the node.
    pub depth: usize,
}

impl<'a> NodeEvent<'a> {
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn schema(&self) -> &'static Schema {
        self.graph.schema()
    }
}

/// One target of an edge slot being entered or left.
#[derive(Clone, Copy, Debug)]
pub struct EdgeEvent<'a> {
    pub graph: &'a Graph,
    pub source: &'a Node,
    pub slot: &'static SlotDef,
    pub target: NodeId,
    /// Nesting depth of the slot bracket, one below the source.
    pub depth: usize,
}

/// Receiver of traversal events. Default implementations are no-ops.
pub trait Visitor {
    /// Called once before the first node of a run.
    fn begin_visit(&mut self, _graph: &Graph) -> Result<(), AsgError> {
        Ok(())
    }

    /// Called once after the last node of a completed run.
    fn finish_visit(&mut self, _graph: &Graph) -> Result<(), AsgError> {
        Ok(())
    }

    /// Entering a node. `call_ancestor` asks for the ancestor kinds'
    /// default behavior to run as well.
    fn visit(&mut self, _event: &NodeEvent<'_>, _call_ancestor: bool) -> Result<(), AsgError> {
        Ok(())
    }

    fn visit_end(&mut self, _event: &NodeEvent<'_>, _call_ancestor: bool) -> Result<(), AsgError> {
        Ok(())
    }

    fn visit_edge(&mut self, _event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        Ok(())
    }

    fn visit_edge_end(&mut self, _event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        Ok(())
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn begin_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        (**self).begin_visit(graph)
    }

    fn finish_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        (**self).finish_visit(graph)
    }

    fn visit(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        (**self).visit(event, call_ancestor)
    }

    fn visit_end(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        (**self).visit_end(event, call_ancestor)
    }

    fn visit_edge(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        (**self).visit_edge(event)
    }

    fn visit_edge_end(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        (**self).visit_edge_end(event)
    }
}

/// Fans one traversal out to several visitors, in registration order.
#[derive(Default)]
pub struct VisitorSet<'v> {
    visitors: Vec<&'v mut dyn Visitor>,
}

impl<'v> VisitorSet<'v> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, visitor: &'v mut dyn Visitor) -> &mut Self {
        self.visitors.push(visitor);
        self
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl Visitor for VisitorSet<'_> {
    fn begin_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        self.visitors.iter_mut().try_for_each(|v| v.begin_visit(graph))
    }

    fn finish_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        self.visitors.iter_mut().try_for_each(|v| v.finish_visit(graph))
    }

    fn visit(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        self.visitors
            .iter_mut()
            .try_for_each(|v| v.visit(event, call_ancestor))
    }

    fn visit_end(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        self.visitors
            .iter_mut()
            .try_for_each(|v| v.visit_end(event, call_ancestor))
    }

    fn visit_edge(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        self.visitors.iter_mut().try_for_each(|v| v.visit_edge(event))
    }

    fn visit_edge_end(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        self.visitors.iter_mut().try_for_each(|v| v.visit_edge_end(event))
    }
}
