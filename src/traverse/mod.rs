//! Preorder traversal of the syntax graph.
//!
//! ## Algorithm
//!
//! ```text
//! walk(id, depth):
//!   skip if filtered (the whole subtree goes with it)
//!   visit(node)                              depth
//!   for slot in schema.slots(kind):          inherited slots first
//!     for target in node.targets(slot):      absent slots emit nothing
//!       visit_edge(slot, target)             depth + 1
//!       containment → walk(target, depth + 2)
//!       reference   → nothing, never recursed into
//!       visit_edge_end(slot, target)         depth + 1
//!   visit_end(node)                          depth
//! ```
//!
//! Depth is a parameter of the recursion rather than state on the visitor,
//! so it is restored on every exit path, including errors.

use rustc_hash::FxHashSet;

use crate::base::NodeId;
use crate::error::AsgError;
use crate::graph::Graph;
use crate::schema::EdgeKind;
use crate::visitor::{EdgeEvent, NodeEvent, Visitor};

/// Deterministic preorder walker.
///
/// Borrows the graph immutably; independent walkers over one graph may run
/// on different threads.
pub struct Preorder<'g> {
    graph: &'g Graph,
    safe_mode: bool,
    visited: FxHashSet<NodeId>,
}

impl<'g> Preorder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            safe_mode: false,
            visited: FxHashSet::default(),
        }
    }

    /// Skip nodes already visited during the same run.
    ///
    /// Only matters when the chosen roots overlap, e.g. a root and one of its
    /// descendants.
    pub fn safe_mode(mut self, on: bool) -> Self {
        self.safe_mode = on;
        self
    }

    /// Visit every included root, in insertion order.
    pub fn run(&mut self, visitor: &mut dyn Visitor) -> Result<(), AsgError> {
        let roots: Vec<NodeId> = self
            .graph
            .roots()
            .filter(|&id| self.graph.is_included(id))
            .collect();
        self.run_roots(&roots, visitor)
    }

    /// Visit the subtree of a single root.
    pub fn run_from(&mut self, root: NodeId, visitor: &mut dyn Visitor) -> Result<(), AsgError> {
        self.run_roots(&[root], visitor)
    }

    /// Visit the given roots in order between one `begin_visit` and one
    /// `finish_visit`.
    ///
    /// On error the run stops immediately and `finish_visit` is not called.
    pub fn run_roots(&mut self, roots: &[NodeId], visitor: &mut dyn Visitor) -> Result<(), AsgError> {
        tracing::debug!(roots = roots.len(), safe_mode = self.safe_mode, "preorder run");
        self.visited.clear();

        visitor.begin_visit(self.graph)?;
        for &root in roots {
            self.graph.get_node(root)?;
            self.walk(root, 0, visitor)?;
        }
        visitor.finish_visit(self.graph)?;

        tracing::debug!(visited = self.visited.len(), "preorder run finished");
        Ok(())
    }

    fn walk(&mut self, id: NodeId, depth: usize, visitor: &mut dyn Visitor) -> Result<(), AsgError> {
        if !self.graph.is_included(id) {
            tracing::trace!(node = %id, "skipping filtered subtree");
            return Ok(());
        }
        // Always recorded so the run summary can report a count.
        if !self.visited.insert(id) && self.safe_mode {
            tracing::trace!(node = %id, "already visited");
            return Ok(());
        }

        let graph = self.graph;
        let node = graph.get_node(id)?;
        let event = NodeEvent { graph, node, depth };
        tracing::trace!(node = %id, kind = %node.kind(), depth, "visit");

        visitor.visit(&event, true).map_err(|e| e.at(id, None))?;

        for &slot in graph.schema().slots(node.kind()) {
            for &target in node.targets(slot.name) {
                let edge = EdgeEvent {
                    graph,
                    source: node,
                    slot,
                    target,
                    depth: depth + 1,
                };
                visitor
                    .visit_edge(&edge)
                    .map_err(|e| e.at(id, Some(slot.name)))?;
                if slot.kind == EdgeKind::Containment {
                    self.walk(target, depth + 2, visitor)
                        .map_err(|e| e.at(id, Some(slot.name)))?;
                }
                visitor
                    .visit_edge_end(&edge)
                    .map_err(|e| e.at(id, Some(slot.name)))?;
            }
        }

        visitor.visit_end(&event, true).map_err(|e| e.at(id, None))
    }
}
