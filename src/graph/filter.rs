//! Node selection for traversals.
//!
//! A [`Filter`] records which nodes are excluded. The subtree-wide
//! operations live on [`Graph`](super::Graph), which knows the containment
//! tree; this type only stores the marks and the on/off switch.

use std::ops::Deref;

use rustc_hash::FxHashSet;

use super::Graph;
use crate::base::NodeId;

/// Selection state of a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterState {
    Filtered,
    NotFiltered,
}

/// Set of filtered nodes plus the global switch.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    filtered: FxHashSet<NodeId>,
    turned_off: bool,
}

impl Filter {
    /// State recorded for `id`, regardless of the switch.
    pub fn state(&self, id: NodeId) -> FilterState {
        if self.filtered.contains(&id) {
            FilterState::Filtered
        } else {
            FilterState::NotFiltered
        }
    }

    /// Whether marks are honoured by [`Graph::is_included`].
    pub fn is_on(&self) -> bool {
        !self.turned_off
    }

    /// Number of marked nodes.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub(super) fn set(&mut self, id: NodeId, state: FilterState) {
        match state {
            FilterState::Filtered => {
                self.filtered.insert(id);
            }
            FilterState::NotFiltered => {
                self.filtered.remove(&id);
            }
        }
    }

    pub(super) fn turn(&mut self, on: bool) {
        self.turned_off = !on;
    }

    pub(super) fn clear(&mut self) {
        self.filtered.clear();
    }
}

/// Turns filtering off for its lifetime and restores the previous switch
/// state on drop.
///
/// Derefs to the graph so traversals can run through the guard.
pub struct FilterOffGuard<'g> {
    graph: &'g mut Graph,
    was_on: bool,
}

impl<'g> FilterOffGuard<'g> {
    pub(super) fn new(graph: &'g mut Graph) -> Self {
        let was_on = graph.filter.is_on();
        graph.filter.turn(false);
        Self { graph, was_on }
    }
}

impl Deref for FilterOffGuard<'_> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        self.graph
    }
}

impl Drop for FilterOffGuard<'_> {
    fn drop(&mut self) {
        self.graph.filter.turn(self.was_on);
    }
}
