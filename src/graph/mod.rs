//! In-memory store of a C# syntax graph.
//!
//! ## Design
//!
//! Nodes are stored by id in insertion order. Containment edges form a tree:
//! [`Graph::link`] sets the target's parent and refuses a second parent or a
//! cycle. Reference edges are recorded on the source only.
//!
//! ```text
//! Graph
//! ├── nodes: IndexMap<NodeId, Node>   (insertion order, Fx hashed)
//! ├── schema: &'static Schema
//! └── filter: Filter                  (excluded nodes + on/off switch)
//! ```
//!
//! The store is read-only while a traversal borrows it, so several
//! traversals can share one graph across threads.

mod filter;
mod node;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::base::NodeId;
use crate::error::AsgError;
use crate::schema::{Cardinality, EdgeKind, Schema};

pub use filter::{Filter, FilterOffGuard, FilterState};
pub use node::{AttrValue, EdgeSlot, Node};

/// Owner of all nodes of one syntax graph.
#[derive(Clone, Debug)]
pub struct Graph {
    schema: &'static Schema,
    nodes: IndexMap<NodeId, Node, FxBuildHasher>,
    filter: Filter,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph over the C# schema.
    pub fn new() -> Self {
        Self::with_schema(Schema::csharp())
    }

    pub fn with_schema(schema: &'static Schema) -> Self {
        Self {
            schema,
            nodes: IndexMap::default(),
            filter: Filter::default(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    // ── Construction ────────────────────────────────────────────────

    /// Add a node after checking it against the schema.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, AsgError> {
        let id = node.id;
        if id.is_null() {
            return Err(AsgError::NullId { kind: node.kind });
        }
        if self.nodes.contains_key(&id) {
            return Err(AsgError::DuplicateId { id });
        }
        if node.kind.is_abstract() {
            return Err(AsgError::AbstractKind { kind: node.kind });
        }
        for (name, value) in &node.attributes {
            let def = self
                .schema
                .attribute(node.kind, name)
                .ok_or_else(|| AsgError::unknown_attribute(node.kind, name.clone()))?;
            if def.ty != value.ty() {
                return Err(AsgError::AttributeType {
                    kind: node.kind,
                    name: def.name,
                    expected: def.ty,
                });
            }
        }
        if !node.edges.is_empty() || node.parent.is_some() {
            tracing::warn!(node = %id, "dropping edges set outside Graph::link");
        }

        tracing::trace!(node = %id, kind = %node.kind, "add node");
        self.nodes.insert(
            id,
            Node {
                parent: None,
                edges: Vec::new(),
                ..node
            },
        );
        Ok(id)
    }

    /// Add `target` to the slot named `slot` of `source`.
    ///
    /// Checks that the slot exists on the source kind (or an ancestor), that
    /// the target kind is accepted, and the slot's cardinality. Containment
    /// edges also set the target's parent.
    pub fn link(&mut self, source: NodeId, slot: &str, target: NodeId) -> Result<(), AsgError> {
        let source_kind = self.get_node(source)?.kind;
        let target_node = self.get_node(target)?;

        let def = self
            .schema
            .slot(source_kind, slot)
            .ok_or_else(|| AsgError::unknown_slot(source_kind, slot))?;
        if !self.schema.is_a(target_node.kind, def.target) {
            return Err(AsgError::TargetKind {
                slot: def.name,
                expected: def.target,
                found: target_node.kind,
            });
        }

        if def.kind == EdgeKind::Containment {
            if let Some(parent) = target_node.parent {
                return Err(AsgError::AlreadyContained {
                    child: target,
                    parent,
                });
            }
            if source == target || self.ancestors(source).any(|id| id == target) {
                return Err(AsgError::ContainmentCycle {
                    parent: source,
                    child: target,
                });
            }
        }

        self.node_mut(source)?.push_target(def, target)?;
        if def.kind == EdgeKind::Containment {
            self.node_mut(target)?.parent = Some(source);
        }
        Ok(())
    }

    /// Link several targets in order.
    pub fn link_all(
        &mut self,
        source: NodeId,
        slot: &str,
        targets: impl IntoIterator<Item = NodeId>,
    ) -> Result<(), AsgError> {
        for target in targets {
            self.link(source, slot, target)?;
        }
        Ok(())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, AsgError> {
        self.nodes.get_mut(&id).ok_or(AsgError::not_found(id))
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Get a node by id; the null id is never found.
    pub fn get_node(&self, id: NodeId) -> Result<&Node, AsgError> {
        self.nodes.get(&id).ok_or(AsgError::not_found(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Containing nodes of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Contained targets of `id` in schema slot order, then insertion order.
    pub fn children(&self, id: NodeId) -> Result<Vec<(&'static str, NodeId)>, AsgError> {
        self.targets_of_kind(id, EdgeKind::Containment)
    }

    /// Reference targets of `id` in schema slot order, then insertion order.
    pub fn references(&self, id: NodeId) -> Result<Vec<(&'static str, NodeId)>, AsgError> {
        self.targets_of_kind(id, EdgeKind::Reference)
    }

    fn targets_of_kind(
        &self,
        id: NodeId,
        kind: EdgeKind,
    ) -> Result<Vec<(&'static str, NodeId)>, AsgError> {
        let node = self.get_node(id)?;
        Ok(self
            .schema
            .slots(node.kind)
            .iter()
            .filter(|slot| slot.kind == kind)
            .flat_map(|slot| node.targets(slot.name).iter().map(|&t| (slot.name, t)))
            .collect())
    }

    /// `id` and its whole containment subtree, in preorder.
    pub fn subtree(&self, id: NodeId) -> Result<Vec<NodeId>, AsgError> {
        self.get_node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            let children = self.children(current)?;
            stack.extend(children.into_iter().rev().map(|(_, child)| child));
        }
        Ok(out)
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .values()
            .filter(|node| node.parent.is_none())
            .map(|node| node.id)
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Unset slots that require exactly one target.
    pub fn missing_required(&self) -> Vec<(NodeId, &'static str)> {
        self.nodes
            .values()
            .flat_map(|node| {
                self.schema
                    .slots(node.kind)
                    .iter()
                    .filter(|slot| slot.cardinality == Cardinality::Single)
                    .filter(|slot| node.targets(slot.name).is_empty())
                    .map(|slot| (node.id, slot.name))
            })
            .collect()
    }

    // ── Filtering ───────────────────────────────────────────────────

    /// Whether traversals should visit `id`.
    ///
    /// Always true while filtering is turned off.
    pub fn is_included(&self, id: NodeId) -> bool {
        !self.filter.is_on() || self.filter.state(id) == FilterState::NotFiltered
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn filter_state(&self, id: NodeId) -> FilterState {
        self.filter.state(id)
    }

    /// Exclude `id` and its whole subtree.
    pub fn set_filtered(&mut self, id: NodeId) -> Result<(), AsgError> {
        let subtree = self.subtree(id)?;
        tracing::debug!(node = %id, count = subtree.len(), "filter subtree");
        for node in subtree {
            self.filter.set(node, FilterState::Filtered);
        }
        Ok(())
    }

    /// Include `id`, its subtree and every ancestor, so `id` is reachable.
    pub fn set_not_filtered(&mut self, id: NodeId) -> Result<(), AsgError> {
        let subtree = self.subtree(id)?;
        let ancestors: Vec<_> = self.ancestors(id).collect();
        tracing::debug!(node = %id, count = subtree.len(), "unfilter subtree");
        for node in subtree.into_iter().chain(ancestors) {
            self.filter.set(node, FilterState::NotFiltered);
        }
        Ok(())
    }

    pub fn set_filtered_this_node_only(&mut self, id: NodeId) -> Result<(), AsgError> {
        self.get_node(id)?;
        self.filter.set(id, FilterState::Filtered);
        Ok(())
    }

    pub fn set_not_filtered_this_node_only(&mut self, id: NodeId) -> Result<(), AsgError> {
        self.get_node(id)?;
        self.filter.set(id, FilterState::NotFiltered);
        Ok(())
    }

    /// Drop every filter mark.
    pub fn init_filter(&mut self) {
        self.filter.clear();
    }

    pub fn turn_filter_on(&mut self) {
        self.filter.turn(true);
    }

    pub fn turn_filter_off(&mut self) {
        self.filter.turn(false);
    }

    pub fn is_filter_turned_on(&self) -> bool {
        self.filter.is_on()
    }

    /// Turn filtering off until the returned guard is dropped.
    pub fn filter_off_guard(&mut self) -> FilterOffGuard<'_> {
        FilterOffGuard::new(self)
    }
}
