//! Node instances of the syntax graph.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{NodeId, SourcePosition};
use crate::schema::{AttrType, NodeKind, SlotDef};

// ============================================================================
// ATTRIBUTE VALUES
// ============================================================================

/// Value of a scalar attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize), serde(untagged))]
pub enum AttrValue {
    String(SmolStr),
    Integer(i64),
    Boolean(bool),
}

impl AttrValue {
    /// Primitive type of the value.
    pub fn ty(&self) -> AttrType {
        match self {
            Self::String(_) => AttrType::String,
            Self::Integer(_) => AttrType::Integer,
            Self::Boolean(_) => AttrType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<SmolStr> for AttrValue {
    fn from(s: SmolStr) -> Self {
        Self::String(s)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

// ============================================================================
// EDGES
// ============================================================================

/// Targets stored in one slot of a node.
#[derive(Clone, Debug)]
pub struct EdgeSlot {
    pub def: &'static SlotDef,
    /// Target ids in insertion order.
    pub targets: Vec<NodeId>,
}

impl EdgeSlot {
    pub fn name(&self) -> &'static str {
        self.def.name
    }
}

// ============================================================================
// NODE
// ============================================================================

/// A syntax graph node.
///
/// Built by the front-end with [`Node::new`] and the `with_*` methods, then
/// handed to [`Graph::add_node`](super::Graph::add_node). Edges and the
/// parent link are only set through [`Graph::link`](super::Graph::link), which
/// keeps them consistent with the schema.
#[derive(Clone, Debug)]
pub struct Node {
    pub(super) id: NodeId,
    pub(super) kind: NodeKind,
    pub(super) parent: Option<NodeId>,
    pub(super) position: Option<SourcePosition>,
    pub(super) attributes: IndexMap<SmolStr, AttrValue>,
    pub(super) edges: Vec<EdgeSlot>,
}

impl Node {
    /// Create a node with no attributes, position or edges.
    pub fn new(id: u32, kind: NodeKind) -> Self {
        Self {
            id: NodeId(id),
            kind,
            parent: None,
            position: None,
            attributes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Set a scalar attribute.
    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_position(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Containing node, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn position(&self) -> Option<&SourcePosition> {
        self.position.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Slots holding at least one target, in the order they were first set.
    pub fn edges(&self) -> &[EdgeSlot] {
        &self.edges
    }

    /// Targets of the named slot, empty when unset.
    pub fn targets(&self, slot: &str) -> &[NodeId] {
        self.edges
            .iter()
            .find(|edge| edge.def.name == slot)
            .map(|edge| edge.targets.as_slice())
            .unwrap_or(&[])
    }

    /// Record a target, enforcing the slot's cardinality.
    pub(super) fn push_target(
        &mut self,
        def: &'static SlotDef,
        target: NodeId,
    ) -> Result<(), crate::AsgError> {
        match self.edges.iter_mut().find(|edge| edge.def.name == def.name) {
            Some(edge) if def.cardinality.is_sequence() => edge.targets.push(target),
            Some(_) => {
                return Err(crate::AsgError::SlotOccupied {
                    id: self.id,
                    slot: def.name,
                });
            }
            None => self.edges.push(EdgeSlot {
                def,
                targets: vec![target],
            }),
        }
        Ok(())
    }
}
