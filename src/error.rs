//! Error types for graph construction, dispatch and traversal.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::NodeId;
use crate::schema::{AttrType, NodeKind};

/// Errors raised while building, walking or dumping a syntax graph.
#[derive(Debug, Error)]
pub enum AsgError {
    /// Lookup of an id that names no node (including the null id).
    #[error("Node not found: {id}")]
    NotFound { id: NodeId },

    /// A dispatch table has no handler for an encountered kind.
    #[error("No handler registered for kind {kind}")]
    UnregisteredKind { kind: NodeKind },

    /// Nodes cannot be stored under the null id.
    #[error("Cannot add a {kind} node with the null id")]
    NullId { kind: NodeKind },

    /// A node with the same id is already stored.
    #[error("Duplicate node id: {id}")]
    DuplicateId { id: NodeId },

    /// Abstract kinds cannot be instantiated.
    #[error("Kind {kind} is abstract")]
    AbstractKind { kind: NodeKind },

    /// Attribute not declared by the kind or its ancestors.
    #[error("Kind {kind} has no attribute '{name}'")]
    UnknownAttribute { kind: NodeKind, name: SmolStr },

    /// Attribute value of the wrong primitive type.
    #[error("Attribute '{name}' of {kind} expects a {expected} value")]
    AttributeType {
        kind: NodeKind,
        name: &'static str,
        expected: AttrType,
    },

    /// Edge slot not declared by the kind or its ancestors.
    #[error("Kind {kind} has no edge slot '{slot}'")]
    UnknownSlot { kind: NodeKind, slot: SmolStr },

    /// Target kind not accepted by the slot.
    #[error("Slot {slot} expects {expected}, got {found}")]
    TargetKind {
        slot: &'static str,
        expected: NodeKind,
        found: NodeKind,
    },

    /// A single-valued slot already holds a target.
    #[error("Slot {slot} of {id} is already set")]
    SlotOccupied { id: NodeId, slot: &'static str },

    /// A node may be contained by one parent only.
    #[error("Node {child} is already contained by {parent}")]
    AlreadyContained { child: NodeId, parent: NodeId },

    /// The containment edge would make a node its own ancestor.
    #[error("Containing {child} under {parent} would create a cycle")]
    ContainmentCycle { parent: NodeId, child: NodeId },

    /// IO error on the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Failure while visiting a node, with the slot being walked if any.
    #[error("{source} (at node {node}, slot {})", .slot.unwrap_or("-"))]
    At {
        node: NodeId,
        slot: Option<&'static str>,
        #[source]
        source: Box<AsgError>,
    },
}

impl AsgError {
    /// Create a not-found error.
    pub fn not_found(id: NodeId) -> Self {
        Self::NotFound { id }
    }

    /// Create an unknown attribute error.
    pub fn unknown_attribute(kind: NodeKind, name: impl Into<SmolStr>) -> Self {
        Self::UnknownAttribute {
            kind,
            name: name.into(),
        }
    }

    /// Create an unknown slot error.
    pub fn unknown_slot(kind: NodeKind, slot: impl Into<SmolStr>) -> Self {
        Self::UnknownSlot {
            kind,
            slot: slot.into(),
        }
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Attach the failing node and slot.
    ///
    /// Errors that already carry a location are returned unchanged, so the
    /// innermost failure wins.
    pub fn at(self, node: NodeId, slot: Option<&'static str>) -> Self {
        match self {
            located @ Self::At { .. } => located,
            other => Self::At {
                node,
                slot,
                source: Box::new(other),
            },
        }
    }

    /// The error without its location wrapper.
    pub fn root_cause(&self) -> &AsgError {
        match self {
            Self::At { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Node and slot attached by [`AsgError::at`], if any.
    pub fn location(&self) -> Option<(NodeId, Option<&'static str>)> {
        match self {
            Self::At { node, slot, .. } => Some((*node, *slot)),
            _ => None,
        }
    }

    /// The underlying sink error, if this is an IO failure.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self.root_cause() {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_keeps_innermost_location() {
        let err = AsgError::not_found(NodeId(5))
            .at(NodeId(3), Some("Statement"))
            .at(NodeId(1), Some("Condition"));
        assert_eq!(err.location(), Some((NodeId(3), Some("Statement"))));
        assert!(matches!(err.root_cause(), AsgError::NotFound { id } if *id == NodeId(5)));
    }

    #[test]
    fn test_display_includes_location() {
        let err = AsgError::UnregisteredKind {
            kind: NodeKind::BlockSyntax,
        }
        .at(NodeId(12), None);
        assert_eq!(
            err.to_string(),
            "No handler registered for kind BlockSyntax (at node id12, slot -)"
        );
    }

    #[test]
    fn test_io_error_is_reachable() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = AsgError::from(io).at(NodeId(2), Some("Statements"));
        let inner = err.io_error().unwrap();
        assert_eq!(inner.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(inner.to_string(), "closed");
    }
}
