//! # csharp-asg
//!
//! Schema-driven traversal, visitor dispatch and CSHARPML serialization for
//! C# abstract syntax graphs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → CSHARPML and JSON dumps, output sinks
//!   ↓
//! traverse    → Deterministic preorder walk
//!   ↓
//! visitor     → Visitor trait, kind-indexed dispatch tables
//!   ↓
//! graph       → Node store, edge validation, filtering
//!   ↓
//! schema      → Kind and slot tables of the C# syntax graph
//!   ↓
//! base        → Primitives (NodeId, SourcePosition, dialect constants)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use csasg::{Graph, Node, NodeId, NodeKind};
//! use csasg::interchange::{CsharpMl, CsharpMlOptions};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new(10, NodeKind::IfStatementSyntax))?;
//! graph.add_node(Node::new(11, NodeKind::LiteralExpressionSyntax).with_attribute("token", "true"))?;
//! graph.link(NodeId(10), "Condition", NodeId(11))?;
//!
//! let xml = CsharpMl::new(CsharpMlOptions::new("demo")).render(&graph)?;
//! ```

// ============================================================================
// MODULES (dependency order: base → schema → graph → visitor → traverse)
// ============================================================================

/// Foundation types: NodeId, SourcePosition, dialect constants
pub mod base;

/// Error type shared by every module
pub mod error;

/// Kind and slot tables, indexed once
pub mod schema;

/// Node store with containment/reference edges and the filter
pub mod graph;

/// Visitor trait and dispatch tables
pub mod visitor;

/// Preorder traversal engine
pub mod traverse;

/// Dump formats: CSHARPML, JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use base::{NodeId, SourcePosition, Span};
pub use error::AsgError;
pub use graph::{AttrValue, Graph, Node};
pub use schema::{NodeKind, Schema};
pub use traverse::Preorder;
pub use visitor::Visitor;
