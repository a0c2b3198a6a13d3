//! Foundation types for the syntax graph.
//!
//! - [`NodeId`] - Node identifiers, `0` being the null id
//! - [`Position`], [`Span`], [`SourcePosition`] - Source locations
//! - [`constants`] - Fixed names of the XML dialect
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod id;
mod position;

pub use id::NodeId;
pub use position::{Position, SourcePosition, Span};
