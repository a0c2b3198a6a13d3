//! Dump formats for the C# syntax graph.
//!
//! - **CSHARPML** - The XML dialect read by the analyzer tool chain
//! - **JSON** - A nested `serde_json` rendering of the same traversal
//!
//! ## Architecture
//!
//! Formats do not walk the graph themselves. Each one is a visitor handed to
//! [`Preorder`](crate::traverse::Preorder), and writes into an
//! [`OutputSink`]:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │   CsharpMl   │     │     Json     │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────────────────────────────────┐
//! │            DumpFormat trait              │
//! │  - write(&Graph, &mut dyn OutputSink)    │
//! └──────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────┐
//! │   Preorder traversal + format visitor    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use csasg::interchange::{CsharpMl, CsharpMlOptions};
//!
//! let xml = CsharpMl::new(CsharpMlOptions::new("demo")).render(&graph)?;
//! ```

mod csharpml;
mod format;
mod json;
mod sink;

pub use csharpml::{CsharpMl, CsharpMlOptions, CsharpMlWriter, dispatch_table, escape};
pub use format::DumpFormat;
pub use json::{Json, JsonDump, to_json_value};
pub use sink::{Encoded, OutputSink};
