//! Source location of syntax graph nodes.
//!
//! Every kind derived from `Positioned` carries a [`SourcePosition`]: the
//! file it was parsed from plus the line/column range it covers. Values are
//! stored as the front-end reports them; nothing here reinterprets the base.

use smol_str::SmolStr;

/// A range in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A line/column pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// File name plus span, the `position` attribute of positioned nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SourcePosition {
    pub file_name: SmolStr,
    #[cfg_attr(feature = "interchange", serde(flatten))]
    pub span: Span,
}

impl SourcePosition {
    pub fn new(file_name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            file_name: file_name.into(),
            span,
        }
    }

    pub fn start_line(&self) -> u32 {
        self.span.start.line
    }

    pub fn start_column(&self) -> u32 {
        self.span.start.column
    }

    pub fn end_line(&self) -> u32 {
        self.span.end.line
    }

    pub fn end_column(&self) -> u32 {
        self.span.end.column
    }
}
