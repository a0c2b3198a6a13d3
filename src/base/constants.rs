//! Fixed names of the CSHARPML dialect.

/// DTD named by the `<!DOCTYPE Project ...>` line.
pub const DTD_NAME: &str = "csharp-0.9.dtd";

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "Project";

/// Identifier carried by the trailing `<Filtered/>` marker.
pub const FILTERED_MARKER_ID: &str = "id1";

/// Element used for the `position` composite attribute.
pub const SOURCE_POSITION_ELEMENT: &str = "SourcePosition";

/// Encoding reported by sinks that do not declare one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Namespace URIs declared on the root element, one per kind group.
pub mod namespace {
    pub const BASE: &str = "columbus_csharp_schema/base";
    pub const EXPRESSION: &str = "columbus_csharp_schema/expression";
    pub const STATEMENT: &str = "columbus_csharp_schema/statement";
    pub const STRUCTURE: &str = "columbus_csharp_schema/structure";
}
