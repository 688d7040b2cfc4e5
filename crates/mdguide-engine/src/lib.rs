//! Loads Markdown study guides, checks their structural conventions and
//! renders them to HTML.
//!
//! The stages are independent and can be used on their own:
//! [`loader`] → [`parsing`] → [`validate`] → [`render`], with [`pipeline`]
//! running all of them per document and collecting a [`Report`].

pub mod io;
pub mod loader;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod validate;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use loader::{LoadError, LoadedDocument, load, load_source};
pub use models::{Document, Finding, RuleId, Severity, Source};
pub use parsing::{
    ParseError,
    blocks::{BlockKind, BlockNode},
    parse_document, parse_str, to_markdown,
};
pub use pipeline::{
    DocumentError, DocumentOutcome, PipelineOptions, ProcessedDocument, process,
    process_document, process_sources,
};
pub use render::render_html;
pub use report::Report;
pub use validate::{ValidationOptions, validate};
