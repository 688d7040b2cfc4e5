use serde::Serialize;

use crate::parsing::rope::span::Span;

/// The structural kind of a block, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// An ATX heading. `level` is 1..=6.
    Heading { level: u8, text: String },
    /// Consecutive text lines, joined with `\n`.
    Paragraph { text: String },
    /// A fenced code block. Content is raw and excludes the fences.
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    /// One list item. Nesting is flattened.
    ListItem { ordered: bool, text: String },
    /// One pipe-table row. `header` is set when a separator row follows it.
    TableRow { cells: Vec<String>, header: bool },
    /// A line consisting of a single `[text](target)` link.
    Link { text: String, target: String },
}

impl BlockKind {
    /// Short name used in parser logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::CodeBlock { .. } => "code block",
            BlockKind::ListItem { .. } => "list item",
            BlockKind::TableRow { .. } => "table row",
            BlockKind::Link { .. } => "link",
        }
    }
}

/// A parsed block with its place in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    /// 0-based order within the document.
    pub position: usize,
    /// 1-based source line of the block's first line.
    pub line: usize,
    /// Byte span in the source, including fences and markers.
    #[serde(skip)]
    pub span: Span,
    pub kind: BlockKind,
}
