use relative_path::{RelativePath, RelativePathBuf};

use crate::loader::LoadedDocument;
use crate::parsing::{
    ParseError,
    blocks::{BlockKind, BlockNode},
    parse_document,
    rope::span::Span,
};

/// A parsed document: a name and its ordered, immutable block sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: RelativePathBuf,
    blocks: Vec<BlockNode>,
}

impl Document {
    /// Parses a loaded source. Fails only on an unterminated fence.
    pub fn parse(loaded: &LoadedDocument) -> Result<Self, ParseError> {
        let blocks = parse_document(loaded.rope())?;
        Ok(Self {
            name: loaded.name().to_owned(),
            blocks,
        })
    }

    /// Builds a document from block kinds without source text.
    ///
    /// Positions are assigned in order and each block is placed on its own line.
    pub fn from_kinds(
        name: impl Into<RelativePathBuf>,
        kinds: impl IntoIterator<Item = BlockKind>,
    ) -> Self {
        let blocks = kinds
            .into_iter()
            .enumerate()
            .map(|(position, kind)| BlockNode {
                position,
                line: position + 1,
                span: Span::default(),
                kind,
            })
            .collect();
        Self {
            name: name.into(),
            blocks,
        }
    }

    pub fn name(&self) -> &RelativePath {
        &self.name
    }

    pub fn blocks(&self) -> &[BlockNode] {
        &self.blocks
    }

    pub fn headings(&self) -> impl Iterator<Item = (&BlockNode, u8, &str)> {
        self.blocks.iter().filter_map(|b| match &b.kind {
            BlockKind::Heading { level, text } => Some((b, *level, text.as_str())),
            _ => None,
        })
    }
}
