use crate::parsing::{ParseError, rope::span::Span};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, FenceKind},
    types::{BlockKind, BlockNode},
};

/// The leaf block currently being accumulated.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        line: usize,
        lines: Vec<String>,
    },
    ListItem {
        start: Span,
        line: usize,
        ordered: bool,
        lines: Vec<String>,
    },
    Fence {
        kind: FenceKind,
        len: usize,
        language: Option<String>,
        start: Span,
        line: usize,
        lines: Vec<String>,
    },
}

/// Phase 2 of block parsing: turns classified lines into `BlockNode`s.
pub struct BlockBuilder {
    leaf: LeafState,
    /// Line number of the most recent table row, used to attach a
    /// separator to the row directly above it.
    last_row_line: Option<usize>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            last_row_line: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match &c.kind {
            LineKind::Blank => self.flush_leaf(),
            LineKind::Fence(sig) => {
                self.flush_leaf();
                self.leaf = LeafState::Fence {
                    kind: sig.kind,
                    len: sig.len,
                    language: CodeFence::language(sig),
                    start: c.line,
                    line: c.number,
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_leaf();
                self.emit(
                    c.number,
                    c.line,
                    BlockKind::Heading {
                        level: *level,
                        text: text.clone(),
                    },
                );
            }
            LineKind::ListItem { ordered, text } => {
                self.flush_leaf();
                self.leaf = LeafState::ListItem {
                    start: c.line,
                    line: c.number,
                    ordered: *ordered,
                    lines: vec![text.clone()],
                };
            }
            LineKind::TableRow { cells } => {
                self.flush_leaf();
                self.emit(
                    c.number,
                    c.line,
                    BlockKind::TableRow {
                        cells: cells.clone(),
                        header: false,
                    },
                );
                self.last_row_line = Some(c.number);
            }
            LineKind::TableSeparator if self.row_directly_above(c.number) => {
                if let Some(BlockNode {
                    kind: BlockKind::TableRow { header, .. },
                    span,
                    ..
                }) = self.out.last_mut()
                {
                    *header = true;
                    *span = span.cover(c.line);
                }
                self.last_row_line = None;
            }
            LineKind::Link { text, target } if matches!(self.leaf, LeafState::None) => {
                self.emit(
                    c.number,
                    c.line,
                    BlockKind::Link {
                        text: text.clone(),
                        target: target.clone(),
                    },
                );
            }
            // Plain text, an orphan separator, or a link line inside a
            // paragraph or list item.
            _ => self.extend_text(c),
        }
    }

    /// Flushes the open leaf. Fails when a fence is still open.
    pub fn finish(mut self) -> Result<Vec<BlockNode>, ParseError> {
        if let LeafState::Fence { line, .. } = self.leaf {
            return Err(ParseError::UnterminatedFence { line });
        }
        self.flush_leaf();
        Ok(self.out)
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn row_directly_above(&self, number: usize) -> bool {
        matches!(self.leaf, LeafState::None) && self.last_row_line == Some(number.saturating_sub(1))
    }

    fn emit(&mut self, line: usize, span: Span, kind: BlockKind) {
        log::trace!("line {line}: {}", kind.name());
        self.last_row_line = None;
        self.out.push(BlockNode {
            position: self.out.len(),
            line,
            span,
            kind,
        });
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind, len, lines, ..
        } = &mut self.leaf
        else {
            return;
        };

        if !CodeFence::closes(*kind, *len, c.fence_sig.as_ref()) {
            lines.push(c.text.clone());
            return;
        }

        if let LeafState::Fence {
            language,
            start,
            line,
            lines,
            ..
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.emit(
                line,
                start.cover(c.line),
                BlockKind::CodeBlock {
                    language,
                    content: lines.join("\n"),
                },
            );
        }
    }

    fn extend_text(&mut self, c: &LineClass) {
        let text = c.text.trim().to_string();
        match &mut self.leaf {
            LeafState::Paragraph { start, lines, .. }
            | LeafState::ListItem { start, lines, .. } => {
                *start = start.cover(c.line);
                lines.push(text);
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line,
                    line: c.number,
                    lines: vec![text],
                };
            }
        }
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::Paragraph { start, line, lines } => self.emit(
                line,
                start,
                BlockKind::Paragraph {
                    text: lines.join("\n"),
                },
            ),
            LeafState::ListItem {
                start,
                line,
                ordered,
                lines,
            } => self.emit(
                line,
                start,
                BlockKind::ListItem {
                    ordered,
                    text: lines.join("\n"),
                },
            ),
            LeafState::None => {}
            fence @ LeafState::Fence { .. } => self.leaf = fence,
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
