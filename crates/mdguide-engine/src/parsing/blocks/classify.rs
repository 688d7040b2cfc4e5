use crate::parsing::{
    inline::{InlineNode, parse_inline},
    rope::{lines::LineRef, span::Span},
};

use super::kinds::{AtxHeading, CodeFence, FenceSig, ListMarker, PipeRow};

/// What a single line looks like, judged without surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Fence(FenceSig),
    Heading { level: u8, text: String },
    ListItem { ordered: bool, text: String },
    TableRow { cells: Vec<String> },
    TableSeparator,
    Link { text: String, target: String },
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing. The builder decides what a line means
/// in context (fence content, paragraph continuation, header rows).
#[derive(Debug, Clone)]
pub struct LineClass {
    pub number: usize,
    pub line: Span,
    /// Line text without its line ending.
    pub text: String,
    pub kind: LineKind,
    /// Set on every line that looks like a fence, so the builder can test
    /// for a closer without re-scanning.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Precedence: blank, fence, heading, table, list item, standalone link, text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let fence_sig = CodeFence::sig(&lr.text);
        let kind = Self::kind_of(&lr.text, fence_sig.as_ref());
        LineClass {
            number: lr.number,
            line: lr.span,
            text: lr.text.clone(),
            kind,
            fence_sig,
        }
    }

    fn kind_of(text: &str, fence_sig: Option<&FenceSig>) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(sig) = fence_sig {
            return LineKind::Fence(sig.clone());
        }
        if let Some((level, text)) = AtxHeading::parse(text) {
            return LineKind::Heading { level, text };
        }
        if let Some(cells) = PipeRow::cells(text) {
            if PipeRow::is_separator(&cells) {
                return LineKind::TableSeparator;
            }
            return LineKind::TableRow { cells };
        }
        if let Some((ordered, text)) = ListMarker::parse(text) {
            return LineKind::ListItem { ordered, text };
        }
        if let Some((text, target)) = Self::standalone_link(text.trim()) {
            return LineKind::Link { text, target };
        }
        LineKind::Text
    }

    fn standalone_link(t: &str) -> Option<(String, String)> {
        match parse_inline(0, t).as_slice() {
            [InlineNode::Link { text, target, .. }] => Some((
                text.slice(t, 0).to_string(),
                target.slice(t, 0).trim().to_string(),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xi_rope::Rope;

    use crate::parsing::{blocks::kinds::FenceKind, rope::lines_with_spans};

    fn kinds(src: &str) -> Vec<LineKind> {
        let rope = Rope::from(src);
        lines_with_spans(&rope)
            .map(|lr| MarkdownLineClassifier.classify(&lr).kind)
            .collect()
    }

    #[test]
    fn classifies_each_construct() {
        let src = "# Title\n\n```css\n- item\n| a | b |\n|---|---|\n[Next](next.md)\ntext\n";
        assert_eq!(
            kinds(src),
            vec![
                LineKind::Heading {
                    level: 1,
                    text: "Title".into()
                },
                LineKind::Blank,
                LineKind::Fence(FenceSig {
                    kind: FenceKind::Backticks,
                    len: 3,
                    info: "css".into()
                }),
                LineKind::ListItem {
                    ordered: false,
                    text: "item".into()
                },
                LineKind::TableRow {
                    cells: vec!["a".into(), "b".into()]
                },
                LineKind::TableSeparator,
                LineKind::Link {
                    text: "Next".into(),
                    target: "next.md".into()
                },
                LineKind::Text,
            ]
        );
    }

    #[test]
    fn link_with_trailing_text_is_plain_text() {
        assert_eq!(kinds("[Next](next.md) and more"), vec![LineKind::Text]);
    }

    #[test]
    fn list_item_made_of_a_link_stays_a_list_item() {
        assert!(matches!(
            kinds("- [Grid](grid.md)")[0],
            LineKind::ListItem { .. }
        ));
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(kinds("   \t"), vec![LineKind::Blank]);
    }
}
