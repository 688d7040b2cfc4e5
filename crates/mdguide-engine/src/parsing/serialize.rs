//! Re-serializes blocks to Markdown.
//!
//! The output is normalized rather than lossless: list items use `-` or `1.`,
//! table cells are padded with single spaces and fences are backticks unless
//! the language tag holds a backtick. Parsing the output again yields the same
//! block kinds.

use super::blocks::{
    BlockKind, BlockNode,
    kinds::{AtxHeading, CodeFence, FenceKind, PipeRow},
};

pub fn to_markdown(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    let mut prev: Option<&BlockKind> = None;

    for b in blocks {
        if let Some(p) = prev {
            out.push_str(if same_group(p, &b.kind) { "\n" } else { "\n\n" });
        }
        write_block(&mut out, &b.kind);
        prev = Some(&b.kind);
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// List items and table rows stay on adjacent lines.
fn same_group(a: &BlockKind, b: &BlockKind) -> bool {
    matches!(
        (a, b),
        (BlockKind::ListItem { .. }, BlockKind::ListItem { .. })
            | (BlockKind::TableRow { .. }, BlockKind::TableRow { .. })
    )
}

fn write_block(out: &mut String, kind: &BlockKind) {
    match kind {
        BlockKind::Heading { level, text } => {
            let marker = AtxHeading::MARKER.to_string().repeat(*level as usize);
            out.push_str(&marker);
            if !text.is_empty() {
                out.push(' ');
                out.push_str(text);
            }
            // Otherwise a trailing `#` reads back as a closing run.
            if text.ends_with(AtxHeading::MARKER) {
                out.push(' ');
                out.push_str(&marker);
            }
        }
        BlockKind::Paragraph { text } => out.push_str(text),
        BlockKind::CodeBlock { language, content } => {
            let kind = match language {
                Some(lang) if lang.contains(FenceKind::Backticks.char()) => FenceKind::Tildes,
                _ => FenceKind::Backticks,
            };
            let fence = CodeFence::fence_for(kind, content);
            out.push_str(&fence);
            if let Some(lang) = language {
                out.push_str(lang);
            }
            out.push('\n');
            if !content.is_empty() {
                out.push_str(content);
                out.push('\n');
            }
            out.push_str(&fence);
        }
        BlockKind::ListItem { ordered, text } => {
            out.push_str(if *ordered { "1." } else { "-" });
            if !text.is_empty() && !text.starts_with('\n') {
                out.push(' ');
                out.push_str(text);
            }
        }
        BlockKind::TableRow { cells, header } => {
            out.push_str("| ");
            out.push_str(&cells.join(" | "));
            out.push_str(" |");
            if *header {
                out.push('\n');
                out.push_str(&PipeRow::separator_line(cells.len()));
            }
        }
        BlockKind::Link { text, target } => {
            out.push_str(&format!("[{text}]({target})"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_markers_and_spacing() {
        let src = "#   Layout  \n* one\n*   two\n3) three\n|a|b|\n|-|-|\n|c|d|\n";
        let blocks = parse_str(src).unwrap();

        assert_eq!(
            to_markdown(&blocks),
            "# Layout\n\n- one\n- two\n1. three\n\n| a | b |\n| --- | --- |\n| c | d |\n"
        );
    }

    #[test]
    fn code_block_keeps_content_verbatim() {
        let src = "```css\n  .box {\n    float: left;\n  }\n```\n";
        let blocks = parse_str(src).unwrap();

        assert_eq!(to_markdown(&blocks), src);
    }

    #[test]
    fn heading_ending_in_hash_gets_closing_run() {
        let blocks = parse_str("## foo # #\n# C#\n").unwrap();

        assert_eq!(to_markdown(&blocks), "## foo # ##\n\n# C# #\n");
    }

    #[test]
    fn language_with_backtick_uses_tilde_fence() {
        let blocks = parse_str("~~~ a`b\ncode\n~~~\n").unwrap();

        assert_eq!(to_markdown(&blocks), "~~~a`b\ncode\n~~~\n");
    }

    #[test]
    fn empty_item_with_continuation_has_no_trailing_space() {
        let blocks = parse_str("-\nmore\n").unwrap();

        assert_eq!(to_markdown(&blocks), "-\nmore\n");
    }

    #[test]
    fn empty_input_serializes_to_empty_string() {
        assert_eq!(to_markdown(&[]), "");
    }
}
