//! # HTML Rendering
//!
//! Pure and total: every block renders to exactly one fragment. Consecutive
//! list items sharing an `ordered` flag are wrapped in one `<ul>`/`<ol>`, and
//! consecutive table rows in one `<table>`. Fragments are joined with `\n`.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::{InlineNode, parse_inline},
};

/// Renders a block sequence to an HTML fragment.
pub fn render_html(blocks: &[BlockNode]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());
    let mut open: Option<Group> = None;

    for block in blocks {
        let group = Group::of(&block.kind);
        if open != group {
            if let Some(g) = open {
                lines.push(g.close().to_string());
            }
            if let Some(g) = group {
                lines.push(g.open().to_string());
            }
            open = group;
        }
        lines.push(render_block(&block.kind));
    }
    if let Some(g) = open {
        lines.push(g.close().to_string());
    }

    lines.join("\n")
}

/// Wrapper element shared by a run of adjacent blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Unordered,
    Ordered,
    Table,
}

impl Group {
    fn of(kind: &BlockKind) -> Option<Group> {
        match kind {
            BlockKind::ListItem { ordered: true, .. } => Some(Group::Ordered),
            BlockKind::ListItem { ordered: false, .. } => Some(Group::Unordered),
            BlockKind::TableRow { .. } => Some(Group::Table),
            _ => None,
        }
    }

    fn open(self) -> &'static str {
        match self {
            Group::Unordered => "<ul>",
            Group::Ordered => "<ol>",
            Group::Table => "<table>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Group::Unordered => "</ul>",
            Group::Ordered => "</ol>",
            Group::Table => "</table>",
        }
    }
}

fn render_block(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", render_inline(text))
        }
        BlockKind::Paragraph { text } => format!("<p>{}</p>", render_inline(text)),
        BlockKind::CodeBlock { language, content } => match language {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                encode_double_quoted_attribute(lang),
                encode_text(content)
            ),
            None => format!("<pre><code>{}</code></pre>", encode_text(content)),
        },
        BlockKind::ListItem { text, .. } => format!("<li>{}</li>", render_inline(text)),
        BlockKind::TableRow { cells, header } => {
            let tag = if *header { "th" } else { "td" };
            let cells: String = cells
                .iter()
                .map(|c| format!("<{tag}>{}</{tag}>", render_inline(c)))
                .collect();
            format!("<tr>{cells}</tr>")
        }
        BlockKind::Link { text, target } => format!("<p>{}</p>", anchor(target, text)),
    }
}

/// Renders inline text: code spans become `<code>`, links become `<a>`.
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for node in parse_inline(0, text) {
        match node {
            InlineNode::Text(sp) => out.push_str(&encode_text(sp.slice(text, 0))),
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                out.push_str(&encode_text(inner.slice(text, 0)));
                out.push_str("</code>");
            }
            InlineNode::Link {
                text: label,
                target,
                ..
            } => out.push_str(&anchor(target.slice(text, 0).trim(), label.slice(text, 0))),
        }
    }
    out
}

/// Inline text with the markup dropped, e.g. for a page `<title>`. Not escaped.
pub fn inline_text(text: &str) -> String {
    parse_inline(0, text)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(sp) => sp.slice(text, 0),
            InlineNode::CodeSpan { inner, .. } => inner.slice(text, 0),
            InlineNode::Link { text: label, .. } => label.slice(text, 0),
        })
        .collect()
}

fn anchor(target: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        encode_double_quoted_attribute(target),
        encode_text(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use crate::parsing::parse_str;
    use pretty_assertions::assert_eq;

    fn render_kinds(kinds: Vec<BlockKind>) -> String {
        render_html(Document::from_kinds("t.md", kinds).blocks())
    }

    #[test]
    fn heading_renders_exactly() {
        let html = render_kinds(vec![BlockKind::Heading {
            level: 2,
            text: "Floats".into(),
        }]);
        assert_eq!(html, "<h2>Floats</h2>");
    }

    #[test]
    fn code_block_without_language_has_no_class() {
        let html = render_kinds(vec![BlockKind::CodeBlock {
            language: None,
            content: "<div class=\"box\"></div>".into(),
        }]);
        assert_eq!(
            html,
            "<pre><code>&lt;div class=\"box\"&gt;&lt;/div&gt;</code></pre>"
        );
    }

    #[test]
    fn code_block_language_becomes_class_hint() {
        let html = render_kinds(vec![BlockKind::CodeBlock {
            language: Some("css".into()),
            content: "a > b { }".into(),
        }]);
        assert_eq!(
            html,
            "<pre><code class=\"language-css\">a &gt; b { }</code></pre>"
        );
    }

    #[test]
    fn inline_markup_is_rendered_and_escaped() {
        assert_eq!(
            render_inline("Use `<em>` & see [MDN](https://developer.mozilla.org/?a=1&b=\"2\")"),
            "Use <code>&lt;em&gt;</code> &amp; see \
             <a href=\"https://developer.mozilla.org/?a=1&amp;b=&quot;2&quot;\">MDN</a>"
        );
    }

    #[test]
    fn inline_text_drops_markup() {
        assert_eq!(
            inline_text("The `<nav>` element and [landmarks](roles.md)"),
            "The <nav> element and landmarks"
        );
    }

    #[test]
    fn mixed_lists_and_tables_are_grouped() {
        let md = "\
- one
- two
1. first
| A | B |
|---|---|
| a | b |

After the table.
";
        let html = render_html(&parse_str(md).unwrap());
        insta::assert_snapshot!(html, @r#"
        <ul>
        <li>one</li>
        <li>two</li>
        </ul>
        <ol>
        <li>first</li>
        </ol>
        <table>
        <tr><th>A</th><th>B</th></tr>
        <tr><td>a</td><td>b</td></tr>
        </table>
        <p>After the table.</p>
        "#);
    }

    #[test]
    fn standalone_link_renders_as_paragraph_anchor() {
        let html = render_kinds(vec![BlockKind::Link {
            text: "Next: Grid".into(),
            target: "grid.md".into(),
        }]);
        assert_eq!(html, "<p><a href=\"grid.md\">Next: Grid</a></p>");
    }

    #[test]
    fn every_block_yields_one_fragment() {
        let blocks = parse_str("# A\n\ntext\n\n```\ncode\n```\n\n[x](y)\n").unwrap();
        let html = render_html(&blocks);
        assert_eq!(html.lines().count(), blocks.len());
    }

    #[test]
    fn empty_input_renders_empty_string() {
        assert_eq!(render_html(&[]), "");
    }
}
