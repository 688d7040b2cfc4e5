//! Parser tests over small study-guide shaped documents.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    ParseError,
    blocks::{BlockKind, BlockNode},
    parse_document, to_markdown,
};

fn parse_checked(md: &str) -> Vec<BlockNode> {
    let rope = Rope::from(md);
    let blocks = parse_document(&rope).expect("document should parse");
    invariants::check(&rope, &blocks);
    blocks
}

fn kinds(md: &str) -> Vec<BlockKind> {
    parse_checked(md).into_iter().map(|b| b.kind).collect()
}

fn heading(level: u8, text: &str) -> BlockKind {
    BlockKind::Heading {
        level,
        text: text.into(),
    }
}

fn para(text: &str) -> BlockKind {
    BlockKind::Paragraph { text: text.into() }
}

fn item(ordered: bool, text: &str) -> BlockKind {
    BlockKind::ListItem {
        ordered,
        text: text.into(),
    }
}

fn row(cells: &[&str], header: bool) -> BlockKind {
    BlockKind::TableRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
        header,
    }
}

const GUIDE: &str = "\
# CSS Layout

Layout decides where boxes go.
It builds on the box model.

## Floats

```css
.sidebar {
  float: left;
}
```

- Floats leave normal flow
- Clear them with `clear: both`

1. Set a width
2. Float the element

| Property | Effect |
|----------|--------|
| float    | moves the box |
| clear    | pushes below floats |

[Next: Flexbox](flexbox.md)
";

#[test]
fn parses_a_realistic_guide() {
    assert_eq!(
        kinds(GUIDE),
        vec![
            heading(1, "CSS Layout"),
            para("Layout decides where boxes go.\nIt builds on the box model."),
            heading(2, "Floats"),
            BlockKind::CodeBlock {
                language: Some("css".into()),
                content: ".sidebar {\n  float: left;\n}".into(),
            },
            item(false, "Floats leave normal flow"),
            item(false, "Clear them with `clear: both`"),
            item(true, "Set a width"),
            item(true, "Float the element"),
            row(&["Property", "Effect"], true),
            row(&["float", "moves the box"], false),
            row(&["clear", "pushes below floats"], false),
            BlockKind::Link {
                text: "Next: Flexbox".into(),
                target: "flexbox.md".into(),
            },
        ]
    );
}

#[test]
fn records_source_lines() {
    let lines: Vec<usize> = parse_checked(GUIDE).iter().map(|b| b.line).collect();
    assert_eq!(lines, vec![1, 3, 6, 8, 14, 15, 17, 18, 20, 22, 23, 25]);
}

#[test]
fn unterminated_fence_fails_with_opening_line() {
    let md = "# Title\n\n```html\n<p>never closed</p>\n";
    assert_eq!(
        parse_document(&Rope::from(md)),
        Err(ParseError::UnterminatedFence { line: 3 })
    );
}

#[test]
fn fence_content_is_a_raw_zone() {
    let md = "~~~\n# not a heading\n- not an item\n```\n~~~\n";
    assert_eq!(
        kinds(md),
        vec![BlockKind::CodeBlock {
            language: None,
            content: "# not a heading\n- not an item\n```".into(),
        }]
    );
}

#[test]
fn fence_with_info_does_not_close() {
    let md = "```\n```js\n```\n";
    assert_eq!(
        kinds(md),
        vec![BlockKind::CodeBlock {
            language: None,
            content: "```js".into(),
        }]
    );
}

#[test]
fn list_item_absorbs_continuation_lines() {
    assert_eq!(
        kinds("- first line\n  wraps here\n- second\n"),
        vec![item(false, "first line\nwraps here"), item(false, "second")]
    );
}

#[test]
fn link_line_inside_paragraph_is_continuation() {
    assert_eq!(
        kinds("Read more:\n[MDN](https://developer.mozilla.org)\n"),
        vec![para("Read more:\n[MDN](https://developer.mozilla.org)")]
    );
}

#[test]
fn separator_after_blank_line_is_text() {
    assert_eq!(
        kinds("| a |\n\n|---|\n"),
        vec![row(&["a"], false), para("|---|")]
    );
}

#[rstest]
#[case("")]
#[case("\n\n   \n")]
fn blank_documents_have_no_blocks(#[case] md: &str) {
    assert!(kinds(md).is_empty());
}

#[rstest]
#[case::guide(GUIDE)]
#[case::nested_fence("````md\n```css\na {}\n```\n````\n")]
#[case::continuations("- a\nb\n\n1. c\n[d](e)\n")]
#[case::empty_items("-\n1.\n#\n")]
#[case::tables("| h |\n|---|\n| x |\n| y |\n|---|\n")]
#[case::closing_hashes("## foo # #\n# C#\n### # #\n#### ends with #\n")]
#[case::tilde_info("~~~ a`b\ncode\n~~~\n\n~~~~ html title=\"x\"\n~~~\n~~~~\n")]
#[case::tilde_around_backticks("~~~ x`y\n```\n~~~\n")]
#[case::empty_item_continuation("-\ncontinued\nmore\n\n1.\n[a](b)\n")]
#[case::orphan_separators("| h |\n|---|\n|---|\n| x |\n|:-:|\n|---|\n")]
fn reserialized_output_parses_to_same_blocks(#[case] md: &str) {
    let first = kinds(md);
    let once = to_markdown(&parse_checked(md));
    assert_eq!(kinds(&once), first);
    assert_eq!(to_markdown(&parse_checked(&once)), once);
}
