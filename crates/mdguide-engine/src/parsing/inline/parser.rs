use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, InlineLink},
    types::InlineNode,
};

/// Scans inline content into a sequence of [`InlineNode`]s.
///
/// `base` is added to every span, so callers can scan a substring and still
/// get spans relative to the enclosing text. Text between constructs is
/// emitted as `InlineNode::Text`; the nodes cover `s` without gaps.
///
/// Code spans are tried first and suppress link parsing inside them.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(InlineLink::IMAGE_BANG)
            && cur.peek_at(1) == Some(InlineLink::TEXT_OPEN)
        {
            cur.bump();
            cur.bump();
            continue;
        }
        let node = try_parse_code_span(&mut cur).or_else(|| try_parse_link(&mut cur));
        if let Some(node) = node {
            let full = node.full();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Returns `(text, target)` for every inline link in `s`, in order.
pub fn links_in(s: &str) -> Vec<(&str, &str)> {
    parse_inline(0, s)
        .into_iter()
        .filter_map(|n| match n {
            InlineNode::Link { text, target, .. } => Some((text.slice(s, 0), target.slice(s, 0))),
            _ => None,
        })
        .collect()
}

/// Attempts a code span at the cursor. Restores the cursor when unclosed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.pos();

    if !cur.advance_to(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump();

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts `[text](target)` at the cursor. Restores the cursor on any mismatch.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(InlineLink::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let text_start = cur.pos();

    if !cur.advance_to(InlineLink::TEXT_CLOSE) {
        *cur = saved;
        return None;
    }
    let text_end = cur.pos();
    cur.bump();

    if cur.peek() != Some(InlineLink::TARGET_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump();
    let target_start = cur.pos();

    if !cur.advance_to(InlineLink::TARGET_CLOSE) {
        *cur = saved;
        return None;
    }
    let target_end = cur.pos();
    cur.bump();

    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        text: Span::new(text_start, text_end),
        target: Span::new(target_start, target_end),
    })
}
