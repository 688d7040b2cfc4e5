use crate::models::{Finding, RuleId};
use crate::parsing::blocks::{BlockKind, BlockNode};
use crate::parsing::inline::links_in;

use super::ValidationOptions;

/// Running state for all rules across one document.
pub(super) struct RuleState<'a> {
    options: &'a ValidationOptions,
    findings: Vec<Finding>,
    prev_heading: Option<u8>,
    seen_h1: bool,
    /// Column count of the header of the table currently being read.
    table_columns: Option<usize>,
}

impl<'a> RuleState<'a> {
    pub(super) fn new(options: &'a ValidationOptions) -> Self {
        Self {
            options,
            findings: vec![],
            prev_heading: None,
            seen_h1: false,
            table_columns: None,
        }
    }

    pub(super) fn visit(&mut self, block: &BlockNode) {
        if !matches!(block.kind, BlockKind::TableRow { .. }) {
            self.table_columns = None;
        }

        match &block.kind {
            BlockKind::Heading { level, text } => {
                self.heading_increment(block, *level);
                self.single_h1(block, *level);
                if text.is_empty() {
                    self.report(
                        block,
                        RuleId::EmptyHeading,
                        format!("h{level} heading has no text"),
                    );
                }
                self.inline_links(block, text);
            }
            BlockKind::Paragraph { text } | BlockKind::ListItem { text, .. } => {
                self.inline_links(block, text);
            }
            BlockKind::CodeBlock { language: None, .. } => {
                self.report(
                    block,
                    RuleId::CodeLanguage,
                    "fenced code block has no language tag".to_string(),
                );
            }
            BlockKind::CodeBlock { .. } => {}
            BlockKind::TableRow { cells, header } => {
                self.table_columns(block, cells.len(), *header);
                for cell in cells {
                    self.inline_links(block, cell);
                }
            }
            BlockKind::Link { text, target } => {
                if target.trim().is_empty() {
                    self.empty_link(block, text);
                }
            }
        }
    }

    pub(super) fn finish(self) -> Vec<Finding> {
        self.findings
    }

    fn heading_increment(&mut self, block: &BlockNode, level: u8) {
        if let Some(prev) = self.prev_heading
            && level > prev + 1
        {
            self.report(
                block,
                RuleId::HeadingIncrement,
                format!("heading level jumps from h{prev} to h{level}"),
            );
        }
        self.prev_heading = Some(level);
    }

    fn single_h1(&mut self, block: &BlockNode, level: u8) {
        if level != 1 {
            return;
        }
        if self.seen_h1 {
            self.report(
                block,
                RuleId::SingleH1,
                "document has more than one h1 heading".to_string(),
            );
        }
        self.seen_h1 = true;
    }

    fn table_columns(&mut self, block: &BlockNode, count: usize, header: bool) {
        if header {
            self.table_columns = Some(count);
            return;
        }
        if let Some(expected) = self.table_columns
            && count != expected
        {
            self.report(
                block,
                RuleId::TableColumns,
                format!("table row has {count} cell(s), header has {expected}"),
            );
        }
    }

    fn inline_links(&mut self, block: &BlockNode, text: &str) {
        for (link_text, target) in links_in(text) {
            if target.trim().is_empty() {
                self.empty_link(block, link_text);
            }
        }
    }

    fn empty_link(&mut self, block: &BlockNode, link_text: &str) {
        self.report(
            block,
            RuleId::EmptyLinkTarget,
            format!("link `{link_text}` has an empty target"),
        );
    }

    fn report(&mut self, block: &BlockNode, rule: RuleId, message: String) {
        if !self.options.is_enabled(rule) {
            return;
        }
        self.findings.push(Finding {
            severity: rule.severity(),
            rule,
            message,
            position: block.position,
            line: block.line,
        });
    }
}
