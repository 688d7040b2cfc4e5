//! # Convention Validation
//!
//! A single ordered pass over a document's blocks. Every rule sees each block
//! once, so findings come out sorted by block position. Validation never fails.

mod rules;

use std::collections::BTreeSet;

use crate::models::{Document, Finding, RuleId};

use rules::RuleState;

/// Which rules run. All rules are enabled by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    disabled: BTreeSet<RuleId>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable(mut self, rule: RuleId) -> Self {
        self.disabled.insert(rule);
        self
    }

    pub fn with_disabled(rules: impl IntoIterator<Item = RuleId>) -> Self {
        Self {
            disabled: rules.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled.contains(&rule)
    }
}

/// Checks a document's structural conventions.
pub fn validate(document: &Document, options: &ValidationOptions) -> Vec<Finding> {
    let mut state = RuleState::new(options);
    for block in document.blocks() {
        state.visit(block);
    }
    let findings = state.finish();
    log::debug!(
        "{}: {} finding(s) over {} block(s)",
        document.name(),
        findings.len(),
        document.blocks().len()
    );
    findings
}
