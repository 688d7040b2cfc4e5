use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Identifies a validation rule. Ids are stable and used in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// A heading is more than one level deeper than the heading before it.
    HeadingIncrement,
    /// A fenced code block has no language tag.
    CodeLanguage,
    /// A link has an empty target.
    EmptyLinkTarget,
    /// More than one level-1 heading.
    SingleH1,
    /// A heading with no text.
    EmptyHeading,
    /// A table body row with a different cell count than its header.
    TableColumns,
}

impl RuleId {
    pub const ALL: [RuleId; 6] = [
        RuleId::HeadingIncrement,
        RuleId::CodeLanguage,
        RuleId::EmptyLinkTarget,
        RuleId::SingleH1,
        RuleId::EmptyHeading,
        RuleId::TableColumns,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::HeadingIncrement => "heading-increment",
            RuleId::CodeLanguage => "code-language",
            RuleId::EmptyLinkTarget => "empty-link-target",
            RuleId::SingleH1 => "single-h1",
            RuleId::EmptyHeading => "empty-heading",
            RuleId::TableColumns => "table-columns",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            RuleId::HeadingIncrement | RuleId::EmptyLinkTarget => Severity::Error,
            RuleId::CodeLanguage
            | RuleId::SingleH1
            | RuleId::EmptyHeading
            | RuleId::TableColumns => Severity::Warning,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule id `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// A structural convention violation. Findings never abort processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub rule: RuleId,
    pub message: String,
    /// Position of the offending block in its document.
    pub position: usize,
    /// 1-based source line of the offending block.
    pub line: usize,
}

impl Finding {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} (block {}): {}[{}] {}",
            self.line, self.position, self.severity, self.rule, self.message
        )
    }
}
