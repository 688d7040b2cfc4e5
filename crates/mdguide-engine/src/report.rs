//! Aggregated results of a pipeline run.

use std::fmt;

use relative_path::RelativePath;
use serde::Serialize;

use crate::models::{Finding, Severity};
use crate::pipeline::{DocumentError, DocumentOutcome, ProcessedDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<DocumentOutcome>,
}

/// Serializable per-document summary line.
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    pub document: &'a str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<usize>,
    pub findings: &'a [Finding],
}

#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub succeeded: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub clean: bool,
    pub documents: Vec<ReportEntry<'a>>,
}

impl Report {
    pub fn new(outcomes: Vec<DocumentOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in input order.
    pub fn outcomes(&self) -> &[DocumentOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ProcessedDocument> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&RelativePath, &DocumentError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_relative_path(), e)))
    }

    /// Findings grouped by document, skipping documents without findings.
    pub fn findings_by_document(&self) -> impl Iterator<Item = (&RelativePath, &[Finding])> {
        self.succeeded()
            .filter(|p| !p.findings.is_empty())
            .map(|p| (p.document.name(), p.findings.as_slice()))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.succeeded()
            .flat_map(|p| &p.findings)
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// No failed documents and no error-severity findings.
    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none() && self.error_count() == 0
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        let documents = self
            .outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(p) => ReportEntry {
                    document: o.name.as_str(),
                    status: "ok",
                    error: None,
                    blocks: Some(p.document.blocks().len()),
                    findings: &p.findings,
                },
                Err(e) => ReportEntry {
                    document: o.name.as_str(),
                    status: "failed",
                    error: Some(e.to_string()),
                    blocks: None,
                    findings: &[],
                },
            })
            .collect();

        ReportSummary {
            succeeded: self.succeeded().count(),
            failed: self.failed().count(),
            errors: self.error_count(),
            warnings: self.warning_count(),
            clean: self.is_clean(),
            documents,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let succeeded: Vec<_> = self.succeeded().collect();
        writeln!(f, "Succeeded ({}):", succeeded.len())?;
        for p in &succeeded {
            let errors = p.findings.iter().filter(|x| x.is_error()).count();
            writeln!(
                f,
                "  {} ({} blocks, {} error(s), {} warning(s))",
                p.document.name(),
                p.document.blocks().len(),
                errors,
                p.findings.len() - errors
            )?;
        }

        let failed: Vec<_> = self.failed().collect();
        if !failed.is_empty() {
            writeln!(f, "Failed ({}):", failed.len())?;
            for (name, err) in failed {
                writeln!(f, "  {name}: {err}")?;
            }
        }

        let mut grouped = self.findings_by_document().peekable();
        if grouped.peek().is_some() {
            writeln!(f, "Findings:")?;
            for (name, findings) in grouped {
                writeln!(f, "  {name}")?;
                for finding in findings {
                    writeln!(f, "    {finding}")?;
                }
            }
        }

        write!(
            f,
            "{} error(s), {} warning(s)",
            self.error_count(),
            self.warning_count()
        )
    }
}
