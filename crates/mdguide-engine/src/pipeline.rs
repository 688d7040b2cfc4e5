//! # Processing Pipeline
//!
//! Loader → Parser → Validator → Renderer, once per document. Documents share
//! no state, so with `parallel` set they are spread over the rayon pool; the
//! report keeps input order either way.

use rayon::prelude::*;
use relative_path::RelativePathBuf;

use crate::loader::{LoadError, load_source};
use crate::models::{Document, Finding, Source};
use crate::parsing::ParseError;
use crate::render::render_html;
use crate::report::Report;
use crate::validate::{ValidationOptions, validate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub validation: ValidationOptions,
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            validation: ValidationOptions::default(),
            parallel: true,
        }
    }
}

/// A document that made it through every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub document: Document,
    pub html: String,
    pub findings: Vec<Finding>,
}

/// The result for one input, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub name: RelativePathBuf,
    pub result: Result<ProcessedDocument, DocumentError>,
}

/// Processes inputs that may already have failed to load (e.g. unreadable files).
pub fn process(inputs: Vec<Result<Source, LoadError>>, options: &PipelineOptions) -> Report {
    log::info!(
        "processing {} document(s){}",
        inputs.len(),
        if options.parallel { " in parallel" } else { "" }
    );
    let outcomes: Vec<DocumentOutcome> = if options.parallel {
        inputs
            .into_par_iter()
            .map(|input| process_input(input, &options.validation))
            .collect()
    } else {
        inputs
            .into_iter()
            .map(|input| process_input(input, &options.validation))
            .collect()
    };
    Report::new(outcomes)
}

/// Processes already-resolved sources.
pub fn process_sources(sources: Vec<Source>, options: &PipelineOptions) -> Report {
    process(sources.into_iter().map(Ok).collect(), options)
}

fn process_input(
    input: Result<Source, LoadError>,
    validation: &ValidationOptions,
) -> DocumentOutcome {
    match input {
        Ok(source) => process_document(source, validation),
        Err(err) => {
            log::warn!("{err}");
            DocumentOutcome {
                name: err.name().to_owned(),
                result: Err(err.into()),
            }
        }
    }
}

/// Runs every stage for one source. Failures stay inside the outcome.
pub fn process_document(source: Source, validation: &ValidationOptions) -> DocumentOutcome {
    let name = source.name().to_owned();
    let result = run_stages(source, validation);
    if let Err(err) = &result {
        log::warn!("{name}: {err}");
    }
    DocumentOutcome { name, result }
}

fn run_stages(
    source: Source,
    validation: &ValidationOptions,
) -> Result<ProcessedDocument, DocumentError> {
    let loaded = load_source(source)?;
    let document = Document::parse(&loaded)?;
    log::debug!("{}: parsed {} block(s)", document.name(), document.blocks().len());

    let findings = validate(&document, validation);
    let html = render_html(document.blocks());

    Ok(ProcessedDocument {
        document,
        html,
        findings,
    })
}
