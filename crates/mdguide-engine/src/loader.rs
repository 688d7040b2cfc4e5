//! Turns named sources into loaded documents.
//!
//! The loader only checks that there is something to parse. Reading files is
//! the caller's job (see [`crate::io::read_source`]), which reports unreadable
//! files as [`LoadError::Unreadable`] so they flow through the same per-document
//! error path.

use relative_path::{RelativePath, RelativePathBuf};
use xi_rope::Rope;

use crate::models::Source;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("{name}: source is empty")]
    Empty { name: RelativePathBuf },
    #[error("{name}: unreadable source: {reason}")]
    Unreadable {
        name: RelativePathBuf,
        reason: String,
    },
}

impl LoadError {
    pub fn name(&self) -> &RelativePath {
        match self {
            LoadError::Empty { name } | LoadError::Unreadable { name, .. } => name,
        }
    }
}

/// A named source whose text is ready for line-oriented parsing.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    name: RelativePathBuf,
    rope: Rope,
}

impl LoadedDocument {
    pub fn name(&self) -> &RelativePath {
        &self.name
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

/// Loads every source, preserving input order. One result per source.
pub fn load<I>(sources: I) -> Vec<Result<LoadedDocument, LoadError>>
where
    I: IntoIterator<Item = Source>,
{
    sources.into_iter().map(load_source).collect()
}

/// Loads a single source. Whitespace-only text counts as empty.
pub fn load_source(source: Source) -> Result<LoadedDocument, LoadError> {
    if source.text().trim().is_empty() {
        return Err(LoadError::Empty {
            name: source.name().to_owned(),
        });
    }
    let name = source.name().to_owned();
    Ok(LoadedDocument {
        name,
        rope: Rope::from(source.into_text()),
    })
}
