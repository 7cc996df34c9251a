//! Deck load errors. Every variant is fatal to the drill.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the pronoun file.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The file could not be opened.
    #[error("error reading pronoun file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid comma-separated text.
    #[error("error reading csv data from {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row does not have exactly name, subject and object.
    #[error("{path}:{line}: expected 3 fields (name,subject,object), found {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    /// The file holds no rows at all.
    #[error("no pronoun entries found in {path}")]
    Empty { path: PathBuf },
}
