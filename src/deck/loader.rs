//! Headerless CSV loading
//!
//! File format is NAME,SUBJECT PRONOUN,OBJECT PRONOUN per row, e.g.
//! `Mark,he,him`. Surrounding whitespace in a field is ignored and blank
//! lines are skipped. Any malformed row fails the whole load.

use super::entry::PronounEntry;
use super::error::DeckError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const FIELDS_PER_ROW: usize = 3;

/// Load every row of the pronoun file at `path`.
pub fn load_deck(path: &Path) -> Result<Vec<PronounEntry>, DeckError> {
    let file = File::open(path).map_err(|source| DeckError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_deck(file, path)?;
    debug!(path = %path.display(), count = entries.len(), "pronoun deck loaded");
    Ok(entries)
}

/// Parse rows from any reader; `path` is only used for error messages.
pub fn parse_deck<R: Read>(reader: R, path: &Path) -> Result<Vec<PronounEntry>, DeckError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|source| DeckError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        if !more {
            break;
        }

        if record.len() != FIELDS_PER_ROW {
            return Err(DeckError::FieldCount {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                found: record.len(),
            });
        }

        let entry: PronounEntry = record.deserialize(None).map_err(|source| DeckError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(DeckError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(entries)
}
