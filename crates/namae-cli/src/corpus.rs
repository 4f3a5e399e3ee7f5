//! Name corpus reader.
//!
//! One record per line, tab-separated: `nid year orth pron gender`.
//! Blank lines, `#` comments and a leading `nid` header row are ignored.

use std::fs;
use std::path::Path;

use namae_core::unicode::is_hiragana_reading;
use tracing::{info, warn};

const FIELD_COUNT: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// One registered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub nid: String,
    pub year: i32,
    pub orth: String,
    pub pron: String,
    pub gender: String,
}

/// Parse corpus text. Records with an empty orthography or pronunciation
/// are dropped.
pub fn parse_corpus(text: &str) -> Result<Vec<NameRecord>, CorpusError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut non_hiragana = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(CorpusError::Parse {
                line: line_no,
                reason: format!("expected {FIELD_COUNT} fields, got {}", fields.len()),
            });
        }
        if records.is_empty() && skipped == 0 && fields[0] == "nid" {
            continue;
        }

        let year = fields[1].parse::<i32>().map_err(|e| CorpusError::Parse {
            line: line_no,
            reason: format!("invalid year {:?}: {e}", fields[1]),
        })?;
        let (orth, pron) = (fields[2], fields[3]);
        if orth.is_empty() || pron.is_empty() {
            skipped += 1;
            continue;
        }

        if !is_hiragana_reading(pron) {
            non_hiragana += 1;
        }

        records.push(NameRecord {
            nid: fields[0].to_string(),
            year,
            orth: orth.to_string(),
            pron: pron.to_string(),
            gender: fields[4].to_string(),
        });
    }

    if non_hiragana > 0 {
        warn!(non_hiragana, "pronunciations outside hiragana will not match kanji readings");
    }
    info!(records = records.len(), skipped, "corpus parsed");
    Ok(records)
}

pub fn read_corpus(path: &Path) -> Result<Vec<NameRecord>, CorpusError> {
    let text = fs::read_to_string(path)?;
    parse_corpus(&text)
}
