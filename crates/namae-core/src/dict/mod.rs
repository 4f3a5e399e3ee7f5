//! Kanji reading dictionary.
//!
//! `KanjiDictionary` maps a single kanji to its kun, on and nanori readings.
//! It is built once (from a text lexicon or a compiled `NMKD` file) and then
//! shared read-only by every resolver thread.

mod entry;
mod kanji_dict;
mod kanji_dict_io;
#[cfg(test)]
mod tests;

pub use entry::ReadingEntry;
pub use kanji_dict::KanjiDictionary;
pub use kanji_dict_io::MAGIC;

use std::io;

/// Error type for lexicon parsing and compiled dictionary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected NMKD)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (file is corrupt)")]
    ChecksumMismatch,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Read-only lookup from a kanji to its readings.
///
/// `None` means the character is not in the dictionary at all, which the
/// resolver reports as `unknown`. An entry with no matching reading is
/// reported as `irregular` instead.
pub trait ReadingDictionary: Send + Sync {
    fn lookup(&self, kanji: char) -> Option<&ReadingEntry>;

    /// Number of kanji with an entry.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
