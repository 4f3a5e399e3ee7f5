//! Resolved reading segments and their storage annotation.
//!
//! A resolved name is stored as one annotation string, each character as
//! `character/reading/kind` and segments joined by single spaces:
//! `敦/あつ/nanori 士/し/on`. Characters without a reading keep an empty
//! middle field (`翔//irregular`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a character's sound was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    Kun,
    On,
    Nanori,
    Hiragana,
    Katakana,
    Repetition,
    Irregular,
    Unknown,
}

/// Dictionary reading kinds in the order candidates are enumerated.
pub const DICTIONARY_KINDS: [ReadingKind; 3] =
    [ReadingKind::Kun, ReadingKind::On, ReadingKind::Nanori];

impl ReadingKind {
    pub const ALL: [ReadingKind; 8] = [
        ReadingKind::Kun,
        ReadingKind::On,
        ReadingKind::Nanori,
        ReadingKind::Hiragana,
        ReadingKind::Katakana,
        ReadingKind::Repetition,
        ReadingKind::Irregular,
        ReadingKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingKind::Kun => "kun",
            ReadingKind::On => "on",
            ReadingKind::Nanori => "nanori",
            ReadingKind::Hiragana => "hiragana",
            ReadingKind::Katakana => "katakana",
            ReadingKind::Repetition => "repetition",
            ReadingKind::Irregular => "irregular",
            ReadingKind::Unknown => "unknown",
        }
    }

    /// Kun, on or nanori.
    pub fn is_dictionary(self) -> bool {
        matches!(self, ReadingKind::Kun | ReadingKind::On | ReadingKind::Nanori)
    }

    /// A segment of this kind can be repeated by `々`.
    pub fn is_repeatable(self) -> bool {
        !matches!(self, ReadingKind::Irregular | ReadingKind::Unknown)
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingKind {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MappingError::UnknownKind(s.to_string()))
    }
}

/// One character's contribution to a resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSegment {
    pub character: char,
    pub reading: String,
    pub kind: ReadingKind,
}

impl ReadingSegment {
    pub fn new(character: char, reading: impl Into<String>, kind: ReadingKind) -> Self {
        Self {
            character,
            reading: reading.into(),
            kind,
        }
    }

    /// A segment with no reading (`irregular` or `unknown`).
    pub fn unmatched(character: char, kind: ReadingKind) -> Self {
        Self::new(character, String::new(), kind)
    }
}

impl fmt::Display for ReadingSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.character, self.reading, self.kind)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("malformed segment {0:?} (expected character/reading/kind)")]
    Malformed(String),
    #[error("unknown reading kind {0:?}")]
    UnknownKind(String),
}

/// Render segments as the space-joined `character/reading/kind` annotation.
pub fn format_mapping(segments: &[ReadingSegment]) -> String {
    segments
        .iter()
        .map(ReadingSegment::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an annotation produced by [`format_mapping`].
pub fn parse_mapping(s: &str) -> Result<Vec<ReadingSegment>, MappingError> {
    s.split(' ')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut fields = part.splitn(3, '/');
            let (Some(character), Some(reading), Some(kind)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(MappingError::Malformed(part.to_string()));
            };
            let mut chars = character.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(MappingError::Malformed(part.to_string()));
            };
            Ok(ReadingSegment::new(c, reading, kind.parse()?))
        })
        .collect()
}

/// True if any character's reading is irregular.
///
/// Unknown characters are not counted: they say nothing about whether the
/// reading is regular, only that the lexicon lacks the kanji.
pub fn has_irregular(segments: &[ReadingSegment]) -> bool {
    segments.iter().any(|s| s.kind == ReadingKind::Irregular)
}

/// Concatenation of every segment's reading, in order.
pub fn joined_reading(segments: &[ReadingSegment]) -> String {
    segments.iter().map(|s| s.reading.as_str()).collect()
}
