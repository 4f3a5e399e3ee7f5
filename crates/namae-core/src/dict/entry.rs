use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::segment::ReadingKind;

static NO_READINGS: BTreeSet<String> = BTreeSet::new();

/// Candidate readings of one kanji, grouped by reading type.
///
/// Kun readings may carry a `.` between the stem and the okurigana
/// (`かけ.る`). Lexicon markers such as `-` and `()` are kept verbatim and
/// stripped only when candidates are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEntry {
    pub kun: BTreeSet<String>,
    pub on: BTreeSet<String>,
    pub nanori: BTreeSet<String>,
}

impl ReadingEntry {
    pub fn new<K, O, N>(kun: K, on: O, nanori: N) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            kun: kun.into_iter().map(Into::into).collect(),
            on: on.into_iter().map(Into::into).collect(),
            nanori: nanori.into_iter().map(Into::into).collect(),
        }
    }

    /// Readings of the given kind. Non-dictionary kinds have none.
    pub fn readings(&self, kind: ReadingKind) -> &BTreeSet<String> {
        match kind {
            ReadingKind::Kun => &self.kun,
            ReadingKind::On => &self.on,
            ReadingKind::Nanori => &self.nanori,
            _ => &NO_READINGS,
        }
    }

    /// True when the kanji is known but has no readings at all.
    pub fn is_empty(&self) -> bool {
        self.kun.is_empty() && self.on.is_empty() && self.nanori.is_empty()
    }

    /// Total number of readings across all kinds.
    pub fn len(&self) -> usize {
        self.kun.len() + self.on.len() + self.nanori.len()
    }

    pub fn merge(&mut self, other: ReadingEntry) {
        self.kun.extend(other.kun);
        self.on.extend(other.on);
        self.nanori.extend(other.nanori);
    }
}
