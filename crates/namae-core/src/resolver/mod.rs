//! Name reading resolution.
//!
//! Given a name's orthography and its hiragana pronunciation, work out which
//! slice of the pronunciation each character contributes and how (kun, on,
//! nanori, kana, repetition). An exhaustive backtracking search runs first;
//! only when no segmentation reproduces the pronunciation exactly does a
//! greedy left-to-right pass produce a best-effort answer with `irregular`
//! and `unknown` characters.

mod backtrack;
mod candidates;
mod greedy;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::ReadingDictionary;
use crate::segment::ReadingSegment;

use backtrack::backtrack;
use greedy::greedy;

/// Which search produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Backtracking found a segmentation that spells the pronunciation exactly.
    Exact,
    /// Greedy best-effort pass.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub segments: Vec<ReadingSegment>,
    pub strategy: Strategy,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        self.strategy == Strategy::Fallback
    }
}

/// Resolve a name into one reading segment per orthography character.
///
/// Returns an empty vector when either argument is empty. Never fails:
/// characters that cannot be explained are tagged `irregular` (known kanji)
/// or `unknown` (kanji missing from the dictionary).
pub fn resolve(
    dict: &dyn ReadingDictionary,
    orthography: &str,
    pronunciation: &str,
) -> Vec<ReadingSegment> {
    resolve_detailed(dict, orthography, pronunciation).segments
}

/// Like [`resolve`], but also reports whether the fallback was used.
pub fn resolve_detailed(
    dict: &dyn ReadingDictionary,
    orthography: &str,
    pronunciation: &str,
) -> Resolution {
    if orthography.is_empty() || pronunciation.is_empty() {
        return Resolution {
            segments: Vec::new(),
            strategy: Strategy::Exact,
        };
    }

    let chars: Vec<char> = orthography.chars().collect();
    let _span = debug_span!("resolve", orthography, pronunciation).entered();

    if let Some(segments) = backtrack(dict, &chars, pronunciation) {
        return Resolution {
            segments,
            strategy: Strategy::Exact,
        };
    }

    let segments = greedy(dict, &chars, pronunciation);
    debug!(?segments, "no exact segmentation, used greedy fallback");
    Resolution {
        segments,
        strategy: Strategy::Fallback,
    }
}
