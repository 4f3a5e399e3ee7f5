//! Per-character candidate enumeration shared by both search strategies.

use crate::dict::ReadingDictionary;
use crate::segment::{ReadingKind, ReadingSegment, DICTIONARY_KINDS};
use crate::unicode::{
    add_voicing, is_hiragana, is_katakana, katakana_to_hiragana, PROLONGED_SOUND_MARK,
    REPETITION_MARK,
};

/// One way the current character could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub reading: String,
    pub kind: ReadingKind,
}

impl Candidate {
    fn new(reading: impl Into<String>, kind: ReadingKind) -> Self {
        Self {
            reading: reading.into(),
            kind,
        }
    }
}

/// Lexicon markers that never belong to the pronunciation itself.
fn is_marker(c: char) -> bool {
    matches!(c, '-' | '(' | ')') || c.is_whitespace()
}

/// Expand one raw dictionary reading into the forms that may appear in a name.
///
/// A kun reading with an okurigana delimiter (`かけ.る`) yields its stem and
/// its full form (`かけ`, `かける`). Every other reading yields one form with
/// the delimiter removed. Empty forms are dropped.
pub(super) fn expand_reading(kind: ReadingKind, raw: &str) -> Vec<String> {
    let clean: String = raw.chars().filter(|&c| !is_marker(c)).collect();
    let forms = match (kind, clean.split_once('.')) {
        (ReadingKind::Kun, Some((stem, _))) => vec![stem.to_string(), clean.replace('.', "")],
        _ => vec![clean.replace('.', "")],
    };
    forms.into_iter().filter(|f| !f.is_empty()).collect()
}

/// Order same-character candidates by length.
///
/// A single-character name has nothing else to absorb leftover sound, so the
/// longest reading goes first. Longer names try the shortest first so later
/// characters are not starved. The sort is stable: equal lengths keep the
/// kun, on, nanori enumeration order.
pub(super) fn order_by_length(candidates: &mut [Candidate], single_char: bool) {
    if single_char {
        candidates.sort_by_key(|c| std::cmp::Reverse(c.reading.chars().count()));
    } else {
        candidates.sort_by_key(|c| c.reading.chars().count());
    }
}

/// Candidate readings for `character` that are a prefix of `remaining`.
///
/// Returns `None` only for a character with no dictionary entry, which
/// callers report as `unknown`. `Some(vec![])` means nothing fits and the
/// character is `irregular` (or a dead end while backtracking).
pub(super) fn candidates(
    dict: &dyn ReadingDictionary,
    character: char,
    previous: Option<&ReadingSegment>,
    remaining: &str,
    single_char: bool,
) -> Option<Vec<Candidate>> {
    // ー sits in the katakana block but names treat it as hiragana.
    if is_hiragana(character) || character == PROLONGED_SOUND_MARK {
        return Some(kana_candidate(character, ReadingKind::Hiragana, remaining));
    }
    if is_katakana(character) {
        let hira = katakana_to_hiragana(character);
        return Some(kana_candidate(hira, ReadingKind::Katakana, remaining));
    }
    if character == REPETITION_MARK {
        return Some(repetition_candidates(previous, remaining));
    }

    let entry = dict.lookup(character)?;
    let mut found = Vec::new();
    for kind in DICTIONARY_KINDS {
        for raw in entry.readings(kind) {
            for form in expand_reading(kind, raw) {
                if remaining.starts_with(form.as_str()) {
                    found.push(Candidate::new(form, kind));
                }
            }
        }
    }
    order_by_length(&mut found, single_char);
    Some(found)
}

/// Kana must match the pronunciation literally.
fn kana_candidate(expected: char, kind: ReadingKind, remaining: &str) -> Vec<Candidate> {
    if remaining.starts_with(expected) {
        vec![Candidate::new(expected, kind)]
    } else {
        Vec::new()
    }
}

/// `々` repeats the previous reading, plain first and then voiced.
fn repetition_candidates(previous: Option<&ReadingSegment>, remaining: &str) -> Vec<Candidate> {
    let Some(prev) = previous else {
        return Vec::new();
    };
    if prev.reading.is_empty() || !prev.kind.is_repeatable() {
        return Vec::new();
    }

    let mut found = Vec::with_capacity(2);
    if remaining.starts_with(prev.reading.as_str()) {
        found.push(Candidate::new(prev.reading.as_str(), ReadingKind::Repetition));
    }
    let voiced = add_voicing(&prev.reading);
    if voiced != prev.reading && remaining.starts_with(voiced.as_str()) {
        found.push(Candidate::new(voiced, ReadingKind::Repetition));
    }
    found
}
