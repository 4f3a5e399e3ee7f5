use std::collections::HashMap;

use tracing::{debug, info};

use super::{DictError, ReadingDictionary, ReadingEntry};
use crate::settings::LexiconSettings;
use crate::unicode::katakana_to_hiragana_str;

/// HashMap-backed kanji dictionary.
#[derive(Debug, Clone, Default)]
pub struct KanjiDictionary {
    pub(super) entries: HashMap<char, ReadingEntry>,
}

impl KanjiDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (char, ReadingEntry)>) -> Self {
        let mut dict = Self::new();
        for (kanji, entry) in entries {
            dict.insert(kanji, entry);
        }
        dict
    }

    /// Add readings for a kanji, merging with any readings already present.
    pub fn insert(&mut self, kanji: char, entry: ReadingEntry) {
        self.entries.entry(kanji).or_default().merge(entry);
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &ReadingEntry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    /// Entries sorted by kanji, for stable output.
    pub fn sorted_entries(&self) -> Vec<(char, &ReadingEntry)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    /// Total number of readings over all kanji.
    pub fn reading_count(&self) -> usize {
        self.entries.values().map(ReadingEntry::len).sum()
    }

    /// Parse a text lexicon: `kanji<TAB>kunyomi<TAB>onyomi<TAB>nanori`.
    ///
    /// Each reading column is a list split on `reading_separator`. Missing
    /// trailing columns count as empty. On-readings are normalised to
    /// hiragana. Blank lines, `#` comments and rows with an empty kanji
    /// column are skipped.
    pub fn parse_lexicon(text: &str, lexicon: &LexiconSettings) -> Result<Self, DictError> {
        let mut dict = Self::new();
        let mut total_lines = 0usize;
        let mut skipped = 0usize;

        for (idx, line) in text.lines().enumerate() {
            total_lines += 1;
            if line.trim().is_empty() || line.starts_with('#') {
                skipped += 1;
                continue;
            }
            let line_no = idx + 1;

            let fields: Vec<&str> = line.split(lexicon.field_separator.as_str()).collect();
            if fields.len() > 4 {
                return Err(DictError::Parse {
                    line: line_no,
                    reason: format!("expected at most 4 columns, found {}", fields.len()),
                });
            }

            let kanji_field = fields[0].trim();
            let mut kanji_chars = kanji_field.chars();
            let Some(kanji) = kanji_chars.next() else {
                skipped += 1;
                continue;
            };
            if kanji_chars.next().is_some() {
                return Err(DictError::Parse {
                    line: line_no,
                    reason: format!("expected a single character, found {kanji_field:?}"),
                });
            }

            let column = |i: usize| -> Vec<String> {
                fields
                    .get(i)
                    .map(|f| {
                        f.split(lexicon.reading_separator.as_str())
                            .map(str::trim)
                            .filter(|r| !r.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default()
            };

            let on: Vec<String> = column(2)
                .iter()
                .map(|r| katakana_to_hiragana_str(r))
                .collect();
            dict.insert(kanji, ReadingEntry::new(column(1), on, column(3)));
        }

        debug!(total_lines, skipped, "parsed lexicon");
        info!(
            kanji = dict.len(),
            readings = dict.reading_count(),
            "loaded kanji lexicon"
        );
        Ok(dict)
    }
}

impl ReadingDictionary for KanjiDictionary {
    fn lookup(&self, kanji: char) -> Option<&ReadingEntry> {
        self.entries.get(&kanji)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
