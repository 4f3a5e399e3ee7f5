use std::collections::HashSet;

use super::candidates::candidates;
use crate::dict::ReadingDictionary;
use crate::segment::{joined_reading, ReadingKind, ReadingSegment};

/// A search state: character index, byte offset into the pronunciation and
/// the previous segment's reading (only `々` looks at it).
type State = (usize, usize, Option<(String, ReadingKind)>);

/// Depth-first search for a segmentation that spells out `pronunciation`
/// exactly. The first complete segmentation found wins.
///
/// Recursion depth is bounded by the orthography length. States that already
/// failed are remembered, so a name with many ambiguous characters is not
/// re-explored from the same position twice.
pub(super) fn backtrack(
    dict: &dyn ReadingDictionary,
    orthography: &[char],
    pronunciation: &str,
) -> Option<Vec<ReadingSegment>> {
    let mut search = Search {
        dict,
        orthography,
        pronunciation,
        dead_ends: HashSet::new(),
    };
    search.extend(&[], 0)
}

struct Search<'a> {
    dict: &'a dyn ReadingDictionary,
    orthography: &'a [char],
    pronunciation: &'a str,
    dead_ends: HashSet<State>,
}

impl Search<'_> {
    /// `segments` holds one segment per character already consumed and `pos`
    /// is the byte offset reached. Each branch extends its own copy.
    fn extend(&mut self, segments: &[ReadingSegment], pos: usize) -> Option<Vec<ReadingSegment>> {
        let index = segments.len();
        if index >= self.orthography.len() {
            let complete =
                pos == self.pronunciation.len() && joined_reading(segments) == self.pronunciation;
            return complete.then(|| segments.to_vec());
        }

        let state = (
            index,
            pos,
            segments.last().map(|s| (s.reading.clone(), s.kind)),
        );
        if self.dead_ends.contains(&state) {
            return None;
        }

        let character = self.orthography[index];
        let remaining = &self.pronunciation[pos..];
        let single_char = self.orthography.len() == 1;

        // `None` (absent from the dictionary) is a dead end like an empty list.
        let found = candidates(self.dict, character, segments.last(), remaining, single_char);
        for candidate in found.into_iter().flatten() {
            let consumed = candidate.reading.len();
            let mut extended = Vec::with_capacity(index + 1);
            extended.extend_from_slice(segments);
            extended.push(ReadingSegment::new(
                character,
                candidate.reading,
                candidate.kind,
            ));
            if let Some(solution) = self.extend(&extended, pos + consumed) {
                return Some(solution);
            }
        }

        self.dead_ends.insert(state);
        None
    }
}
