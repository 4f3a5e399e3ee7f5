use super::candidates::candidates;
use crate::dict::ReadingDictionary;
use crate::segment::{ReadingKind, ReadingSegment};

/// Best-effort single pass used when no complete segmentation exists.
///
/// Each character takes the first candidate in the usual length order and
/// never reconsiders it. For a single-character name the first candidate is
/// the longest, which is the whole remainder whenever some reading covers it.
/// Characters with nothing that fits get an empty reading and leave the
/// cursor where it was. Leftover or missing sound at the end is not corrected.
pub(super) fn greedy(
    dict: &dyn ReadingDictionary,
    orthography: &[char],
    pronunciation: &str,
) -> Vec<ReadingSegment> {
    let single_char = orthography.len() == 1;
    let mut segments: Vec<ReadingSegment> = Vec::with_capacity(orthography.len());
    let mut pos = 0;

    for &character in orthography {
        let remaining = &pronunciation[pos..];
        let segment = match candidates(dict, character, segments.last(), remaining, single_char) {
            None => ReadingSegment::unmatched(character, ReadingKind::Unknown),
            Some(found) => match found.into_iter().next() {
                Some(best) => {
                    pos += best.reading.len();
                    ReadingSegment::new(character, best.reading, best.kind)
                }
                None => ReadingSegment::unmatched(character, ReadingKind::Irregular),
            },
        };
        segments.push(segment);
    }
    segments
}
