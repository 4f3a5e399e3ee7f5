mod basic;

use super::*;
use crate::dict::{KanjiDictionary, ReadingEntry};
use crate::segment::{ReadingKind, ReadingSegment};

/// Small lexicon covering the names used across the resolver tests.
pub(super) fn test_dict() -> KanjiDictionary {
    let none: [&str; 0] = [];
    KanjiDictionary::from_entries([
        ('翔', ReadingEntry::new(["かけ.る", "と.ぶ"], ["しょう"], ["か"])),
        ('惺', ReadingEntry::new(["さと.る"], ["せい"], none)),
        ('敦', ReadingEntry::new(none, none, ["あつ", "あつし"])),
        ('士', ReadingEntry::new(["さむらい"], ["し"], ["ま", "お"])),
        ('寿', ReadingEntry::new(none, ["す", "じゅ"], ["ことぶき"])),
        ('時', ReadingEntry::new(["とき"], ["じ"], none)),
        ('大', ReadingEntry::new(["おお", "おお.きい"], ["だい", "たい"], ["ひろ"])),
        ('空', ReadingEntry::new(["そら", "あ.く", "から"], ["くう"], none)),
        ('和', ReadingEntry::new(["なご.む"], ["わ", "か"], ["かず"])),
        ('也', ReadingEntry::new(["なり"], ["や"], none)),
        ('菜', ReadingEntry::new(["な"], ["さい"], none)),
        ('子', ReadingEntry::new(["こ", "-こ"], ["し", "す"], ["ね", "こ"])),
        ('美', ReadingEntry::new(["うつく.しい"], ["び", "み"], ["よし"])),
        ('太', ReadingEntry::new(["ふと.い"], ["たい", "た"], none)),
        // Known to the lexicon but without any reading.
        ('丶', ReadingEntry::default()),
    ])
}

pub(super) fn seg(character: char, reading: &str, kind: ReadingKind) -> ReadingSegment {
    ReadingSegment::new(character, reading, kind)
}
