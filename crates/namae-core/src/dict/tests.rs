use std::collections::BTreeSet;

use super::kanji_dict_io::{HEADER_SIZE, MAGIC};
use super::*;
use crate::segment::ReadingKind;
use crate::settings::LexiconSettings;

fn lexicon_settings() -> LexiconSettings {
    LexiconSettings {
        field_separator: "\t".to_string(),
        reading_separator: " ".to_string(),
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const LEXICON: &str = "\
# kanji\tkunyomi\tonyomi\tnanori
翔\tかけ.る と.ぶ\tショウ\tか
敦\t\tトン タイ\tあつ あつし
々

士\tさむらい\tシ\tま お
";

#[test]
fn parse_lexicon_columns() {
    let dict = KanjiDictionary::parse_lexicon(LEXICON, &lexicon_settings()).unwrap();
    assert_eq!(dict.len(), 4);

    let sho = dict.lookup('翔').unwrap();
    assert_eq!(sho.kun, set(&["かけ.る", "と.ぶ"]));
    // On-readings are stored in hiragana
    assert_eq!(sho.on, set(&["しょう"]));
    assert_eq!(sho.nanori, set(&["か"]));

    let atsu = dict.lookup('敦').unwrap();
    assert!(atsu.kun.is_empty());
    assert_eq!(atsu.readings(ReadingKind::On), &set(&["とん", "たい"]));
    assert_eq!(atsu.readings(ReadingKind::Nanori), &set(&["あつ", "あつし"]));
    assert!(atsu.readings(ReadingKind::Irregular).is_empty());
}

#[test]
fn known_kanji_without_readings() {
    let dict = KanjiDictionary::parse_lexicon(LEXICON, &lexicon_settings()).unwrap();
    let ditto = dict.lookup('々').unwrap();
    assert!(ditto.is_empty());
    assert!(dict.lookup('鑫').is_none());
}

#[test]
fn duplicate_lines_merge() {
    let text = "子\tこ\tシ\t\n子\t\tス\tね\n";
    let dict = KanjiDictionary::parse_lexicon(text, &lexicon_settings()).unwrap();
    assert_eq!(dict.len(), 1);
    let ko = dict.lookup('子').unwrap();
    assert_eq!(ko.on, set(&["し", "す"]));
    assert_eq!(ko.nanori, set(&["ね"]));
    assert_eq!(ko.len(), 4);
}

#[test]
fn custom_separators() {
    let settings = LexiconSettings {
        field_separator: ",".to_string(),
        reading_separator: "|".to_string(),
    };
    let dict = KanjiDictionary::parse_lexicon("寿,ことぶき,ス|ジュ,ひさ", &settings).unwrap();
    let ju = dict.lookup('寿').unwrap();
    assert_eq!(ju.on, set(&["す", "じゅ"]));
    assert_eq!(ju.nanori, set(&["ひさ"]));
}

#[test]
fn error_multi_char_kanji() {
    let err = KanjiDictionary::parse_lexicon("翔\tかけ.る\n翔太\tx\n", &lexicon_settings())
        .unwrap_err();
    assert!(matches!(err, DictError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("single character"));
}

#[test]
fn error_too_many_columns() {
    let err = KanjiDictionary::parse_lexicon("翔\ta\tb\tc\td\n", &lexicon_settings()).unwrap_err();
    assert!(matches!(err, DictError::Parse { line: 1, .. }));
}

#[test]
fn bytes_roundtrip() {
    let dict = KanjiDictionary::parse_lexicon(LEXICON, &lexicon_settings()).unwrap();
    let bytes = dict.to_bytes().unwrap();
    assert_eq!(&bytes[..4], MAGIC);

    let loaded = KanjiDictionary::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.len(), dict.len());
    for (kanji, entry) in dict.iter() {
        assert_eq!(loaded.lookup(kanji), Some(entry));
    }
    // Serialization is deterministic
    assert_eq!(loaded.to_bytes().unwrap(), bytes);
}

#[test]
fn from_bytes_rejects_bad_input() {
    assert!(matches!(
        KanjiDictionary::from_bytes(b"NM"),
        Err(DictError::InvalidHeader)
    ));
    assert!(matches!(
        KanjiDictionary::from_bytes(b"LXDX\x01\0\0\0\0\0\0\0"),
        Err(DictError::InvalidMagic)
    ));
    assert!(matches!(
        KanjiDictionary::from_bytes(b"NMKD\x09\0\0\0\0\0\0\0"),
        Err(DictError::UnsupportedVersion(9))
    ));
    assert!(matches!(
        KanjiDictionary::from_bytes(b"NMKD\x01\0\0"),
        Err(DictError::InvalidHeader)
    ));
}

#[test]
fn from_bytes_detects_corruption() {
    let dict = KanjiDictionary::parse_lexicon(LEXICON, &lexicon_settings()).unwrap();
    let mut bytes = dict.to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(bytes.len() > HEADER_SIZE);
    assert!(matches!(
        KanjiDictionary::from_bytes(&bytes),
        Err(DictError::ChecksumMismatch)
    ));
}

#[test]
fn save_and_open_compiled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kanji.dict");
    let dict = KanjiDictionary::parse_lexicon(LEXICON, &lexicon_settings()).unwrap();
    dict.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let opened = KanjiDictionary::open(&path).unwrap();
    assert_eq!(opened.len(), 4);
    assert_eq!(opened.lookup('士').unwrap().on, set(&["し"]));
}

#[test]
fn open_text_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kanji.tsv");
    std::fs::write(&path, LEXICON).unwrap();

    let opened = KanjiDictionary::open(&path).unwrap();
    assert_eq!(opened.len(), 4);
    assert!(opened.lookup('翔').is_some());
}

#[test]
fn open_missing_file() {
    let err = KanjiDictionary::open(std::path::Path::new("/nonexistent/kanji.dict")).unwrap_err();
    assert!(matches!(err, DictError::Io(_)));
}
