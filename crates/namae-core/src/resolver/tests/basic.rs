use super::*;
use crate::segment::joined_reading;

#[test]
fn test_empty_input() {
    let dict = test_dict();
    assert!(resolve(&dict, "", "あ").is_empty());
    assert!(resolve(&dict, "翔", "").is_empty());
    assert!(resolve(&dict, "", "").is_empty());
}

#[test]
fn test_single_kanji_prefers_full_kun() {
    // Stem かけ and the nanori か also fit, but a lone kanji takes it all.
    let dict = test_dict();
    let result = resolve_detailed(&dict, "翔", "かける");
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(result.segments, vec![seg('翔', "かける", ReadingKind::Kun)]);
}

#[test]
fn test_single_kanji_okurigana() {
    let dict = test_dict();
    let result = resolve(&dict, "惺", "さとる");
    assert_eq!(result, vec![seg('惺', "さとる", ReadingKind::Kun)]);
}

#[test]
fn test_multi_kanji_prefers_short_readings() {
    // あつし would swallow the whole name and leave nothing for 士.
    let dict = test_dict();
    let result = resolve_detailed(&dict, "敦士", "あつし");
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(
        result.segments,
        vec![
            seg('敦', "あつ", ReadingKind::Nanori),
            seg('士', "し", ReadingKind::On),
        ]
    );
}

#[test]
fn test_repetition_voiced() {
    let dict = test_dict();
    let result = resolve(&dict, "寿々", "すず");
    assert_eq!(
        result,
        vec![
            seg('寿', "す", ReadingKind::On),
            seg('々', "ず", ReadingKind::Repetition),
        ]
    );
}

#[test]
fn test_repetition_plain() {
    let dict = test_dict();
    let result = resolve(&dict, "菜々子", "ななこ");
    assert_eq!(
        result,
        vec![
            seg('菜', "な", ReadingKind::Kun),
            seg('々', "な", ReadingKind::Repetition),
            seg('子', "こ", ReadingKind::Kun),
        ]
    );
}

#[test]
fn test_repetition_of_multi_kana_reading() {
    let dict = test_dict();
    let result = resolve_detailed(&dict, "時々", "ときとき");
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(
        result.segments,
        vec![
            seg('時', "とき", ReadingKind::Kun),
            seg('々', "とき", ReadingKind::Repetition),
        ]
    );
}

#[test]
fn test_backtracks_past_short_reading() {
    // か (on) is tried first, leaves ずや which 也 cannot read, so the
    // search comes back and takes かず (nanori).
    let dict = test_dict();
    let result = resolve_detailed(&dict, "和也", "かずや");
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(
        result.segments,
        vec![
            seg('和', "かず", ReadingKind::Nanori),
            seg('也', "や", ReadingKind::On),
        ]
    );
}

#[test]
fn test_kun_stem_in_longer_name() {
    let dict = test_dict();
    let result = resolve(&dict, "大翔", "ひろと");
    assert_eq!(
        result,
        vec![
            seg('大', "ひろ", ReadingKind::Nanori),
            seg('翔', "と", ReadingKind::Kun),
        ]
    );
}

#[test]
fn test_equal_length_keeps_kun_priority() {
    // 子 has こ as kun (twice, once with a marker) and as nanori.
    let dict = test_dict();
    let result = resolve(&dict, "子", "こ");
    assert_eq!(result, vec![seg('子', "こ", ReadingKind::Kun)]);
}

#[test]
fn test_kanji_followed_by_hiragana() {
    let dict = test_dict();
    let result = resolve(&dict, "美のり", "みのり");
    assert_eq!(
        result,
        vec![
            seg('美', "み", ReadingKind::On),
            seg('の', "の", ReadingKind::Hiragana),
            seg('り', "り", ReadingKind::Hiragana),
        ]
    );
}

#[test]
fn test_hiragana_name() {
    let dict = test_dict();
    let result = resolve_detailed(&dict, "さくら", "さくら");
    assert_eq!(result.strategy, Strategy::Exact);
    assert!(result
        .segments
        .iter()
        .all(|s| s.kind == ReadingKind::Hiragana));
    assert_eq!(joined_reading(&result.segments), "さくら");
}

#[test]
fn test_katakana_name() {
    let dict = test_dict();
    let result = resolve(&dict, "エマ", "えま");
    assert_eq!(
        result,
        vec![
            seg('エ', "え", ReadingKind::Katakana),
            seg('マ', "ま", ReadingKind::Katakana),
        ]
    );
}

#[test]
fn test_prolonged_sound_mark_matches_literally() {
    let dict = test_dict();
    let result = resolve_detailed(&dict, "ルーク", "るーく");
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(result.segments[0], seg('ル', "る", ReadingKind::Katakana));
    assert_eq!(result.segments[1], seg('ー', "ー", ReadingKind::Hiragana));
}

#[test]
fn test_long_name_is_still_searched() {
    // Every 和 first tries か and has to back up to かず.
    let dict = test_dict();
    let orth = "和也".repeat(17);
    let pron = "かずや".repeat(17);
    let result = resolve_detailed(&dict, &orth, &pron);
    assert_eq!(result.strategy, Strategy::Exact);
    assert_eq!(result.segments.len(), 34);
    for pair in result.segments.chunks(2) {
        assert_eq!(pair[0], seg('和', "かず", ReadingKind::Nanori));
        assert_eq!(pair[1], seg('也', "や", ReadingKind::On));
    }
    assert_eq!(joined_reading(&result.segments), pron);
}

#[test]
fn test_idempotent() {
    let dict = test_dict();
    for (orth, pron) in [("敦士", "あつし"), ("大空", "おおぞら"), ("鑫", "きん")] {
        assert_eq!(
            resolve_detailed(&dict, orth, pron),
            resolve_detailed(&dict, orth, pron)
        );
    }
}
