//! Character-level Unicode classification for Japanese names.

/// Iteration mark: repeats the reading of the preceding kanji.
pub const REPETITION_MARK: char = '々';

/// Prolonged sound mark. Shared by both kana blocks; names spell it the same
/// way in orthography and pronunciation.
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Distance between a katakana codepoint and its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in names or
/// dictionary readings, so the block-level check is kept for clarity.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Map a katakana character to its hiragana counterpart.
///
/// Only ァ..ヶ (U+30A1..U+30F6) and the iteration marks ヽヾ have one.
/// Everything else, the prolonged sound mark ー included, comes back unchanged.
pub fn katakana_to_hiragana(c: char) -> char {
    let convertible = ('\u{30A1}'..='\u{30F6}').contains(&c) || c == 'ヽ' || c == 'ヾ';
    if convertible {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Convert every katakana character in `s` to hiragana.
/// Non-katakana characters are passed through unchanged.
pub fn katakana_to_hiragana_str(s: &str) -> String {
    s.chars().map(katakana_to_hiragana).collect()
}

/// Voiced counterpart of a single kana, if it has one.
fn voiced(c: char) -> Option<char> {
    let v = match c {
        'か' => 'が',
        'き' => 'ぎ',
        'く' => 'ぐ',
        'け' => 'げ',
        'こ' => 'ご',
        'さ' => 'ざ',
        'し' => 'じ',
        'す' => 'ず',
        'せ' => 'ぜ',
        'そ' => 'ぞ',
        'た' => 'だ',
        'ち' => 'ぢ',
        'つ' => 'づ',
        'て' => 'で',
        'と' => 'ど',
        'は' | 'ぱ' => 'ば',
        'ひ' | 'ぴ' => 'び',
        'ふ' | 'ぷ' => 'ぶ',
        'へ' | 'ぺ' => 'べ',
        'ほ' | 'ぽ' => 'ぼ',
        _ => return None,
    };
    Some(v)
}

/// Voiced form of a one-kana reading (`す` → `ず`, `ぽ` → `ぼ`).
///
/// The lookup is on the whole reading: anything longer than one kana, or a
/// kana without a voiced form, is returned unchanged.
pub fn add_voicing(reading: &str) -> String {
    let mut chars = reading.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => voiced(c).map_or_else(|| reading.to_string(), String::from),
        _ => reading.to_string(),
    }
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which shows up in names like "るーく".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == PROLONGED_SOUND_MARK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("あつし"));
        assert!(is_hiragana_reading("す"));
        assert!(is_hiragana_reading("るーく"));
        assert!(!is_hiragana_reading("アツシ"));
        assert!(!is_hiragana_reading("abc"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana('ア'), 'あ');
        assert_eq!(katakana_to_hiragana('ン'), 'ん');
        assert_eq!(katakana_to_hiragana('ヴ'), 'ゔ');
        assert_eq!(katakana_to_hiragana('ヽ'), 'ゝ');
        // No hiragana counterpart
        assert_eq!(katakana_to_hiragana('ー'), 'ー');
        assert_eq!(katakana_to_hiragana('ヷ'), 'ヷ');
        // Not katakana at all
        assert_eq!(katakana_to_hiragana('あ'), 'あ');
        assert_eq!(katakana_to_hiragana('漢'), '漢');
    }

    #[test]
    fn test_katakana_to_hiragana_str() {
        assert_eq!(katakana_to_hiragana_str("ジュ"), "じゅ");
        assert_eq!(katakana_to_hiragana_str("ルーク"), "るーく");
        assert_eq!(katakana_to_hiragana_str(""), "");
        assert_eq!(katakana_to_hiragana_str("abc"), "abc");
    }

    #[test]
    fn test_add_voicing() {
        assert_eq!(add_voicing("す"), "ず");
        assert_eq!(add_voicing("こ"), "ご");
        assert_eq!(add_voicing("か"), "が");
        assert_eq!(add_voicing("ぽ"), "ぼ");
        assert_eq!(add_voicing("み"), "み");
        // Multi-kana readings are never voiced
        assert_eq!(add_voicing("とき"), "とき");
        assert_eq!(add_voicing("ひと"), "ひと");
        assert_eq!(add_voicing("ず"), "ず");
        assert_eq!(add_voicing(""), "");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana(PROLONGED_SOUND_MARK));
        assert!(is_hiragana_reading("ー"));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('翔'));
        assert!(!is_kanji('あ'));
        assert!(!is_kanji(REPETITION_MARK));
        assert!(!is_hiragana(REPETITION_MARK));
        assert!(!is_katakana(REPETITION_MARK));
    }
}
