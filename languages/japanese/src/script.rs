use sunpo_core::Script;

/// Japanese script classification for the matcher.
///
/// Hiragana, katakana (including the prolonged sound mark `ー`), and the
/// common CJK ideograph range count as term characters. Full-width
/// punctuation such as `：` and `）`, full-width digits, and everything Latin
/// are separators and never open an unmatched span.
pub struct JapaneseScript;

impl Script for JapaneseScript {
    fn is_term_char(&self, c: char) -> bool {
        matches!(c,
            '\u{3040}'..='\u{309F}'     // hiragana
            | '\u{30A0}'..='\u{30FF}'   // katakana
            | '\u{4E00}'..='\u{9FAF}')  // CJK ideographs
    }
}
