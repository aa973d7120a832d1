/// Script classification for a source language.
///
/// The matcher itself is language-agnostic: a `Script` implementation decides
/// which characters are candidates for translation when no dictionary key
/// matches at a position. Digits, Latin letters, punctuation, and whitespace
/// are expected to answer `false`.
pub trait Script: Send + Sync {
    /// True if `c` belongs to the language's translatable script.
    fn is_term_char(&self, c: char) -> bool;
}
