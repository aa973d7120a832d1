use crate::language::Script;

/// Japanese-script classifier for engine tests. The real implementation
/// lives in the language crate; the ranges here mirror it.
pub(crate) struct Jp;

impl Script for Jp {
    fn is_term_char(&self, c: char) -> bool {
        matches!(c,
            '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
    }
}
