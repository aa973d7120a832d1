use indexmap::IndexSet;

use crate::dictionary::TermDictionary;
use crate::error::EngineError;
use crate::language::Script;
use crate::matcher::match_line;
use crate::render::{line_pieces, render_line};

/// Outcome of translating one cell.
///
/// A cell with unmatched terms is still a successful translation: every known
/// term is replaced and the unknown spans stay in place verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub rendered_text: String,
    /// Distinct unmatched terms, first-seen order.
    pub unmatched_terms: Vec<String>,
}

/// Translate one cell against a dictionary snapshot.
///
/// Lines are matched and rendered independently and rejoined with their
/// original terminators, so line-break style and count never change.
pub fn translate_cell<S: Script>(
    text: &str,
    dict: &TermDictionary,
    script: &S,
) -> Result<TranslationResult, EngineError> {
    let mut rendered = String::with_capacity(text.len());
    let mut unmatched: IndexSet<String> = IndexSet::new();

    for (content, terminator) in line_pieces(text) {
        let (edits, spans) = match_line(content, dict, script);
        rendered.push_str(&render_line(content, &edits)?);
        rendered.push_str(terminator);
        for span in spans {
            unmatched.insert(span.text);
        }
    }

    Ok(TranslationResult {
        rendered_text: rendered,
        unmatched_terms: unmatched.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryStore;
    use crate::test_util::Jp;

    fn base() -> TermDictionary {
        TermDictionary::from_pairs([
            ("総丈", "Total Length"),
            ("フード丈", "Hood Length"),
            ("丈", "Length"),
        ])
    }

    #[test]
    fn end_to_end_block() {
        let result = translate_cell("a）総丈：66.2cm\nフード丈：26.5cm", &base(), &Jp).unwrap();
        assert_eq!(
            result.rendered_text,
            "a）Total Length：66.2cm\nHood Length：26.5cm"
        );
        assert!(result.unmatched_terms.is_empty());
    }

    #[test]
    fn english_text_is_left_unchanged() {
        let text = "Total Length: 66.2cm\nHood Length: 26.5cm";
        let result = translate_cell(text, &base(), &Jp).unwrap();
        assert_eq!(result.rendered_text, text);
    }

    #[test]
    fn unknown_term_passes_through_and_is_reported() {
        let result = translate_cell("東丈：10cm", &base(), &Jp).unwrap();
        assert_eq!(result.rendered_text, "東丈：10cm");
        assert_eq!(result.unmatched_terms, ["東丈"]);
    }

    #[test]
    fn learning_updates_the_next_pass() {
        let mut store = DictionaryStore::new(base(), TermDictionary::new());
        let snapshot = store.learn("東丈", "East Length").unwrap();
        let result = translate_cell("東丈：10cm", snapshot.general(), &Jp).unwrap();
        assert_eq!(result.rendered_text, "East Length：10cm");
        assert!(result.unmatched_terms.is_empty());
    }

    #[test]
    fn line_break_count_round_trips() {
        let text = "総丈：1cm\r\n\r\n丈：2cm\n";
        let result = translate_cell(text, &base(), &Jp).unwrap();
        let breaks = |s: &str| s.matches('\n').count();
        assert_eq!(breaks(&result.rendered_text), breaks(text));
        assert_eq!(result.rendered_text, "Total Length：1cm\r\n\r\nLength：2cm\n");
    }
}
