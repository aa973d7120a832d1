use indexmap::IndexSet;

use crate::dictionary::TermDictionary;
use crate::language::Script;
use crate::matcher::match_line;
use crate::render::line_pieces;

/// Gather the distinct unmatched terms across many cells.
///
/// Runs the matcher over every line of every cell, dedups by exact text, and
/// keeps first-seen order so the learning prompt is deterministic. Spans with
/// no script character are dropped.
pub fn collect_unknown_terms<I, T, S>(cells: I, dict: &TermDictionary, script: &S) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    S: Script,
{
    let mut seen: IndexSet<String> = IndexSet::new();
    for cell in cells {
        for (content, _) in line_pieces(cell.as_ref()) {
            let (_, unmatched) = match_line(content, dict, script);
            for span in unmatched {
                if span.text.chars().any(|c| script.is_term_char(c)) {
                    seen.insert(span.text);
                }
            }
        }
    }
    seen.into_iter().collect()
}
