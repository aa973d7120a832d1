use crate::dictionary::TermDictionary;
use crate::language::Script;

/// One replacement over a line. `start`/`end` are byte offsets into the
/// original line, `end` exclusive, always on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Maximal run of script characters not covered by any dictionary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Unit suffixes that glue onto a numeric token. Longest first.
const UNIT_TOKENS: [&str; 3] = ["cm", "mm", "m"];

/// Scan `line` left to right and produce the replacement edits plus the
/// unmatched script spans.
///
/// At each position not already consumed: a numeric token (digits, optional
/// decimal point, optional unit suffix) is skipped whole before any key is
/// tested, so a key can never swallow part of a measurement; otherwise the
/// longest dictionary key starting here wins (ties: first inserted); failing
/// both, a script character opens an unmatched span that swallows the rest of
/// the script run. Keys are not retried inside an open span: an unknown
/// compound stays intact instead of being half-translated through a known
/// suffix. Everything else is passed over untouched.
pub fn match_line<S: Script>(
    line: &str,
    dict: &TermDictionary,
    script: &S,
) -> (Vec<MatchEdit>, Vec<UnmatchedSpan>) {
    let mut edits = Vec::new();
    let mut unmatched = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        if c.is_ascii_digit() {
            pos += numeric_token_len(rest);
            continue;
        }

        if let Some((key, replacement)) = longest_key_at(rest, dict) {
            edits.push(MatchEdit {
                start: pos,
                end: pos + key.len(),
                replacement: replacement.to_string(),
            });
            pos += key.len();
            continue;
        }

        if script.is_term_char(c) {
            let start = pos;
            pos += script_run_len(rest, script);
            unmatched.push(UnmatchedSpan {
                start,
                end: pos,
                text: line[start..pos].to_string(),
            });
        } else {
            pos += c.len_utf8();
        }
    }

    (edits, unmatched)
}

/// Length of the maximal script run at the head of `rest` (at least one
/// character when called on a script character).
fn script_run_len<S: Script>(rest: &str, script: &S) -> usize {
    rest.char_indices()
        .find(|(_, c)| !script.is_term_char(*c))
        .map_or(rest.len(), |(i, _)| i)
}

/// Length of the numeric token at the head of `rest`, zero if none.
/// A decimal point only counts when digits follow it, so "66." stays "66" + ".".
fn numeric_token_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    for unit in UNIT_TOKENS {
        if rest[i..].starts_with(unit) {
            i += unit.len();
            break;
        }
    }
    i
}

fn longest_key_at<'d>(rest: &str, dict: &'d TermDictionary) -> Option<(&'d str, &'d str)> {
    let mut best: Option<(&str, &str)> = None;
    for (key, replacement) in dict.iter() {
        if rest.starts_with(key) && best.is_none_or(|(b, _)| key.len() > b.len()) {
            best = Some((key, replacement));
        }
    }
    best
}
