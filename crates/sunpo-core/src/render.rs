use crate::error::EngineError;
use crate::matcher::MatchEdit;

/// Apply non-overlapping edits to one line.
///
/// Everything outside the edit spans is copied byte-for-byte. Edits must be
/// sorted ascending, non-overlapping, in bounds, and on `char` boundaries;
/// anything else fails with [`EngineError::Overlap`] and the cell must not
/// be emitted.
pub fn render_line(line: &str, edits: &[MatchEdit]) -> Result<String, EngineError> {
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.start < cursor
            || edit.end < edit.start
            || edit.end > line.len()
            || !line.is_char_boundary(edit.start)
            || !line.is_char_boundary(edit.end)
        {
            return Err(EngineError::Overlap { at: edit.start });
        }
        out.push_str(&line[cursor..edit.start]);
        out.push_str(&edit.replacement);
        cursor = edit.end;
    }
    out.push_str(&line[cursor..]);
    Ok(out)
}

/// Split `text` into `(content, terminator)` pieces, where the terminator is
/// `"\n"`, `"\r\n"`, or `""` for the final piece. Concatenating all pieces in
/// order reproduces `text` exactly.
pub(crate) fn line_pieces(text: &str) -> Vec<(&str, &str)> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find('\n') {
            Some(i) => {
                let piece = if i > 0 && rest.as_bytes()[i - 1] == b'\r' {
                    (&rest[..i - 1], &rest[i - 1..=i])
                } else {
                    (&rest[..i], &rest[i..=i])
                };
                pieces.push(piece);
                rest = &rest[i + 1..];
            }
            None => {
                pieces.push((rest, ""));
                rest = "";
            }
        }
    }
    pieces
}
