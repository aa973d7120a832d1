use unicode_normalization::UnicodeNormalization;

/// Post-translation output formatting for translated columns.
///
/// The engine preserves every untouched character; label output still reads
/// better with half-width punctuation and a little spacing, so the CLI runs
/// this over translated columns only. Japanese source columns are never
/// formatted.
pub fn format_output(text: &str) -> String {
    space_after_materials(&space_after_punctuation(&fold_fullwidth(text)))
}

/// Fold full-width ASCII-compatible forms (`：`→`:`, `（`→`(`, `０`→`0`,
/// `Ａ`→`A`, …) to half-width via NFKC, plus the label conventions
/// `、`→`,` and `～`→` to `.
pub fn fold_fullwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{3001}' => out.push(','),        // 、
            '\u{FF5E}' => out.push_str(" to "), // ～ as a range dash
            '\u{FF01}'..='\u{FF5D}' => out.extend(c.nfkc()),
            _ => out.push(c),
        }
    }
    out
}

/// Insert a space after `)`, `,`, and `:` when the next character is not
/// already whitespace.
fn space_after_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if matches!(c, ')' | ',' | ':') && chars.peek().is_some_and(|next| !next.is_whitespace()) {
            out.push(' ');
        }
    }
    out
}

/// Insert a space between a translated material word and a following
/// percentage or count ("Cotton100%" → "Cotton 100%").
fn space_after_materials(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c.is_ascii_digit() && prev.is_some_and(|p| p.is_ascii_alphabetic()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_fullwidth_punctuation_and_digits() {
        assert_eq!(fold_fullwidth("ａ）Ｂ：１０"), "a)B:10");
        assert_eq!(fold_fullwidth("６６～７０"), "66 to 70");
        assert_eq!(fold_fullwidth("綿、ウール"), "綿,ウール");
    }

    #[test]
    fn leaves_halfwidth_and_script_text_alone() {
        assert_eq!(fold_fullwidth("Total Length: 66.2cm"), "Total Length: 66.2cm");
        assert_eq!(fold_fullwidth("綿"), "綿");
    }

    #[test]
    fn formats_translated_measurement_line() {
        assert_eq!(
            format_output("a）Total Length：66.2cm"),
            "a) Total Length: 66.2cm"
        );
    }

    #[test]
    fn spaces_material_percentages() {
        assert_eq!(format_output("Cotton100%"), "Cotton 100%");
        assert_eq!(format_output("Cotton 100%"), "Cotton 100%");
    }

    #[test]
    fn no_double_spacing_after_punctuation() {
        assert_eq!(format_output("a) b, c: d"), "a) b, c: d");
    }
}
