use crate::dictionary::TermDictionary;
use crate::render::line_pieces;

/// One segment of a composite materials cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialsSegment {
    Materials(String),
    CareInstructions(String),
    CountryOfOrigin(String),
}

impl MaterialsSegment {
    pub fn text(&self) -> &str {
        match self {
            Self::Materials(text) | Self::CareInstructions(text) | Self::CountryOfOrigin(text) => {
                text
            }
        }
    }
}

/// Structural cues the splitter looks for.
pub struct SplitRules<'a> {
    /// Care-label dictionary; a line starting with one of its keys opens the
    /// care region.
    pub care: &'a TermDictionary,
    /// Country-name tokens that close the care region.
    pub countries: &'a [&'a str],
}

/// Instruction lines conventionally start with this symbol.
const CARE_MARKER: char = '※';

/// Origin labels that may prefix a country line.
const ORIGIN_LABELS: [&str; 2] = ["原産国：", "原産国:"];

#[derive(Clone, Copy)]
enum SplitState {
    Materials,
    Care,
    Country,
}

/// Partition a materials block into Materials / CareInstructions /
/// CountryOfOrigin segments.
///
/// Single forward pass, no backtracking: everything before the first care
/// marker is Materials; the care region runs until a country token; the rest
/// is CountryOfOrigin. Absent markers degrade to fewer segments, worst case
/// one Materials segment holding the whole block. Concatenating the returned
/// segments in order always reproduces `block` exactly.
pub fn split_materials(block: &str, rules: &SplitRules<'_>) -> Vec<MaterialsSegment> {
    let mut materials = String::new();
    let mut care = String::new();
    let mut country = String::new();
    let mut state = SplitState::Materials;

    for (content, terminator) in line_pieces(block) {
        let trimmed = content.trim();
        state = match state {
            SplitState::Materials if is_care_marker(trimmed, rules) => SplitState::Care,
            SplitState::Care if is_country_token(trimmed, rules) => SplitState::Country,
            other => other,
        };
        let bucket = match state {
            SplitState::Materials => &mut materials,
            SplitState::Care => &mut care,
            SplitState::Country => &mut country,
        };
        bucket.push_str(content);
        bucket.push_str(terminator);
    }

    let mut segments = Vec::new();
    if !materials.is_empty() {
        segments.push(MaterialsSegment::Materials(materials));
    }
    if !care.is_empty() {
        segments.push(MaterialsSegment::CareInstructions(care));
    }
    if !country.is_empty() {
        segments.push(MaterialsSegment::CountryOfOrigin(country));
    }
    segments
}

fn is_care_marker(trimmed: &str, rules: &SplitRules<'_>) -> bool {
    trimmed.starts_with(CARE_MARKER)
        || rules.care.iter().any(|(key, _)| trimmed.starts_with(key))
}

fn is_country_token(trimmed: &str, rules: &SplitRules<'_>) -> bool {
    let name = ORIGIN_LABELS
        .iter()
        .find_map(|label| trimmed.strip_prefix(label))
        .unwrap_or(trimmed)
        .trim();
    rules.countries.iter().any(|country| {
        name == *country
            || name
                .strip_suffix('製')
                .is_some_and(|stripped| stripped.trim() == *country)
    })
}
