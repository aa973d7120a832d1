use std::path::Path;

use indexmap::IndexMap;
use sunpo_core::TermDictionary;

/// Loads the care-label dictionary: a JSON object mapping Japanese care
/// phrases to English. The engine receives the result pre-built and never
/// touches the file itself.
pub struct CareLabelLoader;

impl CareLabelLoader {
    /// Load the embedded care-label data shipped with this crate.
    pub fn load_embedded() -> Result<TermDictionary, Box<dyn std::error::Error + Send + Sync>> {
        let json = include_str!("../data/care_labels.json");
        let dict = Self::from_json(json)?;
        tracing::info!("Loaded {} embedded care label translations", dict.len());
        Ok(dict)
    }

    /// Load care labels from a JSON file, e.g. a user-maintained override.
    pub fn load_from_file(
        path: &Path,
    ) -> Result<TermDictionary, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Loading care labels from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json)?;
        tracing::info!("Loaded {} care label translations from file", dict.len());
        Ok(dict)
    }

    pub fn from_json(json: &str) -> Result<TermDictionary, serde_json::Error> {
        let map: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(TermDictionary::from(map))
    }
}
