use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use sunpo_core::TermDictionary;

/// Load the learned-translations overlay from disk.
///
/// A missing file is just an empty overlay. A malformed file is an error;
/// the caller decides whether to downgrade it to a warning.
pub fn load_learned(path: &Path) -> Result<TermDictionary> {
    if !path.exists() {
        return Ok(TermDictionary::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading learned translations from {}", path.display()))?;
    let map: IndexMap<String, String> = serde_json::from_str(&json)
        .with_context(|| format!("parsing learned translations in {}", path.display()))?;
    let dict = TermDictionary::from(map);
    tracing::info!("Loaded {} previously learned translations", dict.len());
    Ok(dict)
}

/// Persist the learned overlay, longest key first so the file reads
/// compound-before-part like the built-in table.
pub fn save_learned(path: &Path, learned: &TermDictionary) -> Result<()> {
    let mut entries: Vec<(&str, &str)> = learned.iter().collect();
    entries.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
    let map: IndexMap<&str, &str> = entries.into_iter().collect();

    let json = serde_json::to_string_pretty(&map)?;
    std::fs::write(path, json)
        .with_context(|| format!("writing learned translations to {}", path.display()))?;
    tracing::info!("Saved {} learned translations to {}", map.len(), path.display());
    Ok(())
}
