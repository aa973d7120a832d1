use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk locations of the user-maintained dictionaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Learned-translations JSON; read at startup, rewritten after learning.
    pub learned: PathBuf,
    /// Care-label JSON; the embedded data is used when this file is absent.
    pub care_labels: PathBuf,
}

impl FileConfig {
    pub fn new() -> Self {
        let learned = env::var("SUNPO_LEARNED_FILE")
            .unwrap_or_else(|_| "learned_translations.json".to_string());

        let care_labels =
            env::var("SUNPO_CARE_LABELS").unwrap_or_else(|_| "care_labels.json".to_string());

        FileConfig {
            learned: learned.into(),
            care_labels: care_labels.into(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}
