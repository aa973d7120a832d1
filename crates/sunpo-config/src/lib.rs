use serde::{Deserialize, Serialize};

use self::columns::ColumnConfig;
use self::files::FileConfig;

pub mod columns;
pub mod files;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub columns: ColumnConfig,
    pub files: FileConfig,

    /// Prompt for unknown terms after the first pass and re-translate.
    pub learning: bool,
    /// Fold full-width forms and fix spacing in translated columns.
    pub formatting: bool,
}

impl Config {
    pub fn new() -> Self {
        Config {
            columns: ColumnConfig::new(),
            files: FileConfig::new(),
            learning: true,
            formatting: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
