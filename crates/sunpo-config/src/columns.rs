use std::env;

use serde::{Deserialize, Serialize};

/// Which input columns carry which role. Zero-based; the CLI converts from
/// the 1-based numbers users type. The engine never guesses column layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column holding the Japanese dimension text.
    pub source: usize,
    /// Column holding the composite materials block, if any.
    pub materials: Option<usize>,
}

impl ColumnConfig {
    pub fn new() -> Self {
        let source = env::var("SUNPO_SOURCE_COL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let materials = env::var("SUNPO_MATERIALS_COL")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(1)); // column B default

        ColumnConfig { source, materials }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self::new()
    }
}
