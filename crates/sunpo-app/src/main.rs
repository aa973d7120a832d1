use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sunpo_config::Config;

mod logging;
mod pipeline;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "sunpo",
    version,
    about = "Translate Japanese garment measurements and care labels in CSV files"
)]
struct Cli {
    /// Input CSV file
    input: Option<PathBuf>,

    /// Output CSV file (defaults to <input>_translated.csv)
    output: Option<PathBuf>,

    /// Skip the interactive learning pass
    #[arg(long = "no-learn")]
    no_learn: bool,

    /// 1-based column holding the Japanese dimension text
    #[arg(long = "source-col", default_value_t = 1)]
    source_col: usize,

    /// 1-based column holding the composite materials block
    #[arg(long = "materials-col", default_value_t = 2)]
    materials_col: usize,

    /// Learned-translations JSON file
    #[arg(long = "learned-file")]
    learned_file: Option<PathBuf>,

    /// Care-label JSON file (embedded data when absent)
    #[arg(long = "care-labels")]
    care_labels: Option<PathBuf>,

    /// Leave full-width punctuation and spacing as-is in translated columns
    #[arg(long = "no-format")]
    no_format: bool,

    /// Print the effective dictionary and exit
    #[arg(long = "list")]
    list: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut config = Config::new();
    if let Some(path) = cli.learned_file {
        config.files.learned = path;
    }
    if let Some(path) = cli.care_labels {
        config.files.care_labels = path;
    }
    config.columns.source = cli.source_col.saturating_sub(1);
    config.columns.materials = Some(cli.materials_col.saturating_sub(1));
    config.learning = !cli.no_learn;
    config.formatting = !cli.no_format;

    let store = pipeline::load_store(&config)?;

    if cli.list {
        pipeline::list_dictionary(&store);
        return Ok(());
    }

    let input = cli.input.context("no input file given; see --help")?;
    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&input));

    if !config.learning {
        tracing::info!("Learning disabled; using existing translations only");
    }
    pipeline::run(&input, &output, &config, store)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_translated.csv"))
}
