use std::path::Path;

use anyhow::{Context, Result};
use sunpo_config::Config;
use sunpo_core::{
    DictionarySnapshot, DictionaryStore, MaterialsSegment, SplitRules, TermDictionary,
    collect_unknown_terms, split_materials, translate_cell,
};
use sunpo_lang_japanese::{COUNTRIES, CareLabelLoader, JapaneseScript, base_dictionary, format_output};

/// One translation pass over the whole sheet.
pub struct PassOutput {
    pub records: Vec<Vec<String>>,
    /// Distinct unmatched terms from dimension cells and Materials segments,
    /// first-seen order. Care and country segments never feed learning.
    pub unknown_terms: Vec<String>,
}

/// Build the dictionary store from the built-in table plus the on-disk
/// overlays. Missing or broken user files degrade with a warning; the base
/// dictionary always loads.
pub fn load_store(config: &Config) -> Result<DictionaryStore> {
    let care = if config.files.care_labels.exists() {
        match CareLabelLoader::load_from_file(&config.files.care_labels) {
            Ok(dict) => dict,
            Err(e) => {
                tracing::warn!(
                    "Could not load care labels from {}: {e}; using embedded data",
                    config.files.care_labels.display()
                );
                CareLabelLoader::load_embedded().map_err(anyhow::Error::from_boxed)?
            }
        }
    } else {
        CareLabelLoader::load_embedded().map_err(anyhow::Error::from_boxed)?
    };

    let learned = match sunpo_io::load_learned(&config.files.learned) {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!("Could not load learned translations: {e:#}");
            TermDictionary::new()
        }
    };

    Ok(DictionaryStore::new(base_dictionary(), care).with_learned(learned))
}

/// Translate every record against one dictionary snapshot.
///
/// Output layout follows the sheets this tool was built for: A=Japanese
/// dimensions, B=English dimensions, then C..G = Japanese materials, English
/// materials, Japanese care labels, English care labels, and country when
/// the row has a materials column. Rows without one stay two columns wide.
pub fn translate_pass(
    records: &[Vec<String>],
    snapshot: &DictionarySnapshot,
    config: &Config,
) -> Result<PassOutput> {
    let script = JapaneseScript;
    let rules = SplitRules {
        care: snapshot.care(),
        countries: &COUNTRIES,
    };

    let mut out_records = Vec::with_capacity(records.len());
    let mut learn_sources: Vec<String> = Vec::new();

    for (row_num, row) in records.iter().enumerate() {
        if row.is_empty() {
            out_records.push(vec![String::new()]);
            continue;
        }

        let dims_ja = row.get(config.columns.source).cloned().unwrap_or_default();
        let dims = translate_cell(&dims_ja, snapshot.general(), &script)
            .with_context(|| format!("translating dimensions in row {}", row_num + 1))?;
        learn_sources.push(dims_ja.clone());

        let mut out = vec![dims_ja, finish(dims.rendered_text, config)];

        if let Some(block) = config.columns.materials.and_then(|col| row.get(col)) {
            let mut materials_ja = String::new();
            let mut care_ja = String::new();
            let mut country = String::new();
            for segment in split_materials(block, &rules) {
                match segment {
                    MaterialsSegment::Materials(text) => materials_ja = text,
                    MaterialsSegment::CareInstructions(text) => care_ja = text,
                    MaterialsSegment::CountryOfOrigin(text) => country = text,
                }
            }
            let materials_ja = materials_ja.trim().to_string();
            let care_ja = care_ja.trim().to_string();

            let materials = translate_cell(&materials_ja, snapshot.general(), &script)
                .with_context(|| format!("translating materials in row {}", row_num + 1))?;
            let care = translate_cell(&care_ja, snapshot.care(), &script)
                .with_context(|| format!("translating care labels in row {}", row_num + 1))?;
            learn_sources.push(materials_ja.clone());

            out.push(materials_ja);
            out.push(finish(materials.rendered_text, config));
            out.push(care_ja);
            out.push(finish(care.rendered_text, config));
            out.push(country.trim().to_string());
        }

        tracing::debug!(row = row_num + 1, columns = out.len(), "translated row");
        out_records.push(out);
    }

    let unknown_terms = collect_unknown_terms(&learn_sources, snapshot.general(), &script);

    Ok(PassOutput {
        records: out_records,
        unknown_terms,
    })
}

/// Translate `input` into `output`, with an interactive learning pass in
/// between when unknown terms turned up and stdin is a terminal.
pub fn run(input: &Path, output: &Path, config: &Config, mut store: DictionaryStore) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading input file {}", input.display()))?;
    let records = sunpo_io::parse_records(&content)?;
    tracing::info!("Read {} rows from {}", records.len(), input.display());

    let snapshot = store.snapshot();
    let pass = translate_pass(&records, &snapshot, config)?;
    let mut final_records = pass.records;

    if config.learning && !pass.unknown_terms.is_empty() {
        if sunpo_io::stdin_is_interactive() {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let session =
                sunpo_io::run_session(&pass.unknown_terms, stdin.lock(), stdout.lock())?;
            if !session.is_empty() {
                let mut snapshot = store.snapshot();
                for (term, translation) in session.iter() {
                    snapshot = store.learn(term, translation)?;
                }
                sunpo_io::save_learned(&config.files.learned, store.learned())?;
                tracing::info!("Learned {} terms; re-translating", session.len());
                final_records = translate_pass(&records, &snapshot, config)?.records;
            }
        } else {
            tracing::warn!(
                "{} unknown terms found; run interactively to teach them",
                pass.unknown_terms.len()
            );
        }
    }

    let rendered = sunpo_io::write_records(final_records);
    std::fs::write(output, rendered)
        .with_context(|| format!("writing output file {}", output.display()))?;
    tracing::info!("Translation complete; output saved to {}", output.display());
    Ok(())
}

/// Dump the effective general dictionary (base plus learned overlay).
pub fn list_dictionary(store: &DictionaryStore) {
    let snapshot = store.snapshot();
    println!("Available translations ({}):", snapshot.general().len());
    for (term, translation) in snapshot.general().iter() {
        println!("  {term} -> {translation}");
    }
}

fn finish(text: String, config: &Config) -> String {
    if config.formatting {
        format_output(&text)
    } else {
        text
    }
}
