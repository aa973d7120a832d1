use sunpo_config::Config;
use sunpo_core::{DictionaryStore, TermDictionary};
use sunpo_lang_japanese::base_dictionary;

use crate::pipeline::translate_pass;

fn test_config() -> Config {
    let mut config = Config::new();
    config.columns.source = 0;
    config.columns.materials = Some(1);
    config.learning = false;
    config.formatting = false;
    config
}

fn care_dict() -> TermDictionary {
    TermDictionary::from_pairs([
        ("洗濯機で洗えます", "Machine washable"),
        ("漂白剤不可", "Do not bleach"),
    ])
}

fn store() -> DictionaryStore {
    DictionaryStore::new(base_dictionary(), care_dict())
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn full_row_produces_seven_columns() {
    let records = vec![row(&[
        "a）総丈：66.2cm\nフード丈：26.5cm",
        "綿100%\n※洗濯機で洗えます\n中国",
    ])];
    let pass = translate_pass(&records, &store().snapshot(), &test_config()).unwrap();

    assert_eq!(pass.records.len(), 1);
    let out = &pass.records[0];
    assert_eq!(out.len(), 7);
    assert_eq!(out[0], "a）総丈：66.2cm\nフード丈：26.5cm");
    assert_eq!(out[1], "a）Total Length：66.2cm\nHood Length：26.5cm");
    assert_eq!(out[2], "綿100%");
    assert_eq!(out[3], "Cotton100%");
    assert_eq!(out[4], "※洗濯機で洗えます");
    assert_eq!(out[5], "※Machine washable");
    assert_eq!(out[6], "中国");
    assert!(pass.unknown_terms.is_empty());
}

#[test]
fn row_without_materials_column_stays_two_wide() {
    let records = vec![row(&["総丈：90cm"])];
    let pass = translate_pass(&records, &store().snapshot(), &test_config()).unwrap();
    assert_eq!(pass.records[0], row(&["総丈：90cm", "Total Length：90cm"]));
}

#[test]
fn formatting_folds_translated_columns_only() {
    let mut config = test_config();
    config.formatting = true;
    let records = vec![row(&["a）総丈：66.2cm", "綿100%"])];
    let pass = translate_pass(&records, &store().snapshot(), &config).unwrap();
    let out = &pass.records[0];
    // Japanese columns keep their full-width punctuation.
    assert_eq!(out[0], "a）総丈：66.2cm");
    assert_eq!(out[1], "a) Total Length: 66.2cm");
    assert_eq!(out[2], "綿100%");
    assert_eq!(out[3], "Cotton 100%");
}

#[test]
fn every_number_survives_translation() {
    let records = vec![row(&[
        "総丈：66.2cm\n肩幅：41cm\n袖丈：58.5cm",
        "綿95%\nポリウレタン5%\n※漂白剤不可\n日本",
    ])];
    let pass = translate_pass(&records, &store().snapshot(), &test_config()).unwrap();
    let out = &pass.records[0];
    for number in ["66.2cm", "41cm", "58.5cm"] {
        assert!(out[1].contains(number), "{number} missing from {}", out[1]);
    }
    for number in ["95%", "5%"] {
        assert!(out[3].contains(number), "{number} missing from {}", out[3]);
    }
}

#[test]
fn unknown_terms_come_from_dimensions_and_materials_only() {
    let records = vec![row(&[
        "東丈：10cm",
        "謎繊維100%\n※やさしく洗ってください\n中国",
    ])];
    let pass = translate_pass(&records, &store().snapshot(), &test_config()).unwrap();

    // Unknown care-instruction text is left for the care dictionary, not the
    // learning prompt.
    assert_eq!(pass.unknown_terms, ["東丈", "謎繊維"]);
    let out = &pass.records[0];
    assert_eq!(out[1], "東丈：10cm");
}

#[test]
fn learning_fixes_the_second_pass() {
    let records = vec![row(&["東丈：10cm"])];
    let config = test_config();
    let mut store = store();

    let first = translate_pass(&records, &store.snapshot(), &config).unwrap();
    assert_eq!(first.unknown_terms, ["東丈"]);
    assert_eq!(first.records[0][1], "東丈：10cm");

    let snapshot = store.learn("東丈", "East Length").unwrap();
    let second = translate_pass(&records, &snapshot, &config).unwrap();
    assert!(second.unknown_terms.is_empty());
    assert_eq!(second.records[0][1], "East Length：10cm");
}

#[test]
fn empty_rows_pass_through() {
    let records = vec![Vec::new(), row(&["総丈：1cm"])];
    let pass = translate_pass(&records, &store().snapshot(), &test_config()).unwrap();
    assert_eq!(pass.records[0], vec![String::new()]);
    assert_eq!(pass.records[1][1], "Total Length：1cm");
}
