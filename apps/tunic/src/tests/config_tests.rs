use super::*;

use std::collections::HashMap;

fn cfg(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_without_file_or_env() {
    let settings = merge_settings(&HashMap::new(), &HashMap::new());
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.export_path, PathBuf::from("dictionnaire.json"));
}

#[test]
fn file_overrides_defaults() {
    let settings = merge_settings(
        &cfg(&[("alphabet", "custom.json"), ("log", "debug")]),
        &HashMap::new(),
    );
    assert_eq!(settings.alphabet, Some(PathBuf::from("custom.json")));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let settings = merge_settings(
        &cfg(&[("export_path", "from_file.json")]),
        &cfg(&[
            ("TUNIC_EXPORT_PATH", "from_env.json"),
            ("APP__EXPORT_PATH", "from_app.json"),
            ("TUNIC_LOG", "warn"),
        ]),
    );
    assert_eq!(settings.export_path, PathBuf::from("from_app.json"));
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn initial_table_defaults_to_builtin() {
    let table = initial_table(&Settings::default()).expect("table");
    assert_eq!(table, SymbolTable::builtin());
}

#[test]
fn initial_table_loads_configured_alphabet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("alphabet.json");
    fs::write(&path, r#"{"1280": {"phonetic": "m", "inglishe": "m"}}"#).expect("write");

    let settings = Settings {
        alphabet: Some(path),
        ..Settings::default()
    };
    let table = initial_table(&settings).expect("table");
    assert_eq!(table.len(), 1);
}

#[test]
fn initial_table_rejects_non_json_alphabet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("alphabet.txt");
    fs::write(&path, "{}").expect("write");

    let settings = Settings {
        alphabet: Some(path),
        ..Settings::default()
    };
    let err = initial_table(&settings).expect_err("text file");
    assert!(err.to_string().contains("failed to load alphabet"));
}
