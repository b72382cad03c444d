use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use symbols::{snapshot, SymbolTable};

pub const CONFIG_FILE: &str = "tunic.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Snapshot loaded in place of the built-in alphabet.
    pub alphabet: Option<PathBuf>,
    pub export_path: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alphabet: None,
            export_path: PathBuf::from(snapshot::DEFAULT_FILE_NAME),
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string(CONFIG_FILE)
        .ok()
        .and_then(|raw| toml::from_str::<HashMap<String, String>>(&raw).ok())
        .unwrap_or_default();
    let env_cfg: HashMap<String, String> = std::env::vars().collect();
    merge_settings(&file_cfg, &env_cfg)
}

/// File values override defaults, environment values override both.
/// `APP__*` names win over `TUNIC_*` names.
pub fn merge_settings(
    file_cfg: &HashMap<String, String>,
    env_cfg: &HashMap<String, String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = file_cfg.get("alphabet") {
        settings.alphabet = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("export_path") {
        settings.export_path = PathBuf::from(v);
    }
    if let Some(v) = file_cfg.get("log") {
        settings.log_filter = v.clone();
    }

    for name in ["TUNIC_ALPHABET", "APP__ALPHABET"] {
        if let Some(v) = env_cfg.get(name) {
            settings.alphabet = Some(PathBuf::from(v));
        }
    }
    for name in ["TUNIC_EXPORT_PATH", "APP__EXPORT_PATH"] {
        if let Some(v) = env_cfg.get(name) {
            settings.export_path = PathBuf::from(v);
        }
    }
    for name in ["TUNIC_LOG", "APP__LOG"] {
        if let Some(v) = env_cfg.get(name) {
            settings.log_filter = v.clone();
        }
    }

    settings
}

/// The table a new session starts from.
pub fn initial_table(settings: &Settings) -> anyhow::Result<SymbolTable> {
    let Some(path) = &settings.alphabet else {
        return Ok(SymbolTable::builtin());
    };

    snapshot::load_table(path)
        .with_context(|| format!("failed to load alphabet '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
