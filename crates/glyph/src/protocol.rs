use serde::{Deserialize, Serialize};

use crate::{
    domain::{Glyph, Stroke},
    error::ErrorReport,
};

/// One value of the serialized symbol table: `{"phonetic": .., "inglishe": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolEntry {
    pub phonetic: String,
    #[serde(rename = "inglishe")]
    pub approximate: String,
}

impl SymbolEntry {
    pub fn new(phonetic: impl Into<String>, approximate: impl Into<String>) -> Self {
        Self {
            phonetic: phonetic.into(),
            approximate: approximate.into(),
        }
    }
}

/// Discrete input actions accepted by an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    ToggleStroke {
        stroke: Stroke,
    },
    CommitPending,
    AppendSpace,
    RemoveLast,
    ClearPending,
    EditVowelEntry {
        phonetic: String,
        approximate: String,
    },
    EditConsonantEntry {
        phonetic: String,
        approximate: String,
    },
    ImportTable {
        raw: Vec<u8>,
    },
    ExportTable,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleStroke { .. } => "toggle_stroke",
            Action::CommitPending => "commit_pending",
            Action::AppendSpace => "append_space",
            Action::RemoveLast => "remove_last",
            Action::ClearPending => "clear_pending",
            Action::EditVowelEntry { .. } => "edit_vowel_entry",
            Action::EditConsonantEntry { .. } => "edit_consonant_entry",
            Action::ImportTable { .. } => "import_table",
            Action::ExportTable => "export_table",
        }
    }
}

/// Everything a display needs after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub pending: Glyph,
    pub preview_phonetic: String,
    pub preview_approximate: String,
    pub phonetic: String,
    pub approximate: String,
    pub markup: String,
    /// Phonetic text with one space per separator glyph.
    pub spaced_phonetic: String,
    pub spaced_approximate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionEvent {
    ViewsUpdated { view: SessionView },
    TableExported { snapshot: String },
    Error(ErrorReport),
}
