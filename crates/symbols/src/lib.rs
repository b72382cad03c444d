use std::collections::BTreeMap;

use glyph::{
    domain::{GlyphClass, SubGlyph, CONSONANT_MASK, VOWEL_MASK},
    error::TableError,
    protocol::SymbolEntry,
};

pub mod alphabet;
pub mod snapshot;

/// Stored in place of a blank definition so it stays visible as undefined.
pub const PLACEHOLDER: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Phonetic,
    Approximate,
}

impl Field {
    pub fn select(self, entry: &SymbolEntry) -> &str {
        match self {
            Field::Phonetic => &entry.phonetic,
            Field::Approximate => &entry.approximate,
        }
    }
}

/// Mapping from sub-glyph to its phonetic and approximate spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: BTreeMap<SubGlyph, SymbolEntry>,
}

impl SymbolTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table seeded from [`alphabet::BUILTIN`].
    pub fn builtin() -> Self {
        let entries = alphabet::BUILTIN
            .iter()
            .filter_map(|(key, phonetic, approximate)| {
                SubGlyph::from_raw(*key).map(|key| (key, SymbolEntry::new(*phonetic, *approximate)))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: SubGlyph) -> Option<&SymbolEntry> {
        self.entries.get(&key)
    }

    /// Unmapped keys resolve to `""`.
    pub fn lookup(&self, key: SubGlyph, field: Field) -> &str {
        self.entries
            .get(&key)
            .map(|entry| field.select(entry))
            .unwrap_or_default()
    }

    pub fn upsert(
        &mut self,
        key: SubGlyph,
        phonetic: &str,
        approximate: &str,
    ) -> Result<(), TableError> {
        if key.is_empty() {
            return Err(TableError::EmptyKey { class: key.class() });
        }
        self.entries.insert(
            key,
            SymbolEntry::new(or_placeholder(phonetic), or_placeholder(approximate)),
        );
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubGlyph, &SymbolEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    pub fn entries_matching<F>(&self, predicate: F) -> BTreeMap<SubGlyph, SymbolEntry>
    where
        F: Fn(SubGlyph) -> bool,
    {
        self.entries
            .iter()
            .filter(|(key, _)| predicate(**key))
            .map(|(key, entry)| (*key, entry.clone()))
            .collect()
    }

    pub fn vowel_entries(&self) -> BTreeMap<SubGlyph, SymbolEntry> {
        self.entries_matching(|key| key.bits() & VOWEL_MASK != 0)
    }

    pub fn consonant_entries(&self) -> BTreeMap<SubGlyph, SymbolEntry> {
        self.entries_matching(|key| key.bits() & CONSONANT_MASK != 0)
    }

    pub fn entries_of_class(&self, class: GlyphClass) -> BTreeMap<SubGlyph, SymbolEntry> {
        match class {
            GlyphClass::Vowel => self.vowel_entries(),
            GlyphClass::Consonant => self.consonant_entries(),
        }
    }

    /// Parses a serialized table without touching any live one.
    ///
    /// Key `0` is accepted and skipped: older exports carried the word
    /// separator as an entry, but the separator is structural here.
    pub fn from_snapshot(raw: &[u8]) -> Result<Self, TableError> {
        let parsed: BTreeMap<u16, SymbolEntry> = serde_json::from_slice(raw)?;
        let mut entries = BTreeMap::new();
        for (raw_key, entry) in parsed {
            if raw_key == 0 {
                continue;
            }
            let key = SubGlyph::from_raw(raw_key).ok_or(TableError::InvalidKey { key: raw_key })?;
            entries.insert(key, entry);
        }
        Ok(Self { entries })
    }

    /// Replaces every entry with the parsed snapshot. On error the table is
    /// left exactly as it was. Returns the new entry count.
    pub fn import_snapshot(&mut self, raw: &[u8]) -> Result<usize, TableError> {
        let replacement = Self::from_snapshot(raw)?;
        *self = replacement;
        Ok(self.len())
    }

    /// Pretty JSON keyed by the stringified sub-glyph bits, ascending.
    pub fn export_snapshot(&self) -> Result<String, TableError> {
        let keyed: BTreeMap<u16, &SymbolEntry> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.bits(), entry))
            .collect();
        Ok(serde_json::to_string_pretty(&keyed)?)
    }
}

/// What a reference display shows for a stored value.
pub fn display_value(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
