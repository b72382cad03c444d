use super::*;

use glyph::{
    domain::{Glyph, Stroke},
    error::ErrorCode,
};

fn m_key() -> SubGlyph {
    SubGlyph::consonant(Stroke::C4.bit() | Stroke::C6.bit())
}

fn i_key() -> SubGlyph {
    SubGlyph::vowel(Stroke::V4.bit() | Stroke::V5.bit())
}

#[test]
fn builtin_table_resolves_seed_entries() {
    let table = SymbolTable::builtin();
    assert_eq!(table.len(), alphabet::BUILTIN.len());
    assert_eq!(table.lookup(m_key(), Field::Phonetic), "m");
    assert_eq!(table.lookup(i_key(), Field::Phonetic), "ɪ");
    assert_eq!(table.lookup(i_key(), Field::Approximate), "i");

    let ng = SubGlyph::consonant(0b0111_1110_0000);
    assert_eq!(table.lookup(ng, Field::Phonetic), "ŋ");
    assert_eq!(table.lookup(ng, Field::Approximate), "ng");
}

#[test]
fn lookup_miss_is_empty_string() {
    let table = SymbolTable::builtin();
    assert_eq!(table.lookup(SubGlyph::vowel(Stroke::V3.bit()), Field::Phonetic), "");
    assert_eq!(table.lookup(SubGlyph::vowel(0), Field::Approximate), "");
    assert_eq!(SymbolTable::empty().lookup(m_key(), Field::Phonetic), "");
}

#[test]
fn lookups_do_not_cross_namespaces() {
    let mut table = SymbolTable::empty();
    table.upsert(i_key(), "ɪ", "i").expect("upsert");

    let same_bits_as_consonant = SubGlyph::consonant(i_key().bits());
    assert!(same_bits_as_consonant.is_empty());
    assert_eq!(table.lookup(same_bits_as_consonant, Field::Phonetic), "");
}

#[test]
fn upsert_overwrites_existing_entry() {
    let mut table = SymbolTable::builtin();
    table.upsert(m_key(), "mm", "emm").expect("upsert");
    assert_eq!(table.lookup(m_key(), Field::Phonetic), "mm");
    assert_eq!(table.lookup(m_key(), Field::Approximate), "emm");
    assert_eq!(table.len(), alphabet::BUILTIN.len());
}

#[test]
fn blank_upsert_stores_placeholder() {
    let mut table = SymbolTable::empty();
    let key = SubGlyph::vowel(Stroke::V3.bit());
    table.upsert(key, "", "   ").expect("upsert");
    assert_eq!(table.lookup(key, Field::Phonetic), "?");
    assert_eq!(table.lookup(key, Field::Approximate), "?");

    table.upsert(key, "e", "").expect("upsert");
    assert_eq!(table.lookup(key, Field::Phonetic), "e");
    assert_eq!(table.lookup(key, Field::Approximate), "?");
}

#[test]
fn upsert_rejects_empty_key() {
    let mut table = SymbolTable::builtin();
    let before = table.clone();
    let err = table
        .upsert(Glyph(Stroke::C1.bit()).vowel_component(), "x", "x")
        .expect_err("empty vowel key");
    assert_eq!(err.code(), ErrorCode::EmptyKey);
    assert_eq!(table, before);
}

#[test]
fn export_then_import_preserves_every_lookup() {
    let mut original = SymbolTable::builtin();
    original.upsert(SubGlyph::vowel(Stroke::V3.bit()), "", "").expect("upsert");
    let snapshot = original.export_snapshot().expect("export");

    let mut restored = SymbolTable::empty();
    let count = restored.import_snapshot(snapshot.as_bytes()).expect("import");
    assert_eq!(count, original.len());

    for (key, _) in original.iter() {
        for field in [Field::Phonetic, Field::Approximate] {
            assert_eq!(restored.lookup(key, field), original.lookup(key, field));
        }
    }
}

#[test]
fn export_is_pretty_and_numerically_ordered() {
    let mut table = SymbolTable::empty();
    table.upsert(m_key(), "m", "m").expect("upsert");
    table.upsert(SubGlyph::vowel(Stroke::V5.bit()), "aʊ", "ow").expect("upsert");
    table.upsert(SubGlyph::vowel(Stroke::V1.bit()), "ɐɪ", "ei").expect("upsert");

    let snapshot = table.export_snapshot().expect("export");
    let expected = r#"{
  "1": {
    "phonetic": "ɐɪ",
    "inglishe": "ei"
  },
  "16": {
    "phonetic": "aʊ",
    "inglishe": "ow"
  },
  "1280": {
    "phonetic": "m",
    "inglishe": "m"
  }
}"#;
    assert_eq!(snapshot, expected);
    assert_eq!(table.export_snapshot().expect("export again"), snapshot);
}

#[test]
fn malformed_import_leaves_table_untouched() {
    let mut table = SymbolTable::builtin();
    let before = table.export_snapshot().expect("export");

    let payloads: [&[u8]; 6] = [
        b"not json at all",
        b"[1, 2, 3]",
        br#"{"1280": {"phonetic": "m"}}"#,
        br#"{"1280": {"phonetic": "m", "inglishe": "m", "tone": 3}}"#,
        br#"{"m": {"phonetic": "m", "inglishe": "m"}}"#,
        br#"{"1280": {"phonetic": "m", "inglishe": "m"}"#,
    ];
    for payload in payloads {
        let err = table.import_snapshot(payload).expect_err("malformed payload");
        assert_eq!(err.code(), ErrorCode::Parse);
        assert_eq!(table.export_snapshot().expect("export"), before);
    }
}

#[test]
fn import_rejects_mixed_and_out_of_range_keys() {
    let mut table = SymbolTable::builtin();
    let before = table.clone();

    let mixed = br#"{"24": {"phonetic": "I", "inglishe": "i"}, "257": {"phonetic": "?", "inglishe": "?"}}"#;
    let err = table.import_snapshot(mixed).expect_err("mixed key");
    assert_eq!(err.code(), ErrorCode::InvalidKey);

    let order_flag = br#"{"2048": {"phonetic": "x", "inglishe": "x"}}"#;
    let err = table.import_snapshot(order_flag).expect_err("order flag key");
    assert_eq!(err.code(), ErrorCode::InvalidKey);

    assert_eq!(table, before);
}

#[test]
fn import_skips_separator_key_from_legacy_exports() {
    let mut table = SymbolTable::builtin();
    let legacy = br#"{
  "0": {"phonetic": " ", "inglishe": " "},
  "1280": {"phonetic": "m", "inglishe": "m"}
}"#;
    assert_eq!(table.import_snapshot(legacy).expect("import"), 1);
    assert_eq!(table.lookup(m_key(), Field::Phonetic), "m");
    assert_eq!(table.lookup(SubGlyph::vowel(0), Field::Phonetic), "");
    assert_eq!(table.lookup(SubGlyph::consonant(0), Field::Phonetic), "");
}

#[test]
fn import_replaces_rather_than_merges() {
    let mut table = SymbolTable::builtin();
    table
        .import_snapshot(br#"{"24": {"phonetic": "I", "inglishe": "ih"}}"#)
        .expect("import");
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(m_key(), Field::Phonetic), "");
    assert_eq!(table.lookup(i_key(), Field::Approximate), "ih");
}

#[test]
fn class_views_split_the_table() {
    let table = SymbolTable::builtin();
    let vowels = table.vowel_entries();
    let consonants = table.consonant_entries();

    assert_eq!(vowels.len() + consonants.len(), table.len());
    assert!(vowels.keys().all(|key| key.class() == GlyphClass::Vowel));
    assert!(consonants.keys().all(|key| key.class() == GlyphClass::Consonant));
    assert_eq!(consonants.len(), 24);
    assert_eq!(table.entries_of_class(GlyphClass::Vowel), vowels);
}

#[test]
fn entries_matching_filters_by_predicate() {
    let table = SymbolTable::builtin();
    let with_v1 = table.entries_matching(|key| key.bits() & Stroke::V1.bit() != 0);
    assert!(!with_v1.is_empty());
    assert!(with_v1.contains_key(&SubGlyph::vowel(Stroke::V1.bit())));
    assert!(!with_v1.contains_key(&i_key()));
}

#[test]
fn display_value_marks_blank_entries() {
    assert_eq!(display_value(""), "?");
    assert_eq!(display_value("ŋ"), "ŋ");
}
