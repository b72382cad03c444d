use glyph::{
    domain::Stroke,
    protocol::{Action, SessionEvent},
};
use symbols::SymbolTable;
use transcoder::Session;

fn toggle(session: &mut Session, strokes: &[Stroke]) {
    for stroke in strokes {
        session.apply(Action::ToggleStroke { stroke: *stroke });
    }
}

#[test]
fn typed_sentence_survives_table_round_trip() {
    let mut session = Session::default();

    // "mɪ"
    toggle(&mut session, &[Stroke::C4, Stroke::C6, Stroke::V4, Stroke::V5]);
    session.apply(Action::CommitPending);
    session.apply(Action::ClearPending);
    session.apply(Action::AppendSpace);

    // "ɪn", vowel first
    toggle(
        &mut session,
        &[Stroke::C1, Stroke::C4, Stroke::C6, Stroke::V4, Stroke::V5, Stroke::Order],
    );
    session.apply(Action::CommitPending);

    assert_eq!(session.rendered().phonetic, "mɪɪn");
    assert_eq!(session.rendered().approximate, "miin");
    let view = session.view();
    assert_eq!(view.spaced_phonetic, "mɪ ɪn");
    assert_eq!(view.spaced_approximate, "mi in");

    let SessionEvent::TableExported { snapshot } = session.apply(Action::ExportTable) else {
        panic!("export failed");
    };

    let mut other = Session::new(SymbolTable::empty());
    let event = other.apply(Action::ImportTable {
        raw: snapshot.into_bytes(),
    });
    assert!(matches!(event, SessionEvent::ViewsUpdated { .. }));
    assert_eq!(other.table(), session.table());

    for glyph in session.sentence().glyphs() {
        assert_eq!(
            other.transcoder().render_phonetic(*glyph),
            session.transcoder().render_phonetic(*glyph)
        );
    }
}

#[test]
fn json_actions_drive_a_session() {
    let script = r#"[
        {"type": "toggle_stroke", "payload": {"stroke": "v3"}},
        {"type": "edit_vowel_entry", "payload": {"phonetic": "e", "approximate": ""}},
        {"type": "commit_pending"},
        {"type": "commit_pending"},
        {"type": "remove_last"}
    ]"#;
    let actions: Vec<Action> = serde_json::from_str(script).expect("actions");

    let mut session = Session::default();
    let mut last = None;
    for action in actions {
        last = Some(session.apply(action));
    }

    let Some(SessionEvent::ViewsUpdated { view }) = last else {
        panic!("expected views update, got {last:?}");
    };
    assert_eq!(view.phonetic, "e");
    assert_eq!(view.approximate, "?");
}
