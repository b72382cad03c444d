use glyph::{
    domain::{Glyph, GlyphClass, Stroke, SubGlyph},
    error::{ErrorReport, TableError},
    protocol::{Action, SessionEvent, SessionView},
};
use symbols::{Field, SymbolTable};
use tracing::{debug, info, warn};

use crate::{RenderedSentence, SentenceBuffer, Transcoder};

/// One editing session: its own symbol table, sentence and pending glyph.
///
/// The rendered sentence is a cache; every mutation of the sentence or the
/// table recomputes it in full.
#[derive(Debug, Clone)]
pub struct Session {
    table: SymbolTable,
    sentence: SentenceBuffer,
    pending: Glyph,
    rendered: RenderedSentence,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SymbolTable::builtin())
    }
}

impl Session {
    pub fn new(table: SymbolTable) -> Self {
        let mut session = Self {
            table,
            sentence: SentenceBuffer::new(),
            pending: Glyph::SPACE,
            rendered: RenderedSentence::default(),
        };
        session.recompute();
        session
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn sentence(&self) -> &SentenceBuffer {
        &self.sentence
    }

    pub fn pending(&self) -> Glyph {
        self.pending
    }

    pub fn rendered(&self) -> &RenderedSentence {
        &self.rendered
    }

    pub fn transcoder(&self) -> Transcoder<'_> {
        Transcoder::new(&self.table)
    }

    pub fn toggle_stroke(&mut self, stroke: Stroke) {
        self.pending = self.pending.toggle_stroke(stroke);
        debug!(stroke = stroke.label(), pending = self.pending.bits(), "toggled stroke");
    }

    /// Appends the pending glyph. The pending glyph itself is kept, so the
    /// same character can be committed again.
    pub fn commit_pending(&mut self) {
        self.sentence.append(self.pending);
        self.recompute();
    }

    pub fn clear_pending(&mut self) {
        self.pending = Glyph::SPACE;
    }

    pub fn append_space(&mut self) {
        self.sentence.append(Glyph::SPACE);
        self.recompute();
    }

    pub fn remove_last(&mut self) {
        if self.sentence.remove_last().is_some() {
            self.recompute();
        }
    }

    /// Defines the pending glyph's vowel component.
    pub fn edit_vowel_entry(
        &mut self,
        phonetic: &str,
        approximate: &str,
    ) -> Result<(), TableError> {
        self.edit_entry(self.pending.vowel_component(), phonetic, approximate)
    }

    /// Defines the pending glyph's consonant component.
    pub fn edit_consonant_entry(
        &mut self,
        phonetic: &str,
        approximate: &str,
    ) -> Result<(), TableError> {
        self.edit_entry(self.pending.consonant_component(), phonetic, approximate)
    }

    fn edit_entry(
        &mut self,
        key: SubGlyph,
        phonetic: &str,
        approximate: &str,
    ) -> Result<(), TableError> {
        self.table.upsert(key, phonetic, approximate)?;
        info!(
            class = class_name(key.class()),
            key = key.bits(),
            "updated transcription mapping"
        );
        self.recompute();
        Ok(())
    }

    /// Swaps in a whole new table. A malformed payload leaves the current
    /// table and views untouched.
    pub fn import_table(&mut self, raw: &[u8]) -> Result<usize, TableError> {
        match self.table.import_snapshot(raw) {
            Ok(count) => {
                info!(entries = count, "imported transcription mappings");
                self.recompute();
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "failed to import transcription mappings");
                Err(err)
            }
        }
    }

    pub fn export_table(&self) -> Result<String, TableError> {
        self.table.export_snapshot()
    }

    pub fn preview_phonetic(&self) -> String {
        self.transcoder().render_phonetic(self.pending)
    }

    pub fn preview_approximate(&self) -> String {
        self.transcoder().render_approximate(self.pending)
    }

    pub fn view(&self) -> SessionView {
        let transcoder = self.transcoder();
        SessionView {
            pending: self.pending,
            preview_phonetic: self.preview_phonetic(),
            preview_approximate: self.preview_approximate(),
            phonetic: self.rendered.phonetic.clone(),
            approximate: self.rendered.approximate.clone(),
            markup: self.rendered.markup.clone(),
            spaced_phonetic: self.sentence.spaced_text(&transcoder, Field::Phonetic),
            spaced_approximate: self.sentence.spaced_text(&transcoder, Field::Approximate),
        }
    }

    /// Runs one input action. Failures are reported as an event and never
    /// change session state.
    pub fn apply(&mut self, action: Action) -> SessionEvent {
        let name = action.name();
        let result = match action {
            Action::ToggleStroke { stroke } => {
                self.toggle_stroke(stroke);
                Ok(None)
            }
            Action::CommitPending => {
                self.commit_pending();
                Ok(None)
            }
            Action::AppendSpace => {
                self.append_space();
                Ok(None)
            }
            Action::RemoveLast => {
                self.remove_last();
                Ok(None)
            }
            Action::ClearPending => {
                self.clear_pending();
                Ok(None)
            }
            Action::EditVowelEntry {
                phonetic,
                approximate,
            } => self.edit_vowel_entry(&phonetic, &approximate).map(|()| None),
            Action::EditConsonantEntry {
                phonetic,
                approximate,
            } => self
                .edit_consonant_entry(&phonetic, &approximate)
                .map(|()| None),
            Action::ImportTable { raw } => self.import_table(&raw).map(|_| None),
            Action::ExportTable => self.export_table().map(Some),
        };

        match result {
            Ok(Some(snapshot)) => SessionEvent::TableExported { snapshot },
            Ok(None) => SessionEvent::ViewsUpdated { view: self.view() },
            Err(err) => {
                warn!(action = name, error = %err, "action rejected");
                SessionEvent::Error(ErrorReport::from(&err))
            }
        }
    }

    fn recompute(&mut self) {
        self.rendered = self.sentence.render_all(&Transcoder::new(&self.table));
    }
}

fn class_name(class: GlyphClass) -> &'static str {
    match class {
        GlyphClass::Vowel => "vowel",
        GlyphClass::Consonant => "consonant",
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
