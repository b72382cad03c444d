use glyph::domain::{Glyph, Stroke};
use symbols::{Field, SymbolTable};

mod sentence;
mod session;

pub use sentence::{RenderedSentence, SentenceBuffer};
pub use session::Session;

/// Resolves glyphs against a borrowed symbol table.
#[derive(Debug, Clone, Copy)]
pub struct Transcoder<'a> {
    table: &'a SymbolTable,
}

impl<'a> Transcoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Vowel part first when the order flag is set, consonant part first
    /// otherwise. An unmapped part contributes nothing.
    pub fn render(&self, glyph: Glyph, field: Field) -> String {
        let vowel = self.table.lookup(glyph.vowel_component(), field);
        let consonant = self.table.lookup(glyph.consonant_component(), field);
        let (first, second) = if glyph.has_reversed_order() {
            (vowel, consonant)
        } else {
            (consonant, vowel)
        };

        let mut rendered = String::with_capacity(first.len() + second.len());
        rendered.push_str(first);
        rendered.push_str(second);
        rendered
    }

    pub fn render_phonetic(&self, glyph: Glyph) -> String {
        self.render(glyph, Field::Phonetic)
    }

    pub fn render_approximate(&self, glyph: Glyph) -> String {
        self.render(glyph, Field::Approximate)
    }

    pub fn render_strokes(glyph: Glyph) -> Vec<Stroke> {
        glyph.strokes().collect()
    }
}

/// Textual stroke markup for one glyph, e.g. `[v4 v5 c4 c6]`.
pub fn stroke_markup(glyph: Glyph) -> String {
    let labels: Vec<&str> = glyph.strokes().map(Stroke::label).collect();
    format!("[{}]", labels.join(" "))
}
