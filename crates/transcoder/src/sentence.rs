use glyph::domain::Glyph;
use symbols::Field;

use crate::{stroke_markup, Transcoder};

const WORD_SEPARATOR: &str = " ";

/// The three derived views of a sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSentence {
    pub phonetic: String,
    pub approximate: String,
    pub markup: String,
}

/// Authored text: glyphs in order, editable only at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceBuffer {
    glyphs: Vec<Glyph>,
}

impl SentenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// `None` on an empty buffer.
    pub fn remove_last(&mut self) -> Option<Glyph> {
        self.glyphs.pop()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Full recomputation over every glyph: the transcoder output of each
    /// glyph, concatenated.
    pub fn render_all(&self, transcoder: &Transcoder<'_>) -> RenderedSentence {
        let mut rendered = RenderedSentence::default();
        for glyph in &self.glyphs {
            rendered
                .phonetic
                .push_str(&transcoder.render_phonetic(*glyph));
            rendered
                .approximate
                .push_str(&transcoder.render_approximate(*glyph));
            rendered.markup.push_str(&stroke_markup(*glyph));
        }
        rendered
    }

    /// Display text for one field, with a space wherever a separator glyph
    /// sits.
    pub fn spaced_text(&self, transcoder: &Transcoder<'_>, field: Field) -> String {
        self.glyphs
            .split(|glyph| glyph.is_space())
            .map(|word| {
                word.iter()
                    .map(|glyph| transcoder.render(*glyph, field))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(WORD_SEPARATOR)
    }
}

impl FromIterator<Glyph> for SentenceBuffer {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}
