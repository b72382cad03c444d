use std::fmt;

use serde::{Deserialize, Serialize};

pub const VOWEL_MASK: u16 = 0b0000_0001_1111;
pub const CONSONANT_MASK: u16 = 0b0111_1110_0000;
pub const ORDER_FLAG: u16 = 0b1000_0000_0000;
pub const GLYPH_MASK: u16 = VOWEL_MASK | CONSONANT_MASK | ORDER_FLAG;

/// One written character: vowel strokes, consonant strokes and the order flag
/// packed into the low 12 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glyph(pub u16);

impl Glyph {
    /// The word separator.
    pub const SPACE: Glyph = Glyph(0);

    /// Bits above the 12-bit layout are dropped.
    pub fn new(bits: u16) -> Self {
        Self(bits & GLYPH_MASK)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_space(self) -> bool {
        self.0 == 0
    }

    pub fn vowel_component(self) -> SubGlyph {
        SubGlyph::vowel(self.0)
    }

    pub fn consonant_component(self) -> SubGlyph {
        SubGlyph::consonant(self.0)
    }

    pub fn has_reversed_order(self) -> bool {
        self.0 & ORDER_FLAG == ORDER_FLAG
    }

    #[must_use]
    pub fn toggle_stroke(self, stroke: Stroke) -> Glyph {
        Glyph(self.0 ^ stroke.bit())
    }

    pub fn has_stroke(self, stroke: Stroke) -> bool {
        self.0 & stroke.bit() != 0
    }

    /// Active strokes in canonical position order.
    pub fn strokes(self) -> impl Iterator<Item = Stroke> {
        Stroke::ALL
            .into_iter()
            .filter(move |stroke| self.has_stroke(*stroke))
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#014b}", self.0)
    }
}

/// A single geometric line of a glyph.
///
/// Vowel strokes sit around the vertical spine, consonant strokes around the
/// crossing:
///
/// ```text
/// v1 / \ v2          c2
/// v3 |           c1 \ | / c3
/// v4 \ / v5      c4 / | \ c6
///                     c5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    V1,
    V2,
    V3,
    V4,
    V5,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    Order,
}

impl Stroke {
    pub const ALL: [Stroke; 12] = [
        Stroke::V1,
        Stroke::V2,
        Stroke::V3,
        Stroke::V4,
        Stroke::V5,
        Stroke::C1,
        Stroke::C2,
        Stroke::C3,
        Stroke::C4,
        Stroke::C5,
        Stroke::C6,
        Stroke::Order,
    ];

    pub const fn bit(self) -> u16 {
        match self {
            Stroke::V1 => 1 << 0,
            Stroke::V2 => 1 << 1,
            Stroke::V3 => 1 << 2,
            Stroke::V4 => 1 << 3,
            Stroke::V5 => 1 << 4,
            Stroke::C1 => 1 << 5,
            Stroke::C2 => 1 << 6,
            Stroke::C3 => 1 << 7,
            Stroke::C4 => 1 << 8,
            Stroke::C5 => 1 << 9,
            Stroke::C6 => 1 << 10,
            Stroke::Order => ORDER_FLAG,
        }
    }

    /// `None` for the order flag, which belongs to neither class.
    pub fn class(self) -> Option<GlyphClass> {
        if self.bit() & VOWEL_MASK != 0 {
            Some(GlyphClass::Vowel)
        } else if self.bit() & CONSONANT_MASK != 0 {
            Some(GlyphClass::Consonant)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stroke::V1 => "v1",
            Stroke::V2 => "v2",
            Stroke::V3 => "v3",
            Stroke::V4 => "v4",
            Stroke::V5 => "v5",
            Stroke::C1 => "c1",
            Stroke::C2 => "c2",
            Stroke::C3 => "c3",
            Stroke::C4 => "c4",
            Stroke::C5 => "c5",
            Stroke::C6 => "c6",
            Stroke::Order => "order",
        }
    }

    pub fn from_label(label: &str) -> Option<Stroke> {
        Stroke::ALL
            .into_iter()
            .find(|stroke| stroke.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphClass {
    Vowel,
    Consonant,
}

impl GlyphClass {
    pub fn mask(self) -> u16 {
        match self {
            GlyphClass::Vowel => VOWEL_MASK,
            GlyphClass::Consonant => CONSONANT_MASK,
        }
    }
}

/// A glyph masked down to a single class. This is the symbol table's key
/// domain: a vowel key and a consonant key never compare equal, even when
/// both are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubGlyph {
    class: GlyphClass,
    bits: u16,
}

impl SubGlyph {
    pub fn new(class: GlyphClass, bits: u16) -> Self {
        Self {
            class,
            bits: bits & class.mask(),
        }
    }

    pub fn vowel(bits: u16) -> Self {
        Self::new(GlyphClass::Vowel, bits)
    }

    pub fn consonant(bits: u16) -> Self {
        Self::new(GlyphClass::Consonant, bits)
    }

    /// Classifies an untagged key as stored in a serialized table. Returns
    /// `None` for 0, for values outside the stroke layout and for values that
    /// mix vowel and consonant bits.
    pub fn from_raw(raw: u16) -> Option<Self> {
        if raw == 0 || raw & !(VOWEL_MASK | CONSONANT_MASK) != 0 {
            return None;
        }
        match (raw & VOWEL_MASK != 0, raw & CONSONANT_MASK != 0) {
            (true, false) => Some(Self::vowel(raw)),
            (false, true) => Some(Self::consonant(raw)),
            _ => None,
        }
    }

    pub fn class(self) -> GlyphClass {
        self.class
    }

    /// Bits at their glyph positions, so the raw value doubles as the
    /// serialized key.
    pub fn bits(self) -> u16 {
        self.bits
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn as_glyph(self) -> Glyph {
        Glyph(self.bits)
    }
}
