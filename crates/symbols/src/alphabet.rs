//! The seed alphabet every new table starts from.

use glyph::domain::Stroke::{C1, C2, C3, C4, C5, C6, V1, V2, V3, V4, V5};

/// `(key, phonetic, inglishe)` rows. Keys are vowel-only or consonant-only.
pub const BUILTIN: &[(u16, &str, &str)] = &[
    (C4.bit() | C6.bit(), "m", "m"),
    (C1.bit() | C4.bit() | C6.bit(), "n", "n"),
    (
        C1.bit() | C2.bit() | C3.bit() | C4.bit() | C5.bit() | C6.bit(),
        "ŋ",
        "ng",
    ),
    (C3.bit() | C5.bit(), "p", "p"),
    (C2.bit() | C6.bit(), "b", "b"),
    (C1.bit() | C3.bit() | C5.bit(), "t", "t"),
    (C2.bit() | C4.bit() | C6.bit(), "d", "d"),
    (C2.bit() | C3.bit() | C6.bit(), "k", "k"),
    (C3.bit() | C5.bit() | C6.bit(), "g", "g"),
    (C2.bit() | C4.bit(), "dʒ", "dj"),
    (C1.bit() | C5.bit(), "lɣ", "l"),
    (C3.bit() | C4.bit() | C5.bit(), "f", "f"),
    (C1.bit() | C2.bit() | C6.bit(), "v", "v"),
    (C1.bit() | C2.bit() | C3.bit() | C5.bit(), "θ", "th"),
    (C2.bit() | C4.bit() | C5.bit() | C6.bit(), "ð", "z"),
    (C2.bit() | C3.bit() | C4.bit() | C5.bit(), "s", "s"),
    (C1.bit() | C2.bit() | C5.bit() | C6.bit(), "z", "z"),
    (C1.bit() | C3.bit() | C4.bit() | C5.bit() | C6.bit(), "ʃ", "sh"),
    (C1.bit() | C2.bit() | C3.bit() | C4.bit() | C6.bit(), "tʃ", "tch"),
    (C2.bit() | C5.bit() | C6.bit(), "h", "h"),
    (C2.bit() | C3.bit() | C5.bit(), "ɹ̠", "r"),
    (C1.bit() | C2.bit() | C5.bit(), "j", "y"),
    (C1.bit() | C3.bit(), "w", "w"),
    (C2.bit() | C5.bit(), "l", "l"),
    (V1.bit() | V2.bit() | V3.bit(), "æ", "ay"),
    (V1.bit() | V3.bit(), "ɒ", "o"),
    (V4.bit() | V5.bit(), "ɪ", "i"),
    (V3.bit() | V4.bit() | V5.bit(), "ɛ", "è"),
    (V1.bit() | V2.bit(), "ʌ", "euh"),
    (V1.bit() | V3.bit() | V4.bit() | V5.bit(), "i", "i"),
    (V1.bit() | V2.bit() | V3.bit() | V4.bit(), "u:", "ou"),
    (V2.bit() | V3.bit() | V4.bit() | V5.bit(), "ə", "a"),
    (V1.bit() | V2.bit() | V4.bit() | V5.bit(), "ɑ:", "a"),
    (V1.bit() | V3.bit() | V5.bit(), "ɔ:", "uh"),
    (V1.bit(), "ɐɪ", "ei"),
    (V2.bit(), "aɪ", "aï"),
    (V5.bit(), "aʊ", "ow"),
    (V1.bit() | V2.bit() | V3.bit() | V4.bit() | V5.bit(), "o", "o"),
];
