//! Text commands understood by the interactive session.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use glyph::{
    domain::{Glyph, Stroke, GLYPH_MASK},
    protocol::Action,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Actions(Vec<Action>),
    Import(PathBuf),
    Export(Option<PathBuf>),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
keypad:   7 9 + 0 .  toggle v1..v5
          4 5 6 1 2 3  toggle c1..c6
          *          toggle the order flag
words:    v1..v5 c1..c6 order   toggle one stroke
          commit | space | back | clear
          (keys and the words above can share a line: c4 c6 commit)
          vowel <phonetic> <inglishe>
          consonant <phonetic> <inglishe>
          import <file.json> | export [file.json]
          show | help | quit";

/// Numeric keypad layout of the strokes.
pub fn keypad_stroke(key: char) -> Option<Stroke> {
    let stroke = match key {
        '7' => Stroke::V1,
        '9' => Stroke::V2,
        '+' => Stroke::V3,
        '0' => Stroke::V4,
        '.' => Stroke::V5,
        '4' => Stroke::C1,
        '5' => Stroke::C2,
        '6' => Stroke::C3,
        '1' => Stroke::C4,
        '2' => Stroke::C5,
        '3' => Stroke::C6,
        '*' => Stroke::Order,
        _ => return None,
    };
    Some(stroke)
}

/// Parses one session line. Stroke labels, keypad groups and the simple
/// editing words may be mixed freely and run in order; every other command
/// stands alone with its own arguments.
pub fn parse_line(line: &str) -> Result<LineCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = words.split_first() else {
        return Ok(LineCommand::Actions(Vec::new()));
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "vowel" | "consonant" => {
            expect_at_most(head, rest, 2)?;
            let phonetic = rest.first().copied().unwrap_or_default().to_string();
            let approximate = rest.get(1).copied().unwrap_or_default().to_string();
            let action = if head.eq_ignore_ascii_case("vowel") {
                Action::EditVowelEntry {
                    phonetic,
                    approximate,
                }
            } else {
                Action::EditConsonantEntry {
                    phonetic,
                    approximate,
                }
            };
            LineCommand::Actions(vec![action])
        }
        "import" => {
            expect_at_most(head, rest, 1)?;
            let path = rest
                .first()
                .ok_or_else(|| anyhow!("import needs a file path"))?;
            LineCommand::Import(PathBuf::from(path))
        }
        "export" => {
            expect_at_most(head, rest, 1)?;
            LineCommand::Export(rest.first().map(PathBuf::from))
        }
        "show" => {
            expect_at_most(head, rest, 0)?;
            LineCommand::Show
        }
        "help" | "?" => {
            expect_at_most(head, rest, 0)?;
            LineCommand::Help
        }
        "quit" | "exit" => {
            expect_at_most(head, rest, 0)?;
            LineCommand::Quit
        }
        _ => {
            let mut actions = Vec::new();
            for word in &words {
                parse_word(word, &mut actions)?;
            }
            LineCommand::Actions(actions)
        }
    };
    Ok(command)
}

fn expect_at_most(head: &str, rest: &[&str], count: usize) -> Result<()> {
    if rest.len() > count {
        bail!("'{head}' takes at most {count} argument(s), got '{}'", rest.join(" "));
    }
    Ok(())
}

fn parse_word(word: &str, actions: &mut Vec<Action>) -> Result<()> {
    if let Some(stroke) = Stroke::from_label(word) {
        actions.push(Action::ToggleStroke { stroke });
        return Ok(());
    }

    let action = match word.to_ascii_lowercase().as_str() {
        "commit" => Action::CommitPending,
        "space" => Action::AppendSpace,
        "back" => Action::RemoveLast,
        "clear" => Action::ClearPending,
        _ => {
            actions.extend(parse_keypad(word)?);
            return Ok(());
        }
    };
    actions.push(action);
    Ok(())
}

fn parse_keypad(word: &str) -> Result<Vec<Action>> {
    word.chars()
        .map(|key| {
            keypad_stroke(key)
                .map(|stroke| Action::ToggleStroke { stroke })
                .ok_or_else(|| anyhow!("unknown command or key '{key}' (try 'help')"))
        })
        .collect()
}

/// Accepts `0b`/`0x`/decimal integers or stroke labels joined by `+`
/// (`c4+c6+v4+v5`).
pub fn parse_glyph(raw: &str) -> Result<Glyph> {
    let raw = raw.trim();
    let bits = if let Some(bin) = raw.strip_prefix("0b") {
        u16::from_str_radix(&bin.replace('_', ""), 2)?
    } else if let Some(hex) = raw.strip_prefix("0x") {
        u16::from_str_radix(hex, 16)?
    } else if let Ok(decimal) = raw.parse::<u16>() {
        decimal
    } else {
        let mut glyph = Glyph::SPACE;
        for label in raw.split('+') {
            let stroke = Stroke::from_label(label.trim())
                .ok_or_else(|| anyhow!("'{label}' is not a stroke (v1..v5, c1..c6, order)"))?;
            glyph = glyph.toggle_stroke(stroke);
        }
        return Ok(glyph);
    };

    if bits & !GLYPH_MASK != 0 {
        bail!("{raw} does not fit in 12 bits");
    }
    Ok(Glyph(bits))
}
