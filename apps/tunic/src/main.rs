use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyph::{
    domain::GlyphClass,
    protocol::{Action, SessionEvent},
};
use symbols::{display_value, snapshot, SymbolTable};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use transcoder::{stroke_markup, SentenceBuffer, Session, Transcoder};

mod commands;
mod config;

use commands::{parse_glyph, parse_line, LineCommand, HELP};
use config::{initial_table, load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "tunic", about = "Transcribe Tunic glyphs to phonetic and inglishe text")]
struct Cli {
    /// Snapshot to use instead of the configured or built-in alphabet.
    #[arg(long, global = true)]
    alphabet: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render glyphs given as integers or stroke lists (`c4+c6+v4+v5`).
    Render {
        #[arg(required = true)]
        glyphs: Vec<String>,
    },
    #[command(subcommand)]
    Table(TableCommand),
    /// Compose glyphs interactively from stdin.
    Session {
        /// Print one JSON event per action instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum TableCommand {
    /// Write the table as JSON, to stdout unless `--out` is given.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List entries for reference.
    Show {
        #[arg(long, value_enum)]
        class: Option<ClassArg>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClassArg {
    Vowel,
    Consonant,
}

impl From<ClassArg> for GlyphClass {
    fn from(value: ClassArg) -> Self {
        match value {
            ClassArg::Vowel => GlyphClass::Vowel,
            ClassArg::Consonant => GlyphClass::Consonant,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(alphabet) = cli.alphabet {
        settings.alphabet = Some(alphabet);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let table = initial_table(&settings)?;

    match cli.command {
        Command::Render { glyphs } => render(&table, &glyphs),
        Command::Table(TableCommand::Export { out }) => match out {
            Some(path) => {
                snapshot::write_snapshot_file(&path, &table)?;
                info!(
                    path = %path.display(),
                    entries = table.len(),
                    "exported transcription mappings"
                );
                Ok(())
            }
            None => {
                println!("{}", table.export_snapshot()?);
                Ok(())
            }
        },
        Command::Table(TableCommand::Show { class }) => {
            let stdout = io::stdout();
            write_table(&mut stdout.lock(), &table, class.map(GlyphClass::from))?;
            Ok(())
        }
        Command::Session { json } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(
                Session::new(table),
                &settings,
                stdin.lock(),
                &mut stdout.lock(),
                json,
            )
        }
    }
}

fn render(table: &SymbolTable, raw_glyphs: &[String]) -> Result<()> {
    let transcoder = Transcoder::new(table);
    let mut sentence = SentenceBuffer::new();

    for raw in raw_glyphs {
        let glyph = parse_glyph(raw).with_context(|| format!("invalid glyph '{raw}'"))?;
        println!(
            "{glyph}  {}  /{}/  {}",
            stroke_markup(glyph),
            transcoder.render_phonetic(glyph),
            transcoder.render_approximate(glyph)
        );
        sentence.append(glyph);
    }

    if sentence.len() > 1 {
        let rendered = sentence.render_all(&transcoder);
        println!("/{}/  {}", rendered.phonetic, rendered.approximate);
    }
    Ok(())
}

fn write_table(
    out: &mut impl Write,
    table: &SymbolTable,
    class: Option<GlyphClass>,
) -> io::Result<()> {
    let classes = match class {
        Some(class) => vec![class],
        None => vec![GlyphClass::Vowel, GlyphClass::Consonant],
    };

    for class in classes {
        let heading = match class {
            GlyphClass::Vowel => "vowels",
            GlyphClass::Consonant => "consonants",
        };
        writeln!(out, "{heading}")?;
        for (key, entry) in table.entries_of_class(class) {
            writeln!(
                out,
                "  {:>5}  {:<22} {:<6} {}",
                key.bits(),
                stroke_markup(key.as_glyph()),
                display_value(&entry.phonetic),
                display_value(&entry.approximate)
            )?;
        }
    }
    Ok(())
}

fn run_session(
    mut session: Session,
    settings: &Settings,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    if !json {
        writeln!(out, "Its transcribing time! Type 'help' for commands.")?;
    }

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!(input = %line, "{err}");
                if !json {
                    writeln!(out, "error: {err}")?;
                }
                continue;
            }
        };

        let events: Vec<SessionEvent> = match command {
            LineCommand::Quit => break,
            LineCommand::Help | LineCommand::Show if json => {
                debug!(input = %line, "text-only command skipped in json mode");
                continue;
            }
            LineCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            LineCommand::Show => {
                write_table(out, session.table(), None)?;
                continue;
            }
            LineCommand::Actions(actions) => actions
                .into_iter()
                .map(|action| session.apply(action))
                .collect(),
            LineCommand::Import(path) => vec![import_file(&mut session, &path)],
            LineCommand::Export(path) => {
                let path = path.unwrap_or_else(|| settings.export_path.clone());
                vec![export_file(&mut session, &path)]
            }
        };

        let shown = if json {
            &events[..]
        } else {
            events.last().map(std::slice::from_ref).unwrap_or_default()
        };
        for event in shown {
            write_event(out, event, json)?;
        }
    }
    Ok(())
}

fn import_file(session: &mut Session, path: &Path) -> SessionEvent {
    match snapshot::read_snapshot_file(path) {
        Ok(raw) => session.apply(Action::ImportTable { raw }),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "rejected table file");
            SessionEvent::Error((&err).into())
        }
    }
}

fn export_file(session: &mut Session, path: &Path) -> SessionEvent {
    match session.apply(Action::ExportTable) {
        SessionEvent::TableExported { snapshot } => {
            match snapshot::write_snapshot(path, &snapshot) {
                Ok(()) => {
                    info!(path = %path.display(), "exported transcription mappings");
                    SessionEvent::TableExported { snapshot }
                }
                Err(err) => {
                    warn!(error = %err, "failed to export transcription mappings");
                    SessionEvent::Error((&err).into())
                }
            }
        }
        other => other,
    }
}

fn write_event(out: &mut impl Write, event: &SessionEvent, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
        return Ok(());
    }

    match event {
        SessionEvent::ViewsUpdated { view } => {
            writeln!(
                out,
                "pending  {} /{}/ {}",
                stroke_markup(view.pending),
                view.preview_phonetic,
                view.preview_approximate
            )?;
            writeln!(
                out,
                "sentence /{}/ {}",
                view.spaced_phonetic, view.spaced_approximate
            )?;
        }
        SessionEvent::TableExported { snapshot } => {
            writeln!(out, "exported {} bytes", snapshot.len())?;
        }
        SessionEvent::Error(report) => {
            writeln!(out, "error: {}", report.message)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
