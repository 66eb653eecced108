pub mod command;
pub mod config;
pub mod render;

use std::io::{self, BufRead, Write};

use chrono::Utc;
use study_core::{Library, SetBuilder, StudyEngine, StudyMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::{split_row, Command, HELP};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = config::settings_from_env()?;
    tracing::info!(?settings, "starting study shell");

    let mut shell = Shell::new(StudyEngine::new(settings));
    shell.run(io::stdin().lock(), io::stdout().lock())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive front end: owns the set library and the engine, reads
/// commands line by line and prints the engine state after each one.
pub struct Shell<R: rand::Rng = rand::rngs::StdRng> {
    library: Library,
    engine: StudyEngine<R>,
    recorded: bool,
}

impl<R: rand::Rng> Shell<R> {
    pub fn new(engine: StudyEngine<R>) -> Self {
        Self {
            library: Library::new(),
            engine,
            recorded: false,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn engine(&self) -> &StudyEngine<R> {
        &self.engine
    }

    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        writeln!(out, "Study cards. Type `help` for commands.")?;
        let mut lines = input.lines();

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };
            if self.handle(command, &mut lines, &mut out)? == Flow::Quit {
                break;
            }
        }

        self.record_progress();
        Ok(())
    }

    fn handle<B: BufRead>(
        &mut self,
        command: Command,
        lines: &mut io::Lines<B>,
        out: &mut impl Write,
    ) -> anyhow::Result<Flow> {
        let applied = match command {
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Sets => {
                render::sets(&self.library, out)?;
                return Ok(Flow::Continue);
            }
            Command::New { title } => {
                writeln!(out, "Paste `front<TAB>back` lines, then an empty line:")?;
                let text = read_block(lines)?.join("\n");
                self.create(SetBuilder::new(title, "").from_import(&text), out)?;
                return Ok(Flow::Continue);
            }
            Command::Add { title } => {
                writeln!(out, "Enter `front | back` rows, then an empty line:")?;
                let rows: Vec<(String, String)> = read_block(lines)?
                    .iter()
                    .filter_map(|row| split_row(row))
                    .collect();
                self.create(SetBuilder::new(title, "").from_manual(&rows), out)?;
                return Ok(Flow::Continue);
            }
            Command::Study { set, mode } => return self.study(set, mode, out),
            Command::Mode(mode) => {
                self.record_progress();
                match self.engine.change_mode(mode) {
                    Ok(()) => self.recorded = false,
                    Err(e) => writeln!(out, "{e}")?,
                }
                true
            }
            Command::Flip => self.engine.flip(),
            Command::Next => self.engine.next(),
            Command::Previous => self.engine.previous(),
            Command::Right => self.engine.mark_correct(),
            Command::Wrong => self.engine.mark_incorrect(),
            Command::Write(answer) => self.engine.submit_written(&answer),
            Command::Tile(id) => {
                let selection = self.engine.select_tile(id);
                writeln!(out, "{selection:?}")?;
                true
            }
            Command::Answer(answer) => self.engine.answer_test(&answer),
            Command::Edit => self.engine.begin_edit(),
            Command::Save { front, back } => match self.engine.commit_edit(&front, &back) {
                Ok(edit) => {
                    self.library.apply_edit(&edit)?;
                    true
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                    false
                }
            },
            Command::Cancel => self.engine.cancel_edit(),
            Command::Restart => {
                self.record_progress();
                let restarted = self.engine.restart();
                self.recorded = !restarted && self.recorded;
                restarted
            }
            Command::Back => {
                self.record_progress();
                self.engine.stop();
                render::sets(&self.library, out)?;
                return Ok(Flow::Continue);
            }
            Command::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.engine.snapshot())?)?;
                return Ok(Flow::Continue);
            }
        };

        if !applied {
            writeln!(out, "(nothing to do here)")?;
        }
        if self.engine.is_complete() {
            self.record_progress();
        }
        render::snapshot(&self.engine.snapshot(), out)?;
        Ok(Flow::Continue)
    }

    fn create(
        &mut self,
        built: Result<study_core::CardSet, study_core::BuildError>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match built {
            Ok(set) => {
                writeln!(out, "Created \"{}\" with {}.", set.title, set.card_count_label())?;
                self.library.add(set);
                Ok(())
            }
            Err(e) => writeln!(out, "Error: {e}"),
        }
    }

    fn study(&mut self, position: usize, mode: StudyMode, out: &mut impl Write) -> anyhow::Result<Flow> {
        let Some(set) = self.library.sets().get(position - 1).cloned() else {
            writeln!(out, "No set #{position}.")?;
            render::sets(&self.library, out)?;
            return Ok(Flow::Continue);
        };

        self.record_progress();
        match self.engine.start(set, mode) {
            Ok(()) => {
                self.recorded = false;
                render::snapshot(&self.engine.snapshot(), out)?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    /// Stamp `last_studied` on the cards of the current session, once.
    fn record_progress(&mut self) {
        if self.recorded {
            return;
        }
        let Some(set_id) = self.engine.active_set().map(|s| s.id) else {
            return;
        };
        let studied = self.engine.studied_cards();
        if studied.is_empty() {
            return;
        }
        match self.library.record_studied(set_id, &studied, Utc::now()) {
            Ok(count) => tracing::debug!(%set_id, count, "recorded studied cards"),
            Err(e) => tracing::warn!(error = %e, "could not record studied cards"),
        }
        self.recorded = true;
    }
}

/// Read lines until an empty line or end of input.
fn read_block<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Vec<String>> {
    let mut block = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        block.push(line);
    }
    Ok(block)
}
