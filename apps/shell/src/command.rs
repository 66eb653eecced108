//! Line commands understood by the shell.

use study_core::StudyMode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Sets,
    /// Create a set from pasted tab-separated lines.
    New { title: String },
    /// Create a set from `front | back` rows.
    Add { title: String },
    /// Study the set at a 1-based position in the list.
    Study { set: usize, mode: StudyMode },
    Mode(StudyMode),
    Flip,
    Next,
    Previous,
    Right,
    Wrong,
    Write(String),
    Tile(usize),
    Answer(String),
    Edit,
    Save { front: String, back: String },
    Cancel,
    Restart,
    Back,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown mode {0:?}; expected flashcards, learn, write, match or test")]
    UnknownMode(String),
}

pub const HELP: &str = "\
sets                      list card sets
new <title>               create a set; paste `front<TAB>back` lines, end with a blank line
add <title>               create a set; type `front | back` rows, end with a blank line
study <set#> <mode>       start studying (flashcards, learn, write, match, test)
mode <mode>               switch mode on the current set
flip | next | prev        flip the card / move between cards
right | wrong             grade the flipped card (learn)
write <answer>            submit a typed answer (write)
tile <id>                 select a tile (match)
answer <text>             answer the current question (test)
edit | save <f> | <b> | cancel
                          edit the current card (flashcards)
restart | back            restart the session / return to the set list
json                      print the current session state as JSON
quit                      exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "sets" | "ls" => Self::Sets,
            "new" => Self::New {
                title: required(rest, "new <title>")?.to_string(),
            },
            "add" => Self::Add {
                title: required(rest, "add <title>")?.to_string(),
            },
            "study" => {
                const USAGE: &str = "study <set#> <mode>";
                let (set, mode) = rest.split_once(char::is_whitespace).ok_or(CommandError::Usage(USAGE))?;
                let set = set
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or(CommandError::Usage(USAGE))?;
                Self::Study { set, mode: mode_arg(mode)? }
            }
            "mode" => Self::Mode(mode_arg(required(rest, "mode <mode>")?)?),
            "flip" | "f" => Self::Flip,
            "next" | "n" => Self::Next,
            "prev" | "previous" | "p" => Self::Previous,
            "right" | "correct" => Self::Right,
            "wrong" | "incorrect" => Self::Wrong,
            "write" | "w" => Self::Write(rest.to_string()),
            "tile" | "t" => Self::Tile(
                rest.parse::<usize>()
                    .map_err(|_| CommandError::Usage("tile <id>"))?,
            ),
            "answer" | "a" => Self::Answer(required(rest, "answer <text>")?.to_string()),
            "edit" => Self::Edit,
            "save" => {
                let (front, back) = split_row(rest).ok_or(CommandError::Usage("save <front> | <back>"))?;
                Self::Save { front, back }
            }
            "cancel" => Self::Cancel,
            "restart" => Self::Restart,
            "back" => Self::Back,
            "json" => Self::Json,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(command)
    }
}

/// Split a manual `front | back` row.
pub fn split_row(row: &str) -> Option<(String, String)> {
    let (front, back) = row.split_once('|')?;
    Some((front.trim().to_string(), back.trim().to_string()))
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest)
    }
}

fn mode_arg(arg: &str) -> Result<StudyMode, CommandError> {
    StudyMode::parse(arg).ok_or_else(|| CommandError::UnknownMode(arg.trim().to_string()))
}
