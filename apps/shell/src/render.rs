//! Plain-text rendering of engine snapshots.

use std::io::{self, Write};

use study_core::session::{FlashcardsView, LearnView, MatchView, TestView, WriteView};
use study_core::{Completion, Library, QuestionKind, SessionView, StudySnapshot, TileSide};

pub fn sets(library: &Library, out: &mut impl Write) -> io::Result<()> {
    if library.is_empty() {
        return writeln!(out, "No card sets yet. Create one with `new <title>` or `add <title>`.");
    }
    for (idx, set) in library.sets().iter().enumerate() {
        write!(out, "{:>3}. {} ({})", idx + 1, set.title, set.card_count_label())?;
        if !set.description.is_empty() {
            write!(out, " - {}", set.description)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn snapshot(snapshot: &StudySnapshot, out: &mut impl Write) -> io::Result<()> {
    if let Some(mode) = snapshot.mode {
        writeln!(out, "[{} mode | {:.0}% complete]", mode, snapshot.progress * 100.0)?;
    }
    match &snapshot.view {
        SessionView::Idle => writeln!(out, "Pick a set with `study <set#> <mode>`."),
        SessionView::Flashcards(view) => flashcards(view, out),
        SessionView::Learn(view) => learn(view, out),
        SessionView::Write(view) => write_mode(view, out),
        SessionView::Match(view) => match_mode(view, out),
        SessionView::Test(view) => test_mode(view, out),
        SessionView::Complete(done) => complete(done, out),
    }
}

fn flashcards(view: &FlashcardsView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Card {} of {}", view.position, view.total)?;
    if view.editing {
        writeln!(out, "Editing: {} | {}", view.card.front, view.card.back)?;
        return writeln!(out, "Type `save <front> | <back>` or `cancel`.");
    }
    if view.flipped {
        writeln!(out, "Answer: {}", view.card.back)
    } else {
        writeln!(out, "Question: {}", view.card.front)
    }
}

fn learn(view: &LearnView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Pass {} - card {} of {}", view.pass, view.position, view.pass_len)?;
    if view.flipped {
        writeln!(out, "Answer: {}", view.card.back)?;
        writeln!(out, "Got it? `right` or `wrong`.")
    } else {
        writeln!(out, "Question: {}", view.card.front)?;
        writeln!(out, "`flip` to reveal the answer.")
    }
}

fn write_mode(view: &WriteView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Card {} of {}: {}", view.position, view.total, view.prompt)?;
    match &view.result {
        Some(result) if result.is_correct => writeln!(out, "Correct! (`next` to continue)"),
        Some(result) => writeln!(
            out,
            "Not quite. You wrote {:?}, the answer is {:?}. (`next` to continue)",
            result.typed, result.expected
        ),
        None => writeln!(out, "Type `write <answer>`."),
    }
}

fn match_mode(view: &MatchView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Matched {} of {} pairs", view.matched_pairs, view.total_pairs)?;
    for tile in view.tiles.iter().filter(|t| !t.matched) {
        let marker = if view.selected == Some(tile.id) { '*' } else { ' ' };
        let side = match tile.side {
            TileSide::Term => "term",
            TileSide::Definition => "definition",
        };
        writeln!(out, "{marker}{:>3}  {} ({side})", tile.id, tile.text)?;
    }
    Ok(())
}

fn test_mode(view: &TestView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Question {} of {}", view.position, view.total)?;
    writeln!(out, "{}", view.prompt)?;
    match &view.kind {
        QuestionKind::MultipleChoice { options } => {
            for option in options {
                writeln!(out, "  - {option}")?;
            }
            writeln!(out, "Type `answer <option>`.")
        }
        QuestionKind::TrueFalse { .. } => writeln!(out, "Type `answer true` or `answer false`."),
        QuestionKind::Written => writeln!(out, "Type `answer <text>`."),
    }
}

fn complete(done: &Completion, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Study complete! ({} mode)", done.mode)?;
    if let Some(score) = done.score {
        writeln!(out, "Score: {}/{} ({}%)", score.correct, score.total, score.percent())?;
    }
    writeln!(out, "`restart` to study again or `back` for the set list.")
}
