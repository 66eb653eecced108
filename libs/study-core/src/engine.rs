//! Study engine: the quiz state machine driving one session at a time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, StudyError};
use crate::session::{Completion, Session, SessionView, Step, TileSelection};
use crate::types::{CardEdit, CardSet, Score, StudyMode, StudySettings};

/// Read-only state for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudySnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<StudyMode>,
    pub progress: f64,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    pub view: SessionView,
}

/// Drives study sessions. Holds its own working copy of the active set;
/// card edits are handed back as [`CardEdit`] for the owning library.
pub struct StudyEngine<R: Rng = StdRng> {
    settings: StudySettings,
    rng: R,
    set: Option<CardSet>,
    session: Session,
}

impl StudyEngine<StdRng> {
    /// Engine seeded from `settings.seed`, or from OS entropy when unset.
    pub fn new(settings: StudySettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(settings, rng)
    }
}

impl Default for StudyEngine<StdRng> {
    fn default() -> Self {
        Self::new(StudySettings::default())
    }
}

impl<R: Rng> StudyEngine<R> {
    pub fn with_rng(settings: StudySettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            set: None,
            session: Session::Idle,
        }
    }

    pub fn settings(&self) -> &StudySettings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_set(&self) -> Option<&CardSet> {
        self.set.as_ref()
    }

    pub fn mode(&self) -> Option<StudyMode> {
        self.session.mode()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn score(&self) -> Option<Score> {
        self.session.score()
    }

    /// Start a session, discarding any session in progress.
    pub fn start(&mut self, set: CardSet, mode: StudyMode) -> Result<()> {
        if set.cards.is_empty() {
            return Err(StudyError::EmptySet(set.id));
        }
        self.session = Session::build(mode, &set, &self.settings, &mut self.rng);
        tracing::debug!(set_id = %set.id, %mode, cards = set.cards.len(), "started session");
        self.set = Some(set);
        Ok(())
    }

    /// Switch mode on the active set. Progress is not carried over.
    pub fn change_mode(&mut self, mode: StudyMode) -> Result<()> {
        let set = self.set.take().ok_or(StudyError::NotStudying)?;
        self.start(set, mode)
    }

    /// Rebuild the current session from scratch, with fresh randomization.
    pub fn restart(&mut self) -> bool {
        let (Some(set), Some(mode)) = (&self.set, self.session.mode()) else {
            return self.ignored("restart");
        };
        self.session = Session::build(mode, set, &self.settings, &mut self.rng);
        tracing::debug!(set_id = %set.id, %mode, "restarted session");
        true
    }

    /// Leave the session and return to idle.
    pub fn stop(&mut self) {
        self.session = Session::Idle;
        self.set = None;
    }

    /// Card ids studied in the current (or just completed) session.
    pub fn studied_cards(&self) -> Vec<Uuid> {
        self.session.studied()
    }

    pub fn flip(&mut self) -> bool {
        match &mut self.session {
            Session::Flashcards(s) => s.flip(),
            Session::Learn(s) => s.flip(),
            _ => return self.ignored("flip"),
        }
        true
    }

    pub fn next(&mut self) -> bool {
        let step = match &mut self.session {
            Session::Flashcards(s) => continue_if(s.next()),
            Session::Write(s) => s.next(),
            _ => Step::Ignored,
        };
        self.apply(step, "next")
    }

    pub fn previous(&mut self) -> bool {
        let step = match &mut self.session {
            Session::Flashcards(s) => continue_if(s.previous()),
            _ => Step::Ignored,
        };
        self.apply(step, "previous")
    }

    pub fn mark_correct(&mut self) -> bool {
        self.mark(true)
    }

    pub fn mark_incorrect(&mut self) -> bool {
        self.mark(false)
    }

    fn mark(&mut self, correct: bool) -> bool {
        let step = match &mut self.session {
            Session::Learn(s) => s.mark(correct),
            _ => Step::Ignored,
        };
        self.apply(step, "mark")
    }

    pub fn submit_written(&mut self, answer: &str) -> bool {
        let step = match (&mut self.session, &self.set) {
            (Session::Write(s), Some(set)) => s.submit(set, answer, &self.settings),
            _ => Step::Ignored,
        };
        self.apply(step, "submit_written")
    }

    pub fn select_tile(&mut self, tile_id: usize) -> TileSelection {
        let Session::Match(s) = &mut self.session else {
            self.ignored("select_tile");
            return TileSelection::Ignored;
        };
        let selection = s.select(tile_id);
        if selection == TileSelection::Matched && s.is_complete() {
            self.complete(None);
        }
        selection
    }

    pub fn answer_test(&mut self, answer: &str) -> bool {
        let step = match &mut self.session {
            Session::Test(s) => s.answer(answer, &self.settings),
            _ => Step::Ignored,
        };
        self.apply(step, "answer_test")
    }

    pub fn begin_edit(&mut self) -> bool {
        match &mut self.session {
            Session::Flashcards(s) => s.begin_edit(),
            _ => return self.ignored("begin_edit"),
        }
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        match &mut self.session {
            Session::Flashcards(s) => s.end_edit(),
            _ => self.ignored("cancel_edit"),
        }
    }

    /// Commit new text for the card being edited. Blank sides are rejected
    /// and leave the edit open.
    pub fn commit_edit(&mut self, front: &str, back: &str) -> Result<CardEdit> {
        let card_id = match &self.session {
            Session::Flashcards(s) => s.editing_card().ok_or(StudyError::NotEditing)?,
            _ => return Err(StudyError::NotEditing),
        };
        let (front, back) = (front.trim(), back.trim());
        if front.is_empty() || back.is_empty() {
            return Err(StudyError::BlankCard);
        }

        let set = self.set.as_mut().ok_or(StudyError::NotEditing)?;
        let set_id = set.id;
        let card = set.card_mut(card_id).ok_or(StudyError::CardNotFound(card_id))?;
        card.front = front.to_string();
        card.back = back.to_string();
        let edit = CardEdit {
            set_id,
            card_id,
            front: card.front.clone(),
            back: card.back.clone(),
        };

        if let Session::Flashcards(s) = &mut self.session {
            s.end_edit();
        }
        tracing::debug!(set_id = %edit.set_id, card_id = %edit.card_id, "edited card");
        Ok(edit)
    }

    pub fn snapshot(&self) -> StudySnapshot {
        StudySnapshot {
            set_id: self.set.as_ref().map(|s| s.id),
            mode: self.session.mode(),
            progress: self.session.progress(),
            complete: self.session.is_complete(),
            score: self.session.score(),
            view: self.session.view(self.set.as_ref()),
        }
    }

    fn apply(&mut self, step: Step, intent: &'static str) -> bool {
        match step {
            Step::Ignored => self.ignored(intent),
            Step::Continue => true,
            Step::Complete(score) => {
                self.complete(score);
                true
            }
        }
    }

    fn complete(&mut self, score: Option<Score>) {
        let Some(mode) = self.session.mode() else {
            return;
        };
        let studied = self.session.studied();
        tracing::debug!(%mode, ?score, studied = studied.len(), "session complete");
        self.session = Session::Complete(Completion { mode, score, studied });
    }

    fn ignored(&self, intent: &'static str) -> bool {
        tracing::trace!(intent, mode = ?self.session.mode(), "intent ignored");
        false
    }
}

fn continue_if(moved: bool) -> Step {
    if moved {
        Step::Continue
    } else {
        Step::Ignored
    }
}
