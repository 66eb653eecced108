//! Mixed test: multiple choice, true/false and written questions generated
//! from the set, answered once each, scored at the end.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use super::Step;
use crate::answer::{check_answer, loosely_equal};
use crate::types::{CardSet, Score, StudySettings};

const TRUE: &str = "true";
const FALSE: &str = "false";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String> },
    TrueFalse { statement: String },
    Written,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestQuestion {
    pub card_id: Uuid,
    pub kind: QuestionKind,
    pub prompt: String,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
}

impl TestQuestion {
    /// Whether `answer` is accepted for this question.
    pub fn accepts(&self, answer: &str, settings: &StudySettings) -> bool {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => answer.trim() == self.correct_answer.trim(),
            QuestionKind::TrueFalse { .. } => loosely_equal(answer, &self.correct_answer),
            QuestionKind::Written => {
                check_answer(answer, &self.correct_answer, settings.matching_mode, settings.fuzzy_threshold)
                    .is_correct
            }
        }
    }

    pub fn is_correct(&self, settings: &StudySettings) -> bool {
        self.user_answer
            .as_deref()
            .is_some_and(|answer| self.accepts(answer, settings))
    }
}

/// Question as shown to the user, without the expected answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestView {
    pub kind: QuestionKind,
    pub prompt: String,
    pub position: usize,
    pub total: usize,
}

/// Generate the full question list for a set, shuffled.
pub fn generate_questions<R: Rng>(set: &CardSet, settings: &StudySettings, rng: &mut R) -> Vec<TestQuestion> {
    let cards = &set.cards;
    let mut questions = Vec::new();

    if cards.len() >= settings.multiple_choice_min_cards {
        for (idx, card) in cards.iter().enumerate() {
            let others: Vec<&str> = cards
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != idx)
                .map(|(_, c)| c.back.as_str())
                .collect();
            let mut options: Vec<String> = others
                .choose_multiple(rng, settings.distractor_count)
                .map(|back| back.to_string())
                .collect();
            options.push(card.back.clone());
            options.shuffle(rng);

            questions.push(TestQuestion {
                card_id: card.id,
                kind: QuestionKind::MultipleChoice { options },
                prompt: format!("What does \"{}\" mean?", card.front),
                correct_answer: card.back.clone(),
                user_answer: None,
            });
        }
    }

    if cards.len() > 1 {
        for (idx, card) in cards.iter().enumerate().step_by(2) {
            let own_back = rng.random_bool(0.5);
            let statement = if own_back {
                card.back.clone()
            } else {
                let mut other = rng.random_range(0..cards.len() - 1);
                if other >= idx {
                    other += 1;
                }
                cards[other].back.clone()
            };

            questions.push(TestQuestion {
                card_id: card.id,
                prompt: format!("\"{}\" means \"{}\"", card.front, statement),
                kind: QuestionKind::TrueFalse { statement },
                correct_answer: (if own_back { TRUE } else { FALSE }).to_string(),
                user_answer: None,
            });
        }
    }

    for card in cards {
        questions.push(TestQuestion {
            card_id: card.id,
            kind: QuestionKind::Written,
            prompt: format!("What does \"{}\" mean?", card.front),
            correct_answer: card.back.clone(),
            user_answer: None,
        });
    }

    questions.shuffle(rng);
    questions
}

#[derive(Debug, Clone)]
pub struct TestSession {
    questions: Vec<TestQuestion>,
    cursor: usize,
}

impl TestSession {
    /// The set must not be empty.
    pub(crate) fn new<R: Rng>(set: &CardSet, settings: &StudySettings, rng: &mut R) -> Self {
        Self {
            questions: generate_questions(set, settings, rng),
            cursor: 0,
        }
    }

    pub fn questions(&self) -> &[TestQuestion] {
        &self.questions
    }

    pub fn current(&self) -> &TestQuestion {
        &self.questions[self.cursor]
    }

    /// Record an answer for the current question and move on. The last
    /// answer freezes the score.
    pub fn answer(&mut self, value: &str, settings: &StudySettings) -> Step {
        self.questions[self.cursor].user_answer = Some(value.trim().to_string());

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            return Step::Continue;
        }
        Step::Complete(Some(self.score(settings)))
    }

    pub fn score(&self, settings: &StudySettings) -> Score {
        Score {
            correct: self.questions.iter().filter(|q| q.is_correct(settings)).count(),
            total: self.questions.len(),
        }
    }

    /// Distinct cards with at least one answered question, in question order.
    pub fn studied(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for q in self.questions.iter().filter(|q| q.user_answer.is_some()) {
            if !ids.contains(&q.card_id) {
                ids.push(q.card_id);
            }
        }
        ids
    }

    pub fn progress(&self) -> f64 {
        let answered = self.questions.iter().filter(|q| q.user_answer.is_some()).count();
        answered as f64 / self.questions.len() as f64
    }

    pub fn view(&self) -> TestView {
        let question = self.current();
        TestView {
            kind: question.kind.clone(),
            prompt: question.prompt.clone(),
            position: self.cursor + 1,
            total: self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SetBuilder;
    use crate::types::Card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set_of(n: usize) -> CardSet {
        let rows: Vec<(String, String)> = (0..n).map(|i| (format!("term{i}"), format!("def{i}"))).collect();
        SetBuilder::new("Numbers", "").from_manual(&rows).unwrap()
    }

    fn questions(n: usize, seed: u64) -> Vec<TestQuestion> {
        generate_questions(&set_of(n), &StudySettings::default(), &mut StdRng::seed_from_u64(seed))
    }

    fn count(questions: &[TestQuestion], pred: impl Fn(&QuestionKind) -> bool) -> usize {
        questions.iter().filter(|q| pred(&q.kind)).count()
    }

    #[test]
    fn small_sets_skip_multiple_choice() {
        let qs = questions(3, 1);
        assert_eq!(count(&qs, |k| matches!(k, QuestionKind::MultipleChoice { .. })), 0);
        assert_eq!(count(&qs, |k| matches!(k, QuestionKind::TrueFalse { .. })), 2);
        assert_eq!(count(&qs, |k| matches!(k, QuestionKind::Written)), 3);
    }

    #[test]
    fn single_card_has_only_written() {
        let qs = questions(1, 1);
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].kind, QuestionKind::Written);
        assert_eq!(qs[0].prompt, "What does \"term0\" mean?");
    }

    #[test]
    fn multiple_choice_options_contain_answer_once() {
        let set = set_of(5);
        let qs = generate_questions(&set, &StudySettings::default(), &mut StdRng::seed_from_u64(3));
        let mc: Vec<&TestQuestion> = qs
            .iter()
            .filter(|q| matches!(q.kind, QuestionKind::MultipleChoice { .. }))
            .collect();
        assert_eq!(mc.len(), 5);
        for q in mc {
            let QuestionKind::MultipleChoice { options } = &q.kind else { unreachable!() };
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| **o == q.correct_answer).count(), 1);
            let mut unique = options.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn true_false_answer_matches_statement() {
        let set = set_of(6);
        let qs = generate_questions(&set, &StudySettings::default(), &mut StdRng::seed_from_u64(11));
        for q in &qs {
            if let QuestionKind::TrueFalse { statement } = &q.kind {
                let card: &Card = set.card(q.card_id).unwrap();
                let expected = if *statement == card.back { "true" } else { "false" };
                assert_eq!(q.correct_answer, expected);
            }
        }
    }

    #[test]
    fn scoring_uses_per_kind_comparison() {
        let set = set_of(4);
        let settings = StudySettings::default();
        let mut session = TestSession::new(&set, &settings, &mut StdRng::seed_from_u64(5));
        let total = session.questions().len();
        assert_eq!(total, 4 + 2 + 4);

        let mut step = Step::Continue;
        for _ in 0..total {
            let q = session.current().clone();
            let answer = match q.kind {
                QuestionKind::TrueFalse { .. } => q.correct_answer.to_uppercase(),
                QuestionKind::Written => format!("  {} ", q.correct_answer.to_uppercase()),
                QuestionKind::MultipleChoice { .. } => q.correct_answer.clone(),
            };
            step = session.answer(&answer, &settings);
        }
        assert_eq!(step, Step::Complete(Some(Score { correct: total, total })));
        assert_eq!(session.studied().len(), 4);
    }

    #[test]
    fn multiple_choice_is_case_sensitive() {
        let q = TestQuestion {
            card_id: Uuid::nil(),
            kind: QuestionKind::MultipleChoice { options: vec!["hola".to_string()] },
            prompt: String::new(),
            correct_answer: "hola".to_string(),
            user_answer: None,
        };
        let settings = StudySettings::default();
        assert!(q.accepts(" hola", &settings));
        assert!(!q.accepts("HOLA", &settings));
    }

    #[test]
    fn multiple_choice_ignores_padding_on_stored_answer() {
        let q = TestQuestion {
            card_id: Uuid::nil(),
            kind: QuestionKind::MultipleChoice { options: vec![" hola ".to_string()] },
            prompt: String::new(),
            correct_answer: " hola ".to_string(),
            user_answer: None,
        };
        let settings = StudySettings::default();
        assert!(q.accepts("hola", &settings));
        assert!(q.accepts(" hola ", &settings));
    }
}
