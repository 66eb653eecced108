//! Property tests for the study engine.

mod common;

use proptest::prelude::*;
use study_core::answer::check_answer;
use study_core::{MatchingMode, QuestionKind, Session, StudyMode, TileSelection};

fn tile_ids(session: &Session) -> Vec<usize> {
    match session {
        Session::Match(s) => s.tiles().iter().map(|t| t.id).collect(),
        _ => Vec::new(),
    }
}

fn matched_pairs(session: &Session, total: usize) -> usize {
    match session {
        Session::Match(s) => s.matched_pairs(),
        Session::Complete(_) => total,
        _ => 0,
    }
}

proptest! {
    /// Exactly two tiles per card; pairs grow by at most one per selection;
    /// completion exactly when every pair is found.
    #[test]
    fn match_pairs_grow_one_at_a_time(
        n in 1usize..8,
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..16, 0..200),
    ) {
        let mut engine = common::seeded_engine(seed);
        engine.start(common::numbered_set(n), StudyMode::Match).unwrap();
        prop_assert_eq!(tile_ids(engine.session()).len(), 2 * n);

        let mut pairs = 0;
        for pick in picks {
            let selection = engine.select_tile(pick);
            let now = matched_pairs(engine.session(), n);
            prop_assert!(now == pairs || now == pairs + 1);
            prop_assert_eq!(now == pairs + 1, selection == TileSelection::Matched);
            pairs = now;
            prop_assert_eq!(engine.is_complete(), pairs == n);
        }
    }

    /// Learn always completes once every presented card is eventually marked correct.
    #[test]
    fn learn_terminates(
        n in 1usize..10,
        grades in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut engine = common::seeded_engine(0);
        engine.start(common::numbered_set(n), StudyMode::Learn).unwrap();

        let mut grades = grades.into_iter();
        let mut steps = 0;
        while !engine.is_complete() {
            engine.flip();
            // Scripted grades first, then all correct.
            let correct = grades.next().unwrap_or(true);
            let applied = if correct {
                engine.mark_correct()
            } else {
                engine.mark_incorrect()
            };
            prop_assert!(applied);
            steps += 1;
            prop_assert!(steps <= n + 64 * n + n);
        }
        prop_assert_eq!(engine.studied_cards().len(), n);
    }

    /// Question counts: n multiple choice when n >= 4, ceil(n/2) true/false when n > 1, n written.
    #[test]
    fn test_question_counts(n in 1usize..12, seed in any::<u64>()) {
        let mut engine = common::seeded_engine(seed);
        engine.start(common::numbered_set(n), StudyMode::Test).unwrap();
        let Session::Test(test) = engine.session() else {
            return Err(TestCaseError::fail("expected test session"));
        };

        let count = |pred: fn(&QuestionKind) -> bool| test.questions().iter().filter(|q| pred(&q.kind)).count();
        let mc = count(|k| matches!(k, QuestionKind::MultipleChoice { .. }));
        let tf = count(|k| matches!(k, QuestionKind::TrueFalse { .. }));
        let written = count(|k| matches!(k, QuestionKind::Written));

        prop_assert_eq!(mc, if n >= 4 { n } else { 0 });
        prop_assert_eq!(tf, if n > 1 { n.div_ceil(2) } else { 0 });
        prop_assert_eq!(written, n);
        prop_assert_eq!(test.questions().len(), mc + tf + written);
    }

    /// Surrounding whitespace and letter case never affect a written answer.
    #[test]
    fn written_comparison_ignores_case_and_padding(
        word in "[a-zA-Z]{1,12}",
        left in " {0,3}",
        right in " {0,3}",
    ) {
        let typed = format!("{left}{}{right}", word.to_uppercase());
        let check = check_answer(&typed, &word.to_lowercase(), MatchingMode::CaseInsensitive, 0.8);
        prop_assert!(check.is_correct);
    }
}
