//! Shared fixtures for study-core integration tests.

#![allow(dead_code)]

use study_core::{CardSet, SetBuilder, StudyEngine, StudySettings};

/// The three-card Spanish set used across scenarios.
pub fn spanish_set() -> CardSet {
    SetBuilder::new("Spanish", "greetings")
        .from_import("hello\thola\nbye\tadios\nyes\tsi")
        .expect("fixture set should build")
}

/// A set of `n` cards with distinct fronts and backs.
pub fn numbered_set(n: usize) -> CardSet {
    let rows: Vec<(String, String)> = (0..n)
        .map(|i| (format!("term {}", i + 1), format!("definition {}", i + 1)))
        .collect();
    SetBuilder::new("Numbered", "")
        .from_manual(&rows)
        .expect("fixture set should build")
}

/// Engine with a fixed seed so shuffles are reproducible.
pub fn seeded_engine(seed: u64) -> StudyEngine {
    StudyEngine::new(StudySettings {
        seed: Some(seed),
        ..StudySettings::default()
    })
}
