//! Pair-matching mode over shuffled term and definition tiles.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::types::CardSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSide {
    Term,
    Definition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTile {
    pub id: usize,
    pub text: String,
    pub side: TileSide,
    pub card_id: Uuid,
    pub matched: bool,
}

/// What a tile selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSelection {
    Selected,
    Deselected,
    Matched,
    Mismatched,
    /// Unknown tile, already matched tile, or not in match mode.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    tiles: Vec<MatchTile>,
    selected: Option<usize>,
    matched_pairs: usize,
    total_pairs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    pub tiles: Vec<MatchTile>,
    pub selected: Option<usize>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
}

/// Two tiles per card, in random order. Tile ids are stable within a session.
pub fn deal_tiles<R: Rng>(set: &CardSet, rng: &mut R) -> Vec<MatchTile> {
    let mut tiles: Vec<MatchTile> = set
        .cards
        .iter()
        .enumerate()
        .flat_map(|(idx, card)| {
            [
                (TileSide::Term, card.front.clone()),
                (TileSide::Definition, card.back.clone()),
            ]
            .into_iter()
            .enumerate()
            .map(move |(half, (side, text))| MatchTile {
                id: idx * 2 + half,
                text,
                side,
                card_id: card.id,
                matched: false,
            })
        })
        .collect();
    tiles.shuffle(rng);
    tiles
}

impl MatchSession {
    /// The set must not be empty.
    pub(crate) fn new<R: Rng>(set: &CardSet, rng: &mut R) -> Self {
        Self {
            tiles: deal_tiles(set, rng),
            selected: None,
            matched_pairs: 0,
            total_pairs: set.cards.len(),
        }
    }

    pub fn tiles(&self) -> &[MatchTile] {
        &self.tiles
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    fn tile(&self, id: usize) -> Option<&MatchTile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn select(&mut self, id: usize) -> TileSelection {
        let Some(tile) = self.tile(id).filter(|t| !t.matched) else {
            return TileSelection::Ignored;
        };
        let (card_id, side) = (tile.card_id, tile.side);

        let Some(previous) = self.selected else {
            self.selected = Some(id);
            return TileSelection::Selected;
        };
        if previous == id {
            self.selected = None;
            return TileSelection::Deselected;
        }

        let pairs = self
            .tile(previous)
            .is_some_and(|p| p.card_id == card_id && p.side != side);
        if !pairs {
            self.selected = Some(id);
            return TileSelection::Mismatched;
        }

        for tile in self.tiles.iter_mut().filter(|t| t.id == id || t.id == previous) {
            tile.matched = true;
        }
        self.selected = None;
        self.matched_pairs += 1;
        TileSelection::Matched
    }

    pub fn studied(&self) -> Vec<Uuid> {
        self.tiles
            .iter()
            .filter(|t| t.matched && t.side == TileSide::Term)
            .map(|t| t.card_id)
            .collect()
    }

    pub fn progress(&self) -> f64 {
        self.matched_pairs as f64 / self.total_pairs as f64
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            tiles: self.tiles.clone(),
            selected: self.selected,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SetBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> MatchSession {
        let set = SetBuilder::new("Spanish", "")
            .from_import("hello\thola\nbye\tadios\nyes\tsi")
            .unwrap();
        MatchSession::new(&set, &mut StdRng::seed_from_u64(7))
    }

    fn pair_of(s: &MatchSession, side: TileSide, nth_card: usize) -> usize {
        let card_id = s.tiles().iter().find(|t| t.id == nth_card * 2).unwrap().card_id;
        s.tiles()
            .iter()
            .find(|t| t.card_id == card_id && t.side == side)
            .unwrap()
            .id
    }

    #[test]
    fn deals_two_tiles_per_card() {
        let s = session();
        assert_eq!(s.tiles().len(), 6);
        let mut ids: Vec<usize> = s.tiles().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        assert!(s.tiles().iter().all(|t| !t.matched));
    }

    #[test]
    fn same_seed_same_order() {
        let a: Vec<usize> = session().tiles().iter().map(|t| t.id).collect();
        let b: Vec<usize> = session().tiles().iter().map(|t| t.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn reselect_deselects() {
        let mut s = session();
        assert_eq!(s.select(0), TileSelection::Selected);
        assert_eq!(s.select(0), TileSelection::Deselected);
        assert_eq!(s.selected(), None);
        assert_eq!(s.matched_pairs(), 0);
    }

    #[test]
    fn mismatch_replaces_selection() {
        let mut s = session();
        s.select(pair_of(&s, TileSide::Term, 0));
        let other = pair_of(&s, TileSide::Definition, 1);
        assert_eq!(s.select(other), TileSelection::Mismatched);
        assert_eq!(s.selected(), Some(other));
    }

    #[test]
    fn two_terms_of_different_cards_do_not_match() {
        let mut s = session();
        s.select(pair_of(&s, TileSide::Term, 0));
        assert_eq!(s.select(pair_of(&s, TileSide::Term, 1)), TileSelection::Mismatched);
    }

    #[test]
    fn matched_tiles_are_inert() {
        let mut s = session();
        let term = pair_of(&s, TileSide::Term, 0);
        let definition = pair_of(&s, TileSide::Definition, 0);
        s.select(definition);
        assert_eq!(s.select(term), TileSelection::Matched);
        assert_eq!(s.matched_pairs(), 1);
        assert_eq!(s.select(term), TileSelection::Ignored);
        assert_eq!(s.select(99), TileSelection::Ignored);
        assert!(!s.is_complete());
    }
}
