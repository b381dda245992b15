#![allow(dead_code)]
//! Tile bag: the weighted, shuffled supply of undrawn letter tiles.
//!
//! The bag is expanded once from a distribution table and only ever shrinks.
//! A full game reset rebuilds it from the same table.

use rand::prelude::*;

/// One row of a distribution table: a letter, its point value, and how many
/// copies of it the bag starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub letter: char,
    pub value: u32,
    pub amount: u32,
}

const fn piece(letter: char, value: u32, amount: u32) -> PieceDef {
    PieceDef {
        letter,
        value,
        amount,
    }
}

/// Standard English distribution, 98 tiles (no blanks).
pub const STANDARD_PIECES: [PieceDef; 26] = [
    piece('A', 1, 9),
    piece('B', 3, 2),
    piece('C', 3, 2),
    piece('D', 2, 4),
    piece('E', 1, 12),
    piece('F', 4, 2),
    piece('G', 2, 3),
    piece('H', 4, 2),
    piece('I', 1, 9),
    piece('J', 8, 1),
    piece('K', 5, 1),
    piece('L', 1, 4),
    piece('M', 3, 2),
    piece('N', 1, 6),
    piece('O', 1, 8),
    piece('P', 3, 2),
    piece('Q', 10, 1),
    piece('R', 1, 6),
    piece('S', 1, 4),
    piece('T', 1, 6),
    piece('U', 1, 4),
    piece('V', 4, 2),
    piece('W', 4, 2),
    piece('X', 8, 1),
    piece('Y', 4, 2),
    piece('Z', 10, 1),
];

/// A single letter tile. Immutable once drawn from the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// Expand a distribution table into a shuffled bag, one tile per unit
    /// of `amount`.
    pub fn new(pieces: &[PieceDef]) -> Self {
        Self::with_rng(pieces, &mut rand::rng())
    }

    /// Build a bag with a specific RNG (for testing/seeding).
    pub fn with_rng<R: Rng + ?Sized>(pieces: &[PieceDef], rng: &mut R) -> Self {
        let mut tiles = Vec::new();
        for p in pieces {
            for _ in 0..p.amount {
                tiles.push(Tile {
                    letter: p.letter,
                    value: p.value,
                });
            }
        }
        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Bag over the standard distribution.
    pub fn standard() -> Self {
        Self::new(&STANDARD_PIECES)
    }

    /// Remove and return one uniformly random remaining tile.
    ///
    /// The bag was shuffled at construction, so popping from the end is a
    /// uniform draw. Returns `None` when the bag is empty; callers handle
    /// exhaustion by tolerating a short rack, it is not an error.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_standard_bag_has_98_tiles() {
        assert_eq!(TileBag::standard().len(), 98);
    }

    #[test]
    fn test_expansion_matches_table() {
        let mut bag = TileBag::standard();
        let mut counts: HashMap<char, u32> = HashMap::new();
        while let Some(tile) = bag.draw() {
            *counts.entry(tile.letter).or_insert(0) += 1;
        }

        for p in STANDARD_PIECES {
            assert_eq!(
                counts.get(&p.letter).copied().unwrap_or(0),
                p.amount,
                "wrong count for letter {}",
                p.letter
            );
        }
    }

    #[test]
    fn test_drawn_values_match_table() {
        let mut bag = TileBag::standard();
        while let Some(tile) = bag.draw() {
            let def = STANDARD_PIECES
                .iter()
                .find(|p| p.letter == tile.letter)
                .expect("drawn letter not in table");
            assert_eq!(tile.value, def.value);
        }
    }

    #[test]
    fn test_draw_removes_tiles() {
        let mut bag = TileBag::standard();
        assert_eq!(bag.len(), 98);
        bag.draw();
        assert_eq!(bag.len(), 97);
    }

    #[test]
    fn test_empty_bag_draw_returns_none() {
        let mut bag = TileBag::new(&[]);
        assert!(bag.draw().is_none());

        let mut bag = TileBag::new(&[piece('A', 1, 2)]);
        assert!(bag.draw().is_some());
        assert!(bag.draw().is_some());
        assert!(bag.draw().is_none());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_seeded_bags_draw_identically() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let mut bag1 = TileBag::with_rng(&STANDARD_PIECES, &mut rng1);
        let mut bag2 = TileBag::with_rng(&STANDARD_PIECES, &mut rng2);

        for _ in 0..98 {
            assert_eq!(bag1.draw(), bag2.draw());
        }
    }
}
