#![allow(dead_code)]
//! The fixed row of placement slots and their bonus classifications.

/// Number of slots on the board.
pub const BOARD_SIZE: usize = 15;

/// Slot-level score modifier, assigned once at board construction.
///
/// The fixed layout only assigns `DoubleLetter` and `DoubleWord`; the triple
/// variants exist so scoring stays layout-agnostic, but no slot currently
/// carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bonus {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    /// Label text shown on the slot, empty for plain slots.
    pub fn label(&self) -> &'static str {
        match self {
            Bonus::None => "",
            Bonus::DoubleLetter => "Double Letter",
            Bonus::TripleLetter => "Triple Letter",
            Bonus::DoubleWord => "Double Word",
            Bonus::TripleWord => "Triple Word",
        }
    }
}

/// The fixed layout: double-word at 2 and 12, double-letter at 6 and 8.
fn bonus_for_index(index: usize) -> Bonus {
    match index {
        2 | 12 => Bonus::DoubleWord,
        6 | 8 => Bonus::DoubleLetter,
        _ => Bonus::None,
    }
}

/// A validated placement: the authoritative record the scoring engine reads.
/// Destroyed on submission; the slot's bonus label survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub index: usize,
    pub letter: char,
    pub value: u32,
    pub bonus: Bonus,
}

/// One board position: an immutable bonus plus at most one placed tile.
#[derive(Debug, Clone)]
pub struct BoardSlot {
    bonus: Bonus,
    tile: Option<PlacedTile>,
}

impl BoardSlot {
    pub fn bonus(&self) -> Bonus {
        self.bonus
    }

    pub fn tile(&self) -> Option<&PlacedTile> {
        self.tile.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<BoardSlot>,
}

impl Board {
    /// Construct the 15 slots, all empty, bonuses fixed by the layout table.
    pub fn new() -> Self {
        let slots = (0..BOARD_SIZE)
            .map(|i| BoardSlot {
                bonus: bonus_for_index(i),
                tile: None,
            })
            .collect();
        Self { slots }
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots[index].is_occupied()
    }

    pub fn bonus(&self, index: usize) -> Bonus {
        self.slots[index].bonus
    }

    pub fn slot(&self, index: usize) -> &BoardSlot {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[BoardSlot] {
        &self.slots
    }

    /// Record an already-validated placement.
    ///
    /// Precondition: the slot is empty and the placement passed the
    /// validator. This operation has no validation responsibility of its own.
    pub fn place(&mut self, index: usize, tile: PlacedTile) {
        self.slots[index].tile = Some(tile);
    }

    /// Empty every occupied slot while preserving bonus classifications.
    pub fn clear_placed_tiles(&mut self) {
        for slot in &mut self.slots {
            slot.tile = None;
        }
    }

    /// Sorted indices of occupied slots, the shape the validator consumes.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(index: usize, board: &Board) -> PlacedTile {
        PlacedTile {
            index,
            letter: 'A',
            value: 1,
            bonus: board.bonus(index),
        }
    }

    #[test]
    fn test_bonus_layout() {
        let board = Board::new();
        for i in 0..BOARD_SIZE {
            let expected = match i {
                2 | 12 => Bonus::DoubleWord,
                6 | 8 => Bonus::DoubleLetter,
                _ => Bonus::None,
            };
            assert_eq!(board.bonus(i), expected, "wrong bonus at slot {}", i);
        }
    }

    #[test]
    fn test_board_starts_empty() {
        let board = Board::new();
        assert!((0..BOARD_SIZE).all(|i| !board.is_occupied(i)));
        assert!(board.occupied_indices().is_empty());
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new();
        let tile = placed(6, &board);
        board.place(6, tile);

        assert!(board.is_occupied(6));
        assert_eq!(board.slot(6).tile().unwrap().letter, 'A');
        assert_eq!(board.slot(6).tile().unwrap().bonus, Bonus::DoubleLetter);
    }

    #[test]
    fn test_occupied_indices_sorted() {
        let mut board = Board::new();
        for i in [9, 2, 5] {
            let tile = placed(i, &board);
            board.place(i, tile);
        }
        assert_eq!(board.occupied_indices(), vec![2, 5, 9]);
    }

    #[test]
    fn test_clear_preserves_bonuses() {
        let mut board = Board::new();
        let tile = placed(2, &board);
        board.place(2, tile);

        board.clear_placed_tiles();
        assert!(!board.is_occupied(2));
        assert_eq!(board.bonus(2), Bonus::DoubleWord);
        assert_eq!(board.bonus(12), Bonus::DoubleWord);
    }

    #[test]
    fn test_bonus_labels() {
        assert_eq!(Bonus::DoubleWord.label(), "Double Word");
        assert_eq!(Bonus::DoubleLetter.label(), "Double Letter");
        assert_eq!(Bonus::TripleWord.label(), "Triple Word");
        assert_eq!(Bonus::TripleLetter.label(), "Triple Letter");
        assert_eq!(Bonus::None.label(), "");
    }
}
