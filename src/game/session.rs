#![allow(dead_code)]
//! Session orchestration: the draw -> place -> validate -> score -> submit
//! -> reset cycle, plus the query surface the presentation layer reads.

use super::bag::{PieceDef, Tile, TileBag, STANDARD_PIECES};
use super::board::{Board, PlacedTile};
use super::rack::Rack;
use super::scoring;
use super::validation::{self, PlacementError};

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit attempted with no placed tiles. No state changes.
    EmptyBoard,
}

impl SubmitError {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitError::EmptyBoard => "At least one tile on board please!",
        }
    }
}

/// One self-contained game: bag, rack, board, placed tiles, running total.
///
/// Owns all mutable state explicitly so independent sessions can coexist;
/// nothing here is ambient or shared.
pub struct GameSession {
    /// Distribution table the bag was seeded from; `reset` rebuilds from it.
    pieces: Vec<PieceDef>,
    bag: TileBag,
    rack: Rack,
    board: Board,
    /// Current word, kept ordered by board index.
    placed: Vec<PlacedTile>,
    total_score: u32,
    /// Transient user-visible error, cleared by the next successful action.
    error: Option<&'static str>,
}

impl GameSession {
    /// Session over the standard 98-tile distribution.
    pub fn new() -> Self {
        Self::with_pieces(STANDARD_PIECES.to_vec())
    }

    /// Session over an arbitrary already-parsed distribution table. A table
    /// too small to fill the rack is fine; the rack just starts short.
    pub fn with_pieces(pieces: Vec<PieceDef>) -> Self {
        let mut bag = TileBag::new(&pieces);
        let mut rack = Rack::new();
        rack.refill(&mut bag);

        Self {
            pieces,
            bag,
            rack,
            board: Board::new(),
            placed: Vec::new(),
            total_score: 0,
            error: None,
        }
    }

    /// Attempt to place the rack tile at `rack_index` onto `board_index`.
    ///
    /// On success the tile moves rack -> board and any shown error is
    /// cleared. A gap rejection sets the error message and leaves the tile
    /// on the rack; an overlap rejection is silent and leaves whatever
    /// message was already showing untouched.
    pub fn attempt_place(
        &mut self,
        rack_index: usize,
        board_index: usize,
    ) -> Result<(), PlacementError> {
        let tile = match self.rack.get(rack_index) {
            Some(tile) => tile,
            None => return Err(PlacementError::NotInRack),
        };

        if let Err(err) = validation::check_placement(board_index, &self.board) {
            if let Some(msg) = err.message() {
                self.error = Some(msg);
            }
            return Err(err);
        }

        let placed = PlacedTile {
            index: board_index,
            letter: tile.letter,
            value: tile.value,
            bonus: self.board.bonus(board_index),
        };
        self.board.place(board_index, placed);
        self.placed.push(placed);
        self.placed.sort_unstable_by_key(|t| t.index);
        self.rack.remove(tile.letter, tile.value);
        self.error = None;
        Ok(())
    }

    /// Submit the current word: add its score to the running total, clear
    /// the placed tiles (bonus labels survive), refill the rack. Returns the
    /// score the word earned.
    pub fn submit(&mut self) -> Result<u32, SubmitError> {
        if self.placed.is_empty() {
            self.error = Some(SubmitError::EmptyBoard.message());
            return Err(SubmitError::EmptyBoard);
        }

        let score = scoring::word_score(&self.placed);
        self.total_score += score;
        self.placed.clear();
        self.board.clear_placed_tiles();
        self.rack.refill(&mut self.bag);
        self.error = None;
        Ok(score)
    }

    /// Discard everything and start over from the same distribution table,
    /// equivalent to a brand-new session.
    pub fn reset(&mut self) {
        self.bag = TileBag::new(&self.pieces);
        self.rack = Rack::new();
        self.rack.refill(&mut self.bag);
        self.board = Board::new();
        self.placed.clear();
        self.total_score = 0;
        self.error = None;
    }

    pub fn rack(&self) -> &[Tile] {
        self.rack.tiles()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn placed_tiles(&self) -> &[PlacedTile] {
        &self.placed
    }

    /// Score of the word currently on the board, recomputed from scratch.
    pub fn live_score(&self) -> u32 {
        scoring::word_score(&self.placed)
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Currently showing user-visible error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
    }

    pub fn bag_remaining(&self) -> usize {
        self.bag.len()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
