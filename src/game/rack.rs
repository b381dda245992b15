#![allow(dead_code)]
//! The player's hand of tiles available to place on the board.

use super::bag::{Tile, TileBag};

/// Maximum number of tiles a rack holds.
pub const RACK_CAPACITY: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Draw from the bag until the rack holds [`RACK_CAPACITY`] tiles or the
    /// bag runs dry. A rack shorter than capacity is legal, not an error.
    pub fn refill(&mut self, bag: &mut TileBag) {
        while self.tiles.len() < RACK_CAPACITY {
            match bag.draw() {
                Some(tile) => self.tiles.push(tile),
                None => break,
            }
        }
    }

    /// Remove one tile matching `letter` and `value`. Silent no-op when
    /// nothing matches; placement legality is the validator's job, never
    /// this method's.
    pub fn remove(&mut self, letter: char, value: u32) {
        if let Some(pos) = self
            .tiles
            .iter()
            .position(|t| t.letter == letter && t.value == value)
        {
            self.tiles.remove(pos);
        }
    }

    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
