//! Game engine: tile bag, rack, board state, placement rules, scoring,
//! and session orchestration.
//!
//! Everything in here is UI-free. The presentation layer drives the engine
//! through [`GameSession`] commands and queries only.

pub mod bag;
pub mod board;
pub mod rack;
pub mod scoring;
pub mod session;
pub mod validation;

pub use bag::{PieceDef, Tile, TileBag, STANDARD_PIECES};
pub use board::{Board, BoardSlot, Bonus, PlacedTile, BOARD_SIZE};
pub use rack::{Rack, RACK_CAPACITY};
pub use session::{GameSession, SubmitError};
pub use validation::{causes_gap, check_placement, PlacementError};
