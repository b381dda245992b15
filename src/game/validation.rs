#![allow(dead_code)]
//! Placement legality: overlap and contiguity checks.
//!
//! The overlap check runs first and is independent of the gap check. Overlap
//! rejections are silent (the drop simply never registers); gap rejections
//! carry a user-visible message.

use super::board::{Board, BOARD_SIZE};

/// Why a placement attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The target slot already holds a tile (or the drop landed off the
    /// board). Rejected silently; the tile stays where it came from.
    SlotOccupied,
    /// The placement would break the single unbroken run of placed tiles.
    Gap,
    /// The command named a tile the rack does not hold. Treated like an
    /// unregistered drop.
    NotInRack,
}

impl PlacementError {
    /// User-visible message, `None` for silent rejections.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PlacementError::Gap => Some("No spacing allowed please!"),
            PlacementError::SlotOccupied | PlacementError::NotInRack => None,
        }
    }
}

/// True when adding `candidate` to the occupied indices would leave a hole
/// in the run of placed tiles.
///
/// Forms the sorted union of `placed` and the candidate and looks for any
/// two consecutive elements more than 1 apart. A union of 0 or 1 elements
/// trivially has no gap, so the first tile may land anywhere.
pub fn causes_gap(candidate: usize, placed: &[usize]) -> bool {
    let mut all: Vec<usize> = placed.to_vec();
    all.push(candidate);
    all.sort_unstable();
    all.windows(2).any(|pair| pair[1] - pair[0] > 1)
}

/// Decide whether placing a tile at `candidate` is legal on the current
/// board. Occupancy is checked before contiguity.
pub fn check_placement(candidate: usize, board: &Board) -> Result<(), PlacementError> {
    // A drop outside the board never registers, same as an occupied slot.
    if candidate >= BOARD_SIZE || board.is_occupied(candidate) {
        return Err(PlacementError::SlotOccupied);
    }
    if causes_gap(candidate, &board.occupied_indices()) {
        return Err(PlacementError::Gap);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::PlacedTile;

    fn board_with(indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.place(
                i,
                PlacedTile {
                    index: i,
                    letter: 'A',
                    value: 1,
                    bonus: board.bonus(i),
                },
            );
        }
        board
    }

    #[test]
    fn test_first_tile_never_gaps() {
        for i in 0..BOARD_SIZE {
            assert!(!causes_gap(i, &[]));
        }
    }

    #[test]
    fn test_contiguous_run_in_any_order() {
        // {2,3,4} placed in every order: only the {2,4}-with-3-missing step
        // is rejected, every other step is contiguous.
        for order in [[2, 3, 4], [2, 4, 3], [3, 2, 4], [3, 4, 2], [4, 2, 3], [4, 3, 2]] {
            let mut placed: Vec<usize> = Vec::new();
            for idx in order {
                let expected = (placed == [2] && idx == 4) || (placed == [4] && idx == 2);
                assert_eq!(causes_gap(idx, &placed), expected, "order {:?}", order);
                if !causes_gap(idx, &placed) {
                    placed.push(idx);
                }
            }
        }
    }

    #[test]
    fn test_gap_detection_around_hole() {
        assert!(causes_gap(6, &[2, 4]));
        assert!(!causes_gap(3, &[2, 4]));
        assert!(!causes_gap(5, &[2, 4]));
        assert!(causes_gap(6, &[2, 3, 4]));
        assert!(!causes_gap(5, &[2, 3, 4]));
        assert!(!causes_gap(1, &[2, 3, 4]));
    }

    #[test]
    fn test_adjacent_extension_never_gaps() {
        assert!(!causes_gap(5, &[4]));
        assert!(!causes_gap(3, &[4]));
        assert!(causes_gap(0, &[14]));
    }

    #[test]
    fn test_occupied_rejected_regardless_of_gap() {
        let board = board_with(&[5, 6]);
        // Slot 5 is contiguous with the run but occupied; occupancy wins.
        assert_eq!(
            check_placement(5, &board),
            Err(PlacementError::SlotOccupied)
        );
    }

    #[test]
    fn test_occupancy_checked_before_gap() {
        // Board seeded directly with a non-contiguous layout: re-dropping on
        // an occupied slot must report occupancy, not the gap.
        let board = board_with(&[2, 9]);
        assert_eq!(
            check_placement(9, &board),
            Err(PlacementError::SlotOccupied)
        );
    }

    #[test]
    fn test_gap_rejected_with_message() {
        let board = board_with(&[2, 3]);
        let err = check_placement(6, &board).unwrap_err();
        assert_eq!(err, PlacementError::Gap);
        assert_eq!(err.message(), Some("No spacing allowed please!"));
    }

    #[test]
    fn test_silent_rejections_have_no_message() {
        assert_eq!(PlacementError::SlotOccupied.message(), None);
        assert_eq!(PlacementError::NotInRack.message(), None);
    }

    #[test]
    fn test_off_board_drop_never_registers() {
        let board = Board::new();
        assert_eq!(
            check_placement(BOARD_SIZE, &board),
            Err(PlacementError::SlotOccupied)
        );
    }

    #[test]
    fn test_valid_placement_accepted() {
        let board = board_with(&[7]);
        assert_eq!(check_placement(8, &board), Ok(()));
        assert_eq!(check_placement(6, &board), Ok(()));
    }
}
