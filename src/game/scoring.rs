//! Word scoring: letter bonuses fold into the word score, word bonuses
//! compound into a single multiplier applied at the end.

use super::board::{Bonus, PlacedTile};

/// Score of the currently placed tile sequence.
///
/// Pure function of the placed set; recomputed from scratch on every
/// placement change, no incremental state.
pub fn word_score(placed: &[PlacedTile]) -> u32 {
    let mut word_score = 0;
    let mut word_multiplier = 1;

    for tile in placed {
        let mut letter_score = tile.value;
        match tile.bonus {
            Bonus::DoubleLetter => letter_score *= 2,
            Bonus::TripleLetter => letter_score *= 3,
            Bonus::DoubleWord => word_multiplier *= 2,
            Bonus::TripleWord => word_multiplier *= 3,
            Bonus::None => {}
        }
        word_score += letter_score;
    }

    word_score * word_multiplier
}
