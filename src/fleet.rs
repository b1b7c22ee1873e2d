//! Randomized fleet placement with bounded retries.

use log::{debug, trace, warn};
use rand::Rng;

use crate::board::Gameboard;
use crate::common::{BoardError, Coordinate};
use crate::config::{BOARD_SIZE, MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::Orientation;

/// Place one ship of `length` at a random origin and orientation.
///
/// Tries up to [`MAX_PLACEMENT_ATTEMPTS`] draws; every rejected draw is a
/// plain `Err` from [`Gameboard::add_ship`]. Returns the last rejection when
/// no draw fits.
pub fn place_random_ship<R: Rng + ?Sized>(
    board: &mut Gameboard,
    length: usize,
    rng: &mut R,
) -> Result<(), BoardError> {
    let mut last_err = BoardError::NoValidBoard { attempts: 0 };
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let origin = Coordinate::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        match board.add_ship(length, origin, orientation) {
            Ok(_) => return Ok(()),
            Err(err @ BoardError::PositionTaken(_)) => {
                trace!("attempt {attempt}: length {length} at {origin} rejected: {err}");
                last_err = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_err)
}

/// Fill `board` with ships of the given lengths.
///
/// Each full-board attempt starts from an empty board. A ship that cannot be
/// placed abandons the attempt; after [`MAX_BOARD_ATTEMPTS`] the builder
/// gives up with [`BoardError::NoValidBoard`].
pub fn random_fleet<R: Rng + ?Sized>(
    board: &mut Gameboard,
    lengths: &[usize],
    rng: &mut R,
) -> Result<(), BoardError> {
    'boards: for attempt in 1..=MAX_BOARD_ATTEMPTS {
        board.reset_board_matrix();
        for &length in lengths {
            if let Err(err) = place_random_ship(board, length, rng) {
                match err {
                    BoardError::PositionTaken(_) => {
                        debug!("board attempt {attempt}: could not place length {length}, retrying");
                        continue 'boards;
                    }
                    other => return Err(other),
                }
            }
        }
        debug!("fleet of {} ships placed on attempt {attempt}", lengths.len());
        return Ok(());
    }
    board.reset_board_matrix();
    warn!("no valid board found after {MAX_BOARD_ATTEMPTS} attempts");
    Err(BoardError::NoValidBoard {
        attempts: MAX_BOARD_ATTEMPTS,
    })
}
