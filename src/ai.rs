//! Hunt-and-target search used by the computer opponent.
//!
//! The AI never looks at where ships are. It only reads cells it has already
//! attacked: a hit narrows the search to the hit's neighbours, and a second
//! hit in line commits to that axis until the run is bounded by misses or
//! the board edge.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::board::{Gameboard, BB};
use crate::common::{AttackOutcome, BoardError, Coordinate};
use crate::player::Player;

/// One attack made by the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub coord: Coordinate,
    pub outcome: AttackOutcome,
}

/// Every attack made during one turn, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub shots: Vec<AttackReport>,
}

impl TurnReport {
    pub fn hits(&self) -> usize {
        self.shots.iter().filter(|s| s.outcome.is_hit()).count()
    }

    pub fn sunk(&self) -> usize {
        self.shots
            .iter()
            .filter(|s| s.outcome == AttackOutcome::Sunk)
            .count()
    }

    /// `true` when the last attack of the turn missed.
    pub fn ended_on_miss(&self) -> bool {
        matches!(self.shots.last(), Some(s) if !s.outcome.is_hit())
    }
}

/// Search state kept between attacks on one opponent board.
#[derive(Debug, Clone, Default)]
pub struct TargetingAi {
    /// Coordinates not attacked yet; seeded on first use.
    unvisited: Option<BB>,
    /// Coordinates likely to hold the ship currently being chased.
    preferred: BB,
}

impl TargetingAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; the next attack seeds the pools again.
    pub fn reset(&mut self) {
        self.unvisited = None;
        self.preferred.clear_all();
    }

    /// `true` while following up on a hit.
    pub fn is_targeting(&self) -> bool {
        !self.preferred.is_empty()
    }

    /// Current members of the preferred pool.
    pub fn preferred(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.preferred
            .iter_set_bits()
            .map(|(x, y)| Coordinate::new(x as u8, y as u8))
    }

    /// Size of the unvisited pool, zero before it has been seeded.
    pub fn unvisited_len(&self) -> usize {
        self.unvisited.map_or(0, |u| u.count_ones())
    }

    fn unvisited(&mut self, board: &Gameboard) -> &mut BB {
        self.unvisited.get_or_insert_with(|| !board.attacked_mask())
    }

    /// Pick the next coordinate to attack and drop it from both pools.
    ///
    /// Draws uniformly from the preferred pool when it has members, from the
    /// unvisited pool otherwise. Entries that were attacked behind the AI's
    /// back are discarded.
    pub fn choose_target<R: Rng + ?Sized>(
        &mut self,
        board: &Gameboard,
        rng: &mut R,
    ) -> Result<Coordinate, BoardError> {
        self.unvisited(board);
        loop {
            let from_preferred = !self.preferred.is_empty();
            let pool = if from_preferred {
                self.preferred
            } else {
                match self.unvisited {
                    Some(u) if !u.is_empty() => u,
                    _ => return Err(BoardError::NoMovesLeft),
                }
            };

            let pick = rng.random_range(0..pool.count_ones());
            let (x, y) = pool.nth_set(pick).ok_or(BoardError::NoMovesLeft)?;
            let coord = Coordinate::new(x as u8, y as u8);
            self.forget(board, coord)?;

            if board.cell(coord)?.attacked {
                trace!("discarding stale target {coord}");
                continue;
            }
            debug!(
                "targeting {coord} ({})",
                if from_preferred { "follow-up" } else { "hunt" }
            );
            return Ok(coord);
        }
    }

    fn forget(&mut self, board: &Gameboard, coord: Coordinate) -> Result<(), BoardError> {
        let (x, y) = (coord.x as usize, coord.y as usize);
        self.preferred.clear(x, y)?;
        self.unvisited(board).clear(x, y)?;
        Ok(())
    }

    /// Attack `coord` on `board` and update the pools from the result.
    pub fn fire_at(
        &mut self,
        board: &mut Gameboard,
        coord: Coordinate,
    ) -> Result<AttackReport, BoardError> {
        let coord = coord.check()?;
        self.forget(board, coord)?;
        let outcome = board.attack(coord)?;
        if outcome.is_hit() {
            self.follow_up(board, coord)?;
        }
        Ok(AttackReport { coord, outcome })
    }

    /// Choose a target and attack it.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        board: &mut Gameboard,
        rng: &mut R,
    ) -> Result<AttackReport, BoardError> {
        let coord = self.choose_target(board, rng)?;
        self.fire_at(board, coord)
    }

    /// Play a whole turn against `target`: keep attacking until a miss.
    pub fn turn<R: Rng + ?Sized>(
        &mut self,
        target: &mut Player,
        rng: &mut R,
    ) -> Result<TurnReport, BoardError> {
        self.turn_while(target.board_mut(), rng, |_| true)
    }

    /// Like [`turn`](Self::turn), but stops early once `still_my_turn`
    /// returns `false`. The predicate is checked before every attack.
    pub fn turn_while<R, F>(
        &mut self,
        board: &mut Gameboard,
        rng: &mut R,
        mut still_my_turn: F,
    ) -> Result<TurnReport, BoardError>
    where
        R: Rng + ?Sized,
        F: FnMut(&Gameboard) -> bool,
    {
        let mut report = TurnReport::default();
        while still_my_turn(&*board) {
            let shot = self.step(board, rng)?;
            report.shots.push(shot);
            if !shot.outcome.is_hit() {
                break;
            }
        }
        Ok(report)
    }

    fn follow_up(&mut self, board: &Gameboard, hit: Coordinate) -> Result<(), BoardError> {
        for axis in [(1, 0), (0, 1)] {
            if self.confirmed_hit(board, hit, axis.0, axis.1)?
                || self.confirmed_hit(board, hit, -axis.0, -axis.1)?
            {
                self.preferred.clear_all();
                self.extend_run(board, hit, axis.0, axis.1)?;
                self.extend_run(board, hit, -axis.0, -axis.1)?;
                trace!("run through {hit} along {:?}: {:?}", axis, self.preferred);
                return Ok(());
            }
        }

        // up, right, down, left
        for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            if let Some(n) = hit.offset(dx, dy) {
                if !board.cell(n)?.attacked {
                    self.preferred.set(n.x as usize, n.y as usize)?;
                }
            }
        }
        trace!("first hit at {hit}, probing neighbours");
        Ok(())
    }

    fn confirmed_hit(
        &self,
        board: &Gameboard,
        from: Coordinate,
        dx: i8,
        dy: i8,
    ) -> Result<bool, BoardError> {
        match from.offset(dx, dy) {
            Some(n) => {
                let cell = board.cell(n)?;
                Ok(cell.attacked && cell.occupied)
            }
            None => Ok(false),
        }
    }

    /// Walk from `from` in direction `(dx, dy)` past attacked ship cells and
    /// queue the first unattacked cell. Stops at a miss or the edge.
    fn extend_run(
        &mut self,
        board: &Gameboard,
        from: Coordinate,
        dx: i8,
        dy: i8,
    ) -> Result<(), BoardError> {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dx, dy) {
            let cell = board.cell(next)?;
            if !cell.attacked {
                self.preferred.set(next.x as usize, next.y as usize)?;
                break;
            }
            if !cell.occupied {
                break;
            }
            cursor = next;
        }
        Ok(())
    }
}
