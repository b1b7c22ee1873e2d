//! Gameboard: cell state, ship placement and attack resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{AttackOutcome, BoardError, Cell, Coordinate, Neighbor};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Placement, Ship};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// One player's side of the ocean.
///
/// Cell state lives in two bit planes, `occupied` and `attacked`; ship
/// coverage is looked up through the placement registry, which keeps
/// insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct Gameboard {
    occupied: BB,
    attacked: BB,
    placements: Vec<Placement>,
}

impl Gameboard {
    /// Create an empty board (no ships, nothing attacked).
    pub fn new() -> Self {
        Gameboard {
            occupied: BB::new(),
            attacked: BB::new(),
            placements: Vec::new(),
        }
    }

    /// Number of cells along each side.
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> Result<Cell, BoardError> {
        let c = coord.check()?;
        Ok(Cell {
            attacked: self.attacked.get(c.x as usize, c.y as usize)?,
            occupied: self.occupied.get(c.x as usize, c.y as usize)?,
        })
    }

    /// Placed ships in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn ship_count(&self) -> usize {
        self.placements.len()
    }

    /// Ships that are still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.placements.iter().filter(|p| !p.ship().is_sunk()).count()
    }

    /// Placement covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Placement> {
        self.placements.iter().find(|p| p.contains(coord))
    }

    /// Every coordinate that has not been attacked yet, row by row.
    pub fn unattacked(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (!self.attacked)
            .iter_set_bits()
            .map(|(x, y)| Coordinate::new(x as u8, y as u8))
    }

    pub(crate) fn attacked_mask(&self) -> BB {
        self.attacked
    }

    /// Horizontal placement, the default orientation.
    pub fn add_ship_horizontal(
        &mut self,
        length: usize,
        origin: Coordinate,
    ) -> Result<&Placement, BoardError> {
        self.add_ship(length, origin, Orientation::Horizontal)
    }

    /// Place a ship of `length` starting at `origin`.
    ///
    /// A ship that would run off the far edge is moved back until it fits.
    /// Every covered cell and all of its neighbours, diagonals included, must
    /// be free of ships; otherwise the board is left untouched and the first
    /// offending neighbour is reported.
    pub fn add_ship(
        &mut self,
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<&Placement, BoardError> {
        let origin = origin.check()?;
        let size = BOARD_SIZE as usize;
        if length == 0 || length > size {
            return Err(BoardError::InvalidLength(length));
        }

        let (mut x, mut y) = (origin.x as usize, origin.y as usize);
        match orientation {
            Orientation::Horizontal if x + length > size => x = size - length,
            Orientation::Vertical if y + length > size => y = size - length,
            _ => {}
        }

        let (dx, dy) = orientation.step();
        let coordinates: Vec<Coordinate> = (0..length)
            .map(|i| Coordinate::new((x + i * dx as usize) as u8, (y + i * dy as usize) as u8))
            .collect();

        for &coord in &coordinates {
            self.check_spacing(coord)?;
        }

        for coord in &coordinates {
            self.occupied.set(coord.x as usize, coord.y as usize)?;
        }
        self.placements
            .push(Placement::new(Ship::new(length), coordinates, orientation));
        let last = self.placements.len() - 1;
        Ok(&self.placements[last])
    }

    fn check_spacing(&self, coord: Coordinate) -> Result<(), BoardError> {
        for neighbor in Neighbor::ALL {
            let (dx, dy) = neighbor.offset();
            if let Some(n) = coord.offset(dx, dy) {
                if self.occupied.get(n.x as usize, n.y as usize)? {
                    return Err(BoardError::PositionTaken(neighbor));
                }
            }
        }
        Ok(())
    }

    /// Attack `coord`. Returns `false` if the cell was already attacked, in
    /// which case nothing changes.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<bool, BoardError> {
        Ok(self.attack(coord)? != AttackOutcome::AlreadyAttacked)
    }

    /// Attack `coord` and report what happened.
    pub fn attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, BoardError> {
        let c = coord.check()?;
        let (x, y) = (c.x as usize, c.y as usize);
        if !self.attacked.set(x, y)? {
            return Ok(AttackOutcome::AlreadyAttacked);
        }
        if !self.occupied.get(x, y)? {
            return Ok(AttackOutcome::Miss);
        }

        match self.placements.iter_mut().find(|p| p.contains(c)) {
            Some(placement) => {
                let ship = placement.ship_mut();
                ship.hit();
                if ship.is_sunk() && ship.hit_count() == ship.length() {
                    Ok(AttackOutcome::Sunk)
                } else {
                    Ok(AttackOutcome::Hit)
                }
            }
            // occupancy without a placement cannot be built through add_ship
            None => Ok(AttackOutcome::Hit),
        }
    }

    /// `true` when every placed ship is sunk. Vacuously true on an empty board.
    pub fn all_ships_sunk(&self) -> bool {
        self.placements.iter().all(|p| p.ship().is_sunk())
    }

    /// Return to the empty state: every cell unattacked and unoccupied, and
    /// no ships registered.
    pub fn reset_board_matrix(&mut self) {
        self.occupied.clear_all();
        self.attacked.clear_all();
        self.placements.clear();
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Gameboard {{\n  occupied: {:?},\n  attacked: {:?},\n  placements: {:?}\n}}",
            self.occupied, self.attacked, self.placements
        )
    }
}
