//! Ships and their placements on a board.

use alloc::vec::Vec;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing `x`.
    Horizontal,
    /// Extends along increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step from one segment to the next.
    pub(crate) fn step(&self) -> (u8, u8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A ship: how long it is and how many times it has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hit_count: usize,
    sunk: bool,
}

impl Ship {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            hit_count: 0,
            sunk: false,
        }
    }

    /// Register one hit. Hits past `length` are counted but change nothing.
    pub fn hit(&mut self) {
        self.hit_count += 1;
        if self.hit_count >= self.length {
            self.sunk = true;
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }
}

/// A ship bound to the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    ship: Ship,
    coordinates: Vec<Coordinate>,
    orientation: Orientation,
}

impl Placement {
    pub(crate) fn new(ship: Ship, coordinates: Vec<Coordinate>, orientation: Orientation) -> Self {
        Self {
            ship,
            coordinates,
            orientation,
        }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub(crate) fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Covered cells, from the origin outward.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coordinates.contains(&coord)
    }
}
