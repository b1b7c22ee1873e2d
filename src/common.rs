//! Common types: coordinates, cell views, attack outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A position on the board: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether both components lie in `[0, BOARD_SIZE)`.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coordinate> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if x < 0 || y < 0 || x >= BOARD_SIZE as i16 || y >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Coordinate::new(x as u8, y as u8))
    }

    pub(crate) fn check(self) -> Result<Self, BoardError> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(BoardError::OutOfBounds {
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((x, y): (u8, u8)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only view of one grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub attacked: bool,
    pub occupied: bool,
}

/// Result of resolving an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell had been attacked before; nothing changed.
    AlreadyAttacked,
    /// First attack on an empty cell.
    Miss,
    /// First attack on an occupied cell; the ship is still afloat.
    Hit,
    /// First attack on an occupied cell and it sank the ship.
    Sunk,
}

impl AttackOutcome {
    /// `true` for hits, including the one that sinks a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Sunk)
    }
}

/// Which cell around a ship segment broke the spacing rule.
///
/// `Up` is `y + 1` and `Right` is `x + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Itself,
    Right,
    Left,
    Up,
    Down,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl Neighbor {
    /// Check order used during placement.
    pub const ALL: [Neighbor; 9] = [
        Neighbor::Itself,
        Neighbor::Right,
        Neighbor::Left,
        Neighbor::Up,
        Neighbor::Down,
        Neighbor::UpRight,
        Neighbor::DownRight,
        Neighbor::UpLeft,
        Neighbor::DownLeft,
    ];

    pub fn offset(&self) -> (i8, i8) {
        match self {
            Neighbor::Itself => (0, 0),
            Neighbor::Right => (1, 0),
            Neighbor::Left => (-1, 0),
            Neighbor::Up => (0, 1),
            Neighbor::Down => (0, -1),
            Neighbor::UpRight => (1, 1),
            Neighbor::DownRight => (1, -1),
            Neighbor::UpLeft => (-1, 1),
            Neighbor::DownLeft => (-1, -1),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Neighbor::Itself => "Position",
            Neighbor::Right => "Right position",
            Neighbor::Left => "Left position",
            Neighbor::Up => "Top position",
            Neighbor::Down => "Bottom position",
            Neighbor::UpRight => "Top right position",
            Neighbor::DownRight => "Bottom right position",
            Neighbor::UpLeft => "Top left position",
            Neighbor::DownLeft => "Bottom left position",
        }
    }
}

/// Errors returned by Gameboard and targeting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate lies outside the board.
    OutOfBounds { x: u8, y: u8 },
    /// Ship length is zero or longer than the board.
    InvalidLength(usize),
    /// Placement would touch or overlap another ship.
    PositionTaken(Neighbor),
    /// The fleet builder ran out of full-board attempts.
    NoValidBoard { attempts: usize },
    /// The targeting pools are empty; every cell has been attacked.
    NoMovesLeft,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside of the board", x, y)
            }
            BoardError::InvalidLength(len) => write!(f, "Ship length {} cannot fit on the board", len),
            BoardError::PositionTaken(n) => write!(f, "Cannot create ship; {} is already taken", n.name()),
            BoardError::NoValidBoard { attempts } => {
                write!(f, "No valid board found after {} attempts", attempts)
            }
            BoardError::NoMovesLeft => write!(f, "No unattacked cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by [`GameSession`](crate::GameSession) turn operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// The requested side does not hold the turn.
    NotYourTurn,
    /// A fleet has already been sunk.
    GameOver,
    /// At least one board has no ships yet.
    NotReady,
    /// Fleets cannot change once either board has been attacked.
    ShotsFired,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::NotYourTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NotReady => write!(f, "Both fleets must be placed before attacking"),
            GameError::ShotsFired => write!(f, "Fleets are fixed once the first shot is fired"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
