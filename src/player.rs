use crate::board::Gameboard;

/// Who drives a player's attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A participant: an identity flag paired with the board they own.
#[derive(Debug, Clone)]
pub struct Player {
    kind: PlayerKind,
    board: Gameboard,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            board: Gameboard::new(),
        }
    }

    pub fn human() -> Self {
        Self::new(PlayerKind::Human)
    }

    pub fn computer() -> Self {
        Self::new(PlayerKind::Computer)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }
}
