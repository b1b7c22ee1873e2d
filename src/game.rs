//! Turn sequencing between a human side and the computer.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::{TargetingAi, TurnReport};
use crate::board::Gameboard;
use crate::common::{AttackOutcome, Coordinate, GameError};
use crate::config::FLEET;
use crate::fleet::random_fleet;
use crate::player::Player;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(&self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Finished { winner: Side },
}

/// Everything one game needs: both players, the computer's search state,
/// whose turn it is and the random source.
pub struct GameSession {
    players: [Player; 2],
    ai: TargetingAi,
    turn: Side,
    rng: SmallRng,
}

impl GameSession {
    /// Empty boards, human to move.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            players: [Player::human(), Player::computer()],
            ai: TargetingAi::new(),
            turn: Side::Human,
            rng,
        }
    }

    /// Session with a reproducible random source.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Mutable access for manual fleet setup.
    pub fn board_mut(&mut self, side: Side) -> &mut Gameboard {
        self.players[side.index()].board_mut()
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Hand the turn to the other side.
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
        debug!("turn passes to {:?}", self.turn);
    }

    /// Place a random [`FLEET`] on both boards.
    ///
    /// Only allowed before the first shot; use [`new_game`](Self::new_game)
    /// to start over.
    pub fn setup_random_fleets(&mut self) -> Result<(), GameError> {
        self.ensure_no_shots()?;
        self.place_fleet(Side::Human)?;
        self.place_fleet(Side::Computer)
    }

    /// Replace one side's fleet with a fresh random one, before any shot.
    pub fn reroll_fleet(&mut self, side: Side) -> Result<(), GameError> {
        self.ensure_no_shots()?;
        self.place_fleet(side)
    }

    /// Start over: re-rolled fleets, fresh AI state, human to move.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.ai.reset();
        self.turn = Side::Human;
        self.place_fleet(Side::Human)?;
        self.place_fleet(Side::Computer)
    }

    fn place_fleet(&mut self, side: Side) -> Result<(), GameError> {
        random_fleet(self.players[side.index()].board_mut(), &FLEET, &mut self.rng)?;
        if side == Side::Human {
            self.ai.reset();
        }
        Ok(())
    }

    fn ensure_no_shots(&self) -> Result<(), GameError> {
        if self
            .players
            .iter()
            .any(|p| !p.board().attacked_mask().is_empty())
        {
            return Err(GameError::ShotsFired);
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        for side in [Side::Human, Side::Computer] {
            let board = self.player(side).board();
            if board.ship_count() > 0 && board.all_ships_sunk() {
                return GameStatus::Finished {
                    winner: side.opponent(),
                };
            }
        }
        GameStatus::InProgress
    }

    fn ensure_playable(&self, side: Side) -> Result<(), GameError> {
        if self.players.iter().any(|p| p.board().ship_count() == 0) {
            return Err(GameError::NotReady);
        }
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.turn != side {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// The human attacks the computer's board.
    ///
    /// Repeats and hits keep the turn; a miss passes it to the computer.
    pub fn human_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, GameError> {
        self.ensure_playable(Side::Human)?;
        let outcome = self.players[Side::Computer.index()]
            .board_mut()
            .attack(coord)?;
        match outcome {
            AttackOutcome::Miss => self.next_turn(),
            AttackOutcome::Sunk => {
                info!("human sank a ship at {coord}");
                self.log_if_over();
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Let the computer play its turn against the human board.
    pub fn computer_turn(&mut self) -> Result<TurnReport, GameError> {
        self.ensure_playable(Side::Computer)?;
        let report = self.ai.turn_while(
            self.players[Side::Human.index()].board_mut(),
            &mut self.rng,
            |board| !board.all_ships_sunk(),
        )?;
        self.finish_turn(Side::Computer, &report);
        Ok(report)
    }

    /// Play `side`'s turn with an externally owned AI, for unattended games.
    pub fn autoplay_turn(
        &mut self,
        side: Side,
        ai: &mut TargetingAi,
    ) -> Result<TurnReport, GameError> {
        self.ensure_playable(side)?;
        let report = ai.turn_while(
            self.players[side.opponent().index()].board_mut(),
            &mut self.rng,
            |board| !board.all_ships_sunk(),
        )?;
        self.finish_turn(side, &report);
        Ok(report)
    }

    /// Computer turn with a fixed pause before each attack.
    #[cfg(feature = "std")]
    pub async fn computer_turn_paced(
        &mut self,
        delay: std::time::Duration,
    ) -> Result<TurnReport, GameError> {
        self.ensure_playable(Side::Computer)?;
        let mut report = TurnReport::default();
        loop {
            let board = self.players[Side::Human.index()].board_mut();
            if board.all_ships_sunk() {
                break;
            }
            tokio::time::sleep(delay).await;
            let shot = self.ai.step(board, &mut self.rng)?;
            report.shots.push(shot);
            if !shot.outcome.is_hit() {
                break;
            }
        }
        self.finish_turn(Side::Computer, &report);
        Ok(report)
    }

    fn finish_turn(&mut self, side: Side, report: &TurnReport) {
        debug!(
            "{:?} fired {} shots, {} hits, {} sunk",
            side,
            report.shots.len(),
            report.hits(),
            report.sunk()
        );
        if report.ended_on_miss() {
            self.next_turn();
        } else {
            self.log_if_over();
        }
    }

    fn log_if_over(&self) {
        if let GameStatus::Finished { winner } = self.status() {
            info!("game over, {:?} wins", winner);
        }
    }
}
