#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::Gameboard;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use player::*;
pub use ship::*;
