//! # connect-four-rs
//!
//! Rules engine for _Connect Four_: two players alternately drop pieces into
//! the columns of a vertical grid. A piece falls to the lowest free slot of
//! its column. Four pieces in a row (horizontal, vertical or diagonal) win;
//! a full board without such a line is a tie.
//!
//! ## Modules
//!
//! - [`board`]: grid storage and the column-drop rule
//! - [`game`]: current player, status and the move state machine
//! - [`win`]: four-in-a-row detection
//! - [`config`]: board dimensions, loadable from TOML
//! - [`error`]: error types

#![deny(missing_debug_implementations)]

pub mod board;
pub mod config;
pub mod error;
pub mod game;
mod player;
pub mod win;

pub use board::{Cell, Gameboard, Position};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{Game, GameStatus, Move, MoveOutcome};
pub use player::Player;
