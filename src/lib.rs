//! NoGo: a capture-avoidance variant of Go.
//!
//! Two players take turns placing tokens on a rectangular board. Nothing is
//! ever removed; instead, a player whose string is left without liberties
//! loses. Players are humans typing moves or computers following a fixed,
//! reproducible move sequence, and a game in progress can be saved and
//! resumed.
//!
//! ## Modules
//!
//! - [`constants`] - Dimension limits, generator seeds, protocol limits
//! - [`board`] - Board storage and the move validation gate
//! - [`liberty`] - Liberty detection by flood fill
//! - [`movegen`] - Deterministic computer move generator
//! - [`player`] - Human and computer players
//! - [`game`] - Turn scheduling and game-over detection
//! - [`snapshot`] - Saved-game text format
//! - [`console`] - Line-oriented play over any reader and writer
//! - [`config`] - Command-line validation
//! - [`error`] - Error types and exit codes
//!
//! ## Example
//!
//! ```
//! use nogo::game::{Game, TurnEvent};
//! use nogo::player::PlayerType;
//!
//! let mut game = Game::new(4, 4, [PlayerType::Computer; 2]).unwrap();
//! let mut no_human = |_: &Game| -> Result<(usize, usize), nogo::error::NogoError> {
//!     unreachable!("both players are computers")
//! };
//! let winner = loop {
//!     if let TurnEvent::Won(winner) = game.turn(&mut no_human).unwrap() {
//!         break winner;
//!     }
//! };
//! println!("Player {winner} wins");
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod liberty;
pub mod movegen;
pub mod player;
pub mod snapshot;
