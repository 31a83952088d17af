//! Game setup from the command line.
//!
//! `nogo p1type p2type [height width | filename]`
//!
//! Player types are `h` (human) or `c` (computer). Two trailing arguments
//! start a new game of that size; one names a saved game to resume.

use std::path::PathBuf;

use tracing::debug;

use crate::console::scan_int;
use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::NogoError;
use crate::game::Game;
use crate::player::PlayerType;
use crate::snapshot::Snapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Start {
    Fresh { height: usize, width: usize },
    Load(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Player types in player order (`O` then `X`).
    pub players: [PlayerType; 2],
    pub start: Start,
}

impl GameConfig {
    /// Validate the positional arguments (without the program name).
    ///
    /// Checks run in order: argument count, first player type, second
    /// player type, board dimensions.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, NogoError> {
        let (p1, p2, rest) = match args {
            [p1, p2, rest @ ..] if (1..=2).contains(&rest.len()) => (p1, p2, rest),
            _ => return Err(NogoError::Usage),
        };
        let players = [p1.as_ref().parse()?, p2.as_ref().parse()?];

        let start = match rest {
            [height, width] => Start::Fresh {
                height: dimension(height.as_ref())?,
                width: dimension(width.as_ref())?,
            },
            [path] => Start::Load(PathBuf::from(path.as_ref())),
            _ => return Err(NogoError::Usage),
        };
        debug!(?players, ?start, "configuration");
        Ok(Self { players, start })
    }

    /// Create the game, loading the saved file if one was named.
    pub fn build(self) -> Result<Game, NogoError> {
        match self.start {
            Start::Fresh { height, width } => Game::new(height, width, self.players),
            Start::Load(path) => {
                let snapshot = Snapshot::load(&path)?;
                Ok(Game::from_snapshot(snapshot, self.players))
            }
        }
    }
}

/// A board dimension, read like C's `atoi`: the leading integer, or 0.
fn dimension(arg: &str) -> Result<usize, NogoError> {
    let n = scan_int(arg).map_or(0, |(n, _)| n);
    usize::try_from(n)
        .ok()
        .filter(|n| (MIN_DIMENSION..=MAX_DIMENSION).contains(n))
        .ok_or(NogoError::InvalidDimension)
}
