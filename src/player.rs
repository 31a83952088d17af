//! Players and how they choose moves.

use std::fmt;
use std::str::FromStr;

use crate::board::Token;
use crate::error::NogoError;
use crate::movegen::MoveGenerator;

/// Who controls a player, as given on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerType {
    Human,
    Computer,
}

impl FromStr for PlayerType {
    type Err = NogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(PlayerType::Human),
            "c" => Ok(PlayerType::Computer),
            _ => Err(NogoError::InvalidPlayerType),
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Human => write!(f, "h"),
            PlayerType::Computer => write!(f, "c"),
        }
    }
}

/// Per-player state that depends on who is in control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer(MoveGenerator),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub token: Token,
    pub kind: PlayerKind,
    /// Moves made so far; the player with fewer moves acts next.
    pub moves: u32,
}

impl Player {
    /// A player who has not moved yet, with a fresh generator if computer.
    pub fn new(token: Token, player_type: PlayerType, height: usize, width: usize) -> Self {
        let kind = match player_type {
            PlayerType::Human => PlayerKind::Human,
            PlayerType::Computer => {
                PlayerKind::Computer(MoveGenerator::new(token, height, width))
            }
        };
        Self {
            token,
            kind,
            moves: 0,
        }
    }

    pub fn player_type(&self) -> PlayerType {
        match self.kind {
            PlayerKind::Human => PlayerType::Human,
            PlayerKind::Computer(_) => PlayerType::Computer,
        }
    }

    pub fn generator(&self) -> Option<&MoveGenerator> {
        match &self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(g) => Some(g),
        }
    }
}
