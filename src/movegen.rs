//! Deterministic move generator for computer players.
//!
//! Each computer player owns a cursor that advances by a fixed pattern and is
//! re-seeded from an affine function of the step count every
//! [`GENERATOR_PERIOD`] steps. The published candidate is the cursor reduced
//! modulo the board, so it is always on the board but may be occupied; the
//! game keeps stepping until it finds an empty point.
//!
//! The sequence depends only on the seed, the board size and the number of
//! steps taken, never on the stones on the board, so a saved generator
//! resumes exactly where it left off.

use tracing::trace;

use crate::board::{Point, Token};
use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveGenerator {
    factor: u64,
    height: u64,
    width: u64,
    /// `seed.row * width + seed.col`, fixed at construction.
    base: u64,
    /// Steps taken so far, used or not.
    moves: u64,
    row: u64,
    col: u64,
    next: Point,
}

impl MoveGenerator {
    /// Seed constants for a player.
    pub fn seed_for(token: Token) -> Seed {
        match token {
            Token::O => SEED_O,
            Token::X => SEED_X,
        }
    }

    /// A fresh generator for `token` on a `height` x `width` board.
    pub fn new(token: Token, height: usize, width: usize) -> Self {
        let seed = Self::seed_for(token);
        Self::restore(token, height, width, seed.row, seed.col, 0)
    }

    /// Resume a generator from a saved cursor and step count.
    ///
    /// The re-seed base is always derived from the player's seed and the
    /// board width; only the cursor and the step count are restored.
    pub fn restore(
        token: Token,
        height: usize,
        width: usize,
        row: u64,
        col: u64,
        moves: u64,
    ) -> Self {
        let seed = Self::seed_for(token);
        let (height, width) = (height as u64, width as u64);
        Self {
            factor: seed.factor,
            height,
            width,
            base: seed.row * width + seed.col,
            moves,
            row,
            col,
            next: ((row % height) as usize, (col % width) as usize),
        }
    }

    /// Advance the cursor by one step and publish a new candidate.
    pub fn step(&mut self) {
        self.moves += 1;
        let period = self.moves / GENERATOR_PERIOD;
        let n = (self.base + (period % GENERATOR_MODULUS) * self.factor) % GENERATOR_MODULUS;

        match (self.moves % GENERATOR_PERIOD) as usize {
            0 => {
                self.row = n / self.width;
                self.col = n % self.width;
            }
            k => {
                let (dr, dc) = GENERATOR_OFFSETS[k - 1];
                self.row += dr;
                self.col += dc;
            }
        }

        self.next = (
            (self.row % self.height) as usize,
            (self.col % self.width) as usize,
        );
        trace!(moves = self.moves, row = self.next.0, col = self.next.1, "generator step");
    }

    /// The point most recently published.
    pub fn candidate(&self) -> Point {
        self.next
    }

    /// Number of steps taken so far.
    pub fn moves_generated(&self) -> u64 {
        self.moves
    }
}

/// Endless stream of candidates, one step per item.
impl Iterator for MoveGenerator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.step();
        Some(self.next)
    }
}
