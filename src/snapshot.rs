//! Saved-game text format.
//!
//! ```text
//! height width active  rowO colO movesO  rowX colX movesX
//! <height lines of width glyphs>
//! ```
//!
//! `active` is the index of the player to move (0 for `O`, 1 for `X`). The
//! per-player triples are the move generator's last published candidate and
//! its step count.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::board::{Board, Token};
use crate::constants::*;
use crate::error::{FormatError, NogoError};

/// Saved state of one player's move generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorState {
    pub row: u64,
    pub col: u64,
    pub moves: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    /// The player to move.
    pub active: Token,
    /// Generator state indexed by player.
    pub generators: [GeneratorState; 2],
}

impl Snapshot {
    /// Parse and validate a saved game.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut lines = text.split_inclusive('\n');

        let header = lines
            .next()
            .and_then(|l| l.strip_suffix('\n'))
            .ok_or(FormatError::Header)?;
        // The newline must follow the last integer directly.
        if header.ends_with(char::is_whitespace) {
            return Err(FormatError::Header);
        }
        let fields = header
            .split_whitespace()
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| FormatError::Header)?;
        let [height, width, active, fields @ ..] = fields.as_slice() else {
            return Err(FormatError::Header);
        };
        if fields.len() != HEADER_FIELDS - 3 {
            return Err(FormatError::Header);
        }

        let dimension = |n: i64| {
            usize::try_from(n)
                .ok()
                .filter(|n| (MIN_DIMENSION..=MAX_DIMENSION).contains(n))
                .ok_or(FormatError::Dimension)
        };
        let (height, width) = (dimension(*height)?, dimension(*width)?);
        let active = usize::try_from(*active)
            .ok()
            .and_then(Token::from_index)
            .ok_or(FormatError::ActivePlayer)?;
        let generator = |f: &[i64]| -> Result<GeneratorState, FormatError> {
            let field = |n: i64| u64::try_from(n).map_err(|_| FormatError::Generator);
            Ok(GeneratorState {
                row: field(f[0])?,
                col: field(f[1])?,
                moves: field(f[2])?,
            })
        };
        let generators = [generator(&fields[0..3])?, generator(&fields[3..6])?];

        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let line = lines
                .next()
                .and_then(|l| l.strip_suffix('\n'))
                .ok_or(FormatError::MissingRow { row })?;
            if line.chars().count() != width {
                return Err(FormatError::RowLength { row });
            }
            rows.push(line);
        }
        let board = Board::from_rows(&rows)?;

        Ok(Self {
            board,
            active,
            generators,
        })
    }

    /// Read a saved game from disk.
    ///
    /// # Errors
    /// [`NogoError::UnreadableFile`] if the file cannot be opened or read,
    /// [`NogoError::SnapshotFormat`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, NogoError> {
        let mut file = fs::File::open(path).map_err(NogoError::UnreadableFile)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(NogoError::UnreadableFile)?;
        let text = String::from_utf8(bytes).map_err(|_| FormatError::NotText)?;
        let snapshot = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            height = snapshot.board.height(),
            width = snapshot.board.width(),
            active = %snapshot.active,
            "loaded saved game"
        );
        Ok(snapshot)
    }

    /// Write the saved game to disk, replacing any existing file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_string())
            .with_context(|| format!("writing saved game to {}", path.display()))?;
        debug!(path = %path.display(), "saved game");
        Ok(())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [o, x] = &self.generators;
        writeln!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.board.height(),
            self.board.width(),
            self.active.index(),
            o.row,
            o.col,
            o.moves,
            x.row,
            x.col,
            x.moves
        )?;
        for row in self.board.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
