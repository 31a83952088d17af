//! Rectangular NoGo board.
//!
//! Cells are stored row-major in a flat vector. Coordinates are `(row, col)`
//! with the origin in the top-left corner.

use std::fmt;

use crate::constants::*;
use crate::error::{FormatError, NogoError};

/// A player's token. `O` is the first player and `X` the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    O,
    X,
}

impl Token {
    /// Both tokens in player order.
    pub const ALL: [Token; 2] = [Token::O, Token::X];

    pub fn opponent(self) -> Self {
        match self {
            Token::O => Token::X,
            Token::X => Token::O,
        }
    }

    /// Player index used by the saved-game format.
    pub fn index(self) -> usize {
        match self {
            Token::O => 0,
            Token::X => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Token::O),
            1 => Some(Token::X),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Token::O => GLYPH_O,
            Token::X => GLYPH_X,
        }
    }

    /// Parse a board glyph. `Ok(None)` is an empty point.
    pub fn from_glyph(c: char) -> Result<Option<Self>, char> {
        match c {
            GLYPH_O => Ok(Some(Token::O)),
            GLYPH_X => Ok(Some(Token::X)),
            GLYPH_EMPTY => Ok(None),
            other => Err(other),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Option<Token>>,
}

fn dimension_in_range(n: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&n)
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// [`NogoError::InvalidDimension`] unless both sides are within
    /// `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(height: usize, width: usize) -> Result<Self, NogoError> {
        if !dimension_in_range(height) || !dimension_in_range(width) {
            return Err(NogoError::InvalidDimension);
        }
        Ok(Self {
            height,
            width,
            cells: vec![None; height * width],
        })
    }

    /// Build a board from rows of glyphs (`.`, `O`, `X`).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FormatError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if !dimension_in_range(height) || !dimension_in_range(width) {
            return Err(FormatError::Dimension);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(FormatError::RowLength { row });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Token::from_glyph(c).map_err(|_| FormatError::Cell { row, col })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Token at a point, `None` for an empty or off-board point.
    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// The validation gate for every move. Total over all coordinates.
    pub fn is_empty_and_in_bounds(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.height && col < self.width && self.cells[self.idx(row, col)].is_none()
    }

    /// Put a token on an empty point.
    ///
    /// Callers check [`Board::is_empty_and_in_bounds`] first; placing on an
    /// occupied or off-board point is a bug in the caller.
    pub fn place(&mut self, row: usize, col: usize, token: Token) {
        assert!(
            row < self.height && col < self.width,
            "place({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        let i = self.idx(row, col);
        debug_assert!(self.cells[i].is_none(), "place({row}, {col}) on occupied point");
        self.cells[i] = Some(token);
    }

    /// In-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        ORTHOGONAL.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }

    /// Every point holding `token`, in row-major order.
    pub fn stones(&self, token: Token) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(token))
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Rows of glyphs without the border, as stored in a saved game.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| {
            row.iter()
                .map(|cell| cell.map_or(GLYPH_EMPTY, Token::glyph))
                .collect()
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width);
        writeln!(f, "/{border}\\")?;
        for row in self.rows() {
            writeln!(f, "|{row}|")?;
        }
        writeln!(f, "\\{border}/")
    }
}
