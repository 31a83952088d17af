//! Error types shared by the engine, the snapshot format, and the front end.
//!
//! The engine never terminates the process. Every failure is a [`NogoError`]
//! value and only the binary decides which exit code it becomes.

use std::fmt;
use std::io;

use crate::constants::*;

/// Everything that can stop a game from starting or continuing.
#[derive(Debug)]
pub enum NogoError {
    /// Wrong number of command-line arguments.
    Usage,
    /// A player type other than `h` or `c`.
    InvalidPlayerType,
    /// Height or width outside the accepted range.
    InvalidDimension,
    /// The saved game could not be opened.
    UnreadableFile(io::Error),
    /// The saved game was opened but its contents are malformed.
    SnapshotFormat(FormatError),
    /// The human player's input stream ended.
    EndOfInput,
    /// A move on an occupied or off-board point.
    IllegalMove { row: isize, col: isize },
    /// Writing to the output stream failed.
    Io(io::Error),
}

impl NogoError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            NogoError::Usage => EXIT_USAGE,
            NogoError::InvalidPlayerType => EXIT_PLAYER_TYPE,
            NogoError::InvalidDimension => EXIT_DIMENSION,
            NogoError::UnreadableFile(_) => EXIT_OPEN_FILE,
            NogoError::SnapshotFormat(_) => EXIT_FILE_CONTENTS,
            NogoError::EndOfInput => EXIT_END_OF_INPUT,
            NogoError::IllegalMove { .. } | NogoError::Io(_) => EXIT_INTERNAL,
        }
    }
}

impl fmt::Display for NogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NogoError::Usage => write!(f, "Usage: nogo p1type p2type [height width | filename]"),
            NogoError::InvalidPlayerType => write!(f, "Invalid player type"),
            NogoError::InvalidDimension => write!(f, "Invalid board dimension"),
            NogoError::UnreadableFile(_) => write!(f, "Unable to open file"),
            NogoError::SnapshotFormat(_) => write!(f, "Incorrect file contents"),
            NogoError::EndOfInput => write!(f, "End of input from user"),
            NogoError::IllegalMove { row, col } => write!(f, "Illegal move: {row} {col}"),
            NogoError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for NogoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NogoError::UnreadableFile(e) | NogoError::Io(e) => Some(e),
            NogoError::SnapshotFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatError> for NogoError {
    fn from(e: FormatError) -> Self {
        NogoError::SnapshotFormat(e)
    }
}

impl From<io::Error> for NogoError {
    fn from(e: io::Error) -> Self {
        NogoError::Io(e)
    }
}

/// The specific defect found in a saved game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The file is not valid UTF-8 text.
    NotText,
    /// The first line is not exactly nine integers.
    Header,
    /// Height or width outside the accepted range.
    Dimension,
    /// The player to move is neither 0 nor 1.
    ActivePlayer,
    /// A generator field is negative.
    Generator,
    /// Fewer grid lines than the header's height.
    MissingRow { row: usize },
    /// A grid line with the wrong number of cells.
    RowLength { row: usize },
    /// A grid cell that is not `.`, `O` or `X`.
    Cell { row: usize, col: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotText => write!(f, "file is not text"),
            FormatError::Header => write!(f, "header is not {HEADER_FIELDS} integers"),
            FormatError::Dimension => write!(f, "board dimension out of range"),
            FormatError::ActivePlayer => write!(f, "player to move must be 0 or 1"),
            FormatError::Generator => write!(f, "negative generator state"),
            FormatError::MissingRow { row } => write!(f, "missing grid row {row}"),
            FormatError::RowLength { row } => write!(f, "grid row {row} has the wrong length"),
            FormatError::Cell { row, col } => write!(f, "invalid cell at {row} {col}"),
        }
    }
}

impl std::error::Error for FormatError {}
