//! Constants for board dimensions, computer move generation, and the text
//! protocol.
//!
//! Everything that has to match the saved-game format or the reproducible
//! computer move sequence lives here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board height or width.
pub const MIN_DIMENSION: usize = 4;

/// Largest accepted board height or width.
pub const MAX_DIMENSION: usize = 1000;

/// Offsets to the orthogonal neighbors of a point as `(row, col)` deltas.
/// Order: North, West, East, South
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Token of the first player (index 0).
pub const GLYPH_O: char = 'O';

/// Token of the second player (index 1).
pub const GLYPH_X: char = 'X';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';

// =============================================================================
// Computer Move Generation
// =============================================================================

/// Seed constants for one player's move generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    /// Initial cursor row.
    pub row: u64,
    /// Initial cursor column.
    pub col: u64,
    /// Multiplier applied every five steps when the cursor is re-seeded.
    pub factor: u64,
}

/// Generator seed for player `O`.
pub const SEED_O: Seed = Seed {
    row: 1,
    col: 4,
    factor: 29,
};

/// Generator seed for player `X`.
pub const SEED_X: Seed = Seed {
    row: 2,
    col: 10,
    factor: 17,
};

/// Modulus of the re-seed value.
pub const GENERATOR_MODULUS: u64 = 1_000_003;

/// The generator re-seeds its cursor every this many steps.
pub const GENERATOR_PERIOD: u64 = 5;

/// Cursor increments `(row, col)` for step remainders 1 through 4.
pub const GENERATOR_OFFSETS: [(u64, u64); 4] = [(1, 1), (2, 1), (1, 0), (0, 1)];

/// Skipped candidates between warnings while a computer searches for an
/// empty point.
pub const GENERATOR_STALL_WARNING: u64 = 1_000_000;

// =============================================================================
// Text Protocol
// =============================================================================

/// Longest accepted human input line, not counting the newline.
pub const MAX_LINE_LEN: usize = 70;

/// Number of integers on the first line of a saved game.
pub const HEADER_FIELDS: usize = 9;

// =============================================================================
// Process Exit Codes
// =============================================================================

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_PLAYER_TYPE: u8 = 2;
pub const EXIT_DIMENSION: u8 = 3;
pub const EXIT_OPEN_FILE: u8 = 4;
pub const EXIT_FILE_CONTENTS: u8 = 5;
pub const EXIT_END_OF_INPUT: u8 = 6;

/// Failures that are not part of the command-line contract.
pub const EXIT_INTERNAL: u8 = 7;
