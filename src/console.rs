//! Line-oriented console play.
//!
//! The board is drawn before every turn. Human players are prompted with
//! `Player O> ` and answer with a move `row col`, or with `w<path>` to save
//! the game. Computer moves and the result are announced on the same stream.
//!
//! ## Example
//!
//! ```ignore
//! use nogo::console::Console;
//! let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let winner = console.run(&mut game)?;
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::board::{Point, Token};
use crate::constants::MAX_LINE_LEN;
use crate::error::NogoError;
use crate::game::{Game, HumanInput, TurnEvent};
use crate::player::PlayerType;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play until someone wins. Returns the winner.
    pub fn run(&mut self, game: &mut Game) -> Result<Token, NogoError> {
        loop {
            write!(self.output, "{}", game.board())?;
            match game.turn(self)? {
                TurnEvent::Won(winner) => {
                    writeln!(self.output, "Player {winner} wins")?;
                    self.output.flush()?;
                    return Ok(winner);
                }
                TurnEvent::Placed {
                    token,
                    row,
                    col,
                    by: PlayerType::Computer,
                } => writeln!(self.output, "Player {token}: {row} {col}")?,
                TurnEvent::Placed { .. } => {}
            }
        }
    }

    /// Next input line without its newline, or `None` if the line has to be
    /// discarded: longer than `MAX_LINE_LEN`, or the last line with no newline.
    fn read_line(&mut self) -> Result<Option<String>, NogoError> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => return Err(NogoError::EndOfInput),
            Ok(_) => {}
        }
        let Some(line) = buf.strip_suffix(b"\n") else {
            warn!(len = buf.len(), "discarding unterminated input line");
            return Ok(None);
        };
        if line.len() > MAX_LINE_LEN {
            warn!(len = line.len(), "discarding over-long input line");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn save(&self, game: &Game, path: &str) {
        if let Err(e) = game.snapshot().save(Path::new(path)) {
            warn!("save failed: {e:#}");
            eprintln!("Unable to save game");
        }
    }
}

impl<R: BufRead, W: Write> HumanInput for Console<R, W> {
    fn choose_move(&mut self, game: &Game) -> Result<Point, NogoError> {
        let token = game.active_player();
        loop {
            write!(self.output, "Player {token}> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                continue;
            };
            if let Some(path) = line.strip_prefix('w') {
                self.save(game, path);
                continue;
            }
            let valid = parse_move(&line)
                .filter(|&(row, col)| game.board().is_empty_and_in_bounds(row, col));
            if let Some((row, col)) = valid {
                return Ok((row as usize, col as usize));
            }
        }
    }
}

/// Read a leading integer the way C's `%d` does: optional whitespace, an
/// optional sign, then digits. Returns the value and the unread rest.
pub fn scan_int(s: &str) -> Option<(isize, &str)> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let mut value: isize = 0;
    for b in digits[..len].bytes() {
        let d = (b - b'0') as isize;
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some((value, &digits[len..]))
}

/// Parse `row col`. Anything after the second number is ignored.
pub fn parse_move(line: &str) -> Option<(isize, isize)> {
    let (row, rest) = scan_int(line)?;
    let (col, _) = scan_int(rest)?;
    Some((row, col))
}
