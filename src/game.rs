//! Turn scheduling and game-over detection.
//!
//! A turn is:
//! 1. Scan the board for a string without liberties. The owner of such a
//!    string has lost. The player about to move is scanned first, except on
//!    the first turn after a load, where the player not on move is.
//! 2. Pick the player to move: the one with fewer moves, `O` on a tie.
//! 3. Get a move from the generator (computer) or from [`HumanInput`].
//! 4. Place the token and count the move.
//!
//! The engine performs no I/O itself. Human moves come through the
//! [`HumanInput`] seam and every outcome is returned as a [`TurnEvent`] or a
//! [`NogoError`].

use tracing::{debug, info, warn};

use crate::board::{Board, Point, Token};
use crate::constants::GENERATOR_STALL_WARNING;
use crate::error::NogoError;
use crate::liberty::find_dead_group;
use crate::movegen::MoveGenerator;
use crate::player::{Player, PlayerKind, PlayerType};
use crate::snapshot::{GeneratorState, Snapshot};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Over { winner: Token },
}

/// What happened during one call to [`Game::turn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The game is over.
    Won(Token),
    /// A token was placed.
    Placed {
        token: Token,
        row: usize,
        col: usize,
        by: PlayerType,
    },
}

/// Source of moves for human players.
pub trait HumanInput {
    /// Choose a move for `game.active_player()`.
    ///
    /// Implementations keep asking until they have a point that passes
    /// [`Board::is_empty_and_in_bounds`]. They may save the game in the
    /// meantime; doing so does not use up the turn.
    fn choose_move(&mut self, game: &Game) -> Result<Point, NogoError>;
}

impl<F> HumanInput for F
where
    F: FnMut(&Game) -> Result<Point, NogoError>,
{
    fn choose_move(&mut self, game: &Game) -> Result<Point, NogoError> {
        self(game)
    }
}

pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Whose strings the game-over scan looks at first.
    checked_first: Token,
    state: GameState,
}

impl Game {
    /// A fresh game on an empty board.
    pub fn new(height: usize, width: usize, types: [PlayerType; 2]) -> Result<Self, NogoError> {
        let board = Board::new(height, width)?;
        let players = Token::ALL.map(|t| Player::new(t, types[t.index()], height, width));
        debug!(height, width, o = %types[0], x = %types[1], "new game");
        Ok(Self {
            board,
            players,
            checked_first: Token::X,
            state: GameState::InProgress,
        })
    }

    /// Resume a saved game.
    ///
    /// Move counts are not saved, so they are rebuilt from the player to move:
    /// `O` has made one move more than `X` when it is `X`'s turn.
    pub fn from_snapshot(snapshot: Snapshot, types: [PlayerType; 2]) -> Self {
        let Snapshot {
            board,
            active,
            generators,
        } = snapshot;
        let (height, width) = (board.height(), board.width());

        let mut players = Token::ALL.map(|token| {
            let saved = generators[token.index()];
            let kind = match types[token.index()] {
                PlayerType::Human => PlayerKind::Human,
                PlayerType::Computer => PlayerKind::Computer(MoveGenerator::restore(
                    token,
                    height,
                    width,
                    saved.row,
                    saved.col,
                    saved.moves,
                )),
            };
            Player {
                token,
                kind,
                moves: 0,
            }
        });
        players[Token::O.index()].moves = active.index() as u32;

        Self {
            board,
            players,
            checked_first: active.opponent(),
            state: GameState::InProgress,
        }
    }

    /// Capture the game so it can be resumed with [`Game::from_snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        let (height, width) = (self.board.height(), self.board.width());
        let generators = self.players.each_ref().map(|p| match &p.kind {
            PlayerKind::Computer(g) => {
                let (row, col) = g.candidate();
                GeneratorState {
                    row: row as u64,
                    col: col as u64,
                    moves: g.moves_generated(),
                }
            }
            PlayerKind::Human => {
                let seed = MoveGenerator::seed_for(p.token);
                GeneratorState {
                    row: seed.row % height as u64,
                    col: seed.col % width as u64,
                    moves: 0,
                }
            }
        });
        Snapshot {
            board: self.board.clone(),
            active: self.active_player(),
            generators,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, token: Token) -> &Player {
        &self.players[token.index()]
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player with fewer moves; `O` when they are level.
    pub fn active_player(&self) -> Token {
        if self.players[Token::X.index()].moves < self.players[Token::O.index()].moves {
            Token::X
        } else {
            Token::O
        }
    }

    /// Look for a string without liberties and end the game if one exists.
    ///
    /// Returns the winner. Once the game is over the winner never changes.
    pub fn check_game_over(&mut self) -> Option<Token> {
        if let GameState::Over { winner } = self.state {
            return Some(winner);
        }
        for token in [self.checked_first, self.checked_first.opponent()] {
            if let Some((row, col)) = find_dead_group(&self.board, token) {
                let winner = token.opponent();
                info!(%winner, row, col, "string without liberties");
                self.state = GameState::Over { winner };
                return Some(winner);
            }
        }
        None
    }

    /// Place the active player's token at `(row, col)`.
    ///
    /// This is the only way a human move reaches the board. It does not check
    /// whether the game is already over.
    ///
    /// # Errors
    /// [`NogoError::IllegalMove`] if the point is occupied or off the board.
    pub fn play(&mut self, row: isize, col: isize) -> Result<(), NogoError> {
        if !self.board.is_empty_and_in_bounds(row, col) {
            return Err(NogoError::IllegalMove { row, col });
        }
        let token = self.active_player();
        self.apply(token, (row as usize, col as usize));
        Ok(())
    }

    /// Play the active player's next generated move.
    ///
    /// Steps the generator past occupied candidates, takes the first empty
    /// one, then steps once more so the generator is primed for the next turn.
    /// Returns `None` without doing anything if the active player is human.
    ///
    /// The board must have an empty point. [`Game::turn`] guarantees this by
    /// checking for a finished game first, since a full board always holds a
    /// string without liberties.
    pub fn computer_move(&mut self) -> Option<Point> {
        let token = self.active_player();
        let board = &self.board;
        let PlayerKind::Computer(generator) = &mut self.players[token.index()].kind else {
            return None;
        };

        let mut skipped = 0u64;
        while !is_free(board, generator.candidate()) {
            generator.step();
            skipped += 1;
            if skipped % GENERATOR_STALL_WARNING == 0 {
                warn!(%token, skipped, "generator has not found an empty point");
            }
        }
        let point = generator.candidate();
        generator.step();
        debug!(%token, skipped, "generated move");

        self.apply(token, point);
        Some(point)
    }

    /// Run one turn: check for a finished game, then let the active player
    /// move.
    pub fn turn<H: HumanInput>(&mut self, human: &mut H) -> Result<TurnEvent, NogoError> {
        if let Some(winner) = self.check_game_over() {
            return Ok(TurnEvent::Won(winner));
        }

        let token = self.active_player();
        let by = self.player(token).player_type();
        let (row, col) = match self.computer_move() {
            Some(point) => point,
            None => {
                let (row, col) = human.choose_move(self)?;
                self.play(row as isize, col as isize)?;
                (row, col)
            }
        };
        Ok(TurnEvent::Placed { token, row, col, by })
    }

    fn apply(&mut self, token: Token, (row, col): Point) {
        self.board.place(row, col, token);
        self.players[token.index()].moves += 1;
        self.checked_first = token.opponent();
        debug!(%token, row, col, "placed");
    }
}

fn is_free(board: &Board, (row, col): Point) -> bool {
    board.is_empty_and_in_bounds(row as isize, col as isize)
}
