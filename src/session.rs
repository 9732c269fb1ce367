//! Game session management: the mutable state around the pure core.
//!
//! The rules and engine modules never hold state between calls; the
//! session owns the current round, the play mode, and the running score
//! tally across rounds, and is the single caller of `evaluate` (via the
//! round state machine) and `select_move`.

use crate::engine::{self, Difficulty};
use crate::game::{Draw, Game, GameTransition, InProgress, Won};
use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How the session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing the board.
    TwoPlayer,
    /// One human against the computer.
    VsComputer {
        /// Strategy the computer uses.
        difficulty: Difficulty,
        /// Mark the computer plays.
        computer: Player,
    },
}

/// Running tally of results across rounds. In-memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Scoreboard {
    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    fn record_draw(&mut self) {
        self.draws += 1;
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} - O {} - draws {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// The current round, wrapping the typestate phases for storage.
#[derive(Debug, Clone)]
pub enum RoundState {
    /// Round accepting moves.
    InProgress(Game<InProgress>),
    /// Round ended with a winner.
    Won(Game<Won>),
    /// Round ended in a draw.
    Drawn(Game<Draw>),
}

impl RoundState {
    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            RoundState::InProgress(game) => game.board(),
            RoundState::Won(game) => game.board(),
            RoundState::Drawn(game) => game.board(),
        }
    }

    /// Returns true if the round is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundState::InProgress(_))
    }
}

impl From<GameTransition> for RoundState {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => RoundState::InProgress(game),
            GameTransition::Won(game) => RoundState::Won(game),
            GameTransition::Draw(game) => RoundState::Drawn(game),
        }
    }
}

/// Error that can occur when driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The round is over; reset before playing again.
    #[display("Round is over; start a new round first")]
    RoundOver,
    /// The computer was asked to move when it is not its turn.
    #[display("It is not the computer's turn")]
    OutOfTurn,
    /// The computer was asked to move in a two-player session.
    #[display("Session has no computer player")]
    NoComputerPlayer,
}

impl std::error::Error for SessionError {}

/// A session: one mode, one round at a time, scores kept across rounds.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    round: RoundState,
    scoreboard: Scoreboard,
}

impl GameSession {
    /// Creates a new session with an empty board and a zeroed tally.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "creating game session");
        Self {
            mode,
            round: RoundState::InProgress(Game::new()),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current round state.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the running tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the player to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match &self.round {
            RoundState::InProgress(game) => Some(game.to_move()),
            _ => None,
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// On a terminal transition the tally is updated immediately; the
    /// round then rejects further moves until [`Self::reset_round`].
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<&RoundState, SessionError> {
        let RoundState::InProgress(game) = &self.round else {
            warn!(position = ?pos, "move after round ended");
            return Err(SessionError::RoundOver);
        };

        let transition = game.clone().place(pos).map_err(|err| {
            warn!(position = ?pos, error = %err, "invalid move");
            SessionError::SquareOccupied(pos)
        })?;

        self.round = RoundState::from(transition);
        match &self.round {
            RoundState::Won(won) => {
                info!(winner = %won.winner(), line = %won.winning_line(), "round won");
                self.scoreboard.record_win(won.winner());
            }
            RoundState::Drawn(_) => {
                info!("round drawn");
                self.scoreboard.record_draw();
            }
            RoundState::InProgress(game) => {
                debug!(position = ?pos, to_move = %game.to_move(), "move applied");
            }
        }

        Ok(&self.round)
    }

    /// Plays the computer's turn: one engine call on a board snapshot,
    /// applied like any other move.
    ///
    /// Returns the position the engine chose along with the resulting
    /// round state.
    #[instrument(skip(self, rng))]
    pub fn play_computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Position, &RoundState), SessionError> {
        let Mode::VsComputer {
            difficulty,
            computer,
        } = self.mode
        else {
            return Err(SessionError::NoComputerPlayer);
        };

        let RoundState::InProgress(game) = &self.round else {
            return Err(SessionError::RoundOver);
        };
        if game.to_move() != computer {
            warn!(computer = %computer, to_move = %game.to_move(), "computer asked to move out of turn");
            return Err(SessionError::OutOfTurn);
        }

        // Snapshot at call time; the engine never sees later mutations.
        let board = game.board().clone();
        let pos = engine::select_move(&board, computer, computer.opponent(), difficulty, rng)
            .ok_or(SessionError::RoundOver)?;

        debug!(position = ?pos, ?difficulty, "computer chose move");
        self.play(pos)?;
        Ok((pos, &self.round))
    }

    /// Starts a new round on an empty board. The tally carries over.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!(scoreboard = %self.scoreboard, "starting new round");
        self.round = RoundState::InProgress(Game::new());
    }
}
