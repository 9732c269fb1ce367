//! Tic-tac-toe engine: outcome evaluation and computer move selection.
//!
//! The core is two pure components:
//!
//! - **Rules** ([`evaluate`]): given a board snapshot, report whether a
//!   line is complete, the board is drawn, or play continues.
//! - **Engine** ([`select_move`]): given a board and a [`Difficulty`],
//!   pick the computer's next move - a beatable one-ply heuristic on
//!   Easy, exhaustive minimax on Hard.
//!
//! Neither holds state between calls. The [`GameSession`] layer owns
//! the mutable side: the current round (a typestate machine that makes
//! moves after game end unrepresentable), the play mode, and a running
//! score tally across rounds.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, GameSession, Mode, Player, Position};
//!
//! let mode = Mode::VsComputer {
//!     difficulty: Difficulty::Hard,
//!     computer: Player::O,
//! };
//! let mut session = GameSession::new(mode);
//!
//! session.play(Position::Center)?;
//! let (reply, _) = session.play_computer_turn(&mut rand::thread_rng())?;
//! assert!(!session.board().is_empty(reply));
//! # Ok::<(), tictactoe_engine::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod game;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use engine::{Difficulty, select_move};
pub use game::{Draw, Game, GameTransition, InProgress, Won};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, is_draw, is_full};
pub use session::{GameSession, Mode, RoundState, Scoreboard, SessionError};
pub use types::{Board, Player, Square};
