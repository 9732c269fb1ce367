//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine can probe hypothetical positions cheaply.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, LINES, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The outcome of evaluating a board.
///
/// Exactly one variant applies to any board. When more than one line is
/// complete, the first in `LINES` scan order is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Won {
        /// The player whose line is complete.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns true for terminal outcomes (`Won` or `Draw`).
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates a board snapshot.
///
/// Pure function of the board contents: scans the fixed line list for a
/// winner first, then falls back to the full-board draw check.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Won { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
