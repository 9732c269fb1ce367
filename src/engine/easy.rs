//! Heuristic move selection: a deliberately beatable opponent.
//!
//! Looks exactly one ply ahead for immediate wins and blocks, prefers
//! the center, then falls back to a random empty square. No deeper
//! lookahead is intended.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks a move for `ai` using the win / block / center / random ladder.
///
/// Each scan runs over empty squares in ascending index order and stops
/// at the first match. With multiple simultaneous threats only the
/// first-found square is blocked, even if another square would cover
/// more threats at once; this first-match behavior is intentional.
pub(super) fn choose<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = completing_move(board, ai) {
        debug!(position = ?pos, "taking immediate win");
        return Some(pos);
    }

    if let Some(pos) = completing_move(board, human) {
        debug!(position = ?pos, "blocking opponent win");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("taking center");
        return Some(Position::Center);
    }

    let pos = Position::valid_moves(board).choose(rng).copied();
    debug!(position = ?pos, "random fallback");
    pos
}

/// Finds the first empty square, in ascending index order, where placing
/// `player` completes a line.
fn completing_move(board: &Board, player: Player) -> Option<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .find(|&pos| {
            let mut probe = board.clone();
            probe.set(pos, Square::Occupied(player));
            rules::check_winner(&probe).is_some_and(|(winner, _)| winner == player)
        })
}
