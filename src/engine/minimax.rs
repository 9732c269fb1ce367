//! Optimal move selection via exhaustive minimax.
//!
//! The 3x3 board is small enough to search to full depth without
//! pruning or memoization. Each recursion frame works on its own copy
//! of the board, so sibling branches never alias.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks an optimal move for `ai`.
///
/// On an entirely empty board the opening is uniformly random; all nine
/// openings are drawish under optimal follow-up, so this varies play
/// without sacrificing optimality. Otherwise the full game tree is
/// searched and, among equally scored moves, the first found in
/// ascending index order is kept.
pub(super) fn choose<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    let moves = Position::valid_moves(board);
    if moves.is_empty() {
        return None;
    }

    // Randomized opening, not a tie-break: the search never runs here.
    if moves.len() == 9 {
        let pos = moves.choose(rng).copied();
        debug!(position = ?pos, "random opening");
        return pos;
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in moves {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(ai));
        let score = score(&next, human, ai);

        // Strict comparison keeps the first best-scoring move found.
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((pos, score)),
        }
    }

    let chosen = best.map(|(pos, _)| pos);
    debug!(position = ?chosen, "minimax choice");
    chosen
}

/// Scores a position from the engine's point of view: +1 for an eventual
/// `ai` win, -1 for an opponent win, 0 for a draw. `to_move` places the
/// next mark; marks alternate per ply until the game ends.
fn score(board: &Board, to_move: Player, ai: Player) -> i32 {
    if let Some((winner, _)) = rules::check_winner(board) {
        return if winner == ai { 1 } else { -1 };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == ai;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::valid_moves(board) {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(to_move));
        let value = score(&next, to_move.opponent(), ai);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
