//! Computer move selection for tic-tac-toe.
//!
//! Two strategies behind one entry point: a one-ply heuristic that is
//! meant to be beatable, and a full-depth minimax that never loses.
//! Both are pure apart from the injected random source, which exists so
//! hosts can use a thread RNG while tests supply a seeded one.

mod easy;
mod minimax;

use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Strategy selector for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One-ply win/block heuristic with a random fallback.
    Easy,
    /// Exhaustive minimax; never loses.
    Hard,
}

/// Selects the computer's next move.
///
/// The caller is expected to hold the turn discipline: the game is not
/// already decided, and it is `ai`'s turn. Only emptiness is re-checked
/// here; a full board yields `None` as a defensive fallback. Any
/// returned position names a currently-empty square.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    human: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => easy::choose(board, ai, human, rng),
        Difficulty::Hard => minimax::choose(board, ai, human, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_both_difficulties_complete_the_open_row() {
        // X X _ / O O _ / _ _ _ with O to move: O wins at Middle-right.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let mut rng = StdRng::seed_from_u64(7);
            let pos = select_move(&board, Player::O, Player::X, difficulty, &mut rng);
            assert_eq!(pos, Some(Position::MiddleRight), "{difficulty:?}");
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut board = Board::new();
        for (index, pos) in Position::ALL.iter().enumerate() {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            board.set(*pos, Square::Occupied(player));
        }

        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(
                select_move(&board, Player::O, Player::X, difficulty, &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_selected_move_is_always_empty() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::X));

        for seed in 0..16 {
            for difficulty in [Difficulty::Easy, Difficulty::Hard] {
                let mut rng = StdRng::seed_from_u64(seed);
                let pos = select_move(&board, Player::O, Player::X, difficulty, &mut rng)
                    .expect("moves remain");
                assert!(board.is_empty(pos));
            }
        }
    }
}
