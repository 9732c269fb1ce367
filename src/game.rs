//! Typestate-based round state machine for tic-tac-toe.
//!
//! The game phase is encoded in a type parameter, so invalid operations
//! are impossible: a finished game has no `place()` method and an
//! in-progress game has no `winner()` method. Terminal phases stay
//! terminal until the host starts a fresh round.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{self, Line, Outcome};
use crate::types::{Board, Player, Square};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: round is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: round ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: round ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Round state with typestate phase encoding.
///
/// The type parameter `S` encodes the phase:
/// - `Game<InProgress>` - moves can be made
/// - `Game<Won>` - ended with a winner and a completed line
/// - `Game<Draw>` - ended with a full board and no line
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    winner: Option<(Player, Line)>,
    history: Vec<Move>,
    _state: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Round continues with the next player.
    InProgress(Game<InProgress>),
    /// Round ended with a winner.
    Won(Game<Won>),
    /// Round ended in a draw.
    Draw(Game<Draw>),
}

impl Game<InProgress> {
    /// Creates a new round with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Places the current player's mark at the given position, consuming
    /// the round and returning a transition.
    ///
    /// After the mark lands, the board is evaluated once: a completed
    /// line moves the round to `Won`, a full board to `Draw`, anything
    /// else stays `InProgress` with the turn handed to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, MoveError> {
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        match rules::evaluate(&self.board) {
            Outcome::Won { player, line } => Ok(GameTransition::Won(Game {
                board: self.board,
                to_move: self.to_move,
                winner: Some((player, line)),
                history: self.history,
                _state: PhantomData::<Won>,
            })),
            Outcome::Draw => Ok(GameTransition::Draw(Game {
                board: self.board,
                to_move: self.to_move,
                winner: None,
                history: self.history,
                _state: PhantomData::<Draw>,
            })),
            Outcome::InProgress => Ok(GameTransition::InProgress(Game {
                board: self.board,
                to_move: self.to_move.opponent(),
                winner: None,
                history: self.history,
                _state: PhantomData::<InProgress>,
            })),
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the round.
    ///
    /// Only exists on `Game<Won>`, which guarantees a winner.
    pub fn winner(&self) -> Player {
        self.winner.expect("won game must have winner").0
    }

    /// Returns the line the winner completed.
    pub fn winning_line(&self) -> Line {
        self.winner.expect("won game must have winner").1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LINES;

    #[test]
    fn test_new_round_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let game = Game::new();
        let GameTransition::InProgress(game) = game.place(Position::Center).expect("valid move")
        else {
            panic!("round should continue");
        };
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = Game::new();
        let GameTransition::InProgress(game) = game.place(Position::Center).expect("valid move")
        else {
            panic!("round should continue");
        };

        let err = game.place(Position::Center).expect_err("square is taken");
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    }

    #[test]
    fn test_win_transition_carries_line() {
        // X: 0, 1, 2 with O replies at 3, 4.
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game = match game.place(pos).expect("valid move") {
                GameTransition::InProgress(g) => g,
                other => panic!("round ended early: {other:?}"),
            };
        }

        match game.place(Position::TopRight).expect("valid move") {
            GameTransition::Won(won) => {
                assert_eq!(won.winner(), Player::X);
                assert_eq!(won.winning_line(), LINES[0]);
                assert_eq!(won.history().len(), 5);
            }
            other => panic!("expected a win: {other:?}"),
        }
    }

    #[test]
    fn test_draw_transition_on_full_board() {
        // X O X / X O O / O X X square by square, alternating from X.
        let order = [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ];

        let mut game = Game::new();
        for (turn, pos) in order.iter().enumerate() {
            match game.place(*pos).expect("valid move") {
                GameTransition::InProgress(g) => game = g,
                GameTransition::Draw(drawn) => {
                    assert_eq!(turn, 8, "draw only on the final square");
                    assert!(drawn.board().is_full());
                    return;
                }
                GameTransition::Won(won) => {
                    panic!("unexpected win for {:?}", won.winner())
                }
            }
        }
        panic!("game never reached a draw");
    }
}
