//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a win condition: a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: [Position; 3],
}

impl Line {
    const fn new(cells: [Position; 3]) -> Self {
        Self { cells }
    }

    /// Returns the three positions of this line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Checks whether the line passes through the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "{} / {} / {}", a.label(), b.label(), c.label())
    }
}

/// The 8 fixed win conditions.
///
/// Scan order is part of the contract: rows top-to-bottom, columns
/// left-to-right, main diagonal, anti-diagonal. When two complete lines
/// coexist, the first in this list is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line::new([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed line, or
/// `None` if no line is complete. Scans `LINES` in declaration order and
/// reports the first qualifying line.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    for line in LINES {
        let [a, b, c] = line.cells();
        let sq = board.get(a);

        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}
