use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{coords::Coords, error::GameError};

/// One of the two players' marks. X always moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Side),
    Tie,
}

/// The eight winning lines as cell offsets: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A Tic-Tac-Toe board: nine cells addressed by field numbers 1..9.
///
/// The board is an immutable value: `apply` returns a new board and leaves
/// the original untouched. Identity is cell content only, so any two move
/// orders reaching the same marks produce equal boards. That canonical
/// identity is what the minimax index and the statistics map key on.
///
/// The derived ordering (empty < X < O, field 1 most significant) matches
/// the ordering of the numeric representation returned by `key`.
pub struct Board {
    cells: [Option<Side>; 9],
}

impl Board {
    /// A fresh, empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The mark at `field`, if any.
    pub fn at(&self, field: u8) -> Result<Option<Side>, GameError> {
        let coords = Coords::from_field(field)?;
        Ok(self.cells[coords.index()])
    }

    /// Place `side`'s mark at `field`, returning the resulting board.
    ///
    /// The original board is never modified, even when the move is illegal.
    pub fn apply(&self, side: Side, field: u8) -> Result<Board, GameError> {
        let coords = Coords::from_field(field)?;
        if let Some(mark) = self.cells[coords.index()] {
            return Err(GameError::FieldOccupied { field, mark });
        }
        let mut next = *self;
        next.cells[coords.index()] = Some(side);
        Ok(next)
    }

    /// Unoccupied field numbers in ascending order.
    pub fn free_fields(&self) -> Vec<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index as u8 + 1)
            .collect()
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Who won, if anyone?
    ///
    /// Scans the three rows, three columns, and two diagonals. A tie is
    /// declared only once no line is complete and no free field remains;
    /// `None` means the game is still in progress.
    pub fn winner(&self) -> Option<Outcome> {
        for line in LINES {
            if let Some(side) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(side) && self.cells[line[2]] == Some(side) {
                    return Some(Outcome::Win(side));
                }
            }
        }
        if self.is_full() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// Numeric representation of the board: one decimal digit per cell
    /// (0 empty, 1 X, 2 O), field 1 most significant.
    pub fn key(&self) -> u32 {
        self.cells.iter().fold(0, |key, cell| {
            key * 10
                + match cell {
                    None => 0,
                    Some(Side::X) => 1,
                    Some(Side::O) => 2,
                }
        })
    }
}

impl fmt::Display for Board {
    /// Renders the nine cells in field order, e.g. `XO-XX-OO-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                None => write!(f, "-")?,
                Some(side) => write!(f, "{side}")?,
            }
        }
        Ok(())
    }
}
