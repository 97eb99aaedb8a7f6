use crate::game::error::GameError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A row/column pair on the 3x3 grid.
///
/// Rows and columns count from 0, starting at the upper left. The absolute
/// field numbering runs 1..9 row-major:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
pub struct Coords {
    row: u8,
    column: u8,
}

impl Coords {
    /// Build coordinates from an absolute field number (1..9).
    pub fn from_field(field: u8) -> Result<Self, GameError> {
        if !(1..=9).contains(&field) {
            return Err(GameError::FieldOutOfRange { field });
        }
        Ok(Coords {
            row: (field - 1) / 3,
            column: (field - 1) % 3,
        })
    }

    /// Row index, 0..2 from the top.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index, 0..2 from the left.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// The absolute field number (1..9) of these coordinates.
    pub fn field(&self) -> u8 {
        self.row * 3 + self.column + 1
    }

    /// Linear offset into a 9-cell board array.
    pub(crate) fn index(&self) -> usize {
        (self.row * 3 + self.column) as usize
    }
}
