//! The puzzle board and its text form.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Cell;

/// An immutable rectangular grid of [`Cell`]s.
///
/// A board is constructed once from equal-length text rows and then only
/// read; every rule function takes `&Board` and returns a verdict without
/// mutating anything. Rows are stored top to bottom, cells left to right.
///
/// Construction validates the text form: every row must have the same
/// length, and every character must belong to the board alphabet
/// (`'1'`-`'9'`, `'*'`, `' '`, `'?'`). Rule violations are not detected
/// here; a parseable board can still fail validation.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell};
///
/// let board = Board::from_lines(["**1", "2 3", "***"]).unwrap();
/// assert_eq!(board.height(), 3);
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.cell(2, 1), Some(Cell::from_char('3').unwrap()));
/// assert_eq!(board.to_string(), "**1\n2 3\n***");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

/// An error produced when board text cannot be turned into a [`Board`].
///
/// Parse errors are deliberately distinct from rule violations: a board
/// that parses may still validate to `false`, but a board that fails to
/// parse never reaches the rules at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A row's length differs from the first row's length.
    #[display("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length established by the first row.
        expected: usize,
    },
    /// A character outside the board alphabet.
    #[display("unrecognized character {character:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
}

impl Board {
    /// Builds a board from an ordered sequence of text rows.
    ///
    /// The caller is responsible for stripping line endings; rows are taken
    /// verbatim. An empty sequence produces an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::RaggedRow`] if any row's length differs
    /// from the first row's, and [`ParseBoardError::InvalidCharacter`] for
    /// characters outside the board alphabet.
    pub fn from_lines<I>(lines: I) -> Result<Self, ParseBoardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut width = 0;
        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut row = Vec::with_capacity(width);
            for (x, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(ParseBoardError::InvalidCharacter {
                    character: c,
                    row: y,
                    column: x,
                })?;
                row.push(cell);
            }
            if y == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(ParseBoardError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            rows.push(row);
        }
        Ok(Self { rows, width })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the board has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.height() == self.width
    }

    /// Returns the row at index `y`, if present.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Returns the cell at column `x` of row `y`, if present.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Produces the transposed board: `result[i][j] == self[j][i]`.
    ///
    /// The result has `width` rows of length `height`. Applying the
    /// operation twice on any board yields the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Board;
    ///
    /// let board = Board::from_lines(["12", "34"]).unwrap();
    /// assert_eq!(board.transpose().to_string(), "13\n24");
    /// assert_eq!(board.transpose().transpose(), board);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let rows = (0..self.width)
            .map(|x| self.rows.iter().map(|row| row[x]).collect())
            .collect();
        Self {
            rows,
            width: self.height(),
        }
    }

    /// Returns `true` if no cell is [`Cell::Unresolved`].
    ///
    /// The Skyscrapers validator uses this as a gate: an unfinished board
    /// can never be judged valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .all(|cell| *cell != Cell::Unresolved)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
