//! Validator for the colored-region number puzzle.
//!
//! A board is valid when every row, every column, and every region
//! signature contains no duplicate significant cell. Columns are checked
//! by transposing the board and reapplying the row rule; regions are
//! checked by extracting signatures and reapplying the same rule again.

use gridlace_core::Board;

use crate::{regions::region_signatures, uniqueness::is_unique};

/// Checks every row of the board for duplicate significant cells.
fn rows_are_unique(board: &Board) -> bool {
    board.rows().all(|row| is_unique(row.iter().copied()))
}

/// Checks the five region signatures for duplicate significant cells.
fn regions_are_unique(board: &Board) -> bool {
    region_signatures(board)
        .iter()
        .all(|signature| is_unique(signature.iter().copied()))
}

/// Returns `true` if the board satisfies all three uniqueness rules.
///
/// The board is expected to be the fixed 9x9 layout described in
/// [`regions`](crate::regions); the verdict is a single boolean with no
/// diagnostics, and a partially filled board is fine as long as the
/// filled cells do not clash.
///
/// # Examples
///
/// ```
/// use gridlace_core::Board;
/// use gridlace_rules::sudoku;
///
/// // Rows are fine, but two columns share a digit.
/// let board = Board::from_lines([
///     "**** ****", "***1 ****", "**  3****", "* 4 1****", "     9 5 ",
///     " 6  83  *", "3   1  **", "  8  2***", "  2  ****",
/// ])
/// .unwrap();
/// assert!(!sudoku::validate(&board));
/// ```
#[must_use]
pub fn validate(board: &Board) -> bool {
    rows_are_unique(board) && rows_are_unique(&board.transpose()) && regions_are_unique(board)
}
