//! The shared uniqueness rule.
//!
//! Rows, columns, and region signatures are all checked by the same
//! predicate: after discarding placeholder cells, no value may appear
//! twice. Columns reuse it through
//! [`Board::transpose`](gridlace_core::Board::transpose) rather than
//! through a second column-specific implementation.

use gridlace_core::Cell;

/// Maps a significant cell to its bit in the seen-set.
///
/// Placeholders ([`Cell::Any`], [`Cell::Blank`]) map to `None` and are
/// skipped. [`Cell::Unresolved`] is significant: it compares equal to
/// other unresolved cells, matching the raw-value comparison the text
/// format implies.
fn significance_bit(cell: Cell) -> Option<u16> {
    match cell {
        Cell::Digit(digit) => Some(1 << digit.value()),
        Cell::Unresolved => Some(1),
        Cell::Any | Cell::Blank => None,
    }
}

/// Returns `true` if all significant cells are pairwise distinct.
///
/// Placeholder cells never influence the result, so an empty or
/// all-placeholder unit is vacuously unique.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell};
/// use gridlace_rules::uniqueness::is_unique;
///
/// let board = Board::from_lines(["* 4 1****"]).unwrap();
/// assert!(is_unique(board.row(0).unwrap().iter().copied()));
///
/// let duplicate = Board::from_lines(["**3 3****"]).unwrap();
/// assert!(!is_unique(duplicate.row(0).unwrap().iter().copied()));
/// ```
#[must_use]
pub fn is_unique<I>(cells: I) -> bool
where
    I: IntoIterator<Item = Cell>,
{
    let mut seen: u16 = 0;
    for cell in cells {
        let Some(bit) = significance_bit(cell) else {
            continue;
        };
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
