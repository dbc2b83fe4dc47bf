//! Region signature extraction for the colored-region number puzzle.
//!
//! The puzzle's regions are corner-shaped colored blocks, not 3x3 boxes.
//! Each of the five blocks is summarized as a signature: a short run of
//! cells read off the bottom border band, concatenated with a run read
//! off the left border band of the transposed board. The signatures are
//! then treated as ordinary units for the uniqueness rule.
//!
//! The scan directions and the two distinct caps encode the block
//! geometry of this specific board layout. They are deliberately literal;
//! the per-band fixtures in the tests below pin every one of them down.

use gridlace_core::{Board, Cell};
use tinyvec::ArrayVec;

/// Side length of the fixed-size colored-region board.
pub const BOARD_SIZE: usize = 9;

/// Number of colored blocks, one signature each.
pub const BAND_COUNT: usize = 5;

/// Cells taken from a bottom-band row, scanning right to left.
pub const ROW_CAP: usize = 5;

/// Cells taken from a left-band column, scanning top to bottom.
pub const COLUMN_CAP: usize = 4;

/// One region summarized as an ordered run of cells.
///
/// Blank cells are collected like any other non-`'*'` cell and consume
/// cap slots; the uniqueness rule discards them later. Dropping them
/// here instead would shift which cells fall inside the cap and change
/// verdicts.
pub type RegionSignature = ArrayVec<[Cell; ROW_CAP + COLUMN_CAP]>;

/// Derives the five region signatures of a board.
///
/// For band `i`, the row part takes the first [`ROW_CAP`] non-`'*'` cells
/// of row `height - 1 - i`, scanning right to left; the column part takes
/// the first [`COLUMN_CAP`] non-`'*'` cells of column `i`, scanning top
/// to bottom. The signature is the row part followed by the column part.
///
/// The geometry assumes a [`BOARD_SIZE`]-sided board; smaller boards
/// yield fewer or shorter signatures rather than failing.
///
/// # Examples
///
/// ```
/// use gridlace_core::Board;
/// use gridlace_rules::regions::region_signatures;
///
/// let board = Board::from_lines([
///     "**** ****", "***1 ****", "**  3****", "* 4 1****", "     9 5 ",
///     " 6  83  *", "3   1  **", "  8  2***", "  2  ****",
/// ])
/// .unwrap();
/// let signatures = region_signatures(&board);
/// assert_eq!(signatures.len(), 5);
/// ```
#[must_use]
pub fn region_signatures(board: &Board) -> Vec<RegionSignature> {
    let transposed = board.transpose();
    board
        .rows()
        .rev()
        .take(BAND_COUNT)
        .zip(transposed.rows().take(BAND_COUNT))
        .map(|(bottom_row, left_column)| {
            let mut signature = RegionSignature::new();
            signature.extend(
                bottom_row
                    .iter()
                    .rev()
                    .copied()
                    .filter(|cell| *cell != Cell::Any)
                    .take(ROW_CAP),
            );
            signature.extend(
                left_column
                    .iter()
                    .copied()
                    .filter(|cell| *cell != Cell::Any)
                    .take(COLUMN_CAP),
            );
            signature
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [&str; 9] = [
        "**** ****",
        "***1 ****",
        "**  3****",
        "* 4 1****",
        "     9 5 ",
        " 6  83  *",
        "3   1  **",
        "  8  2***",
        "  2  ****",
    ];

    fn cells(s: &str) -> Vec<Cell> {
        s.chars().map(|c| Cell::from_char(c).unwrap()).collect()
    }

    fn signature_text(signature: &RegionSignature) -> String {
        signature.iter().map(|cell| cell.to_char()).collect()
    }

    #[test]
    fn test_caps_fit_the_signature_buffer() {
        assert_eq!(ROW_CAP + COLUMN_CAP, BOARD_SIZE);
    }

    // One test per band so a geometry slip points at the exact band.

    #[test]
    fn test_band_0() {
        let board = Board::from_lines(FIXTURE).unwrap();
        // Row part of band 0 reads the last row from the right; blanks count.
        assert_eq!(signature_text(&region_signatures(&board)[0]), "  2    3 ");
    }

    #[test]
    fn test_band_1() {
        let board = Board::from_lines(FIXTURE).unwrap();
        assert_eq!(signature_text(&region_signatures(&board)[1]), "2  8   6 ");
    }

    #[test]
    fn test_band_2() {
        let board = Board::from_lines(FIXTURE).unwrap();
        assert_eq!(signature_text(&region_signatures(&board)[2]), "  1   4  ");
    }

    #[test]
    fn test_band_3() {
        let board = Board::from_lines(FIXTURE).unwrap();
        assert_eq!(signature_text(&region_signatures(&board)[3]), "  38 1   ");
    }

    #[test]
    fn test_band_4() {
        let board = Board::from_lines(FIXTURE).unwrap();
        assert_eq!(signature_text(&region_signatures(&board)[4]), " 5 9   31");
    }

    #[test]
    fn test_blanks_consume_cap_slots() {
        // The row part of band 0 is "  2  ": two blanks, the digit, two
        // more blanks. Five cells collected even though only one matters
        // to uniqueness.
        let board = Board::from_lines(FIXTURE).unwrap();
        let signature = &region_signatures(&board)[0];
        assert_eq!(signature.len(), 9);
        assert_eq!(&signature[..5], &cells("  2  ")[..]);
    }

    #[test]
    fn test_stars_are_skipped_not_collected() {
        let board = Board::from_lines(["1*2*3", "*****", "4*5*6", "*****", "7*8*9"]).unwrap();
        // Bottom row reversed is 9 8 7 once stars drop out; column 0 top
        // to bottom is 1 4 7.
        assert_eq!(signature_text(&region_signatures(&board)[0]), "987147");
    }

    #[test]
    fn test_short_boards_produce_short_bands() {
        let board = Board::from_lines(["12", "34"]).unwrap();
        let signatures = region_signatures(&board);
        assert_eq!(signatures.len(), 2);
        assert_eq!(signature_text(&signatures[0]), "4313");
        assert_eq!(signature_text(&signatures[1]), "2124");
    }
}
