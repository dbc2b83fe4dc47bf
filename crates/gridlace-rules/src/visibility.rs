//! Skyscrapers visibility counting and hint checking.
//!
//! A border hint states how many buildings are visible from that end of
//! the line: a building is visible when it is strictly taller than every
//! building before it in the scan direction. The two ends of a line are
//! checked independently; an end whose border cell is not a digit carries
//! no constraint.

use gridlace_core::Cell;

/// Which end of a line a hint sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// The first cell; visibility is scanned left to right.
    Left,
    /// The last cell; visibility is scanned right to left.
    Right,
}

/// Counts the buildings visible when scanning the segment front to back.
///
/// A running maximum starts at zero; each digit strictly exceeding it is
/// counted and becomes the new maximum. Non-digit cells never change the
/// count or the maximum.
///
/// # Examples
///
/// ```
/// use gridlace_core::Cell;
/// use gridlace_rules::visibility::count_visible;
///
/// let segment: Vec<Cell> = "12453".chars().map(|c| Cell::from_char(c).unwrap()).collect();
/// assert_eq!(count_visible(segment), 4);
/// assert_eq!(count_visible(Vec::new()), 0);
/// ```
#[must_use]
pub fn count_visible<I>(segment: I) -> usize
where
    I: IntoIterator<Item = Cell>,
{
    let mut tallest = 0_u8;
    let mut count = 0;
    for cell in segment {
        if let Cell::Digit(digit) = cell
            && digit.value() > tallest
        {
            tallest = digit.value();
            count += 1;
        }
    }
    count
}

/// Checks the hint on one end of a line.
///
/// The line includes both border cells; the visibility scan covers only
/// the interior between them, reversed when the hint sits on the right
/// end. A non-digit border cell places no constraint on its end, so the
/// check is vacuously satisfied.
///
/// Lines shorter than two cells have no border pair and are treated as
/// unconstrained.
///
/// # Examples
///
/// ```
/// use gridlace_core::Cell;
/// use gridlace_rules::visibility::{LineEnd, line_satisfies_hint};
///
/// let line: Vec<Cell> = "412453*".chars().map(|c| Cell::from_char(c).unwrap()).collect();
/// assert!(line_satisfies_hint(&line, LineEnd::Left));
///
/// let wrong: Vec<Cell> = "452453*".chars().map(|c| Cell::from_char(c).unwrap()).collect();
/// assert!(!line_satisfies_hint(&wrong, LineEnd::Left));
/// ```
#[must_use]
pub fn line_satisfies_hint(line: &[Cell], end: LineEnd) -> bool {
    let Some((&hint, rest)) = (match end {
        LineEnd::Left => line.split_first(),
        LineEnd::Right => line.split_last(),
    }) else {
        return true;
    };
    let Cell::Digit(expected) = hint else {
        return true;
    };
    let Some(interior) = (match end {
        LineEnd::Left => rest.split_last().map(|(_, interior)| interior),
        LineEnd::Right => rest.split_first().map(|(_, interior)| interior),
    }) else {
        return true;
    };
    let count = match end {
        LineEnd::Left => count_visible(interior.iter().copied()),
        LineEnd::Right => count_visible(interior.iter().rev().copied()),
    };
    count == usize::from(expected.value())
}

/// Checks both end hints of a line.
#[must_use]
pub fn line_satisfies_hints(line: &[Cell]) -> bool {
    line_satisfies_hint(line, LineEnd::Left) && line_satisfies_hint(line, LineEnd::Right)
}
