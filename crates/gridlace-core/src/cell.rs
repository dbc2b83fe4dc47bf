//! Typed grid cells.

use std::fmt::{self, Display};

use crate::Digit;

/// One cell of a puzzle board.
///
/// The text form of a board uses exactly four character classes, and this
/// enum mirrors them:
///
/// - `'1'`-`'9'` - a resolved value ([`Cell::Digit`])
/// - `'*'` - no constraint here ([`Cell::Any`])
/// - `' '` - intentionally blank ([`Cell::Blank`])
/// - `'?'` - an unfilled Skyscrapers cell ([`Cell::Unresolved`])
///
/// Which cells count as "significant" for a uniqueness check depends on the
/// rule consuming them; the cell itself carries no such policy.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Cell, Digit};
///
/// assert_eq!(Cell::from_char('4'), Some(Cell::Digit(Digit::D4)));
/// assert_eq!(Cell::from_char('*'), Some(Cell::Any));
/// assert_eq!(Cell::from_char('x'), None);
/// assert_eq!(Cell::Blank.to_char(), ' ');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A resolved digit value.
    Digit(Digit),
    /// A border or filler cell carrying no constraint (`'*'`).
    Any,
    /// An intentionally blank cell (`' '`).
    Blank,
    /// A cell the player has not filled in yet (`'?'`, Skyscrapers only).
    Unresolved,
}

impl Cell {
    /// Creates a cell from its character form.
    ///
    /// Returns `None` for characters outside the board alphabet.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Any),
            ' ' => Some(Self::Blank),
            '?' => Some(Self::Unresolved),
            _ => Digit::from_char(c).map(Self::Digit),
        }
    }

    /// Returns the character form of this cell.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Digit(digit) => digit.to_char(),
            Self::Any => '*',
            Self::Blank => ' ',
            Self::Unresolved => '?',
        }
    }

    /// Returns the digit value if this cell is resolved.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Digit(digit) => Some(digit),
            _ => None,
        }
    }
}

// tinyvec-backed signature buffers need a default element; an
// unconstrained cell is the only sensible filler.
impl Default for Cell {
    fn default() -> Self {
        Self::Any
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Digit> for Cell {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        let alphabet = "123456789* ?";
        for c in alphabet.chars() {
            let cell = Cell::from_char(c).unwrap();
            assert_eq!(cell.to_char(), c);
        }
    }

    #[test]
    fn test_rejects_unknown_characters() {
        for c in ['0', 'a', '#', '\t', '\n'] {
            assert_eq!(Cell::from_char(c), None);
        }
    }

    #[test]
    fn test_digit_accessor() {
        assert_eq!(Cell::Digit(Digit::D6).digit(), Some(Digit::D6));
        assert_eq!(Cell::Any.digit(), None);
        assert_eq!(Cell::Blank.digit(), None);
        assert_eq!(Cell::Unresolved.digit(), None);
    }
}
