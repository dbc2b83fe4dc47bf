//! Rule checkers for grid puzzles.
//!
//! This crate decides whether a board satisfies the rules of its puzzle
//! kind. It never searches for solutions; every function is a pure
//! predicate over an immutable [`Board`](gridlace_core::Board).
//!
//! # Overview
//!
//! - [`uniqueness`]: The shared row rule - all significant cells in a unit
//!   are pairwise distinct
//! - [`visibility`]: Skyscrapers visibility counting and border hint
//!   checking
//! - [`regions`]: Region signature extraction for the colored-region
//!   number puzzle
//! - [`sudoku`]: The colored-region number puzzle validator
//! - [`skyscrapers`]: The Skyscrapers validator
//!
//! Both validators share a transpose-then-reapply-row-rule shape: columns
//! are checked by transposing the board and reusing the row logic, so
//! there is exactly one implementation of each rule.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Board;
//! use gridlace_rules::skyscrapers;
//!
//! let board = Board::from_lines([
//!     "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
//! ])
//! .unwrap();
//! assert!(skyscrapers::validate(&board));
//! ```

pub mod regions;
pub mod skyscrapers;
pub mod sudoku;
pub mod uniqueness;
pub mod visibility;
