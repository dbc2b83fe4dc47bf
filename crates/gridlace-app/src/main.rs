//! Gridlace command line interface.
//!
//! Reads a board file, validates it against the selected puzzle kind,
//! and reports the verdict.
//!
//! # Usage
//!
//! ```sh
//! gridlace --kind skyscrapers boards/check.txt
//! ```
//!
//! The board file holds one text row per line; rows are taken verbatim
//! after the line terminator is removed, so meaningful trailing blanks
//! survive. The verdict goes to stdout (`valid` or `invalid`) and to the
//! exit status: 0 for valid, 1 for invalid, 2 when the file cannot be
//! read or is not a well-formed board.

use std::{fs, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use gridlace_core::Board;
use gridlace_rules::{skyscrapers, sudoku};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PuzzleKind {
    /// The colored-region number puzzle (fixed 9x9 layout).
    Sudoku,
    /// The Skyscrapers puzzle with border visibility hints.
    Skyscrapers,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle kind to validate against.
    #[arg(long, value_name = "KIND")]
    kind: PuzzleKind,

    /// Path to the board file, one text row per line.
    #[arg(value_name = "BOARD")]
    path: PathBuf,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match fs::read_to_string(&args.path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.path.display());
            process::exit(2);
        }
    };

    let board = match Board::from_lines(text.lines()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {err}", args.path.display());
            process::exit(2);
        }
    };
    log::debug!(
        "validating {}x{} board as {:?}",
        board.height(),
        board.width(),
        args.kind
    );

    let valid = match args.kind {
        PuzzleKind::Sudoku => sudoku::validate(&board),
        PuzzleKind::Skyscrapers => skyscrapers::validate(&board),
    };

    if valid {
        println!("valid");
    } else {
        println!("invalid");
        process::exit(1);
    }
}
