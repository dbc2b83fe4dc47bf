//! Micro-benchmarks for the two board validators.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validate
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlace_core::Board;
use gridlace_rules::{skyscrapers, sudoku};

fn sudoku_board() -> Board {
    Board::from_lines([
        "**** ****",
        "***1 ****",
        "**  3****",
        "* 4 1****",
        "     9 5 ",
        " 6  83  *",
        "3   7  **",
        "  8  2***",
        "  2  ****",
    ])
    .unwrap()
}

fn skyscrapers_board() -> Board {
    Board::from_lines([
        "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
    ])
    .unwrap()
}

fn bench_sudoku_validate(c: &mut Criterion) {
    let board = sudoku_board();
    c.bench_with_input(
        BenchmarkId::new("sudoku_validate", "9x9"),
        &board,
        |b, board| {
            b.iter(|| hint::black_box(sudoku::validate(hint::black_box(board))));
        },
    );
}

fn bench_skyscrapers_validate(c: &mut Criterion) {
    let board = skyscrapers_board();
    c.bench_with_input(
        BenchmarkId::new("skyscrapers_validate", "7x7"),
        &board,
        |b, board| {
            b.iter(|| hint::black_box(skyscrapers::validate(hint::black_box(board))));
        },
    );
}

criterion_group!(benches, bench_sudoku_validate, bench_skyscrapers_validate);
criterion_main!(benches);
