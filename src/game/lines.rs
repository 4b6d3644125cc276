//! Line extraction for win detection.
//!
//! A line is a maximal straight run of cells in one of four orientations:
//! a column read bottom to top, a row read left to right, or a diagonal
//! ascending to the right or to the left. Win detection renders every line
//! as a sequence of cells and scans it for a run of identical tokens.

use super::board::{Board, Cell, COLS, ROWS};

/// Number of identical contiguous tokens that wins the game
pub const CONNECT: usize = 4;

/// Column `col` read bottom to top
pub fn column_line(board: &Board, col: usize) -> Vec<Cell> {
    (0..ROWS).map(|row| board.get(col, row)).collect()
}

/// Row `row` read left to right
pub fn row_line(board: &Board, row: usize) -> Vec<Cell> {
    (0..COLS).map(|col| board.get(col, row)).collect()
}

/// Starting cells of the diagonals ascending left to right: the whole left
/// edge, then the bottom edge without its corner.
pub fn up_right_starts() -> impl Iterator<Item = (usize, usize)> {
    (0..ROWS)
        .map(|row| (0, row))
        .chain((1..COLS).map(|col| (col, 0)))
}

/// Starting cells of the diagonals ascending right to left: the whole right
/// edge, then the bottom edge without its corner.
pub fn up_left_starts() -> impl Iterator<Item = (usize, usize)> {
    (0..ROWS)
        .map(|row| (COLS - 1, row))
        .chain((0..COLS - 1).map(|col| (col, 0)))
}

/// Walk up and to the right from `(col, row)` until leaving the grid
pub fn diagonal_up_right(board: &Board, col: usize, row: usize) -> Vec<Cell> {
    (0..)
        .map(|step| (col + step, row + step))
        .take_while(|&(c, r)| c < COLS && r < ROWS)
        .map(|(c, r)| board.get(c, r))
        .collect()
}

/// Walk up and to the left from `(col, row)` until leaving the grid
pub fn diagonal_up_left(board: &Board, col: usize, row: usize) -> Vec<Cell> {
    (0..=col)
        .map(|step| (col - step, row + step))
        .take_while(|&(_, r)| r < ROWS)
        .map(|(c, r)| board.get(c, r))
        .collect()
}

/// Every line on the board across all four orientations
pub fn all_lines(board: &Board) -> Vec<Vec<Cell>> {
    let columns = (0..COLS).map(|col| column_line(board, col));
    let rows = (0..ROWS).map(|row| row_line(board, row));
    let up_right = up_right_starts().map(|(col, row)| diagonal_up_right(board, col, row));
    let up_left = up_left_starts().map(|(col, row)| diagonal_up_left(board, col, row));

    columns.chain(rows).chain(up_right).chain(up_left).collect()
}

/// Find the first run of at least `len` identical non-empty cells.
/// Returns the repeated cell.
pub fn find_run(line: &[Cell], len: usize) -> Option<Cell> {
    let mut current = Cell::Empty;
    let mut count = 0;

    for &cell in line {
        if cell == Cell::Empty {
            current = Cell::Empty;
            count = 0;
            continue;
        }

        if cell == current {
            count += 1;
        } else {
            current = cell;
            count = 1;
        }

        if count >= len {
            return Some(cell);
        }
    }

    None
}
