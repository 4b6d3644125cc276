use super::board::{Cell, ROWS};

/// A single board column: tokens stacked bottom to top in a fixed-size array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    cells: [Cell; ROWS],
    len: usize,
}

impl Column {
    pub const fn new() -> Self {
        Column {
            cells: [Cell::Empty; ROWS],
            len: 0,
        }
    }

    /// Number of tokens stacked in this column
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == ROWS
    }

    /// Cell at `row` (0 is the bottom); rows above the stack are empty
    pub fn get(&self, row: usize) -> Cell {
        self.cells[row]
    }

    /// Push a token on top of the stack, returns the row where it landed.
    /// Returns `None` when the column is already full.
    pub fn push(&mut self, cell: Cell) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let row = self.len;
        self.cells[row] = cell;
        self.len += 1;
        Some(row)
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}
