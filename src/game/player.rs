use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// The player who moves first on a fresh board
    pub const FIRST: Player = Player::O;

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }

    /// Token symbol used when rendering
    pub fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}
