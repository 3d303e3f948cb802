use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The person at the keyboard, playing X
    Human,
    /// The random opponent, playing O
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Convert player to the mark they place
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::X,
            Player::Computer => Cell::O,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Computer => "Computer",
        }
    }
}
