use crate::game::{Board, Move};

/// Anything that can pick the computer's next move.
pub trait Agent {
    /// Select an empty cell on `board`.
    ///
    /// Callers guarantee at least one cell is empty; the game loop checks for
    /// a win or draw before asking.
    fn select_move(&mut self, board: &Board) -> Move;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
