//! Core noughts and crosses logic: board, players, and the turn-by-turn state
//! machine that decides wins and draws.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Move, PlaceError, SIZE};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Phase};
