use crate::game::{Board, Move};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from the empty cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, OS entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Move {
        let moves = board.empty_cells();
        assert!(!moves.is_empty(), "No empty cells available");
        let idx = self.rng.random_range(0..moves.len());
        moves[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameState};

    #[test]
    fn test_random_agent_selects_empty_cell() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        board.place(Move::new(0, 0), Cell::X).unwrap();
        board.place(Move::new(1, 1), Cell::O).unwrap();
        board.place(Move::new(2, 2), Cell::X).unwrap();

        for _ in 0..100 {
            let mv = agent.select_move(&board);
            assert!(board.is_empty_at(mv), "Move {} is not empty", mv);
        }
    }

    #[test]
    fn test_random_agent_takes_last_cell() {
        let mut agent = RandomAgent::with_seed(7);
        let mut board = Board::new();
        for mv in board.empty_cells() {
            if mv != Move::new(1, 2) {
                board.place(mv, Cell::X).unwrap();
            }
        }
        assert_eq!(agent.select_move(&board), Move::new(1, 2));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_random_agents_play_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let mv = if turn % 2 == 0 {
                agent1.select_move(state.board())
            } else {
                agent2.select_move(state.board())
            };
            state.apply_move(mv).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
        assert!(turn <= 9);
    }

    #[test]
    #[should_panic(expected = "No empty cells available")]
    fn test_full_board_panics() {
        let mut board = Board::new();
        for mv in board.empty_cells() {
            board.place(mv, Cell::O).unwrap();
        }
        RandomAgent::with_seed(1).select_move(&board);
    }

    #[test]
    fn test_random_agent_name() {
        assert_eq!(RandomAgent::new().name(), "Random");
    }
}
