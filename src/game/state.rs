use super::board::PlaceError;
use super::{Board, Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Leaderboard value of this outcome: +1 human win, -1 computer win, 0 draw
    pub fn score(self) -> i64 {
        match self {
            GameOutcome::Winner(Player::Human) => 1,
            GameOutcome::Winner(Player::Computer) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Awaiting(Player),
    Finished(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move is outside the board")]
    OutOfBounds,
    #[error("cell is occupied")]
    CellOccupied,
    #[error("game is over")]
    GameOver,
}

impl From<PlaceError> for MoveError {
    fn from(e: PlaceError) -> Self {
        match e {
            PlaceError::OutOfBounds => MoveError::OutOfBounds,
            PlaceError::CellOccupied => MoveError::CellOccupied,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state. The human always moves first.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Human,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::Finished(outcome),
            None => Phase::Awaiting(self.current_player),
        }
    }

    /// Place the current player's mark and advance the turn.
    ///
    /// A win is checked before a draw: a full board with a completed line
    /// belongs to the player who completed it.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board.place(mv, mover.to_cell())?;

        if self.board.has_won(mover.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();
        tracing::debug!(player = mover.name(), %mv, outcome = ?self.outcome, "move applied");

        Ok(self.outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
