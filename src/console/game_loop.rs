use std::io::{BufRead, Write};

use super::prompt::read_human_move;
use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{GameOutcome, GameState, Player};

/// Play one game, human (X) first, until someone wins or the board fills.
///
/// The board is drawn before the first prompt and after every move. The
/// returned outcome's [`GameOutcome::score`] is the value offered for saving.
pub fn play_game<R, W, A>(input: &mut R, output: &mut W, agent: &mut A) -> Result<GameOutcome, GameError>
where
    R: BufRead,
    W: Write,
    A: Agent + ?Sized,
{
    let mut state = GameState::initial();
    write!(output, "{}", state.board())?;

    loop {
        let mover = state.current_player();
        let mv = match mover {
            Player::Human => read_human_move(input, output, state.board())?,
            Player::Computer => agent.select_move(state.board()),
        };

        let outcome = state
            .apply_move(mv)
            .map_err(|source| GameError::IllegalMove {
                player: mover.name(),
                mv,
                source,
            })?;

        if mover == Player::Computer {
            writeln!(output, "Computer chooses: {}", mv)?;
        }
        write!(output, "{}", state.board())?;

        if let Some(outcome) = outcome {
            let message = match outcome {
                GameOutcome::Winner(Player::Human) => "Congratulations, you win!",
                GameOutcome::Winner(Player::Computer) => "Computer wins!",
                GameOutcome::Draw => "It's a draw!",
            };
            writeln!(output, "{}", message)?;
            tracing::info!(?outcome, agent = agent.name(), "game finished");
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{Board, Move};
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Plays a fixed list of moves, one per call.
    pub(crate) struct ScriptedAgent {
        moves: VecDeque<Move>,
    }

    impl ScriptedAgent {
        pub(crate) fn new(moves: &[(usize, usize)]) -> Self {
            ScriptedAgent {
                moves: moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_move(&mut self, _board: &Board) -> Move {
            self.moves.pop_front().expect("script ran out of moves")
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn run(script: &str, agent: &mut dyn Agent) -> (Result<GameOutcome, GameError>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = play_game(&mut input, &mut output, agent);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_completes_top_row() {
        let mut agent = ScriptedAgent::new(&[(1, 0), (2, 2)]);
        let (result, out) = run("1 1\n1 2\n1 3\n", &mut agent);

        let outcome = result.unwrap();
        assert_eq!(outcome, GameOutcome::Winner(Player::Human));
        assert_eq!(outcome.score(), 1);
        assert!(out.contains("Computer chooses: (2, 1)"));
        assert!(out.contains("Computer chooses: (3, 3)"));
        assert!(out.ends_with("Congratulations, you win!\n"));
    }

    #[test]
    fn test_computer_wins() {
        let mut agent = ScriptedAgent::new(&[(0, 2), (1, 2), (2, 2)]);
        let (result, out) = run("1 1\n2 1\n3 2\n", &mut agent);

        let outcome = result.unwrap();
        assert_eq!(outcome.score(), -1);
        assert!(out.ends_with("Computer wins!\n"));
    }

    #[test]
    fn test_nine_moves_draw() {
        // X O X / X O O / O X X
        let mut agent = ScriptedAgent::new(&[(0, 1), (1, 1), (1, 2), (2, 0)]);
        let (result, out) = run("1 1\n1 3\n2 1\n3 2\n3 3\n", &mut agent);

        let outcome = result.unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(outcome.score(), 0);
        assert!(out.ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_board_drawn_before_first_prompt() {
        let mut agent = ScriptedAgent::new(&[(1, 0), (2, 2)]);
        let (_, out) = run("1 1\n1 2\n1 3\n", &mut agent);
        assert!(out.starts_with(&Board::new().to_string()));
    }

    #[test]
    fn test_bad_input_reprompts_mid_game() {
        let mut agent = ScriptedAgent::new(&[(1, 0), (2, 2)]);
        let (result, out) = run("1 1\n2 1\nnope\n1 2\n1 3\n", &mut agent);

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Human));
        assert!(out.contains("Cell is occupied"));
        assert!(out.contains("Invalid input"));
    }

    #[test]
    fn test_illegal_agent_move_is_reported() {
        let mut agent = ScriptedAgent::new(&[(0, 0)]);
        let (result, _) = run("1 1\n", &mut agent);
        assert!(matches!(
            result,
            Err(GameError::IllegalMove { player: "Computer", .. })
        ));
    }

    #[test]
    fn test_seeded_random_opponent_finishes() {
        let mut agent = RandomAgent::with_seed(3);
        // Offer every cell in order; occupied ones are re-prompted.
        let script = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n".repeat(5);
        let (result, _) = run(&script, &mut agent);
        assert!(result.is_ok());
    }
}
