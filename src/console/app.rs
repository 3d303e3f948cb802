use std::io::{BufRead, Write};

use super::game_loop::play_game;
use super::prompt::{read_menu_choice, read_name, MenuChoice};
use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{Board, GameOutcome};
use crate::leaderboard::LeaderboardStore;

const MENU: &str = "\
Enter one of the following options:
1 - Play the game
2 - Save your score in the leaderboard
3 - Load and display the leaderboard
q - End the program
";

/// The interactive menu shell: play, save score, show leaderboard, quit.
pub struct App<R, W> {
    input: R,
    output: W,
    agent: Box<dyn Agent>,
    store: LeaderboardStore,
    last_outcome: Option<GameOutcome>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, agent: Box<dyn Agent>, store: LeaderboardStore) -> Self {
        App {
            input,
            output,
            agent,
            store,
            last_outcome: None,
        }
    }

    /// Result of the most recent game, if one has been played
    pub fn last_outcome(&self) -> Option<GameOutcome> {
        self.last_outcome
    }

    /// Main application loop. Returns when the player quits.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.welcome()?;
        loop {
            write!(self.output, "\n{}", MENU)?;
            match read_menu_choice(&mut self.input, &mut self.output)? {
                MenuChoice::Play => self.play()?,
                MenuChoice::SaveScore => self.save_score()?,
                MenuChoice::ShowLeaderboard => self.show_leaderboard()?,
                MenuChoice::Quit => break,
            }
        }
        tracing::debug!("player quit");
        Ok(())
    }

    fn welcome(&mut self) -> Result<(), GameError> {
        writeln!(
            self.output,
            "Welcome to the \"Unbeatable Noughts and Crosses\" game.\nThe board layout is shown below:\n"
        )?;
        write!(self.output, "{}", Board::new())?;
        Ok(())
    }

    fn play(&mut self) -> Result<(), GameError> {
        let outcome = play_game(&mut self.input, &mut self.output, self.agent.as_mut())?;
        self.last_outcome = Some(outcome);
        Ok(())
    }

    fn save_score(&mut self) -> Result<(), GameError> {
        let Some(outcome) = self.last_outcome else {
            writeln!(self.output, "Play a game before saving a score")?;
            return Ok(());
        };
        let name = read_name(&mut self.input, &mut self.output)?;
        self.store.record_score(&name, outcome.score())?;
        Ok(())
    }

    fn show_leaderboard(&mut self) -> Result<(), GameError> {
        let leaders = self.store.load()?;
        writeln!(self.output, "Leaderboard:")?;
        write!(self.output, "{}", leaders)?;
        Ok(())
    }
}
