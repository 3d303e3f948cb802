use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use crate::game::{Board, Move};

pub const MOVE_PROMPT: &str =
    "Enter your move (row and column separated by space like (1 2)): ";

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    SaveScore,
    ShowLeaderboard,
    Quit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::SaveScore),
            "3" => Some(MenuChoice::ShowLeaderboard),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveInput {
    Malformed,
    OutOfRange,
}

/// Read one line without its line ending. End of input is an error, since
/// every prompt blocks until it gets an answer.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Print `message` without a newline and read the reply.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)
}

// Too large for i64 is still a number, just not one on the board.
fn parse_coordinate(token: &str) -> Result<i64, MoveInput> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => MoveInput::OutOfRange,
        _ => MoveInput::Malformed,
    })
}

// Exactly two integers, each 1..=3.
fn parse_move(line: &str) -> Result<Move, MoveInput> {
    let numbers: Vec<Result<i64, MoveInput>> =
        line.split_whitespace().map(parse_coordinate).collect();
    if numbers.contains(&Err(MoveInput::Malformed)) {
        return Err(MoveInput::Malformed);
    }
    match numbers[..] {
        [row, col] => Move::from_one_based(row?, col?).ok_or(MoveInput::OutOfRange),
        _ => Err(MoveInput::Malformed),
    }
}

/// Prompt until the player names an empty cell on `board`.
pub fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> io::Result<Move> {
    loop {
        let line = ask(input, output, MOVE_PROMPT)?;
        match parse_move(&line) {
            Ok(mv) if board.is_empty_at(mv) => return Ok(mv),
            Ok(_) => writeln!(output, "Cell is occupied")?,
            Err(MoveInput::OutOfRange) => writeln!(output, "Invalid move. Please try again")?,
            Err(MoveInput::Malformed) => writeln!(output, "Invalid input")?,
        }
    }
}

/// Prompt until one of the menu keys is entered.
pub fn read_menu_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<MenuChoice> {
    loop {
        let line = ask(input, output, "Enter your choice: ")?;
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Invalid choice, please try again")?,
        }
    }
}

pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    ask(input, output, "Enter your name: ")
}
