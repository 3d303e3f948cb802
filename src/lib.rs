//! # Noughts and Crosses
//!
//! A console noughts and crosses game against a computer opponent that picks
//! uniformly at random among the empty cells, with a JSON leaderboard kept
//! in a flat text file.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait and the random computer opponent
//! - [`console`] — Prompts, game loop, and menu shell
//! - [`leaderboard`] — Score table and its file store
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod leaderboard;
