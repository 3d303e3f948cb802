use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use noughts_and_crosses::ai::RandomAgent;
use noughts_and_crosses::config::{AppConfig, DEFAULT_CONFIG_FILE};
use noughts_and_crosses::console::App;
use noughts_and_crosses::leaderboard::LeaderboardStore;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .with_context(|| format!("loading config from {}", DEFAULT_CONFIG_FILE))?;

    let agent = RandomAgent::from_seed_option(config.computer.seed);
    let store = LeaderboardStore::new(config.leaderboard.path.clone());
    tracing::debug!(leaderboard = %store.path().display(), seeded = config.computer.seed.is_some(), "starting");

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), Box::new(agent), store);
    app.run().context("game session failed")?;

    Ok(())
}
