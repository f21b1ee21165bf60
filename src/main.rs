//! Command-line driver: seat two players and play one game to the end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sticks::{ConsoleSink, DisplaySink, Game, MatchConfig, PlayerSpec, TracingSink};
use tracing::{error, instrument};
use tracing_subscriber::EnvFilter;

/// Play the three-row stick game between two seeded players.
#[derive(Parser, Debug)]
#[command(name = "sticks")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with a `players` list of `{ "name", "seed" }` entries
    #[arg(long, conflicts_with = "player")]
    config: Option<PathBuf>,

    /// A player as NAME:SEED; give it twice, seat 0 first
    #[arg(long, value_parser = parse_player)]
    player: Vec<PlayerSpec>,

    /// Send status lines to the log instead of stdout
    #[arg(long)]
    log_events: bool,
}

fn parse_player(raw: &str) -> std::result::Result<PlayerSpec, String> {
    let (name, seed) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SEED, got {raw:?}"))?;
    let seed = seed
        .parse::<i64>()
        .map_err(|err| format!("bad seed {seed:?}: {err}"))?;
    Ok(PlayerSpec::new(name, seed))
}

#[instrument]
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    if let Some(path) = &cli.config {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()));
    }
    if cli.player.is_empty() {
        return Ok(MatchConfig::default());
    }
    Ok(MatchConfig::new(cli.player.clone()))
}

fn play(config: MatchConfig, sink: Box<dyn DisplaySink>) -> Result<()> {
    let mut game = Game::from_config(config, sink)?;
    game.run()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.log_events { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let sink: Box<dyn DisplaySink> = if cli.log_events {
        Box::new(TracingSink)
    } else {
        Box::new(ConsoleSink::stdout())
    };

    println!("game start");
    if let Err(err) = play(config, sink) {
        error!(error = %err, "game aborted");
        println!("{err}");
    }
    Ok(())
}
