//! Tally Toe - terminal front end
//!
//! Plays tic-tac-toe on stdin/stdout and keeps the running score in a
//! JSON file between runs.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use console::{Console, Input};
use std::io::{BufRead, Write};
use tally_toe::{FileStore, GameConfig, GameSession, KeyValueStore, MoveSignal, ScoreLedger};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Play { announce_delay_ms } => {
            let config = match announce_delay_ms {
                Some(ms) => config.with_announce_delay_ms(ms),
                None => config,
            };
            run_play(&config)
        }
        Command::Scores => run_scores(&config),
        Command::ResetScores => run_reset_scores(&config),
    }
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(&cli.config)?;
    Ok(match &cli.store {
        Some(store) => {
            info!(store = %store.display(), "Overriding score file");
            config.with_store_path(store.clone())
        }
        None => config,
    })
}

/// Runs an interactive game on the terminal.
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    let store = FileStore::open(config.store_path())?;
    let console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let mut session = GameSession::new(store, console, config);
    run_game(&mut session)
}

/// Reads moves until the player quits or input ends.
#[instrument(skip_all)]
fn run_game<S, R, W>(session: &mut GameSession<S, Console<R, W>>) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    loop {
        let player = *session.state().active();
        let input = match session.frontend_mut().prompt(player)? {
            Some(input) => input,
            None => {
                debug!("End of input");
                break;
            }
        };

        match input {
            Input::Quit => break,
            Input::Unknown => {
                session
                    .frontend_mut()
                    .say("Enter a cell number 0-8, a name like \"center\", or q to quit.")?;
            }
            Input::Play(index) => {
                if session.play(index)? == MoveSignal::Ignored {
                    session.frontend_mut().say("That cell is not available.")?;
                }
            }
        }
    }

    info!(
        x = session.ledger().wins(tally_toe::Player::X),
        o = session.ledger().wins(tally_toe::Player::O),
        "Leaving game"
    );
    Ok(())
}

/// Prints the running scores.
#[instrument(skip(config))]
fn run_scores(config: &GameConfig) -> Result<()> {
    let store = FileStore::open(config.store_path())?;
    let ledger = ScoreLedger::load(&store);
    print_scores(&mut std::io::stdout().lock(), &ledger)?;
    Ok(())
}

/// Writes the zero ledger.
#[instrument(skip(config))]
fn run_reset_scores(config: &GameConfig) -> Result<()> {
    let mut store = FileStore::open(config.store_path())?;
    ScoreLedger::zero().save(&mut store)?;
    info!(store = %config.store_path().display(), "Scores reset");
    print_scores(&mut std::io::stdout().lock(), &ScoreLedger::zero())?;
    Ok(())
}

fn print_scores(out: &mut impl Write, ledger: &ScoreLedger) -> std::io::Result<()> {
    writeln!(out, "Player X wins: {}", ledger.wins(tally_toe::Player::X))?;
    writeln!(out, "Player O wins: {}", ledger.wins(tally_toe::Player::O))
}
