//! Adoble - CLI
//!
//! Themed word-guessing game with TUI and line modes.

use adoble::{
    commands::{reset_session, run_simple, state_share_link, viewed_state},
    config::{Config, GlobalArgs},
    logging::init_tracing,
    output::{print_session, print_share_link},
    session::{KeyValueStore, Session},
    wordlists::Catalog,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adoble",
    about = "Guess the Adobe-related word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Print a share link for the saved session, or for `--id`
    Share,

    /// Print the saved session, or `--id`: board, letters and tallies
    Status,

    /// Discard the saved session
    Reset,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_args(cli.global);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let catalog = config.load_catalog()?;
            run_play_command(open_session(&config, &catalog)?, &config)
        }
        Commands::Simple => {
            let catalog = config.load_catalog()?;
            run_simple_command(open_session(&config, &catalog)?, &config)
        }
        Commands::Share => run_share_command(&config),
        Commands::Status => run_status_command(&config),
        Commands::Reset => run_reset_command(&config),
    }
}

fn open_session<'a>(
    config: &Config,
    catalog: &'a Catalog,
) -> Result<Session<'a, Box<dyn KeyValueStore>>> {
    Session::initialize(catalog, config.open_store(), config.share_token.as_deref())
        .context("cannot start a game")
}

fn run_play_command(session: Session<'_, Box<dyn KeyValueStore>>, config: &Config) -> Result<()> {
    use adoble::interactive::{App, run_tui};

    let app = App::new(session, config.base_url.as_str());
    run_tui(app)
}

fn run_simple_command(
    mut session: Session<'_, Box<dyn KeyValueStore>>,
    config: &Config,
) -> Result<()> {
    run_simple(&mut session, &config.base_url)
}

fn run_share_command(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let store = config.open_store();

    match viewed_state(&store, &catalog, config.share_token.as_deref())? {
        Some(state) => print_share_link(&state_share_link(&state, &catalog, &config.base_url)?),
        None => println!("No saved game."),
    }
    Ok(())
}

fn run_status_command(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let store = config.open_store();

    match viewed_state(&store, &catalog, config.share_token.as_deref())? {
        Some(state) => print_session(&state, catalog.len()),
        None => println!("No saved game."),
    }
    Ok(())
}

fn run_reset_command(config: &Config) -> Result<()> {
    let mut store = config.open_store();
    if reset_session(&mut store)? {
        println!("Saved game removed.");
    } else {
        println!("No saved game.");
    }
    Ok(())
}
