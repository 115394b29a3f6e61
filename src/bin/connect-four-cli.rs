#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from,
    clippy::multiple_crate_versions
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_rs::{Game, GameConfig, GameError, GameStatus, Gameboard, Player};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against another human on the terminal.
#[derive(Debug, Parser)]
#[command(name = "connect-four-cli", about = "Play Connect Four on the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    height: Option<usize>,
}

fn print_board(board: &Gameboard) {
    for row in board.rows() {
        for cell in row {
            let symbol = match cell.player() {
                None => ' ',
                Some(Player::Player1) => 'X',
                Some(Player::Player2) => 'O',
            };
            print!("{symbol},");
        }
        println!();
    }

    for _ in 0..board.width() {
        print!("--");
    }
    println!();

    for col_id in (0..board.width()).map(|i| i + 1) {
        print!("{col_id},");
    }
    println!();
}

/// Reads the next line, trimmed. `None` on end of input.
fn read_input(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading from stdin")?;
    Ok((read > 0).then(|| line.trim().to_owned()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    let mut game = Game::from_config(&config).context("creating the game")?;
    let mut stdin = io::stdin().lock();

    println!("Let's play Connect Four.");
    loop {
        println!("----------------");
        print_board(game.board());
        println!();

        {
            print!("{}, choose your move (column): ", game.current_player());
            for col in game.board().available_columns_iter().map(|x| x + 1) {
                print!("{col},");
            }
            println!();
            io::stdout().flush()?;
        }

        let Some(line) = read_input(&mut stdin)? else {
            println!("Bye.");
            return Ok(());
        };
        let Some(column) = line.parse::<usize>().ok().and_then(|c| c.checked_sub(1)) else {
            println!("'{line}' is not a column, try again.");
            continue;
        };

        match game.drop_piece(column) {
            Ok(outcome) => match outcome.status {
                GameStatus::InProgress => {}
                GameStatus::Won(player) => {
                    println!("{player} won!");
                    break;
                }
                GameStatus::Tied => {
                    println!("Tie!");
                    break;
                }
            },
            Err(err @ (GameError::ColumnFull { .. } | GameError::ColumnOutOfRange { .. })) => {
                println!("{err}, try again.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("----------------");
    print_board(game.board());
    Ok(())
}
