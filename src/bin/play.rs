//! Terminal host for the tic-tac-toe engine.
//!
//! Owns everything the core refuses to: stdin input, rendering, the
//! artificial thinking delay, and the play-again loop. All game state
//! lives in a [`GameSession`].

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tictactoe_engine::{Difficulty, GameSession, Mode, Player, Position, RoundState};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Tic-tac-toe against the computer or a second player", long_about = None)]
#[command(version)]
struct Cli {
    /// Computer difficulty.
    #[arg(short, long, value_enum, default_value = "hard")]
    difficulty: Difficulty,

    /// Play against a second human instead of the computer.
    #[arg(long)]
    two_player: bool,

    /// Mark the human plays against the computer (X moves first).
    #[arg(short, long, value_enum, default_value = "x")]
    mark: Player,

    /// Milliseconds the computer pretends to think before moving.
    #[arg(long, default_value_t = 400)]
    think_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mode = if cli.two_player {
        Mode::TwoPlayer
    } else {
        Mode::VsComputer {
            difficulty: cli.difficulty,
            computer: cli.mark.opponent(),
        }
    };
    debug!(?mode, "starting session");

    let mut session = GameSession::new(mode);
    let mut rng = rand::thread_rng();

    loop {
        println!("\n{}\n", session.board().display());

        match session.round().clone() {
            RoundState::InProgress(game) => {
                let computer_turn = matches!(
                    session.mode(),
                    Mode::VsComputer { computer, .. } if computer == game.to_move()
                );

                if computer_turn {
                    std::thread::sleep(std::time::Duration::from_millis(cli.think_ms));
                    let (pos, _) = session.play_computer_turn(&mut rng)?;
                    println!("Computer plays {}.", pos.label());
                } else {
                    human_turn(&mut session, game.to_move())?;
                }
            }
            RoundState::Won(won) => {
                println!("Player {} wins on {}!", won.winner(), won.winning_line());
                if !next_round(&mut session)? {
                    break;
                }
            }
            RoundState::Drawn(_) => {
                println!("Draw!");
                if !next_round(&mut session)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Prompts for a cell number (1-9) and applies the move.
///
/// Bad input and occupied squares are reported and leave the board
/// unchanged; the main loop simply prompts again.
fn human_turn(session: &mut GameSession, player: Player) -> Result<()> {
    let line = prompt(&format!("Player {player}, choose a square (1-9): "))?;
    let Some(pos) = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|cell| cell.checked_sub(1))
        .and_then(Position::from_index)
    else {
        println!("Enter a number from 1 to 9.");
        return Ok(());
    };

    if let Err(err) = session.play(pos) {
        println!("{err}");
    }
    Ok(())
}

/// Announces the score and asks whether to play another round.
fn next_round(session: &mut GameSession) -> Result<bool> {
    println!("Score: {}", session.scoreboard());
    let answer = prompt("Play again? [y/n]: ")?;
    if answer.trim().eq_ignore_ascii_case("y") {
        session.reset_round();
        Ok(true)
    } else {
        Ok(false)
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}
