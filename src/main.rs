use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::Duration;

use sinkfleet::ui::{coord_to_string, parse_coordinate, print_player_view, render_board};
use sinkfleet::{
    init_logging, AttackOutcome, GameError, GameSession, GameStatus, Side, AI_ATTACK_DELAY_MS,
};

#[derive(Parser)]
#[command(author, version, about = "Sink the fleet against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = AI_ATTACK_DELAY_MS, help = "Pause between computer shots")]
        delay_ms: u64,
    },
    /// Print a randomly generated fleet.
    Board {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn session_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Board { seed } => {
            let mut session = GameSession::new(session_rng(seed));
            session.reroll_fleet(Side::Human)?;
            print!("{}", render_board(session.player(Side::Human).board(), true));
        }
        Commands::Play { seed, delay_ms } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut session = GameSession::new(session_rng(seed));
            session.setup_random_fleets()?;
            play(&mut session, Duration::from_millis(delay_ms)).await?;
        }
    }
    Ok(())
}

async fn play(session: &mut GameSession, delay: Duration) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter targets like B7. Type 'new' to re-roll, 'quit' to leave.");
    loop {
        if let GameStatus::Finished { winner } = session.status() {
            print_player_view(
                session.player(Side::Human).board(),
                session.player(Side::Computer).board(),
            );
            match winner {
                Side::Human => println!("You sank the enemy fleet!"),
                Side::Computer => println!("Your fleet has been sunk."),
            }
            return Ok(());
        }

        if session.turn() == Side::Computer {
            let report = session.computer_turn_paced(delay).await?;
            for shot in &report.shots {
                println!("Computer fires at {}: {:?}", coord_to_string(shot.coord), shot.outcome);
            }
            continue;
        }

        print_player_view(
            session.player(Side::Human).board(),
            session.player(Side::Computer).board(),
        );
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match line.trim() {
            "quit" | "q" => return Ok(()),
            "new" => {
                session.new_game()?;
                println!("New game.");
            }
            input => {
                let Some(coord) = parse_coordinate(input) else {
                    println!("Invalid coordinate '{}'", input);
                    continue;
                };
                match session.human_attack(coord) {
                    Ok(AttackOutcome::AlreadyAttacked) => println!("Already fired there."),
                    Ok(AttackOutcome::Miss) => println!("Miss."),
                    Ok(AttackOutcome::Hit) => println!("Hit! Fire again."),
                    Ok(AttackOutcome::Sunk) => println!("Hit and sunk! Fire again."),
                    Err(GameError::NotYourTurn) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
}
