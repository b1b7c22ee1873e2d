use clap::Parser;
use serde_json::json;

use sinkfleet::{init_logging, GameSession, GameStatus, Side, TargetingAi};

/// Play a computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for fleet placement and targeting.
    seed: u64,
    /// Stop after this many turns without a winner.
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut session = GameSession::from_seed(args.seed);
    session.setup_random_fleets()?;

    // drives the "human" side
    let mut autopilot = TargetingAi::new();
    let mut turns = 0;
    let mut shots = [0usize; 2];

    while session.status() == GameStatus::InProgress && turns < args.max_turns {
        turns += 1;
        let side = session.turn();
        let report = match side {
            Side::Human => session.autoplay_turn(Side::Human, &mut autopilot)?,
            Side::Computer => session.computer_turn()?,
        };
        shots[side as usize] += report.shots.len();
    }

    let winner = match session.status() {
        GameStatus::Finished { winner } => Some(winner),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "seed": args.seed,
        "turns": turns,
        "human": {
            "shots": shots[0],
            "ships_left": session.player(Side::Human).board().remaining_ships(),
        },
        "computer": {
            "shots": shots[1],
            "ships_left": session.player(Side::Computer).board().remaining_ships(),
        },
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
