use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use hand_scorer::core::{Deck, PokerScoreError, join_cards};
use hand_scorer::holdem::{Outcome, Showdown};

/// Deal a round of hold'em and show who wins.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "play-poker")]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Seed the shuffle to replay a deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the scored round as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PokerScoreError> {
    let mut deck = Deck::new();
    let showdown = match cli.seed {
        Some(seed) => Showdown::deal(&mut deck, cli.players, &mut StdRng::seed_from_u64(seed))?,
        None => Showdown::deal(&mut deck, cli.players, &mut rand::rng())?,
    };

    if cli.json {
        let out = serde_json::to_string_pretty(&showdown)
            .map_err(|e| PokerScoreError::InvalidArgument(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    for (idx, hole) in showdown.hole_cards().iter().enumerate() {
        println!("Player {}'s hand: {}", idx + 1, join_cards(hole));
    }
    println!("The table: {}", join_cards(showdown.board()));

    for (idx, hand) in showdown.hands().iter().enumerate() {
        println!("Player {}'s score: {}", idx + 1, hand.describe());
    }

    match showdown.outcome() {
        Outcome::Winner(idx) => println!("Player {} wins!", idx + 1),
        Outcome::Tie(seats) => {
            let seats: Vec<String> = seats.iter().map(|s| (s + 1).to_string()).collect();
            println!("Tie game between players {}", seats.join(", "));
        }
    }
    Ok(())
}
