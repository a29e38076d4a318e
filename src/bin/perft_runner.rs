//! Perft node-count runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --threads`
//! `cargo run --release --bin perft_runner -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"`

use std::time::Instant;

use clap::Parser;

use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::{perft, perft_multi_threaded};

#[derive(Parser)]
#[command(name = "perft_runner")]
#[command(about = "Count leaf nodes of the legal move tree")]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Position to count from (default: the initial position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Spread root moves over threads
    #[arg(short, long)]
    threads: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let fen = args.fen.as_deref().unwrap_or(GameState::starting_fen());
    let game = GameState::from_fen(fen)?;

    println!("{game}");
    println!("fen: {}", game.get_fen());

    for depth in 1..=args.depth {
        let started = Instant::now();
        let counts = if args.threads {
            perft_multi_threaded(&game, depth)
        } else {
            perft(&game, depth)
        };
        let elapsed = started.elapsed();
        let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);

        println!(
            "depth={depth} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={} nps={:.0}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            elapsed.as_millis(),
            nps
        );
    }

    Ok(())
}
