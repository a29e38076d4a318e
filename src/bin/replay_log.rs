//! Replay a stored move log and report the resulting position.
//!
//! Usage:
//! `cargo run --bin replay_log -- game.log`
//! `cargo run --bin replay_log -- --moves "f2f3 e7e5 g2g4 d8h4"`

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use plum_rules::chess_errors::ChessErrors;
use plum_rules::game_state::chess_types::Color;
use plum_rules::game_state::game_state::GameState;
use plum_rules::utils::move_log::MoveLog;

#[derive(Parser)]
#[command(name = "replay_log")]
#[command(about = "Replay a move log from the initial position and print the result")]
struct Args {
    /// File holding space-separated moves such as `e2e4 e7e5`
    #[arg(conflicts_with = "moves", required_unless_present = "moves")]
    log_file: Option<PathBuf>,

    /// Moves given inline instead of through a file
    #[arg(short, long)]
    moves: Option<String>,

    /// Also print the final position as FEN
    #[arg(long)]
    fen: bool,
}

fn status_line(state: &GameState) -> String {
    let side = match state.side_to_move {
        Color::Light => "white",
        Color::Dark => "black",
    };

    match (state.is_end(), state.is_checked()) {
        (true, true) => format!("checkmate, {side} has lost"),
        (true, false) => format!("stalemate, {side} has no legal move"),
        (false, true) => format!("{side} to move, in check"),
        (false, false) => format!("{side} to move"),
    }
}

fn load_log(args: &Args) -> Result<MoveLog, Box<dyn std::error::Error>> {
    let text = match (&args.moves, &args.log_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err("either a log file or --moves is required".into()),
    };
    Ok(text.parse::<MoveLog>()?)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let log = load_log(args)?;
    log::info!("replaying {} plies", log.len());

    let state = log.replay().map_err(|err| {
        if let ChessErrors::ReplayFailed { ply, .. } = &err {
            log::error!("log is corrupt from move {}", ply / 2 + 1);
        }
        err
    })?;

    println!("{state}");
    if let Some(last) = log.moves().last() {
        println!("last move: {last} (ply {})", log.len());
    }
    println!("{}", status_line(&state));
    if args.fen {
        println!("{}", state.get_fen());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
