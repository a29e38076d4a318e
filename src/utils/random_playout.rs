//! Seeded random games.
//!
//! Plays uniformly random legal moves from the initial position until the
//! game ends or a ply limit is reached. The same seed always produces the
//! same game, which makes playouts usable as reproducible invariant checks.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::move_log::MoveLog;
use crate::utils::notation::NotatedMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate,
    Stalemate,
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct Playout {
    pub log: MoveLog,
    pub final_state: GameState,
    pub outcome: PlayoutOutcome,
}

/// Play one random game of at most `max_plies` moves.
///
/// `inspect` sees every position reached, starting with the initial one.
pub fn random_playout<F>(seed: u64, max_plies: usize, mut inspect: F) -> Playout
where
    F: FnMut(&GameState),
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game();
    let mut log = MoveLog::new();
    inspect(&state);

    loop {
        let candidates: Vec<(Square, Square)> = state.legal_moves().collect();

        let Some(&(from, to)) = candidates.as_slice().choose(&mut rng) else {
            let outcome = if state.is_checked() {
                PlayoutOutcome::Checkmate
            } else {
                PlayoutOutcome::Stalemate
            };
            log::debug!("playout seed {seed} ended in {outcome:?} after {} plies", log.len());
            return Playout {
                log,
                final_state: state,
                outcome,
            };
        };

        if log.len() >= max_plies {
            return Playout {
                log,
                final_state: state,
                outcome: PlayoutOutcome::PlyLimit,
            };
        }

        let promotion = if state.is_promotion(from, to) {
            Promotion::ALL.choose(&mut rng).copied()
        } else {
            None
        };

        state = state.make_move(from, to, promotion);
        log.push(NotatedMove::new(from, to, promotion));
        inspect(&state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{random_playout, PlayoutOutcome};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;

    fn assert_position_invariants(state: &GameState) {
        let mut seen = HashSet::new();
        for color in [Color::Light, Color::Dark] {
            let pieces = state.board.pieces(color);
            let kings = pieces.iter().filter(|p| p.kind == PieceKind::King).count();
            assert_eq!(kings, 1, "{color:?} should have exactly one king");
            for piece in pieces {
                assert!(piece.square.is_on_board(), "piece should stay on the board");
                assert!(seen.insert(piece.square), "square {} occupied twice", piece.square);
            }
        }
        assert!(
            !crate::move_generation::legal_move_checks::is_checked(
                state.side_to_move.opposite(),
                &state.board
            ),
            "side that just moved should not be in check"
        );
    }

    #[test]
    fn random_games_keep_position_invariants() {
        for seed in 0..6u64 {
            let mut previous_castling: Option<u8> = None;
            random_playout(seed, 150, |state| {
                assert_position_invariants(state);
                if let Some(previous) = previous_castling {
                    assert_eq!(
                        state.rights.castling & !previous,
                        0,
                        "a cleared castling right should never come back"
                    );
                }
                previous_castling = Some(state.rights.castling);
            });
        }
    }

    #[test]
    fn same_seed_same_game() {
        let first = random_playout(42, 80, |_| {});
        let second = random_playout(42, 80, |_| {});
        assert_eq!(first.log, second.log);
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn log_replays_to_final_state() {
        for seed in [3u64, 17, 99] {
            let playout = random_playout(seed, 120, |_| {});
            let replayed = playout.log.replay().expect("playout log should replay");
            assert_eq!(replayed, playout.final_state);

            match playout.outcome {
                PlayoutOutcome::PlyLimit => assert_eq!(playout.log.len(), 120),
                PlayoutOutcome::Checkmate => {
                    assert!(replayed.is_end() && replayed.is_checked())
                }
                PlayoutOutcome::Stalemate => {
                    assert!(replayed.is_end() && !replayed.is_checked())
                }
            }
        }
    }

    #[test]
    fn zero_ply_limit_stays_at_start() {
        let playout = random_playout(7, 0, |_| {});
        assert!(playout.log.is_empty());
        assert_eq!(playout.final_state, GameState::new_game());
        assert_eq!(playout.outcome, PlayoutOutcome::PlyLimit);
    }
}
