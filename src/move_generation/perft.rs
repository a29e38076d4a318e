//! Perft: exhaustive leaf counting of the legal move tree.
//!
//! Used to validate move generation against published reference counts.
//! Promoting moves are expanded to all four promotion pieces so totals are
//! comparable with standard tables.

use std::thread;

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_checked;
use crate::move_generation::legal_move_generator::{is_end, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// One child of a position: the move that produced it and the result.
struct Child {
    from: Square,
    to: Square,
    promotion: Option<Promotion>,
    next: GameState,
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for child in children(game_state) {
        perft_recurse(game_state, &child, depth, 1, &mut total);
    }
    total
}

/// Same totals as `perft`, with root moves spread over scoped threads.
/// Each thread owns its own snapshots; nothing is shared mutably.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(game_state, depth);
    }

    let root_children = children(game_state);
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_children
            .iter()
            .map(|child| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(game_state, child, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(_) => log::error!("perft worker thread panicked"),
            }
        }
    });

    total
}

fn children(game_state: &GameState) -> Vec<Child> {
    let color = game_state.side_to_move;
    let mut out = Vec::new();

    for (from, to) in legal_moves(color, &game_state.board, &game_state.rights) {
        let promotes = game_state.board.piece_at(color, from) == Some(PieceKind::Pawn)
            && to.rank == promotion_rank(color);
        let promotions: &[Option<Promotion>] = if promotes {
            &[
                Some(Promotion::Queen),
                Some(Promotion::Rook),
                Some(Promotion::Bishop),
                Some(Promotion::Knight),
            ]
        } else {
            &[None]
        };

        for promotion in promotions {
            out.push(Child {
                from,
                to,
                promotion: *promotion,
                next: game_state.make_move(from, to, *promotion),
            });
        }
    }

    out
}

fn perft_recurse(
    parent: &GameState,
    child: &Child,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        tally_leaf(parent, child, counts);
        return;
    }

    for grandchild in children(&child.next) {
        perft_recurse(&child.next, &grandchild, search_depth, current_depth + 1, counts);
    }
}

fn tally_leaf(parent: &GameState, child: &Child, counts: &mut PerftCounts) {
    let mover = parent.side_to_move;
    let board = &parent.board;
    let moved = board.piece_at(mover, child.from);

    counts.nodes += 1;

    let direct_capture = board.is_occupied(mover.opposite(), child.to);
    let en_passant = moved == Some(PieceKind::Pawn)
        && child.from.file != child.to.file
        && !direct_capture;
    if direct_capture || en_passant {
        counts.captures += 1;
    }
    if en_passant {
        counts.en_passant += 1;
    }
    if moved == Some(PieceKind::King) && (child.to.file - child.from.file).abs() == 2 {
        counts.castles += 1;
    }
    if child.promotion.is_some() {
        counts.promotions += 1;
    }

    let next = &child.next;
    if is_checked(next.side_to_move, &next.board) {
        counts.checks += 1;
        if is_end(next.side_to_move, &next.board, &next.rights) {
            counts.checkmates += 1;
        }
    }
}
