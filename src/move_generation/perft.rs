//! Perft node counting for move-generator validation.
//!
//! Walks the legal move tree to a fixed depth with make/unmake and tallies
//! leaf nodes by move kind, for comparison against the standard reference
//! tables.

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(game_state) {
        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture {
                counts.captures += 1;
            }
            if mv.is_en_passant {
                counts.en_passant += 1;
            }
            if mv.castle.is_some() {
                counts.castles += 1;
            }
            if mv.promotion.is_some() {
                counts.promotions += 1;
            }
            continue;
        }

        game_state.make_move_unchecked(mv);
        perft_recurse(game_state, depth - 1, counts);
        game_state
            .undo_move()
            .expect("undo stack holds the move just made");
    }
}
