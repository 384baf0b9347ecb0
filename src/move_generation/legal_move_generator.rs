//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, then filters out any
//! candidate that would leave the mover's own king attacked by applying it,
//! testing, and undoing on the same game state.

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_description::Move;

/// All legal moves for the side to move.
///
/// The order is stable and deterministic: piece kinds in the fixed sequence
/// pawn, knight, bishop, rook, queen, king, each scanning origin squares in
/// ascending index order. Search and tie-breaking rely on this.
pub fn legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let pseudo = pseudo_legal_moves(game_state);
    filter_self_check(game_state, pseudo)
}

/// Legal moves restricted to those originating at `from`.
pub fn legal_moves_from(game_state: &mut GameState, from: Square) -> Vec<Move> {
    let mut pseudo = pseudo_legal_moves(game_state);
    pseudo.retain(|mv| mv.from == from);
    filter_self_check(game_state, pseudo)
}

fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

fn filter_self_check(game_state: &mut GameState, pseudo: Vec<Move>) -> Vec<Move> {
    let mover = game_state.side_to_move;
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        game_state.make_move_unchecked(mv);
        // Illegal if the mover's own king is attacked after the move.
        let leaves_king_attacked = is_king_in_check(game_state, mover);
        game_state
            .undo_move()
            .expect("undo stack holds the move just made");

        if !leaves_king_attacked {
            legal.push(mv);
        }
    }

    legal
}
