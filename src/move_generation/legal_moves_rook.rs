use crate::game_state::chess_types::{GameState, Piece, PieceKind};
use crate::move_generation::legal_move_shared::{generate_slider_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::move_description::Move;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;

    for from in 0..64u8 {
        if game_state.piece_on(from)
            == Some(Piece {
                kind: PieceKind::Rook,
                color: mover,
            })
        {
            generate_slider_moves(game_state, from, PieceKind::Rook, &ORTHOGONAL_DIRECTIONS, out);
        }
    }
}
