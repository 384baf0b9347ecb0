use crate::game_state::chess_types::{GameState, Piece, PieceKind};
use crate::move_generation::legal_move_shared::{generate_leaper_moves, KNIGHT_JUMPS};
use crate::moves::move_description::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;

    for from in 0..64u8 {
        if game_state.piece_on(from)
            == Some(Piece {
                kind: PieceKind::Knight,
                color: mover,
            })
        {
            generate_leaper_moves(game_state, from, PieceKind::Knight, &KNIGHT_JUMPS, out);
        }
    }
}
