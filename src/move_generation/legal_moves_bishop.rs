use crate::game_state::chess_types::{GameState, Piece, PieceKind};
use crate::move_generation::legal_move_shared::{generate_slider_moves, DIAGONAL_DIRECTIONS};
use crate::moves::move_description::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;

    for from in 0..64u8 {
        if game_state.piece_on(from)
            == Some(Piece {
                kind: PieceKind::Bishop,
                color: mover,
            })
        {
            generate_slider_moves(game_state, from, PieceKind::Bishop, &DIAGONAL_DIRECTIONS, out);
        }
    }
}
