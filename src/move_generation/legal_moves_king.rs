use crate::game_state::chess_types::{
    Color, GameState, PieceKind, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::legal_move_shared::{generate_leaper_moves, KING_STEPS};
use crate::moves::move_description::{CastleSide, Move};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;
    let Some(from) = king_square(game_state, mover) else {
        return;
    };

    generate_leaper_moves(game_state, from, PieceKind::King, &KING_STEPS, out);
    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    match mover {
        Color::Light => {
            if king_from == 4 && (game_state.castling_rights & CASTLE_LIGHT_KINGSIDE) != 0 {
                if squares_empty(game_state, &[5, 6])
                    && !is_square_attacked(game_state, 5, enemy)
                    && !is_square_attacked(game_state, 6, enemy)
                {
                    out.push(Move {
                        castle: Some(CastleSide::Kingside),
                        ..Move::quiet(4, 6, PieceKind::King)
                    });
                }
            }
            if king_from == 4 && (game_state.castling_rights & CASTLE_LIGHT_QUEENSIDE) != 0 {
                if squares_empty(game_state, &[1, 2, 3])
                    && !is_square_attacked(game_state, 3, enemy)
                    && !is_square_attacked(game_state, 2, enemy)
                {
                    out.push(Move {
                        castle: Some(CastleSide::Queenside),
                        ..Move::quiet(4, 2, PieceKind::King)
                    });
                }
            }
        }
        Color::Dark => {
            if king_from == 60 && (game_state.castling_rights & CASTLE_DARK_KINGSIDE) != 0 {
                if squares_empty(game_state, &[61, 62])
                    && !is_square_attacked(game_state, 61, enemy)
                    && !is_square_attacked(game_state, 62, enemy)
                {
                    out.push(Move {
                        castle: Some(CastleSide::Kingside),
                        ..Move::quiet(60, 62, PieceKind::King)
                    });
                }
            }
            if king_from == 60 && (game_state.castling_rights & CASTLE_DARK_QUEENSIDE) != 0 {
                if squares_empty(game_state, &[57, 58, 59])
                    && !is_square_attacked(game_state, 59, enemy)
                    && !is_square_attacked(game_state, 58, enemy)
                {
                    out.push(Move {
                        castle: Some(CastleSide::Queenside),
                        ..Move::quiet(60, 58, PieceKind::King)
                    });
                }
            }
        }
    }
}

#[inline]
fn squares_empty(game_state: &GameState, squares: &[Square]) -> bool {
    squares.iter().all(|&sq| game_state.piece_on(sq).is_none())
}
