use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::{
    offset_square, DIAGONAL_DIRECTIONS, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL_DIRECTIONS,
};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    (0..64u8).find(|&sq| {
        game_state.piece_on(sq)
            == Some(Piece {
                kind: PieceKind::King,
                color,
            })
    })
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// True if any piece of `attacker_color` has a pseudo-legal attacking move to
/// `square`. Pawns attack diagonally only, distinct from their move rule.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    // A pawn attacking this square sits one rank back on an adjacent file.
    let pawn_rank_step = match attacker_color {
        Color::Light => -1i8,
        Color::Dark => 1i8,
    };
    for d_file in [-1i8, 1] {
        if let Some(from) = offset_square(square, d_file, pawn_rank_step) {
            if game_state.piece_on(from)
                == Some(Piece {
                    kind: PieceKind::Pawn,
                    color: attacker_color,
                })
            {
                return true;
            }
        }
    }

    for &(d_file, d_rank) in &KNIGHT_JUMPS {
        if let Some(from) = offset_square(square, d_file, d_rank) {
            if game_state.piece_on(from)
                == Some(Piece {
                    kind: PieceKind::Knight,
                    color: attacker_color,
                })
            {
                return true;
            }
        }
    }

    for &(d_file, d_rank) in &KING_STEPS {
        if let Some(from) = offset_square(square, d_file, d_rank) {
            if game_state.piece_on(from)
                == Some(Piece {
                    kind: PieceKind::King,
                    color: attacker_color,
                })
            {
                return true;
            }
        }
    }

    // Sliders: the first occupant along each ray decides.
    ray_hits_slider(
        game_state,
        square,
        &ORTHOGONAL_DIRECTIONS,
        attacker_color,
        PieceKind::Rook,
    ) || ray_hits_slider(
        game_state,
        square,
        &DIAGONAL_DIRECTIONS,
        attacker_color,
        PieceKind::Bishop,
    )
}

fn ray_hits_slider(
    game_state: &GameState,
    square: Square,
    directions: &[(i8, i8)],
    attacker_color: Color,
    slider_kind: PieceKind,
) -> bool {
    for &(d_file, d_rank) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, d_file, d_rank) {
            if let Some(occupant) = game_state.piece_on(next) {
                if occupant.color == attacker_color
                    && (occupant.kind == slider_kind || occupant.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
