//! Offset tables and walking helpers shared by the piece generators and the
//! attack checks.

use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::moves::move_description::Move;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
pub const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Offset `from` by file/rank deltas, or `None` when that leaves the board.
#[inline]
pub fn offset_square(from: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = (from % 8) as i8 + d_file;
    let rank = (from / 8) as i8 + d_rank;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 8 + file) as Square)
    } else {
        None
    }
}

/// Emit sliding moves along each direction, terminating at the board edge or
/// at the first occupant (enemy occupants are captured, own occupants block).
pub fn generate_slider_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: PieceKind,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let mover = game_state.side_to_move;

    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, d_file, d_rank) {
            match game_state.piece_on(to) {
                None => out.push(Move::quiet(from, to, moved_piece)),
                Some(occupant) => {
                    if occupant.color != mover {
                        out.push(Move {
                            is_capture: true,
                            captured_piece: Some(occupant.kind),
                            ..Move::quiet(from, to, moved_piece)
                        });
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Emit single-step moves for the fixed-offset pieces (knight, king).
pub fn generate_leaper_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: PieceKind,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let mover = game_state.side_to_move;

    for &(d_file, d_rank) in offsets {
        let Some(to) = offset_square(from, d_file, d_rank) else {
            continue;
        };
        match game_state.piece_on(to) {
            None => out.push(Move::quiet(from, to, moved_piece)),
            Some(occupant) if occupant.color != mover => out.push(Move {
                is_capture: true,
                captured_piece: Some(occupant.kind),
                ..Move::quiet(from, to, moved_piece)
            }),
            Some(_) => {}
        }
    }
}
