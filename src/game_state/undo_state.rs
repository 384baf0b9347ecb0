use crate::game_state::chess_types::{CastlingRights, Piece, Square};
use crate::moves::move_description::Move;

/// Single undo record for `make_move_unchecked` / `undo_move`.
///
/// Castling rights, the en-passant target, and the halfmove clock are not
/// recoverable from the board alone, so each record carries the pre-move
/// values needed for a bit-exact reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The removed occupant, if any. For en passant this is the enemy pawn,
    /// which did not sit on the destination square.
    pub captured_piece: Option<Piece>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
}
