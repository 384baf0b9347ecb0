use crate::game_state::chess_types::{PieceKind, Square};

/// Which wing a castling move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// A fully-described move, as produced by legal move generation.
///
/// Moves are plain values; the side-channel state needed to reverse one
/// (prior castling rights, en-passant target, halfmove clock) lives in the
/// game state's undo records, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    /// Piece placed on `to` instead of the pawn when reaching the last rank.
    /// Generation always sets this explicitly; there is no default promotion.
    pub promotion: Option<PieceKind>,
    pub captured_piece: Option<PieceKind>,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_double_pawn_push: bool,
    pub castle: Option<CastleSide>,
}

impl Move {
    /// A quiet move carrying no capture, promotion, or special flags. Used as
    /// the base for struct-update construction of the richer move kinds.
    #[inline]
    pub const fn quiet(from: Square, to: Square, moved_piece: PieceKind) -> Self {
        Self {
            from,
            to,
            moved_piece,
            promotion: None,
            captured_piece: None,
            is_capture: false,
            is_en_passant: false,
            is_double_pawn_push: false,
            castle: None,
        }
    }
}
