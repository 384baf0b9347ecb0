//! Long algebraic move text, the bridge between hosts and `Move` values.
//!
//! Formatting is context-free ("e2e4", "e7e8q"); parsing resolves the text
//! against the current legal-move set, which is also how a host supplies the
//! promotion piece choice before applying a move.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{GameState, PieceKind};
use crate::moves::move_description::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> ChessResult<String> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(promotion) = mv.promotion {
        out.push(promotion_char(promotion));
    }

    Ok(out)
}

/// Resolve move text against the current position's legal moves.
///
/// Returns the canonical generated `Move` (with capture and castle metadata
/// filled in), or an error when the text is malformed or names no legal move.
pub fn long_algebraic_to_move(game_state: &mut GameState, text: &str) -> ChessResult<Move> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraicMove(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidAlgebraicMove(text.to_owned()))?;
    let to = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidAlgebraicMove(text.to_owned()))?;

    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'n') => Some(PieceKind::Knight),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'q') => Some(PieceKind::Queen),
        Some(_) => return Err(ChessError::InvalidAlgebraicMove(text.to_owned())),
    };

    game_state
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| ChessError::InvalidAlgebraicMove(text.to_owned()))
}

fn promotion_char(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::Pawn | PieceKind::King => '?',
    }
}
