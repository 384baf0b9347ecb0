//! Errors used throughout the chess engine.
//!
//! A single error type is shared across game logic, parsing utilities, and
//! the engines so callers can propagate and match failures uniformly.

use std::error::Error;
use std::fmt;

use crate::moves::move_description::Move;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not in the current legal-move set. Recoverable: the state
    /// is left untouched and the caller should re-solicit input.
    IllegalMove(Move),

    /// `undo_move` was called with no moves on the undo stack. This indicates
    /// a caller bug and is reported rather than silently ignored.
    EmptyUndoLog,

    /// A FEN string failed validation; payload describes the offending part.
    InvalidFen(String),

    /// An algebraic square (for example "e4") failed to parse.
    InvalidAlgebraicSquare(String),

    /// A long algebraic move (for example "e2e4") failed to parse or does not
    /// name a legal move in the current position.
    InvalidAlgebraicMove(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove(mv) => {
                write!(f, "illegal move from square {} to square {}", mv.from, mv.to)
            }
            ChessError::EmptyUndoLog => write!(f, "undo requested with an empty undo log"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessError::InvalidAlgebraicMove(text) => {
                write!(f, "invalid algebraic move: {text}")
            }
        }
    }
}

impl Error for ChessError {}
