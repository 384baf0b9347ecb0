//! Engine abstraction layer.
//!
//! Defines the common contract so different opponent strategies can be
//! selected at runtime behind a single trait interface.

use crate::game_state::chess_types::GameState;
use crate::search::minimax::SearchResult;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Select a move for the side to move.
    ///
    /// Implementations may probe the position by making and unmaking moves
    /// but must return the state exactly as it was given. A `best_move` of
    /// `None` means the position has no legal move; the caller classifies
    /// the terminal kind through the game-state queries.
    fn choose_move(&mut self, game_state: &mut GameState) -> SearchResult;
}
