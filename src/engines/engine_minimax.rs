//! Minimax-based opponent engine.
//!
//! Wraps the core negamax alpha-beta search with a fixed per-instance depth
//! and material scoring.

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{choose_move, SearchResult, DEFAULT_SEARCH_DEPTH};

pub struct MinimaxEngine {
    search_depth: u8,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(search_depth: u8) -> Self {
        Self {
            search_depth: search_depth.max(1),
            scorer: MaterialScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "parlor-minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> SearchResult {
        choose_move(game_state, &self.scorer, self.search_depth)
    }
}
