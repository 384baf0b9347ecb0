//! Random-move opponent engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! baselines, and low-strength gameplay. Randomness is explicit and seeded
//! here, never inside the scored search core.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::SearchResult;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "parlor-random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> SearchResult {
        let moves = game_state.legal_moves();
        let best_move = moves.as_slice().choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: MaterialScorer.score(game_state),
        }
    }
}
