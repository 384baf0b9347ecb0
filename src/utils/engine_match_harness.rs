//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the starting
//! position, with an optional seeded random opening prefix, and reports how
//! the game ended. This exercises the whole rules loop, so the tests lean on
//! it as an integration check.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, GameState};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawRepetition,
    DrawFiftyMoveRule,
    DrawInsufficientMaterial,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_light` plays Light, `engine_dark` plays Dark. The seed drives the
/// random opening prefix only, so a fixed seed reproduces the whole game
/// when both engines are themselves deterministic.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    let mut state = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played_moves_lan = Vec::<String>::new();

    for _ in 0..config.opening_plies {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        played_moves_lan.push(move_to_long_algebraic(&mv)?);
        state.apply_move(mv)?;
    }

    for _ in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(&mut state) {
            return Ok(MatchResult {
                outcome,
                final_state: state,
                played_moves_lan,
            });
        }

        let legal = state.legal_moves();
        let result = match state.side_to_move {
            Color::Light => engine_light.choose_move(&mut state),
            Color::Dark => engine_dark.choose_move(&mut state),
        };

        let chosen = result.best_move.unwrap_or(legal[0]);
        if !legal.contains(&chosen) {
            return Err(ChessError::IllegalMove(chosen));
        }

        played_moves_lan.push(move_to_long_algebraic(&chosen)?);
        state.apply_move(chosen)?;
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        played_moves_lan,
    })
}

fn terminal_outcome(state: &mut GameState) -> Option<MatchOutcome> {
    if state.is_fifty_move_draw() {
        return Some(MatchOutcome::DrawFiftyMoveRule);
    }
    if state.is_threefold_repetition() {
        return Some(MatchOutcome::DrawRepetition);
    }
    if state.is_insufficient_material() {
        return Some(MatchOutcome::DrawInsufficientMaterial);
    }

    if state.legal_moves().is_empty() {
        let outcome = if state.is_check() {
            match state.side_to_move {
                Color::Light => MatchOutcome::DarkWinCheckmate,
                Color::Dark => MatchOutcome::LightWinCheckmate,
            }
        } else {
            MatchOutcome::DrawStalemate
        };
        return Some(outcome);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, MatchConfig, MatchOutcome};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_vs_minimax_match_reaches_a_valid_outcome() {
        let mut light = RandomEngine::new(11);
        let mut dark = MinimaxEngine::new(2);

        let result = play_engine_match(
            &mut light,
            &mut dark,
            42,
            MatchConfig {
                max_plies: 60,
                opening_plies: 4,
            },
        )
        .expect("match should run");

        assert!(!result.played_moves_lan.is_empty());
        assert!(matches!(
            result.outcome,
            MatchOutcome::LightWinCheckmate
                | MatchOutcome::DarkWinCheckmate
                | MatchOutcome::DrawStalemate
                | MatchOutcome::DrawRepetition
                | MatchOutcome::DrawFiftyMoveRule
                | MatchOutcome::DrawInsufficientMaterial
                | MatchOutcome::DrawMaxPlies
        ));
    }

    #[test]
    fn fixed_seed_reproduces_the_same_game() {
        let config = MatchConfig {
            max_plies: 30,
            opening_plies: 6,
        };

        let first = play_engine_match(
            &mut MinimaxEngine::new(1),
            &mut MinimaxEngine::new(2),
            7,
            config,
        )
        .expect("match should run");
        let second = play_engine_match(
            &mut MinimaxEngine::new(1),
            &mut MinimaxEngine::new(2),
            7,
            config,
        )
        .expect("match should run");

        assert_eq!(first.played_moves_lan, second.played_moves_lan);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn replayed_games_consist_of_legal_moves_only() {
        let mut light = RandomEngine::new(3);
        let mut dark = RandomEngine::new(5);

        let result = play_engine_match(
            &mut light,
            &mut dark,
            9,
            MatchConfig {
                max_plies: 40,
                opening_plies: 2,
            },
        )
        .expect("match should run");

        // Replay the transcript through the legality gate from scratch.
        let mut replay = crate::game_state::game_state::GameState::new_game();
        for lan in &result.played_moves_lan {
            let mv = crate::utils::long_algebraic::long_algebraic_to_move(&mut replay, lan)
                .expect("transcript move should resolve");
            replay.apply_move(mv).expect("transcript move should apply");
        }
        assert_eq!(replay.get_fen(), result.final_state.get_fen());
    }
}
