//! Core mutable board state representation.
//!
//! `GameState` is the central model for the engine. It stores the board,
//! turn/state flags, clocks, and the history stacks used by make/unmake
//! style workflows, and exposes the legality gate and terminal-state queries
//! built on top of move generation.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::move_description::{CastleSide, Move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_from};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mutable game state with in-place move making and unmaking.
///
/// There is exactly one board per game: both manual play and search mutate
/// it through `apply_move`/`make_move_unchecked` and reverse through
/// `undo_move`. The type is not safe for concurrent use; callers wanting
/// parallel exploration must clone one instance per worker.
///
/// Queries that need move generation take `&mut self` because legality
/// probing replays candidate moves in place; the state is always restored
/// before the query returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Make/unmake stack; one record per applied move.
    pub undo_stack: Vec<UndoState>,
    /// Position signatures of every reached position, the current one last.
    /// Pushed on make, popped on unmake; drives threefold-repetition checks.
    pub repetition_history: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
            repetition_history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    /// Repetition signature: board layout, side to move, and castling rights
    /// (the first three FEN fields).
    pub fn position_signature(&self) -> String {
        let fen = generate_fen(self);
        fen.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
    }

    /// All legal moves for the side to move, in generation order.
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Legal moves originating from `from` only.
    #[inline]
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        legal_moves_from(self, from)
    }

    /// Apply `mv` if and only if it is in the current legal-move set.
    ///
    /// This is the single legality gate: trusted internal callers that feed
    /// back generated moves use `make_move_unchecked` instead. A rejected
    /// move leaves the state completely unchanged.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        self.make_move_unchecked(mv);
        Ok(())
    }

    /// Mutate the board by `mv` without legality validation.
    ///
    /// The caller must pass a move produced by `legal_moves` for this exact
    /// position; anything else corrupts the state.
    pub fn make_move_unchecked(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let enemy = mover.opposite();

        self.undo_stack.push(UndoState {
            mv,
            captured_piece: if mv.is_en_passant {
                Some(Piece {
                    kind: PieceKind::Pawn,
                    color: enemy,
                })
            } else {
                self.board[mv.to as usize]
            },
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
        });

        self.board[mv.from as usize] = None;
        if mv.is_en_passant {
            self.board[en_passant_capture_square(mover, mv.to) as usize] = None;
        }
        let placed = mv.promotion.unwrap_or(mv.moved_piece);
        self.board[mv.to as usize] = Some(Piece {
            kind: placed,
            color: mover,
        });

        if let Some(side) = mv.castle {
            let (rook_from, rook_to) = castle_rook_squares(mover, side);
            self.board[rook_to as usize] = self.board[rook_from as usize].take();
        }

        self.update_castling_rights(mover, mv);

        // Set only immediately after a double pawn push, cleared otherwise.
        self.en_passant_square = if mv.is_double_pawn_push {
            Some((mv.from + mv.to) / 2)
        } else {
            None
        };

        if mv.moved_piece == PieceKind::Pawn || mv.is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = enemy;
        self.repetition_history.push(self.position_signature());
    }

    /// Reverse the most recent move, restoring the exact pre-move state.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let undo = self.undo_stack.pop().ok_or(ChessError::EmptyUndoLog)?;
        let mv = undo.mv;

        self.repetition_history.pop();

        let mover = self.side_to_move.opposite();
        self.side_to_move = mover;
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }

        self.board[mv.to as usize] = None;
        self.board[mv.from as usize] = Some(Piece {
            kind: mv.moved_piece,
            color: mover,
        });

        if mv.is_en_passant {
            self.board[en_passant_capture_square(mover, mv.to) as usize] = undo.captured_piece;
        } else if undo.captured_piece.is_some() {
            self.board[mv.to as usize] = undo.captured_piece;
        }

        if let Some(side) = mv.castle {
            let (rook_from, rook_to) = castle_rook_squares(mover, side);
            self.board[rook_from as usize] = self.board[rook_to as usize].take();
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;

        Ok(mv)
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    #[inline]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.position_signature();
        self.repetition_history
            .iter()
            .filter(|signature| **signature == current)
            .count()
            >= 3
    }

    /// Neither side retains material that could force mate: bare kings, a
    /// single minor piece in total, or bishops confined to one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0usize;
        let mut bishops = 0usize;
        let mut bishop_square_colors = [false; 2];

        for sq in 0..64usize {
            let Some(piece) = self.board[sq] else {
                continue;
            };
            match piece.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishops += 1;
                    bishop_square_colors[(sq / 8 + sq % 8) % 2] = true;
                }
                PieceKind::King => {}
            }
        }

        if knights == 0 {
            // Covers bare kings and any number of same-colored bishops.
            return !(bishop_square_colors[0] && bishop_square_colors[1]);
        }
        knights == 1 && bishops == 0
    }

    /// Draw by rule: fifty-move, threefold repetition, or insufficient
    /// material. Stalemate is a separate query.
    pub fn is_draw(&mut self) -> bool {
        self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    pub fn is_game_over(&mut self) -> bool {
        self.is_draw() || self.legal_moves().is_empty()
    }

    /// Derived status of the current position.
    pub fn status(&mut self) -> GameStatus {
        let in_check = self.is_check();
        if self.legal_moves().is_empty() {
            return if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_draw() {
            return GameStatus::DrawByFiftyMove;
        }
        if self.is_threefold_repetition() {
            return GameStatus::DrawByThreefoldRepetition;
        }
        if self.is_insufficient_material() {
            return GameStatus::DrawByInsufficientMaterial;
        }
        if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    fn update_castling_rights(&mut self, mover: Color, mv: Move) {
        if mv.moved_piece == PieceKind::King {
            match mover {
                Color::Light => {
                    self.castling_rights &= !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE)
                }
                Color::Dark => {
                    self.castling_rights &= !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE)
                }
            }
        }

        if mv.moved_piece == PieceKind::Rook {
            match mv.from {
                0 => self.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
                7 => self.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
                56 => self.castling_rights &= !CASTLE_DARK_QUEENSIDE,
                63 => self.castling_rights &= !CASTLE_DARK_KINGSIDE,
                _ => {}
            }
        }

        // Capturing a rook on its home corner also removes rights.
        match mv.to {
            0 => self.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
            7 => self.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
            56 => self.castling_rights &= !CASTLE_DARK_QUEENSIDE,
            63 => self.castling_rights &= !CASTLE_DARK_KINGSIDE,
            _ => {}
        }
    }
}

#[inline]
fn en_passant_capture_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

#[inline]
fn castle_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => (7, 5),
        (Color::Light, CastleSide::Queenside) => (0, 3),
        (Color::Dark, CastleSide::Kingside) => (63, 61),
        (Color::Dark, CastleSide::Queenside) => (56, 59),
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{GameStatus, PieceKind};
    use crate::moves::move_description::Move;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game: &mut GameState, lan: &str) {
        let mv = long_algebraic_to_move(game, lan).expect("move text should resolve");
        game.apply_move(mv).expect("resolved move should apply");
    }

    fn round_trip_restores_state(fen: &str, lan: &str) {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();

        let mv = long_algebraic_to_move(&mut game, lan).expect("move text should resolve");
        game.apply_move(mv).expect("resolved move should apply");
        assert_ne!(game.get_fen(), before.get_fen(), "move should change the position");

        let undone = game.undo_move().expect("undo should succeed");
        assert_eq!(undone, mv);
        assert_eq!(game, before);
    }

    #[test]
    fn apply_undo_round_trip_quiet_move_and_capture() {
        round_trip_restores_state(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "g1f3",
        );
        round_trip_restores_state(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
            "e4d5",
        );
    }

    #[test]
    fn apply_undo_round_trip_castling_both_wings() {
        round_trip_restores_state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1");
        round_trip_restores_state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1c1");
        round_trip_restores_state("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8g8");
        round_trip_restores_state("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8");
    }

    #[test]
    fn apply_undo_round_trip_en_passant_and_promotion() {
        round_trip_restores_state(
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PP1/RNBQKBNR b KQkq e3 0 3",
            "d4e3",
        );
        round_trip_restores_state("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8q");
        round_trip_restores_state("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8n");
    }

    #[test]
    fn castling_rights_are_cleared_permanently() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        play(&mut game, "a1a2");
        assert_eq!(game.get_fen().split_whitespace().nth(2), Some("Kkq"));

        play(&mut game, "e8e7");
        assert_eq!(game.get_fen().split_whitespace().nth(2), Some("K"));

        // Rights never come back, even when the pieces return home.
        play(&mut game, "a2a1");
        play(&mut game, "e7e8");
        assert_eq!(game.get_fen().split_whitespace().nth(2), Some("K"));
    }

    #[test]
    fn capturing_a_home_corner_rook_clears_the_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").expect("FEN should parse");

        play(&mut game, "g2h1");
        assert_eq!(game.get_fen().split_whitespace().nth(2), Some("Qkq"));
    }

    #[test]
    fn en_passant_target_lives_for_exactly_one_move() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        assert_eq!(game.en_passant_square, Some(20)); // e3

        play(&mut game, "g8f6");
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn apply_rejects_illegal_move_and_leaves_state_unchanged() {
        let mut game = GameState::new_game();
        let before = game.clone();

        // A rook cannot jump over the pawn wall from the start position.
        let mv = Move::quiet(0, 16, PieceKind::Rook);
        assert_eq!(game.apply_move(mv), Err(ChessError::IllegalMove(mv)));
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_requires_an_explicit_piece_kind() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        let before = game.clone();

        let mv = Move::quiet(48, 56, PieceKind::Pawn);
        assert_eq!(game.apply_move(mv), Err(ChessError::IllegalMove(mv)));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_with_empty_log_is_a_hard_error() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo_move(), Err(ChessError::EmptyUndoLog));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut game, lan);
        }

        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.status(), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");

        assert!(!game.is_check());
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn knight_shuffle_triggers_threefold_repetition() {
        let mut game = GameState::new_game();
        assert!(!game.is_threefold_repetition());

        for _ in 0..2 {
            for lan in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                play(&mut game, lan);
            }
        }

        // The starting signature has now occurred three times.
        assert!(game.is_threefold_repetition());
        assert!(game.is_draw());
        assert_eq!(game.status(), GameStatus::DrawByThreefoldRepetition);
    }

    #[test]
    fn halfmove_clock_drives_the_fifty_move_draw() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 70").expect("FEN should parse");
        assert!(!game.is_fifty_move_draw());

        play(&mut game, "a1a2");
        assert!(game.is_fifty_move_draw());
        assert!(game.is_draw());
        assert_eq!(game.status(), GameStatus::DrawByFiftyMove);

        // A pawn move or capture resets the clock.
        let mut reset =
            GameState::from_fen("4k3/8/8/8/8/8/P7/4K3 w - - 99 70").expect("FEN should parse");
        play(&mut reset, "a2a3");
        assert_eq!(reset.halfmove_clock, 0);
    }

    #[test]
    fn insufficient_material_classes() {
        let bare_kings = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        assert!(bare_kings.is_insufficient_material());

        let single_minor =
            GameState::from_fen("4k3/8/8/8/8/8/8/4KB2 w - - 0 1").expect("FEN parse");
        assert!(single_minor.is_insufficient_material());

        let same_color_bishops =
            GameState::from_fen("1b2k3/8/8/8/8/8/8/2B1K3 w - - 0 1").expect("FEN parse");
        assert!(same_color_bishops.is_insufficient_material());

        let opposite_color_bishops =
            GameState::from_fen("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1").expect("FEN parse");
        assert!(!opposite_color_bishops.is_insufficient_material());

        let rook_remains = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN parse");
        assert!(!rook_remains.is_insufficient_material());

        let two_knights =
            GameState::from_fen("4k3/8/8/8/8/8/8/1NN1K3 w - - 0 1").expect("FEN parse");
        assert!(!two_knights.is_insufficient_material());
    }

    #[test]
    fn status_reports_check_for_an_ongoing_attacked_king() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/4R3/4K3 b - - 0 1").expect("FEN should parse");
        assert!(game.is_check());
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Check);
    }

    #[test]
    fn fullmove_number_advances_after_dark_moves_and_rewinds_on_undo() {
        let mut game = GameState::new_game();
        assert_eq!(game.fullmove_number, 1);

        play(&mut game, "e2e4");
        assert_eq!(game.fullmove_number, 1);
        play(&mut game, "e7e5");
        assert_eq!(game.fullmove_number, 2);

        game.undo_move().expect("undo should succeed");
        assert_eq!(game.fullmove_number, 1);
    }
}
