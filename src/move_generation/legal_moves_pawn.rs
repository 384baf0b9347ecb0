use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::offset_square;
use crate::moves::move_description::Move;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;
    let (forward, start_rank, promotion_rank) = match mover {
        Color::Light => (1i8, 1u8, 7u8),
        Color::Dark => (-1i8, 6u8, 0u8),
    };

    for from in 0..64u8 {
        if game_state.piece_on(from)
            != Some(Piece {
                kind: PieceKind::Pawn,
                color: mover,
            })
        {
            continue;
        }
        let rank = from / 8;

        if let Some(to) = offset_square(from, 0, forward) {
            if game_state.piece_on(to).is_none() {
                if to / 8 == promotion_rank {
                    push_promotions(from, to, None, out);
                } else {
                    out.push(Move::quiet(from, to, PieceKind::Pawn));

                    if rank == start_rank {
                        if let Some(two) = offset_square(from, 0, 2 * forward) {
                            if game_state.piece_on(two).is_none() {
                                out.push(Move {
                                    is_double_pawn_push: true,
                                    ..Move::quiet(from, two, PieceKind::Pawn)
                                });
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures and en passant.
        for d_file in [-1i8, 1] {
            let Some(to) = offset_square(from, d_file, forward) else {
                continue;
            };
            match game_state.piece_on(to) {
                Some(occupant) if occupant.color != mover => {
                    if to / 8 == promotion_rank {
                        push_promotions(from, to, Some(occupant.kind), out);
                    } else {
                        out.push(Move {
                            is_capture: true,
                            captured_piece: Some(occupant.kind),
                            ..Move::quiet(from, to, PieceKind::Pawn)
                        });
                    }
                }
                None if game_state.en_passant_square == Some(to) => {
                    out.push(Move {
                        is_capture: true,
                        is_en_passant: true,
                        captured_piece: Some(PieceKind::Pawn),
                        ..Move::quiet(from, to, PieceKind::Pawn)
                    });
                }
                _ => {}
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, captured: Option<PieceKind>, out: &mut Vec<Move>) {
    for promo in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        out.push(Move {
            promotion: Some(promo),
            is_capture: captured.is_some(),
            captured_piece: captured,
            ..Move::quiet(from, to, PieceKind::Pawn)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_description::Move;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        out
    }

    #[test]
    fn start_position_pawns_have_single_and_double_steps() {
        let moves = pawn_moves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(moves.len(), 16);
        assert_eq!(moves.iter().filter(|m| m.is_double_pawn_push).count(), 8);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let moves = pawn_moves("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_fans_out_to_four_piece_kinds() {
        let moves = pawn_moves("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promotion.is_some()));
    }

    #[test]
    fn en_passant_capture_is_generated_only_at_the_target() {
        let moves = pawn_moves("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3");
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].from, 27); // d4
        assert_eq!(ep[0].to, 20); // e3
    }
}
