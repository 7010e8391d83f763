//! Move generation.
//!
//! Two generators produce the same legal move lists by different means. The
//! primary `move_gen` leans on the threat state cached by `king_threats`:
//! double check collapses to king moves, pinned sliders stay on their pin
//! line, check evasions are filtered against the check vector, and king
//! steps are tested for coverage with the king lifted off its own square.
//! The `basic_*` family is the slow oracle: generate every pseudo-legal
//! move, apply each to a scratch copy, and drop the ones that leave the
//! mover's king attacked. Perft can drive either; tests hold them equal.

use super::bitboard::{Bitboard, Square};
use super::board::Position;
use super::rays::{
    king_castle_direction, pawn_captures, pawn_push, pawn_start_rank, piece_directions,
    promotion_rank, Direction, Ray,
};
use super::types::{CastleSide, Color, Move, PieceType};

/// What a ray walk may land on.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Landings {
    /// Empty squares and captures (the slider/king rule).
    Any,
    /// Empty squares only (pawn pushes).
    EmptyOnly,
    /// Captures only (pawn capture directions).
    EnemyOnly,
}

// ---------------------------------------------------------------------------
// Primary generator
// ---------------------------------------------------------------------------

impl Position {
    /// All legal moves for the side to move.
    pub fn move_gen(&self) -> Vec<Move> {
        let us = self.turn();

        // Two checkers cannot both be blocked or captured in one move, so
        // only the king may act.
        if self.checking_pieces.pop_count() > 1 {
            return self.king_moves(self.king_square(us));
        }

        let mut moves = Vec::new();
        for piece in PieceType::ALL {
            for from in self.side_bb(us, piece).iter() {
                let piece_moves = match piece {
                    PieceType::Pawn => self.pawn_moves(from),
                    PieceType::King => self.king_moves(from),
                    _ => self.slider_moves(from, piece),
                };
                moves.extend(piece_moves);
            }
        }
        moves
    }

    /// Is the side to move checkmated?
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.move_gen().is_empty()
    }

    /// Does the side to move have no legal move while not in check?
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.move_gen().is_empty()
    }

    /// Walk rays from `from` and collect the moves the landings allow:
    /// friendly pieces stop a ray, enemy pieces offer a capture and stop it,
    /// and the enemy king is never a capture target.
    fn walk_moves(
        &self,
        from: Square,
        piece: PieceType,
        directions: &[Direction],
        max_distance: Option<u32>,
        landings: Landings,
    ) -> Vec<Move> {
        let us = self.turn();
        let them = !us;
        let enemy_king = self.king_square(them);
        let mut ray = Ray::new(from);
        let mut moves = Vec::new();

        for &dir in directions {
            ray.reset(dir, max_distance);
            for to in ray.by_ref() {
                if self.colors[us.index()].contains(to) {
                    break;
                }
                if self.colors[them.index()].contains(to) {
                    if landings != Landings::EmptyOnly && to != enemy_king {
                        let captured = match self.piece_type_at(to) {
                            Some(t) => t,
                            None => break,
                        };
                        moves.push(Move::new(us, piece, from, to).with_capture(captured));
                    }
                    break;
                }
                if landings != Landings::EnemyOnly {
                    moves.push(Move::new(us, piece, from, to));
                }
            }
        }
        moves
    }

    /// Moves for knights, bishops, rooks and queens, filtered by the threat
    /// state: a pinned piece only travels its pin line, and under check
    /// every move must land on the single check vector.
    fn slider_moves(&self, from: Square, piece: PieceType) -> Vec<Move> {
        debug_assert!(piece != PieceType::Pawn && piece != PieceType::King);
        let max_distance = if piece == PieceType::Knight {
            Some(1)
        } else {
            None
        };
        let all_dirs = piece_directions(piece);

        if !self.in_check() {
            if self.pinned_pieces.contains(from) {
                let vector = self.containing_spy_vector(from);
                let dirs = directions_toward(from, vector, all_dirs);
                let mut moves = self.walk_moves(from, piece, &dirs, max_distance, Landings::Any);
                moves.retain(|mv| vector.contains(mv.to));
                moves
            } else {
                self.walk_moves(from, piece, all_dirs, max_distance, Landings::Any)
            }
        } else if self.pinned_pieces.contains(from) {
            // Leaving the pin line is never an answer to a check coming
            // from a different line.
            Vec::new()
        } else {
            debug_assert_eq!(self.check_vectors.len(), 1);
            let vector = self.check_vectors[0];
            let dirs = directions_toward(from, vector, all_dirs);
            let mut moves = self.walk_moves(from, piece, &dirs, max_distance, Landings::Any);
            moves.retain(|mv| vector.contains(mv.to));
            moves
        }
    }

    /// King steps plus castling.
    ///
    /// Coverage of each destination is tested with the king lifted off its
    /// origin square, so a slider's line extends through where the king
    /// stood: a checked king cannot retreat along the ray checking it.
    fn king_moves(&self, from: Square) -> Vec<Move> {
        let us = self.turn();
        let them = !us;

        let mut ghost = self.clone();
        ghost.pieces[PieceType::King.index()].clear(from);
        ghost.colors[us.index()].clear(from);

        let mut moves: Vec<Move> = self
            .walk_moves(
                from,
                PieceType::King,
                piece_directions(PieceType::King),
                Some(1),
                Landings::Any,
            )
            .into_iter()
            .filter(|mv| !ghost.square_covered(mv.to, them))
            .collect();

        if !self.in_check() {
            if self.castle_right(us, CastleSide::Kingside)
                && self.is_castling_legal(CastleSide::Kingside)
            {
                let to = from.shifted(king_castle_direction(CastleSide::Kingside));
                moves.push(Move::castle(us, from, to, from.shifted_by(3)));
            }
            if self.castle_right(us, CastleSide::Queenside)
                && self.is_castling_legal(CastleSide::Queenside)
            {
                let to = from.shifted(king_castle_direction(CastleSide::Queenside));
                moves.push(Move::castle(us, from, to, from.shifted_by(-4)));
            }
        }
        moves
    }

    /// Squares between king and rook must be empty, and the squares the
    /// king crosses must not be covered. The right itself and the in-check
    /// rule are the caller's checks.
    pub fn is_castling_legal(&self, side: CastleSide) -> bool {
        let us = self.turn();
        let king_sq = self.king_square(us);

        let west = [
            king_sq.shifted_by(-1),
            king_sq.shifted_by(-2),
            king_sq.shifted_by(-3),
        ];
        let east = [king_sq.shifted_by(1), king_sq.shifted_by(2)];
        let (be_empty, be_safe): (&[Square], &[Square]) = match side {
            CastleSide::Queenside => (&west, &west[..2]),
            CastleSide::Kingside => (&east, &east),
        };

        if be_empty.iter().any(|&sq| !self.is_open(sq)) {
            return false;
        }
        !be_safe.iter().any(|&sq| self.square_covered(sq, !us))
    }

    /// Pushes, captures and promotions for one pawn, before any threat
    /// filtering. En passant is handled separately.
    fn pawn_advances(&self, from: Square) -> Vec<Move> {
        let us = self.turn();
        let max_push = if pawn_start_rank(us).contains(from) {
            Some(2)
        } else {
            Some(1)
        };

        let mut moves = self.walk_moves(
            from,
            PieceType::Pawn,
            &[pawn_push(us)],
            max_push,
            Landings::EmptyOnly,
        );
        moves.extend(self.walk_moves(
            from,
            PieceType::Pawn,
            &pawn_captures(us),
            Some(1),
            Landings::EnemyOnly,
        ));
        expand_promotions(moves, us)
    }

    /// En-passant moves this pawn could attempt, legality not yet settled.
    fn en_passant_candidates(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.epsq.is_empty() {
            return moves;
        }
        let us = self.turn();
        for dir in pawn_captures(us) {
            if dir.edge_mask().contains(from) && from.shifted(dir) == self.epsq {
                // The captured pawn stands one push short of the target.
                let captured_sq = self.epsq.shifted(pawn_push(!us));
                moves.push(Move::en_passant(us, from, self.epsq, captured_sq));
            }
        }
        moves
    }

    /// Legal moves for one pawn.
    ///
    /// Pushes and captures obey the same vector filters as sliders. En
    /// passant bypasses them entirely and is validated by applying it to a
    /// scratch copy: the capture removes a pawn from a square no vector
    /// tracks, which can both expose the king (a rank-five double removal)
    /// and resolve a check the vectors say it cannot (capturing the
    /// double-pushed checker off-vector).
    fn pawn_moves(&self, from: Square) -> Vec<Move> {
        // A pinned pawn cannot leave its line, and a check always comes
        // from some other line, so it has no answer. The en-passant corner
        // cases collapse too: staying on the pin line while removing the
        // checker is geometrically impossible for a pawn.
        if self.in_check() && self.pinned_pieces.contains(from) {
            return Vec::new();
        }

        let candidates = self.pawn_advances(from);
        let mut moves = if self.in_check() {
            debug_assert_eq!(self.check_vectors.len(), 1);
            let vector = self.check_vectors[0];
            candidates
                .into_iter()
                .filter(|mv| vector.contains(mv.to))
                .collect()
        } else if self.pinned_pieces.contains(from) {
            let vector = self.containing_spy_vector(from);
            candidates
                .into_iter()
                .filter(|mv| vector.contains(mv.to))
                .collect()
        } else {
            candidates
        };

        for mv in self.en_passant_candidates(from) {
            let mut scratch = self.clone();
            scratch.make_move(mv);
            if !scratch.is_position_illegal() {
                moves.push(mv);
            }
        }
        moves
    }

    /// The spy vector running through a pinned piece.
    fn containing_spy_vector(&self, from: Square) -> Bitboard {
        debug_assert!(self.pinned_pieces.contains(from));
        for vector in &self.spy_vectors {
            if vector.contains(from) {
                return *vector;
            }
        }
        unreachable!("pinned piece without a spy vector")
    }
}

/// Expand every move landing on the promotion rank into the four promotion
/// choices.
fn expand_promotions(moves: Vec<Move>, us: Color) -> Vec<Move> {
    let promo_rank = promotion_rank(us);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if promo_rank.contains(mv.to) {
            out.extend(
                PieceType::PROMOTION_TARGETS
                    .iter()
                    .map(|&piece| mv.with_promotion(piece)),
            );
        } else {
            out.push(mv);
        }
    }
    out
}

/// The subset of `piece_dirs` pointing from `from` toward some square of
/// `vector`, deduplicated.
fn directions_toward(from: Square, vector: Bitboard, piece_dirs: &[Direction]) -> Vec<Direction> {
    let mut dirs = Vec::new();
    let mut squares = vector;
    loop {
        let sq = squares.pop_occupied();
        if sq.is_empty() {
            break;
        }
        if let Some(dir) = sq.direction_from(from) {
            if piece_dirs.contains(&dir) && !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
    }
    dirs
}

// ---------------------------------------------------------------------------
// Oracle generator
// ---------------------------------------------------------------------------

impl Position {
    /// Legal moves by the slow route: pseudo-legal generation followed by a
    /// make-and-test filter on a scratch copy.
    pub fn basic_move_gen(&self) -> Vec<Move> {
        self.basic_pseudo_legal_moves()
            .into_iter()
            .filter(|&mv| {
                let mut next = self.clone();
                next.make_move(mv);
                !next.is_position_illegal()
            })
            .collect()
    }

    /// Every pseudo-legal move: piece rules only, king safety ignored.
    pub fn basic_pseudo_legal_moves(&self) -> Vec<Move> {
        let us = self.turn();
        let mut moves = Vec::new();
        for piece in PieceType::ALL {
            for from in self.side_bb(us, piece).iter() {
                match piece {
                    PieceType::Pawn => moves.extend(self.basic_pawn_moves(from)),
                    PieceType::Knight | PieceType::King => {
                        moves.extend(self.walk_moves(
                            from,
                            piece,
                            piece_directions(piece),
                            Some(1),
                            Landings::Any,
                        ));
                        if piece == PieceType::King {
                            moves.extend(self.basic_castle_moves());
                        }
                    }
                    _ => {
                        moves.extend(self.walk_moves(
                            from,
                            piece,
                            piece_directions(piece),
                            None,
                            Landings::Any,
                        ));
                    }
                }
            }
        }
        moves
    }

    /// Pseudo-legal pawn moves: advances plus raw en-passant candidates.
    fn basic_pawn_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = self.pawn_advances(from);
        moves.extend(self.en_passant_candidates(from));
        moves
    }

    /// Castles that satisfy rights, emptiness and transit safety. The
    /// make-and-test filter downstream has nothing left to reject here.
    fn basic_castle_moves(&self) -> Vec<Move> {
        if self.in_check() {
            return Vec::new();
        }
        let us = self.turn();
        let king_sq = self.king_square(us);
        let mut moves = Vec::new();
        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            if self.castle_right(us, side) && self.is_castling_legal(side) {
                let to = king_sq.shifted(king_castle_direction(side));
                let rook_from = match side {
                    CastleSide::Kingside => king_sq.shifted_by(3),
                    CastleSide::Queenside => king_sq.shifted_by(-4),
                };
                moves.push(Move::castle(us, king_sq, to, rook_from));
            }
        }
        moves
    }

    /// A position is illegal if the side that just moved left its own king
    /// attacked. Meaningful right after `make_move`.
    pub fn is_position_illegal(&self) -> bool {
        let prev_mover = !self.turn();
        self.square_covered(self.king_square(prev_mover), self.turn())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::types::MoveKind;
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn lans(moves: &[Move]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        out.sort();
        out
    }

    fn assert_generators_agree(fen: &str) {
        let pos = pos(fen);
        assert_eq!(
            lans(&pos.move_gen()),
            lans(&pos.basic_move_gen()),
            "generators disagree on {fen}"
        );
    }

    // === known node counts at depth 1 ===

    #[test]
    fn starting_position_has_twenty_moves() {
        assert_eq!(Position::starting().move_gen().len(), 20);
        assert_eq!(Position::starting().basic_move_gen().len(), 20);
    }

    #[test]
    fn kiwipete_has_forty_eight_moves() {
        assert_eq!(pos(KIWIPETE).move_gen().len(), 48);
    }

    #[test]
    fn rook_endgame_has_fourteen_moves() {
        assert_eq!(
            pos("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").move_gen().len(),
            14
        );
    }

    #[test]
    fn tangled_promotion_position_has_six_moves() {
        assert_eq!(
            pos("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
                .move_gen()
                .len(),
            6
        );
    }

    #[test]
    fn talkchess_position_has_forty_four_moves() {
        assert_eq!(
            pos("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
                .move_gen()
                .len(),
            44
        );
    }

    // === check handling ===

    #[test]
    fn double_check_restricts_to_king_moves() {
        let pos = pos("4k3/4r3/8/8/8/8/2n5/4K3 w - - 0 1");
        let moves = pos.move_gen();
        assert!(moves.iter().all(|mv| mv.piece == PieceType::King));
        assert_eq!(lans(&moves), vec!["e1d1", "e1d2", "e1f1", "e1f2"]);
    }

    #[test]
    fn single_check_allows_blocks_captures_and_king_steps() {
        let pos = pos("4k3/8/8/8/4r3/8/3B4/4K1N1 w - - 0 1");
        assert_eq!(
            lans(&pos.move_gen()),
            vec!["d2e3", "e1d1", "e1f1", "e1f2", "g1e2"]
        );
    }

    #[test]
    fn checked_king_cannot_retreat_along_the_checking_ray() {
        let pos = pos("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        // f1 stays covered once the king lifts off e1.
        assert_eq!(lans(&pos.move_gen()), vec!["e1d2", "e1e2", "e1f2"]);
    }

    #[test]
    fn undefended_checker_can_be_captured_by_the_king() {
        let pos = pos("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1");
        assert!(pos
            .move_gen()
            .iter()
            .any(|mv| mv.to == sq("d2") && mv.captured == Some(PieceType::Queen)));
    }

    #[test]
    fn defended_checker_cannot_be_taken_by_the_king() {
        let pos = pos("4k3/8/8/8/8/2b5/3q4/4K3 w - - 0 1");
        assert!(pos.move_gen().iter().all(|mv| mv.to != sq("d2")));
    }

    // === pins ===

    #[test]
    fn pinned_rook_slides_only_on_its_file() {
        let pos = pos("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
        let rook_moves: Vec<Move> = pos
            .move_gen()
            .into_iter()
            .filter(|mv| mv.piece == PieceType::Rook)
            .collect();
        assert_eq!(
            lans(&rook_moves),
            vec!["e2e3", "e2e4", "e2e5", "e2e6", "e2e7"]
        );
        assert!(rook_moves
            .iter()
            .any(|mv| mv.captured == Some(PieceType::Rook)));
    }

    #[test]
    fn pinned_knight_cannot_move_at_all() {
        let pos = pos("4k3/4r3/8/8/8/4N3/8/4K3 w - - 0 1");
        assert!(pos
            .move_gen()
            .iter()
            .all(|mv| mv.piece != PieceType::Knight));
    }

    #[test]
    fn pinned_bishop_slides_only_on_its_diagonal() {
        let pos = pos("4k3/8/8/7b/8/8/4B3/3K4 w - - 0 1");
        let bishop_moves: Vec<Move> = pos
            .move_gen()
            .into_iter()
            .filter(|mv| mv.piece == PieceType::Bishop)
            .collect();
        assert_eq!(lans(&bishop_moves), vec!["e2f3", "e2g4", "e2h5"]);
    }

    #[test]
    fn pinned_piece_is_frozen_during_a_check_from_elsewhere() {
        let pos = pos("4k3/4r3/8/8/8/3n4/4B3/4K3 w - - 0 1");
        let moves = pos.move_gen();
        assert!(moves.iter().all(|mv| mv.piece == PieceType::King));
        assert_eq!(lans(&moves), vec!["e1d1", "e1d2", "e1f1"]);
    }

    // === pawns ===

    fn pawn_lans(fen: &str) -> Vec<String> {
        let p = pos(fen);
        let moves: Vec<Move> = p
            .move_gen()
            .into_iter()
            .filter(|mv| mv.piece == PieceType::Pawn)
            .collect();
        lans(&moves)
    }

    #[test]
    fn pawn_pushes_single_and_double() {
        assert_eq!(
            pawn_lans("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"),
            vec!["e2e3", "e2e4"]
        );
        // Off the start rank only one step remains.
        assert_eq!(pawn_lans("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1"), vec!["e3e4"]);
    }

    #[test]
    fn pawn_pushes_blocked_by_any_piece() {
        assert_eq!(
            pawn_lans("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1"),
            vec!["e2e3"]
        );
        assert_eq!(
            pawn_lans("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn pawn_captures_diagonally() {
        assert_eq!(
            pawn_lans("4k3/8/8/8/3p1p2/4P3/8/4K3 w - - 0 1"),
            vec!["e3d4", "e3e4", "e3f4"]
        );
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        assert_eq!(
            pawn_lans("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1"),
            vec!["e7e5", "e7e6"]
        );
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        assert_eq!(
            pawn_lans("4k3/P7/8/8/8/8/8/4K3 w - - 0 1"),
            vec!["a7a8b", "a7a8n", "a7a8q", "a7a8r"]
        );
    }

    #[test]
    fn capture_promotions_expand_too() {
        let lans = pawn_lans("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(lans.len(), 8);
        assert!(lans.contains(&"a7b8q".to_string()));
        assert!(lans.contains(&"a7a8n".to_string()));
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3");
        let ep: Vec<Move> = p
            .move_gen()
            .into_iter()
            .filter(|mv| mv.kind == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].from, sq("e5"));
        assert_eq!(ep[0].to, sq("d6"));
        assert_eq!(ep[0].special, sq("d5"));
    }

    #[test]
    fn en_passant_is_refused_when_it_uncovers_the_king() {
        // Taking c5 en passant removes both rank-five pawns and opens the
        // a5 queen onto the f5 king.
        let p = pos("4k3/8/8/q1pP1K2/8/8/8/8 w - c6 0 9");
        let pawn_moves: Vec<Move> = p
            .move_gen()
            .into_iter()
            .filter(|mv| mv.piece == PieceType::Pawn)
            .collect();
        assert_eq!(lans(&pawn_moves), vec!["d5d6"]);
    }

    #[test]
    fn en_passant_may_capture_a_checking_pawn() {
        // The d-pawn just double-pushed and checks from d5, which is not
        // the en-passant target square. Only the scratch-copy test can
        // admit the capture.
        let p = pos("4k3/8/8/3pP3/2K5/8/8/8 w - d6 0 3");
        assert!(p.in_check());
        let ep: Vec<Move> = p
            .move_gen()
            .into_iter()
            .filter(|mv| mv.kind == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, sq("d6"));
    }

    // === castling ===

    fn castles(fen: &str) -> Vec<String> {
        let p = pos(fen);
        let moves: Vec<Move> = p
            .move_gen()
            .into_iter()
            .filter(|mv| mv.kind == MoveKind::Castle)
            .collect();
        lans(&moves)
    }

    #[test]
    fn both_castles_when_the_path_is_clear() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec!["e1c1", "e1g1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            vec!["e8c8", "e8g8"]
        );
    }

    #[test]
    fn castle_moves_carry_the_rook_origin() {
        let p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        for mv in p.move_gen() {
            if mv.kind == MoveKind::Castle {
                match mv.to {
                    to if to == sq("g1") => assert_eq!(mv.special, sq("h1")),
                    to if to == sq("c1") => assert_eq!(mv.special, sq("a1")),
                    other => panic!("unexpected castle target {other}"),
                }
            }
        }
    }

    #[test]
    fn no_castling_without_the_right() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"),
            vec!["e1c1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        // A rook on f3 covers f1: kingside dies, queenside survives.
        assert_eq!(
            castles("r3k2r/8/8/8/8/5r2/8/R3K2R w KQkq - 0 1"),
            vec!["e1c1"]
        );
    }

    #[test]
    fn no_castling_while_in_check() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/4r3/8/R3K2R w KQkq - 0 1"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn no_castling_through_occupied_squares() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RB2KB1R w KQkq - 0 1"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn attacked_rook_square_does_not_prevent_queenside_castling() {
        // b1 may be covered; only the king's path matters.
        assert_eq!(
            castles("r3k2r/8/8/8/8/1r6/8/R3K2R w KQkq - 0 1"),
            vec!["e1c1", "e1g1"]
        );
    }

    // === mates and stalemates ===

    #[test]
    fn back_rank_mate_is_checkmate() {
        let p = pos("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(p.in_check());
        assert!(p.move_gen().is_empty());
        assert!(p.is_checkmate());
        assert!(!p.is_stalemate());
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let p = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!p.in_check());
        assert!(p.move_gen().is_empty());
        assert!(p.is_stalemate());
        assert!(!p.is_checkmate());
    }

    // === generator agreement ===

    #[test]
    fn generators_agree_on_benchmark_positions() {
        assert_generators_agree("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_generators_agree(KIWIPETE);
        assert_generators_agree("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert_generators_agree("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
        assert_generators_agree("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8");
    }

    #[test]
    fn generators_agree_on_awkward_positions() {
        // Double check, en-passant traps, pins, frozen pieces.
        assert_generators_agree("4k3/4r3/8/8/8/8/2n5/4K3 w - - 0 1");
        assert_generators_agree("4k3/8/8/q1pP1K2/8/8/8/8 w - c6 0 9");
        assert_generators_agree("4k3/8/8/3pP3/2K5/8/8/8 w - d6 0 3");
        assert_generators_agree("4k3/4r3/8/8/8/3n4/4B3/4K3 w - - 0 1");
        assert_generators_agree("r3k2r/8/8/8/8/5r2/8/R3K2R w KQkq - 0 1");
        assert_generators_agree("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    }

    #[test]
    fn mirrored_position_has_the_same_move_count() {
        let p = pos(KIWIPETE);
        let mirrored = p.mirror();
        assert_eq!(p.move_gen().len(), mirrored.move_gen().len());
        assert_eq!(lans(&mirrored.move_gen()), lans(&mirrored.basic_move_gen()));
    }
}
