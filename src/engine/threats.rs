//! Attack detection from the defender's point of view.
//!
//! Everything here walks rays *outward from a target square* and asks what
//! could reach it: `find_attackers` and `square_covered` answer one-off
//! coverage questions, while `king_threats` sweeps every direction from the
//! side-to-move's king and caches checkers, pins and the enemy sliders
//! eyeing the king through a single defender ("spies").

use super::bitboard::{Bitboard, Square};
use super::board::Position;
use super::rays::{pawn_captures, piece_directions, Ray};
use super::types::{Color, PieceType};

impl Position {
    /// All pieces of `attacker`'s color and of type `piece_type` that
    /// currently attack `sq`. Any piece standing in the way blocks the
    /// search, regardless of color.
    pub fn find_attackers(&self, sq: Square, piece_type: PieceType, attacker: Color) -> Vec<Square> {
        let mut ray = Ray::new(sq);
        let mut attackers = Vec::new();

        // From the target's perspective: a pawn of ours could capture an
        // enemy pawn exactly where that enemy pawn could capture us, so
        // look along the defender's capture directions.
        let pawn_dirs;
        let (directions, max_distance): (&[_], _) = match piece_type {
            PieceType::Pawn => {
                pawn_dirs = pawn_captures(!attacker);
                (&pawn_dirs, Some(1))
            }
            PieceType::Knight | PieceType::King => (piece_directions(piece_type), Some(1)),
            _ => (piece_directions(piece_type), None),
        };

        for &dir in directions {
            ray.reset(dir, max_distance);
            for to in ray.by_ref() {
                if self.colors[attacker.index()].contains(to) {
                    if self.pieces[piece_type.index()].contains(to) {
                        attackers.push(to);
                    }
                    // Wrong-typed enemy pieces still block the line.
                    break;
                } else if self.colors[(!attacker).index()].contains(to) {
                    break;
                }
            }
        }
        attackers
    }

    /// Is `sq` attacked by any piece of `attacker`'s color?
    pub fn square_covered(&self, sq: Square, attacker: Color) -> bool {
        PieceType::ALL
            .into_iter()
            .any(|piece_type| !self.find_attackers(sq, piece_type, attacker).is_empty())
    }

    /// Recompute the threat state for the side to move.
    ///
    /// For every enemy piece type, rays run outward from the king along the
    /// directions that type could attack from. Each ray accumulates an
    /// attack vector (every square walked, ending on the enemy piece) and
    /// tolerates at most one friendly blocker:
    ///
    /// * matching enemy piece, no blocker → checker, vector recorded in
    ///   `check_vectors`;
    /// * matching enemy piece, one blocker → the blocker is pinned, the
    ///   enemy is a spy, vector recorded in `spy_vectors`;
    /// * a second friendly piece or any non-matching piece ends the ray.
    ///
    /// Also refreshes the cached in-check flag.
    pub fn king_threats(&mut self) {
        let us = self.turn();
        let king_sq = self.king_square(us);

        self.checking_pieces = Bitboard::EMPTY;
        self.pinned_pieces = Bitboard::EMPTY;
        self.spying_pieces = Bitboard::EMPTY;
        self.check_vectors.clear();
        self.spy_vectors.clear();

        let mut ray = Ray::new(king_sq);

        for piece_type in PieceType::ALL {
            let pawn_dirs;
            let (directions, max_distance): (&[_], _) = match piece_type {
                PieceType::Pawn => {
                    pawn_dirs = pawn_captures(us);
                    (&pawn_dirs, Some(1))
                }
                PieceType::Knight => (piece_directions(piece_type), Some(1)),
                // Kings can never give check.
                PieceType::King => continue,
                _ => (piece_directions(piece_type), None),
            };

            for &dir in directions {
                ray.reset(dir, max_distance);
                let mut blocker = Square::EMPTY;
                let mut vector = Bitboard::EMPTY;

                for to in ray.by_ref() {
                    vector.set(to);
                    if self.colors[us.index()].contains(to) {
                        if blocker.is_empty() {
                            blocker = to;
                        } else {
                            break;
                        }
                    } else if self.colors[(!us).index()].contains(to) {
                        if self.pieces[piece_type.index()].contains(to) {
                            if blocker.is_empty() {
                                self.checking_pieces.set(to);
                                self.check_vectors.push(vector);
                            } else {
                                self.pinned_pieces.set(blocker);
                                self.spying_pieces.set(to);
                                self.spy_vectors.push(vector);
                            }
                        }
                        break;
                    }
                }
            }
        }

        let checked = self.checking_pieces.is_not_empty();
        self.set_in_check(checked);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
