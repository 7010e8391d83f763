//! Bitboard-based position state.
//!
//! `Position` stores piece placement as 8 bitboards (6 piece-type boards
//! shared by both colors, plus 2 color boards), the en-passant target,
//! castling rights and the in-check flag packed into one byte, the ply
//! counter, and the halfmove clock. It also carries the threat state
//! (checking, pinned and spying pieces with their attack vectors), which
//! is recomputed from the king's point of view after every move.

use super::bitboard::{Bitboard, Square};
use super::rays::{pawn_double_push, pawn_push, pawn_start_rank, rook_castle_direction};
use super::types::{CastleSide, ChessError, Color, Move, MoveKind, PieceType};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Flag byte layout: low nibble is castling availability, bit 4 caches
// whether the side to move is in check.
const CASTLE_WK: u8 = 1 << 0;
const CASTLE_WQ: u8 = 1 << 1;
const CASTLE_BK: u8 = 1 << 2;
const CASTLE_BQ: u8 = 1 << 3;
const CASTLE_MASK: u8 = 0b1111;
const IN_CHECK: u8 = 1 << 4;

const BACK_RANKS: Bitboard = Bitboard(0xff00_0000_0000_00ff);

fn castle_flag(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WK,
        (Color::White, CastleSide::Queenside) => CASTLE_WQ,
        (Color::Black, CastleSide::Kingside) => CASTLE_BK,
        (Color::Black, CastleSide::Queenside) => CASTLE_BQ,
    }
}

/// The rank a color's king and rooks start on.
fn home_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANKS[0],
        Color::Black => Bitboard::RANKS[7],
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A complete position plus the threat state derived from it.
///
/// Board layout puts a8 at bit 0 and h1 at bit 63, rank by rank, so a FEN
/// placement field maps onto ascending bit indices. The side to move is
/// encoded in the ply: odd ply means White.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// One board per piece type, both colors mixed.
    pub pieces: [Bitboard; PieceType::COUNT],

    /// One board per color, all piece types mixed.
    pub colors: [Bitboard; 2],

    /// En-passant target square (behind the double-pushed pawn), or empty.
    pub epsq: Square,

    /// Castling rights and the in-check bit.
    pub flags: u8,

    /// 1-based ply counter: 1 before White's first move.
    pub ply: u16,

    /// Halfmove clock for the fifty-move rule.
    pub halfmove_clock: u16,

    /// Enemy pieces currently giving check to the side to move.
    pub checking_pieces: Bitboard,

    /// Friendly pieces that cannot leave their king's line.
    pub pinned_pieces: Bitboard,

    /// Enemy sliders eyeing the king through exactly one friendly piece.
    pub spying_pieces: Bitboard,

    /// One board per checker: the squares from the king up to and including
    /// the checking piece.
    pub check_vectors: Vec<Bitboard>,

    /// One board per spy: the squares from the king through the pinned
    /// piece up to and including the spying slider.
    pub spy_vectors: Vec<Bitboard>,
}

// ---------------------------------------------------------------------------
// Construction and FEN
// ---------------------------------------------------------------------------

impl Position {
    /// Empty board, White to move, no rights. Only useful as a base for
    /// piece placement.
    pub fn empty() -> Self {
        Position {
            pieces: [Bitboard::EMPTY; PieceType::COUNT],
            colors: [Bitboard::EMPTY; 2],
            epsq: Square::EMPTY,
            flags: 0,
            ply: 1,
            halfmove_clock: 0,
            checking_pieces: Bitboard::EMPTY,
            pinned_pieces: Bitboard::EMPTY,
            spying_pieces: Bitboard::EMPTY,
            check_vectors: Vec::new(),
            spy_vectors: Vec::new(),
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(pos) => pos,
            Err(_) => unreachable!("starting FEN is always valid"),
        }
    }

    /// Parse a FEN string.
    ///
    /// Validates all 6 fields, requires exactly one king per side, no pawns
    /// on the back ranks, plausible piece counts, castling rights only for
    /// kings and rooks still at home, an en-passant square on the rank the
    /// side to move could capture onto, and a halfmove clock that does not
    /// exceed the ply implied by the fullmove number.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ChessError::InvalidFen(format!(
                "expected 6 fields, got {}",
                fields.len()
            )));
        }

        let mut pos = Position::empty();

        // ----- Field 1: piece placement -----
        // FEN lists rank 8 first, which under this layout is simply
        // ascending bit index order.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if file > 7 {
                    return Err(ChessError::InvalidFen(format!(
                        "too many squares in rank {}",
                        8 - rank_idx
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid empty count '{ch}' in rank {}",
                            8 - rank_idx
                        )));
                    }
                    file += digit as u8;
                } else if let Some(piece) = PieceType::from_char(ch) {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::from_index(rank_idx as u8 * 8 + file);
                    pos.pieces[piece.index()].set(sq);
                    pos.colors[color.index()].set(sq);
                    file += 1;
                } else {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid character '{ch}' in piece placement"
                    )));
                }
            }
            if file != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has {file} squares instead of 8",
                    8 - rank_idx
                )));
            }
        }

        for color in Color::ALL {
            let kings = pos.side_bb(color, PieceType::King).pop_count();
            if kings != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "{color} has {kings} kings (expected 1)"
                )));
            }
            if pos.side_bb(color, PieceType::Pawn).pop_count() > 8 {
                return Err(ChessError::InvalidFen(format!("{color} has too many pawns")));
            }
            if pos.colors[color.index()].pop_count() > 16 {
                return Err(ChessError::InvalidFen(format!(
                    "{color} has too many pieces"
                )));
            }
        }
        if (pos.pieces[PieceType::Pawn.index()] & BACK_RANKS).is_not_empty() {
            return Err(ChessError::InvalidFen(
                "pawns cannot stand on the first or last rank".to_string(),
            ));
        }

        // ----- Field 2: side to move -----
        let white_to_move = match fields[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move: '{other}'"
                )));
            }
        };

        // ----- Field 3: castling availability -----
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                let flag = match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    _ => {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid castling string: '{}'",
                            fields[2]
                        )));
                    }
                };
                pos.flags |= flag;
            }
        }
        // A right whose king or rook has left home would let a later castle
        // conjure a rook out of thin air, so stale rights are a parse fault.
        for color in Color::ALL {
            let home = home_rank(color);
            let king_home = (pos.side_bb(color, PieceType::King) & home & Bitboard::FILES[4])
                .is_not_empty();
            for side in CastleSide::ALL {
                if !pos.castle_right(color, side) {
                    continue;
                }
                let rook_file = match side {
                    CastleSide::Kingside => 7,
                    CastleSide::Queenside => 0,
                };
                let rook_home = (pos.side_bb(color, PieceType::Rook)
                    & home
                    & Bitboard::FILES[rook_file])
                    .is_not_empty();
                if !king_home || !rook_home {
                    return Err(ChessError::InvalidFen(format!(
                        "{color} {side} castling right with the king or rook off home"
                    )));
                }
            }
        }

        // ----- Field 4: en-passant target square -----
        if fields[3] != "-" {
            let ep_sq = Square::from_algebraic(fields[3]).map_err(|_| {
                ChessError::InvalidFen(format!("invalid en passant square: '{}'", fields[3]))
            })?;
            let expected_rank = if white_to_move { 6 } else { 3 };
            if ep_sq.rank() != expected_rank {
                return Err(ChessError::InvalidFen(format!(
                    "en passant square {} is not on rank {expected_rank}",
                    fields[3]
                )));
            }
            pos.epsq = ep_sq;
        }

        // ----- Field 5: halfmove clock -----
        pos.halfmove_clock = fields[4].parse::<u16>().map_err(|_| {
            ChessError::InvalidFen(format!("invalid halfmove clock: '{}'", fields[4]))
        })?;

        // ----- Field 6: fullmove number -----
        let fullmove = fields[5].parse::<u16>().map_err(|_| {
            ChessError::InvalidFen(format!("invalid fullmove number: '{}'", fields[5]))
        })?;
        if fullmove == 0 {
            return Err(ChessError::InvalidFen(
                "fullmove number must be >= 1".to_string(),
            ));
        }
        pos.ply = fullmove * 2 - u16::from(white_to_move);
        if pos.halfmove_clock > pos.ply {
            return Err(ChessError::InvalidFen(format!(
                "halfmove clock {} exceeds ply {}",
                pos.halfmove_clock, pos.ply
            )));
        }

        pos.king_threats();

        #[cfg(debug_assertions)]
        pos.check_integrity();

        Ok(pos)
    }

    /// Export the position as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for rank_idx in 0..8u8 {
            let mut empty_count = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_index(rank_idx * 8 + file);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty_count > 0 {
                            fen.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        let ch = piece.to_char();
                        fen.push(match color {
                            Color::White => ch.to_ascii_uppercase(),
                            Color::Black => ch,
                        });
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push((b'0' + empty_count) as char);
            }
            if rank_idx < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.turn() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.flags & CASTLE_MASK == 0 {
            fen.push('-');
        } else {
            for (flag, ch) in [
                (CASTLE_WK, 'K'),
                (CASTLE_WQ, 'Q'),
                (CASTLE_BK, 'k'),
                (CASTLE_BQ, 'q'),
            ] {
                if self.flags & flag != 0 {
                    fen.push(ch);
                }
            }
        }

        fen.push(' ');
        if self.epsq.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&self.epsq.to_algebraic());
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number().to_string());

        fen
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Position {
    /// Whose turn it is. White moves on odd plies.
    #[inline]
    pub fn turn(&self) -> Color {
        if self.ply % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// FEN-style fullmove number derived from the ply.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        (self.ply + 1) / 2
    }

    /// Bitboard of all pieces of one type, either color.
    #[inline]
    pub fn piece_bb(&self, piece: PieceType) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Bitboard of all pieces of one color.
    #[inline]
    pub fn color_bb(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Bitboard of one color's pieces of one type.
    #[inline]
    pub fn side_bb(&self, color: Color, piece: PieceType) -> Bitboard {
        self.pieces[piece.index()] & self.colors[color.index()]
    }

    /// Union of both color boards.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    pub fn is_open(&self, sq: Square) -> bool {
        !self.occupancy().contains(sq)
    }

    /// Does the side to move own the piece on `sq`?
    #[inline]
    pub fn is_friendly(&self, sq: Square) -> bool {
        self.colors[self.turn().index()].contains(sq)
    }

    /// Does the opponent of the side to move own the piece on `sq`?
    #[inline]
    pub fn is_enemy(&self, sq: Square) -> bool {
        self.colors[(!self.turn()).index()].contains(sq)
    }

    /// The king square for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        Square::new(self.side_bb(color, PieceType::King).0)
    }

    /// What piece (if any) stands on `sq`?
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceType)> {
        if self.is_open(sq) {
            return None;
        }
        let color = if self.colors[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        self.piece_type_at(sq).map(|piece| (color, piece))
    }

    /// The type of the piece on `sq`, either color.
    pub fn piece_type_at(&self, sq: Square) -> Option<PieceType> {
        PieceType::ALL
            .into_iter()
            .find(|piece| self.pieces[piece.index()].contains(sq))
    }

    /// Is castling to `side` still available for `color`?
    #[inline]
    pub fn castle_right(&self, color: Color, side: CastleSide) -> bool {
        self.flags & castle_flag(color, side) != 0
    }

    fn set_castle_right(&mut self, color: Color, side: CastleSide, available: bool) {
        let flag = castle_flag(color, side);
        if available {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    /// Is the side to move in check? Kept current by `king_threats`.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.flags & IN_CHECK != 0
    }

    pub(crate) fn set_in_check(&mut self, checked: bool) {
        if checked {
            self.flags |= IN_CHECK;
        } else {
            self.flags &= !IN_CHECK;
        }
    }
}

// ---------------------------------------------------------------------------
// Making moves
// ---------------------------------------------------------------------------

impl Position {
    /// Apply a move that is already known to be legal.
    ///
    /// Updates the boards, the en-passant square, castling rights, clocks
    /// and ply, then recomputes the threat state for the new side to move.
    /// Undo is the caller's concern: histories store full snapshots.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.turn();
        let them = !us;

        debug_assert_eq!(mv.validate(), Ok(()));
        debug_assert_eq!(mv.color, us);
        debug_assert!(self.side_bb(us, mv.piece).contains(mv.from));
        match mv.kind {
            MoveKind::Standard | MoveKind::Promotion => match mv.captured {
                Some(captured) => {
                    debug_assert!(self.side_bb(them, captured).contains(mv.to));
                }
                None => debug_assert!(self.is_open(mv.to)),
            },
            MoveKind::EnPassant => {
                debug_assert_eq!(mv.to, self.epsq);
                debug_assert!(self.side_bb(them, PieceType::Pawn).contains(mv.special));
                debug_assert!(self.is_open(mv.to));
            }
            MoveKind::Castle => {
                debug_assert!(self.side_bb(us, PieceType::Rook).contains(mv.special));
                debug_assert!(self.is_open(mv.to));
            }
        }
        #[cfg(debug_assertions)]
        self.check_castling_rights_integrity();

        // En-passant square: set only by a double push, cleared otherwise.
        self.epsq = Square::EMPTY;
        if mv.piece == PieceType::Pawn
            && pawn_start_rank(us).contains(mv.from)
            && mv.from.shifted(pawn_double_push(us)) == mv.to
        {
            self.epsq = mv.from.shifted(pawn_push(us));
        }

        // Castling rights: king and rook moves forfeit them, and capturing
        // a rook on its home square strips the opponent's. The home-rank
        // test matters: a wandering second rook on the a- or h-file must
        // not cost the right of the rook still sitting at home.
        if self.flags & CASTLE_MASK != 0 {
            if mv.piece == PieceType::King {
                self.set_castle_right(us, CastleSide::Kingside, false);
                self.set_castle_right(us, CastleSide::Queenside, false);
            } else if mv.piece == PieceType::Rook && home_rank(us).contains(mv.from) {
                if mv.from.on_file(0) {
                    self.set_castle_right(us, CastleSide::Queenside, false);
                } else if mv.from.on_file(7) {
                    self.set_castle_right(us, CastleSide::Kingside, false);
                }
            }
            if mv.captured == Some(PieceType::Rook) && home_rank(them).contains(mv.to) {
                if mv.to.on_file(0) {
                    self.set_castle_right(them, CastleSide::Queenside, false);
                } else if mv.to.on_file(7) {
                    self.set_castle_right(them, CastleSide::Kingside, false);
                }
            }
        }

        // Piece placement. A promotion is a standard move whose landing
        // piece differs from its mover.
        match mv.kind {
            MoveKind::Standard | MoveKind::Promotion => {
                self.pieces[mv.piece.index()].clear(mv.from);
                self.colors[us.index()].clear(mv.from);

                if let Some(captured) = mv.captured {
                    self.pieces[captured.index()].clear(mv.to);
                    self.colors[them.index()].clear(mv.to);
                }

                let landing = mv.promotion.unwrap_or(mv.piece);
                self.pieces[landing.index()].set(mv.to);
                self.colors[us.index()].set(mv.to);
            }
            MoveKind::EnPassant => {
                self.pieces[PieceType::Pawn.index()].clear(mv.from);
                self.colors[us.index()].clear(mv.from);

                self.pieces[PieceType::Pawn.index()].clear(mv.special);
                self.colors[them.index()].clear(mv.special);

                self.pieces[PieceType::Pawn.index()].set(mv.to);
                self.colors[us.index()].set(mv.to);
            }
            MoveKind::Castle => {
                self.pieces[PieceType::King.index()].clear(mv.from);
                self.colors[us.index()].clear(mv.from);
                self.pieces[PieceType::King.index()].set(mv.to);
                self.colors[us.index()].set(mv.to);

                // The queenside rook sits on a lower bit than its king.
                let side = if mv.special.0 < mv.from.0 {
                    CastleSide::Queenside
                } else {
                    CastleSide::Kingside
                };
                let rook_to = mv.special.shifted(rook_castle_direction(side));
                self.pieces[PieceType::Rook.index()].clear(mv.special);
                self.colors[us.index()].clear(mv.special);
                self.pieces[PieceType::Rook.index()].set(rook_to);
                self.colors[us.index()].set(rook_to);
            }
        }

        // Clocks.
        if mv.piece == PieceType::Pawn || mv.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.ply += 1;

        // Threat state for the side now to move (also refreshes in-check).
        self.king_threats();

        #[cfg(debug_assertions)]
        self.check_integrity();
    }

    /// Flip the position vertically and swap the colors, so the side that
    /// was to move now defends the mirrored setup. Useful for symmetry
    /// checks: move generation must produce mirrored moves.
    pub fn mirror(&self) -> Position {
        let mut mirrored = Position::empty();
        for piece in PieceType::ALL {
            mirrored.pieces[piece.index()] = self.pieces[piece.index()].mirror_v();
        }
        mirrored.colors[Color::White.index()] = self.colors[Color::Black.index()].mirror_v();
        mirrored.colors[Color::Black.index()] = self.colors[Color::White.index()].mirror_v();

        // Swap the white and black castling nibbles, keep the rest.
        let castling = self.flags & CASTLE_MASK;
        mirrored.flags = (self.flags & !CASTLE_MASK) | (castling << 2 & CASTLE_MASK) | castling >> 2;

        mirrored.epsq = self.epsq.mirror_v();
        mirrored.ply = self.ply + 1;
        mirrored.halfmove_clock = self.halfmove_clock;

        mirrored.king_threats();

        #[cfg(debug_assertions)]
        mirrored.check_integrity();

        mirrored
    }
}

// ---------------------------------------------------------------------------
// Integrity checks (debug builds)
// ---------------------------------------------------------------------------

#[cfg(any(debug_assertions, test))]
impl Position {
    /// Assert every structural invariant of the board state.
    pub fn check_integrity(&self) {
        // The color boards and type boards must describe the same squares.
        let by_type = self
            .pieces
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc | *bb);
        assert_eq!(by_type, self.occupancy(), "type/color board mismatch");

        // No square can hold two piece types or two colors.
        for i in 0..PieceType::COUNT {
            for j in i + 1..PieceType::COUNT {
                assert!(
                    (self.pieces[i] & self.pieces[j]).is_empty(),
                    "square owned by two piece types"
                );
            }
        }
        assert!(
            (self.colors[0] & self.colors[1]).is_empty(),
            "square owned by both colors"
        );

        assert!(
            (self.pieces[PieceType::Pawn.index()] & BACK_RANKS).is_empty(),
            "pawn on a back rank"
        );

        for color in Color::ALL {
            assert!(
                self.side_bb(color, PieceType::Pawn).pop_count() <= 8,
                "{color} has too many pawns"
            );
            assert!(
                self.colors[color.index()].pop_count() <= 16,
                "{color} has too many pieces"
            );
            assert_eq!(
                self.side_bb(color, PieceType::King).pop_count(),
                1,
                "{color} must have exactly one king"
            );
        }

        // A non-empty en-passant square sits on the rank the side to move
        // could capture onto.
        if !self.epsq.is_empty() {
            let expected = match self.turn() {
                Color::White => 6,
                Color::Black => 3,
            };
            assert_eq!(self.epsq.rank(), expected, "en-passant square off its rank");
        }

        assert!(self.halfmove_clock <= self.ply, "halfmove clock exceeds ply");
    }

    /// Wherever a castling right remains, the king and the matching rook
    /// must still be on their home squares.
    fn check_castling_rights_integrity(&self) {
        for color in Color::ALL {
            let home_rank = match color {
                Color::White => Bitboard::RANKS[0],
                Color::Black => Bitboard::RANKS[7],
            };
            for side in CastleSide::ALL {
                if !self.castle_right(color, side) {
                    continue;
                }
                let king_home = Bitboard::FILES[4] & home_rank;
                let rook_home = match side {
                    CastleSide::Kingside => Bitboard::FILES[7] & home_rank,
                    CastleSide::Queenside => Bitboard::FILES[0] & home_rank,
                };
                assert!(
                    (self.side_bb(color, PieceType::King) & king_home).is_not_empty(),
                    "{color} holds a castling right with the king displaced"
                );
                assert!(
                    (self.side_bb(color, PieceType::Rook) & rook_home).is_not_empty(),
                    "{color} holds a {side} castling right with the rook displaced"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl Position {
    /// Render the board as an 8-line grid (rank 8 at top) with a file
    /// footer, useful for debugging and the interactive shell.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for rank_idx in 0..8u8 {
            s.push((b'8' - rank_idx) as char);
            s.push(' ');
            for file in 0..8u8 {
                let sq = Square::from_index(rank_idx * 8 + file);
                let ch = match self.piece_at(sq) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                s.push(ch);
                if file < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
