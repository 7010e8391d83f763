use super::bitboard::{Bitboard, Square};
use super::types::{CastleSide, Color, PieceType};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A board step as a signed bit-shift amount. Positive offsets move toward
/// h1 (south/east under the a8 = bit 0 encoding), negative toward a8.
///
/// Compass steps, knight leaps, the double steps used by pawn double-push
/// and castling kings, and the queenside rook's three-file slide are all
/// directions; semantic meaning (which piece steps which way) lives in the
/// lookup functions below, not in the variant names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
    NN,
    EE,
    SS,
    WW,
    EEE,
}

impl Direction {
    /// Signed shift amount for one step.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::N => -8,
            Direction::NNE => -15,
            Direction::NE => -7,
            Direction::ENE => -6,
            Direction::E => 1,
            Direction::ESE => 10,
            Direction::SE => 9,
            Direction::SSE => 17,
            Direction::S => 8,
            Direction::SSW => 15,
            Direction::SW => 7,
            Direction::WSW => 6,
            Direction::W => -1,
            Direction::WNW => -10,
            Direction::NW => -9,
            Direction::NNW => -17,
            Direction::NN => -16,
            Direction::EE => 2,
            Direction::SS => 16,
            Direction::WW => -2,
            Direction::EEE => 3,
        }
    }

    /// Squares from which one step in this direction stays on the board.
    ///
    /// Keyed on the pre-shift square: a shift across a board edge wraps the
    /// bit onto a non-adjacent square, so a ray must test this mask *before*
    /// stepping. The excluded region is the ranks/files the step would run
    /// off of (e.g. E excludes the h-file, NNW excludes ranks 7–8 and the
    /// a-file).
    #[inline]
    pub const fn edge_mask(self) -> Bitboard {
        match self {
            Direction::N => Bitboard(!0x0000_0000_0000_00ff),
            Direction::NNE => Bitboard(!0x8080_8080_8080_ffff),
            Direction::NE => Bitboard(!0x8080_8080_8080_80ff),
            Direction::ENE => Bitboard(!0xc0c0_c0c0_c0c0_c0ff),
            Direction::E => Bitboard(!0x8080_8080_8080_8080),
            Direction::ESE => Bitboard(!0xffc0_c0c0_c0c0_c0c0),
            Direction::SE => Bitboard(!0xff80_8080_8080_8080),
            Direction::SSE => Bitboard(!0xffff_8080_8080_8080),
            Direction::S => Bitboard(!0xff00_0000_0000_0000),
            Direction::SSW => Bitboard(!0xffff_0101_0101_0101),
            Direction::SW => Bitboard(!0xff01_0101_0101_0101),
            Direction::WSW => Bitboard(!0xff03_0303_0303_0303),
            Direction::W => Bitboard(!0x0101_0101_0101_0101),
            Direction::WNW => Bitboard(!0x0303_0303_0303_03ff),
            Direction::NW => Bitboard(!0x0101_0101_0101_01ff),
            Direction::NNW => Bitboard(!0x0101_0101_0101_ffff),
            Direction::NN => Bitboard(!0x0000_0000_0000_ffff),
            Direction::EE => Bitboard(!0xc0c0_c0c0_c0c0_c0c0),
            Direction::SS => Bitboard(!0xffff_0000_0000_0000),
            Direction::WW => Bitboard(!0x0303_0303_0303_0303),
            Direction::EEE => Bitboard(!0xe0e0_e0e0_e0e0_e0e0),
        }
    }

    /// Reverse lookup from a signed shift amount.
    pub fn from_offset(offset: i8) -> Option<Direction> {
        match offset {
            -8 => Some(Direction::N),
            -15 => Some(Direction::NNE),
            -7 => Some(Direction::NE),
            -6 => Some(Direction::ENE),
            1 => Some(Direction::E),
            10 => Some(Direction::ESE),
            9 => Some(Direction::SE),
            17 => Some(Direction::SSE),
            8 => Some(Direction::S),
            15 => Some(Direction::SSW),
            7 => Some(Direction::SW),
            6 => Some(Direction::WSW),
            -1 => Some(Direction::W),
            -10 => Some(Direction::WNW),
            -9 => Some(Direction::NW),
            -17 => Some(Direction::NNW),
            -16 => Some(Direction::NN),
            2 => Some(Direction::EE),
            16 => Some(Direction::SS),
            -2 => Some(Direction::WW),
            3 => Some(Direction::EEE),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Semantic direction lookups
// ---------------------------------------------------------------------------

const ORTHOGONALS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

const DIAGONALS: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

const COMPASS: [Direction; 8] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

const KNIGHT_LEAPS: [Direction; 8] = [
    Direction::NNE,
    Direction::ENE,
    Direction::ESE,
    Direction::SSE,
    Direction::SSW,
    Direction::WSW,
    Direction::WNW,
    Direction::NNW,
];

/// Step directions for a non-pawn piece. Knights and kings are limited to
/// distance 1 by their generators; the direction set itself carries no
/// distance.
pub fn piece_directions(piece: PieceType) -> &'static [Direction] {
    match piece {
        PieceType::Knight => &KNIGHT_LEAPS,
        PieceType::Bishop => &DIAGONALS,
        PieceType::Rook => &ORTHOGONALS,
        PieceType::Queen | PieceType::King => &COMPASS,
        PieceType::Pawn => panic!("pawn directions are color-specific"),
    }
}

/// Single-step push direction for a pawn of `color`.
#[inline]
pub fn pawn_push(color: Color) -> Direction {
    match color {
        Color::White => Direction::N,
        Color::Black => Direction::S,
    }
}

/// Double-step push direction for a pawn of `color`.
#[inline]
pub fn pawn_double_push(color: Color) -> Direction {
    match color {
        Color::White => Direction::NN,
        Color::Black => Direction::SS,
    }
}

/// Capture directions for a pawn of `color`.
#[inline]
pub fn pawn_captures(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [Direction::NE, Direction::NW],
        Color::Black => [Direction::SE, Direction::SW],
    }
}

/// Rank a pawn of `color` double-pushes from.
#[inline]
pub fn pawn_start_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANKS[1],
        Color::Black => Bitboard::RANKS[6],
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub fn promotion_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANKS[7],
        Color::Black => Bitboard::RANKS[0],
    }
}

/// The king's two-file slide when castling to `side`.
#[inline]
pub fn king_castle_direction(side: CastleSide) -> Direction {
    match side {
        CastleSide::Kingside => Direction::EE,
        CastleSide::Queenside => Direction::WW,
    }
}

/// The rook's slide when castling: the h-file rook steps two files west,
/// the a-file rook three files east.
#[inline]
pub fn rook_castle_direction(side: CastleSide) -> Direction {
    match side {
        CastleSide::Kingside => Direction::WW,
        CastleSide::Queenside => Direction::EEE,
    }
}

// ---------------------------------------------------------------------------
// Square geometry
// ---------------------------------------------------------------------------

impl Square {
    /// One step in `dir`, unmasked. See [`Direction::edge_mask`].
    #[inline]
    pub fn shifted(self, dir: Direction) -> Square {
        self.shifted_by(dir.offset())
    }

    /// The step by which `from` approaches `self`: file/rank deltas reduced
    /// to a repeating unit step where one exists (orthogonals and diagonals
    /// collapse to single steps, exact knight offsets and their collinear
    /// multiples collapse to one leap). `None` when the two squares share no
    /// stepping line, or either is empty, or they coincide.
    pub fn direction_from(self, from: Square) -> Option<Direction> {
        if self.is_empty() || from.is_empty() || self == from {
            return None;
        }
        let to_index = self.index() as i8;
        let from_index = from.index() as i8;
        let mut df = to_index % 8 - from_index % 8;
        let mut dr = to_index / 8 - from_index / 8;

        let small = df.abs().min(dr.abs());
        let large = df.abs().max(dr.abs());
        if small == 0 {
            df /= large;
            dr /= large;
        } else if large % small == 0 {
            df /= small;
            dr /= small;
        }
        Direction::from_offset(dr * 8 + df)
    }
}

// ---------------------------------------------------------------------------
// Ray
// ---------------------------------------------------------------------------

/// A cursor walking outward from a base square along one direction.
///
/// Exhausts the moment the edge mask rejects the current square (the next
/// step would leave the board) or the step allowance runs out. Created once
/// per piece and re-aimed per direction with [`Ray::reset`].
pub struct Ray {
    base: Square,
    current: Square,
    direction: Direction,
    remaining: Option<u32>,
    exhausted: bool,
}

impl Ray {
    /// New ray at `base`. Unusable until the first `reset`.
    pub fn new(base: Square) -> Ray {
        debug_assert!(!base.is_empty(), "ray from the empty square");
        Ray {
            base,
            current: base,
            direction: Direction::N,
            remaining: Some(0),
            exhausted: true,
        }
    }

    /// Re-aim at the base square: walk `direction` for at most `max_distance`
    /// steps (`None` = until the board edge).
    pub fn reset(&mut self, direction: Direction, max_distance: Option<u32>) {
        self.current = self.base;
        self.direction = direction;
        self.remaining = max_distance;
        self.exhausted = false;
    }

    /// The square the cursor currently stands on.
    #[inline]
    pub fn current(&self) -> Square {
        self.current
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.exhausted {
            return None;
        }
        if self.remaining == Some(0) || !self.direction.edge_mask().contains(self.current) {
            self.exhausted = true;
            return None;
        }
        self.current = self.current.shifted(self.direction);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(self.current)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn walk(from: &str, dir: Direction, max: Option<u32>) -> Vec<String> {
        let mut ray = Ray::new(sq(from));
        ray.reset(dir, max);
        ray.map(|s| s.to_algebraic()).collect()
    }

    #[test]
    fn offsets_shift_where_expected() {
        assert_eq!(sq("e4").shifted(Direction::N), sq("e5"));
        assert_eq!(sq("e4").shifted(Direction::S), sq("e3"));
        assert_eq!(sq("e4").shifted(Direction::E), sq("f4"));
        assert_eq!(sq("e4").shifted(Direction::W), sq("d4"));
        assert_eq!(sq("e4").shifted(Direction::NE), sq("f5"));
        assert_eq!(sq("e4").shifted(Direction::SSW), sq("d2"));
        assert_eq!(sq("e2").shifted(Direction::NN), sq("e4"));
        assert_eq!(sq("e1").shifted(Direction::EE), sq("g1"));
        assert_eq!(sq("a1").shifted(Direction::EEE), sq("d1"));
    }

    #[test]
    fn edge_masks_halt_rays() {
        // East from the h-file would wrap to the a-file of the next rank.
        assert!(walk("h4", Direction::E, None).is_empty());
        assert!(walk("a8", Direction::N, None).is_empty());
        assert!(walk("a7", Direction::NNW, Some(1)).is_empty());
        assert!(walk("b2", Direction::WSW, Some(1)).is_empty());
        // One file in from the edge is fine.
        assert_eq!(walk("g4", Direction::E, None), vec!["h4"]);
    }

    #[test]
    fn unbounded_ray_runs_to_the_edge() {
        assert_eq!(
            walk("a1", Direction::N, None),
            vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8"]
        );
        assert_eq!(walk("e4", Direction::NE, None), vec!["f5", "g6", "h7"]);
        assert_eq!(
            walk("a1", Direction::NE, None),
            vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]
        );
    }

    #[test]
    fn bounded_ray_respects_distance() {
        assert_eq!(walk("e2", Direction::N, Some(2)), vec!["e3", "e4"]);
        assert_eq!(walk("e2", Direction::N, Some(1)), vec!["e3"]);
        assert_eq!(walk("b1", Direction::NNE, Some(1)), vec!["c3"]);
    }

    #[test]
    fn ray_reset_reuses_base() {
        let mut ray = Ray::new(sq("d4"));
        ray.reset(Direction::N, Some(1));
        assert_eq!(ray.next(), Some(sq("d5")));
        assert_eq!(ray.next(), None);
        ray.reset(Direction::SW, None);
        assert_eq!(ray.next(), Some(sq("c3")));
        assert_eq!(ray.current(), sq("c3"));
    }

    #[test]
    fn direction_from_unit_steps() {
        assert_eq!(sq("e5").direction_from(sq("e4")), Some(Direction::N));
        assert_eq!(sq("e8").direction_from(sq("e4")), Some(Direction::N));
        assert_eq!(sq("h1").direction_from(sq("a8")), Some(Direction::SE));
        assert_eq!(sq("a4").direction_from(sq("d4")), Some(Direction::W));
    }

    #[test]
    fn direction_from_knight_offsets() {
        assert_eq!(sq("c3").direction_from(sq("b1")), Some(Direction::NNE));
        assert_eq!(sq("b1").direction_from(sq("c3")), Some(Direction::SSW));
        // Collinear multiple of a leap reduces to the leap.
        assert_eq!(sq("d5").direction_from(sq("b1")), Some(Direction::NNE));
    }

    #[test]
    fn direction_from_no_line() {
        assert_eq!(sq("d4").direction_from(sq("a1")), Some(Direction::NE));
        assert_eq!(sq("e4").direction_from(sq("a1")), None); // (4,3) delta
        assert_eq!(sq("e4").direction_from(sq("e4")), None);
        assert_eq!(Square::EMPTY.direction_from(sq("e4")), None);
    }

    #[test]
    fn pawn_lookup_tables() {
        assert_eq!(pawn_push(Color::White), Direction::N);
        assert_eq!(pawn_push(Color::Black), Direction::S);
        assert_eq!(pawn_double_push(Color::White), Direction::NN);
        assert_eq!(pawn_captures(Color::Black), [Direction::SE, Direction::SW]);
        assert!(pawn_start_rank(Color::White).contains(sq("e2")));
        assert!(pawn_start_rank(Color::Black).contains(sq("e7")));
        assert!(promotion_rank(Color::White).contains(sq("e8")));
        assert!(promotion_rank(Color::Black).contains(sq("e1")));
    }

    #[test]
    fn piece_direction_tables() {
        assert_eq!(piece_directions(PieceType::Rook).len(), 4);
        assert_eq!(piece_directions(PieceType::Bishop).len(), 4);
        assert_eq!(piece_directions(PieceType::Queen).len(), 8);
        assert_eq!(piece_directions(PieceType::Knight).len(), 8);
        assert!(piece_directions(PieceType::Rook).contains(&Direction::N));
        assert!(!piece_directions(PieceType::Bishop).contains(&Direction::N));
    }

    #[test]
    fn castle_directions() {
        assert_eq!(king_castle_direction(CastleSide::Kingside), Direction::EE);
        assert_eq!(king_castle_direction(CastleSide::Queenside), Direction::WW);
        assert_eq!(rook_castle_direction(CastleSide::Kingside), Direction::WW);
        assert_eq!(rook_castle_direction(CastleSide::Queenside), Direction::EEE);
    }
}
