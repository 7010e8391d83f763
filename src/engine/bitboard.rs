use std::fmt;

use super::types::ChessError;

// ---------------------------------------------------------------------------
// Bitboard
// ---------------------------------------------------------------------------

/// A 64-bit set of board squares, one bit per square.
///
/// Encoding is rank-major from the 8th rank down: bit 0 = a8, bit 7 = h8,
/// bit 56 = a1, bit 63 = h1. Files run a..h within each rank byte, so a FEN
/// placement string maps onto ascending bit indices with no remapping.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0u64);

    /// Rank masks indexed by chess rank − 1 (index 0 = rank 1 = bits 56..63).
    pub const RANKS: [Bitboard; 8] = [
        Bitboard(0xff00_0000_0000_0000),
        Bitboard(0x00ff_0000_0000_0000),
        Bitboard(0x0000_ff00_0000_0000),
        Bitboard(0x0000_00ff_0000_0000),
        Bitboard(0x0000_0000_ff00_0000),
        Bitboard(0x0000_0000_00ff_0000),
        Bitboard(0x0000_0000_0000_ff00),
        Bitboard(0x0000_0000_0000_00ff),
    ];

    /// File masks indexed by file (index 0 = a-file).
    pub const FILES: [Bitboard; 8] = [
        Bitboard(0x0101_0101_0101_0101),
        Bitboard(0x0202_0202_0202_0202),
        Bitboard(0x0404_0404_0404_0404),
        Bitboard(0x0808_0808_0808_0808),
        Bitboard(0x1010_1010_1010_1010),
        Bitboard(0x2020_2020_2020_2020),
        Bitboard(0x4040_4040_4040_4040),
        Bitboard(0x8080_8080_8080_8080),
    ];

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.0 != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= sq.0;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !sq.0;
    }

    #[inline]
    pub fn pop_count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Isolate the least-significant set bit as a Square, clearing it from
    /// the set. Returns `Square::EMPTY` once the board is exhausted, so the
    /// usual loop is `while !bb.is_empty() { let sq = bb.pop_occupied(); … }`.
    #[inline]
    pub fn pop_occupied(&mut self) -> Square {
        let lsb = self.0 & self.0.wrapping_neg();
        self.0 &= self.0.wrapping_sub(1);
        Square(lsb)
    }

    /// Flip the board vertically (rank 1 ↔ rank 8). Each rank occupies one
    /// byte, so the flip is a byte reversal.
    #[inline]
    pub fn mirror_v(self) -> Bitboard {
        Bitboard(self.0.swap_bytes())
    }

    /// Iterate over the set squares, lowest bit index first.
    #[inline]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/// Iterator over set bits in a `Bitboard`.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop_occupied())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.pop_count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard(sq.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard(0x{:016x})", self.0)?;
        for index in 0..64u8 {
            if index % 8 == 0 {
                write!(f, "  {} ", 8 - index / 8)?;
            }
            write!(f, "{}", if self.0 & (1u64 << index) != 0 { '1' } else { '.' })?;
            if index % 8 == 7 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        writeln!(f, "    a b c d e f g h")
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A Bitboard constrained to at most one set bit.
///
/// The all-zero value is a valid "no square" sentinel (empty en-passant
/// square, cleared pin candidate). Constructing a Square from a multi-bit
/// value is a bug in the caller, not a runtime condition, and panics.
/// Internal paths (`shifted_by`, `pop_occupied`) preserve the invariant by
/// construction and skip the check.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Square(pub u64);

impl Square {
    pub const EMPTY: Square = Square(0);

    /// Wrap a raw bit pattern. Panics on more than one set bit.
    #[inline]
    pub fn new(bits: u64) -> Self {
        assert!(
            bits.count_ones() <= 1,
            "Square must hold at most one bit, got 0x{bits:016x}"
        );
        Square(bits)
    }

    /// Square from a 0..63 bit index (0 = a8, 63 = h1).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 64, "square index out of range: {index}");
        Square(1u64 << index)
    }

    /// Bit index of the square (0 = a8, 63 = h1). Callers must not pass the
    /// empty sentinel.
    #[inline]
    pub fn index(self) -> u8 {
        debug_assert!(!self.is_empty(), "index() on the empty square");
        self.0.trailing_zeros() as u8
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// File 0..7 (0 = a-file).
    #[inline]
    pub fn file(self) -> u8 {
        self.index() % 8
    }

    /// Chess rank 1..8.
    #[inline]
    pub fn rank(self) -> u8 {
        8 - self.index() / 8
    }

    #[inline]
    pub fn on_file(self, file: u8) -> bool {
        Bitboard::FILES[file as usize].contains(self)
    }

    #[inline]
    pub fn on_rank(self, rank: u8) -> bool {
        Bitboard::RANKS[rank as usize - 1].contains(self)
    }

    /// The square as a one-bit Bitboard.
    #[inline]
    pub fn bb(self) -> Bitboard {
        Bitboard(self.0)
    }

    /// Shift the bit by a signed offset: positive offsets move toward h1
    /// (higher indices), negative toward a8. No edge masking: a shift across
    /// a board edge wraps onto a non-adjacent square, which is exactly why
    /// ray walks consult the direction's edge mask before stepping.
    #[inline]
    pub fn shifted_by(self, offset: i8) -> Square {
        if offset >= 0 {
            Square(self.0 << offset)
        } else {
            Square(self.0 >> -offset)
        }
    }

    /// Vertical mirror (a2 ↔ a7, e1 ↔ e8, …).
    #[inline]
    pub fn mirror_v(self) -> Square {
        Square(self.0.swap_bytes())
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Result<Self, ChessError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Square::from_index((7 - rank) * 8 + file))
        } else {
            Err(ChessError::InvalidSquare(s.to_string()))
        }
    }

    /// Algebraic notation like "e4". Must not be called on the empty square.
    pub fn to_algebraic(self) -> String {
        debug_assert!(!self.is_empty(), "to_algebraic() on the empty square");
        let file = (b'a' + self.file()) as char;
        let rank = (b'0' + self.rank()) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", self.to_algebraic())
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Square(-)")
        } else {
            write!(f, "Square({})", self.to_algebraic())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
