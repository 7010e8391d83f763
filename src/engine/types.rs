use std::fmt;
use std::ops::Not;

use thiserror::Error;

use super::bitboard::Square;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Number of piece types.
    pub const COUNT: usize = 6;

    /// Pieces a pawn may promote to, in generation order.
    pub const PROMOTION_TARGETS: [PieceType; 4] = [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];

    /// Index for array lookups: Pawn=0 .. King=5.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter.
    pub fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parse a FEN letter of either case.
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Castling
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Standard,
    Castle,
    EnPassant,
    Promotion,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Standard => write!(f, "standard"),
            MoveKind::Castle => write!(f, "castle"),
            MoveKind::EnPassant => write!(f, "en passant"),
            MoveKind::Promotion => write!(f, "promotion"),
        }
    }
}

/// A single move, fully described: replaying it never needs to re-derive
/// anything from the position it was generated in.
///
/// `special` carries the third square some moves touch: the moving rook's
/// origin for a castle, the captured pawn's square for en passant (which is
/// not `to`). Standard moves leave it empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub piece: PieceType,
    pub from: Square,
    pub to: Square,
    pub special: Square,
    pub captured: Option<PieceType>,
    pub promotion: Option<PieceType>,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(color: Color, piece: PieceType, from: Square, to: Square) -> Move {
        Move {
            color,
            piece,
            from,
            to,
            special: Square::EMPTY,
            captured: None,
            promotion: None,
            kind: MoveKind::Standard,
        }
    }

    pub fn castle(color: Color, from: Square, to: Square, rook_from: Square) -> Move {
        Move {
            color,
            piece: PieceType::King,
            from,
            to,
            special: rook_from,
            captured: None,
            promotion: None,
            kind: MoveKind::Castle,
        }
    }

    pub fn en_passant(color: Color, from: Square, to: Square, captured_pawn: Square) -> Move {
        Move {
            color,
            piece: PieceType::Pawn,
            from,
            to,
            special: captured_pawn,
            captured: Some(PieceType::Pawn),
            promotion: None,
            kind: MoveKind::EnPassant,
        }
    }

    pub fn with_capture(mut self, captured: PieceType) -> Move {
        self.captured = Some(captured);
        self
    }

    /// Also flips the kind, so callers expand a plain pawn move into its
    /// four promotions without touching the kind themselves.
    pub fn with_promotion(mut self, promotion: PieceType) -> Move {
        self.promotion = Some(promotion);
        self.kind = MoveKind::Promotion;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Structural sanity: endpoints present and distinct, no king capture,
    /// promotions only by pawns to legal targets, the special square present
    /// exactly when the kind calls for one.
    pub fn validate(&self) -> Result<(), MoveValidationError> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(MoveValidationError::EmptyEndpoint);
        }
        if self.from == self.to {
            return Err(MoveValidationError::NullMove);
        }
        if self.captured == Some(PieceType::King) {
            return Err(MoveValidationError::KingCapture);
        }
        if let Some(promotion) = self.promotion {
            if self.piece != PieceType::Pawn {
                return Err(MoveValidationError::PromotionByNonPawn(self.piece));
            }
            if !PieceType::PROMOTION_TARGETS.contains(&promotion) {
                return Err(MoveValidationError::BadPromotionTarget(promotion));
            }
        }
        match self.kind {
            MoveKind::Standard => {
                if !self.special.is_empty() {
                    return Err(MoveValidationError::SpuriousSpecial);
                }
                if self.promotion.is_some() {
                    return Err(MoveValidationError::PromotionKindMismatch);
                }
            }
            MoveKind::Promotion => {
                if !self.special.is_empty() {
                    return Err(MoveValidationError::SpuriousSpecial);
                }
                if self.promotion.is_none() {
                    return Err(MoveValidationError::PromotionKindMismatch);
                }
            }
            MoveKind::Castle => {
                if self.special.is_empty() {
                    return Err(MoveValidationError::MissingSpecial(self.kind));
                }
                if self.piece != PieceType::King
                    || self.captured.is_some()
                    || self.promotion.is_some()
                {
                    return Err(MoveValidationError::MalformedCastle);
                }
            }
            MoveKind::EnPassant => {
                if self.special.is_empty() {
                    return Err(MoveValidationError::MissingSpecial(self.kind));
                }
                if self.piece != PieceType::Pawn
                    || self.captured != Some(PieceType::Pawn)
                    || self.promotion.is_some()
                {
                    return Err(MoveValidationError::MalformedEnPassant);
                }
            }
        }
        Ok(())
    }
}

/// Long algebraic form: origin, destination, promotion letter if any.
/// Castles render as the king's two-square hop (`e1g1`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveValidationError {
    #[error("move endpoints must be occupied squares")]
    EmptyEndpoint,
    #[error("move cannot start and end on the same square")]
    NullMove,
    #[error("kings cannot be captured")]
    KingCapture,
    #[error("{0} cannot promote")]
    PromotionByNonPawn(PieceType),
    #[error("cannot promote to {0}")]
    BadPromotionTarget(PieceType),
    #[error("only castle and en passant moves carry a special square")]
    SpuriousSpecial,
    #[error("{0} moves require a special square")]
    MissingSpecial(MoveKind),
    #[error("promotion field and move kind disagree")]
    PromotionKindMismatch,
    #[error("castle moves must move a king and capture nothing")]
    MalformedCastle,
    #[error("en passant moves must move a pawn and capture a pawn")]
    MalformedEnPassant,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move token: {0}")]
    InvalidMoveToken(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("no move to undo")]
    NothingToUndo,
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

    #[test]
    fn color_negation_and_display() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn piece_char_round_trip() {
        for piece in PieceType::ALL {
            assert_eq!(PieceType::from_char(piece.to_char()), Some(piece));
            assert_eq!(
                PieceType::from_char(piece.to_char().to_ascii_uppercase()),
                Some(piece)
            );
        }
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn move_displays_as_long_algebraic() {
        let quiet = Move::new(Color::White, PieceType::Pawn, sq("e2"), sq("e4"));
        assert_eq!(quiet.to_string(), "e2e4");

        let promo = Move::new(Color::White, PieceType::Pawn, sq("e7"), sq("e8"))
            .with_capture(PieceType::Rook)
            .with_promotion(PieceType::Queen);
        assert_eq!(promo.to_string(), "e7e8q");

        let castle = Move::castle(Color::White, sq("e1"), sq("g1"), sq("h1"));
        assert_eq!(castle.to_string(), "e1g1");
    }

    #[test]
    fn validate_accepts_well_formed_moves() {
        let quiet = Move::new(Color::Black, PieceType::Knight, sq("g8"), sq("f6"));
        assert_eq!(quiet.validate(), Ok(()));

        let ep = Move::en_passant(Color::White, sq("e5"), sq("d6"), sq("d5"));
        assert_eq!(ep.validate(), Ok(()));

        let castle = Move::castle(Color::Black, sq("e8"), sq("c8"), sq("a8"));
        assert_eq!(castle.validate(), Ok(()));

        let promo = Move::new(Color::White, PieceType::Pawn, sq("b7"), sq("a8"))
            .with_capture(PieceType::Rook)
            .with_promotion(PieceType::Knight);
        assert_eq!(promo.kind, MoveKind::Promotion);
        assert_eq!(promo.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_malformed_moves() {
        let null = Move::new(Color::White, PieceType::Rook, sq("a1"), sq("a1"));
        assert_eq!(null.validate(), Err(MoveValidationError::NullMove));

        let regicide = Move::new(Color::White, PieceType::Rook, sq("a1"), sq("a8"))
            .with_capture(PieceType::King);
        assert_eq!(regicide.validate(), Err(MoveValidationError::KingCapture));

        let bad_promo = Move::new(Color::White, PieceType::Pawn, sq("e7"), sq("e8"))
            .with_promotion(PieceType::King);
        assert_eq!(
            bad_promo.validate(),
            Err(MoveValidationError::BadPromotionTarget(PieceType::King))
        );

        let knight_promo = Move::new(Color::White, PieceType::Knight, sq("e7"), sq("e8"))
            .with_promotion(PieceType::Queen);
        assert_eq!(
            knight_promo.validate(),
            Err(MoveValidationError::PromotionByNonPawn(PieceType::Knight))
        );

        let mut ep = Move::en_passant(Color::White, sq("e5"), sq("d6"), sq("d5"));
        ep.special = Square::EMPTY;
        assert_eq!(
            ep.validate(),
            Err(MoveValidationError::MissingSpecial(MoveKind::EnPassant))
        );

        let mut bare = Move::new(Color::White, PieceType::Pawn, sq("e7"), sq("e8"));
        bare.kind = MoveKind::Promotion;
        assert_eq!(
            bare.validate(),
            Err(MoveValidationError::PromotionKindMismatch)
        );
    }
}
