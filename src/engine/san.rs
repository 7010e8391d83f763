//! Standard Algebraic Notation.
//!
//! Rendering examples: `e4`, `Nf3`, `Bxe5`, `O-O`, `e8=Q+`, `Raxd1#`.
//! Parsing accepts SAN as well as the long form the move list prints
//! (`e2e4`, `e7e8q`), so session input can use either.

use super::board::Position;
use super::types::{ChessError, Move, MoveKind, PieceType};
use crate::engine::bitboard::Square;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a move in SAN, including a `+` or `#` suffix.
///
/// `legal_moves` must be the full legal move list of `pos`, passed in so
/// repeated rendering does not regenerate it.
pub fn move_to_san(pos: &Position, mv: Move, legal_moves: &[Move]) -> String {
    let mut san = String::with_capacity(8);

    if mv.kind == MoveKind::Castle {
        san.push_str(if mv.to.file() > mv.from.file() {
            "O-O"
        } else {
            "O-O-O"
        });
        san.push_str(check_suffix(pos, mv));
        return san;
    }

    if mv.piece == PieceType::Pawn {
        if mv.is_capture() {
            // Departure file prefixes pawn captures: "exd5".
            san.push((b'a' + mv.from.file()) as char);
            san.push('x');
        }
        san.push_str(&mv.to.to_algebraic());
        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }
    } else {
        san.push(mv.piece.to_char().to_ascii_uppercase());
        san.push_str(&disambiguation(mv, legal_moves));
        if mv.is_capture() {
            san.push('x');
        }
        san.push_str(&mv.to.to_algebraic());
    }

    san.push_str(check_suffix(pos, mv));
    san
}

/// `#` for mate, `+` for check, nothing otherwise.
fn check_suffix(pos: &Position, mv: Move) -> &'static str {
    let mut next = pos.clone();
    next.make_move(mv);
    if !next.in_check() {
        return "";
    }
    if next.move_gen().is_empty() {
        "#"
    } else {
        "+"
    }
}

/// Departure squares when two like pieces reach the same destination:
/// file if it distinguishes, else rank, else both.
fn disambiguation(mv: Move, legal_moves: &[Move]) -> String {
    let rivals: Vec<&Move> = legal_moves
        .iter()
        .filter(|m| {
            m.to == mv.to
                && m.from != mv.from
                && m.piece == mv.piece
                && m.kind == MoveKind::Standard
        })
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let file_char = (b'a' + mv.from.file()) as char;
    let rank_char = (b'0' + mv.from.rank()) as char;
    let file_shared = rivals.iter().any(|m| m.from.file() == mv.from.file());
    let rank_shared = rivals.iter().any(|m| m.from.rank() == mv.from.rank());

    match (file_shared, rank_shared) {
        (false, _) => file_char.to_string(),
        (true, false) => rank_char.to_string(),
        (true, true) => format!("{file_char}{rank_char}"),
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a move token against the legal moves of `pos`.
///
/// Long algebraic ("e2e4", "e7e8q") is tried first, then SAN. Suffixes
/// `+`, `#`, `!`, `?` are ignored.
pub fn parse_move(pos: &Position, token: &str) -> Result<Move, ChessError> {
    let trimmed = token.trim().trim_end_matches(['+', '#', '!', '?']);
    if looks_like_lan(trimmed) {
        return parse_lan(pos, trimmed);
    }
    parse_san(pos, trimmed)
}

fn looks_like_lan(token: &str) -> bool {
    let bytes = token.as_bytes();
    (bytes.len() == 4 || bytes.len() == 5)
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_lowercase()
        && bytes[3].is_ascii_digit()
}

/// Parse long algebraic notation: origin, destination, optional
/// promotion letter. Castling reads as the king's two-square step.
pub fn parse_lan(pos: &Position, token: &str) -> Result<Move, ChessError> {
    if !token.is_ascii() || !looks_like_lan(token) {
        return Err(ChessError::InvalidMoveToken(token.to_string()));
    }
    let from = Square::from_algebraic(&token[0..2])?;
    let to = Square::from_algebraic(&token[2..4])?;
    let promotion = match token.as_bytes().get(4) {
        None => None,
        Some(b'n') | Some(b'N') => Some(PieceType::Knight),
        Some(b'b') | Some(b'B') => Some(PieceType::Bishop),
        Some(b'r') | Some(b'R') => Some(PieceType::Rook),
        Some(b'q') | Some(b'Q') => Some(PieceType::Queen),
        Some(_) => return Err(ChessError::InvalidMoveToken(token.to_string())),
    };

    pos.move_gen()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
        .ok_or_else(|| ChessError::IllegalMove(token.to_string()))
}

/// Parse SAN and return the matching legal move.
pub fn parse_san(pos: &Position, san: &str) -> Result<Move, ChessError> {
    let legal = pos.move_gen();
    let san = san.trim_end_matches(['+', '#', '!', '?']);

    if san == "O-O" || san == "0-0" {
        return find_castle(&legal, san, 6);
    }
    if san == "O-O-O" || san == "0-0-0" {
        return find_castle(&legal, san, 2);
    }

    let chars: Vec<char> = san.chars().collect();
    if chars.is_empty() {
        return Err(ChessError::InvalidMoveToken(san.to_string()));
    }

    let (chars, promotion) = if chars.len() >= 2 && chars[chars.len() - 2] == '=' {
        let promo = match chars[chars.len() - 1] {
            'N' | 'n' => PieceType::Knight,
            'B' | 'b' => PieceType::Bishop,
            'R' | 'r' => PieceType::Rook,
            'Q' | 'q' => PieceType::Queen,
            _ => return Err(ChessError::InvalidMoveToken(san.to_string())),
        };
        (&chars[..chars.len() - 2], Some(promo))
    } else {
        (&chars[..], None)
    };

    let (piece, rest) = match chars.first() {
        Some('N') => (PieceType::Knight, &chars[1..]),
        Some('B') => (PieceType::Bishop, &chars[1..]),
        Some('R') => (PieceType::Rook, &chars[1..]),
        Some('Q') => (PieceType::Queen, &chars[1..]),
        Some('K') => (PieceType::King, &chars[1..]),
        Some(c) if ('a'..='h').contains(c) => (PieceType::Pawn, chars),
        _ => return Err(ChessError::InvalidMoveToken(san.to_string())),
    };

    let rest: Vec<char> = rest.iter().copied().filter(|&c| c != 'x').collect();
    if rest.len() < 2 {
        return Err(ChessError::InvalidMoveToken(san.to_string()));
    }

    let dest_str: String = rest[rest.len() - 2..].iter().collect();
    let dest = Square::from_algebraic(&dest_str)?;

    let disambig = &rest[..rest.len() - 2];
    let disambig_file: Option<u8> = disambig
        .iter()
        .find(|c| c.is_ascii_lowercase())
        .map(|&c| c as u8 - b'a');
    let disambig_rank: Option<u8> = disambig
        .iter()
        .find(|c| c.is_ascii_digit())
        .map(|&c| c as u8 - b'0');

    let candidates: Vec<&Move> = legal
        .iter()
        .filter(|m| {
            m.to == dest
                && m.piece == piece
                && m.kind != MoveKind::Castle
                && m.promotion == promotion
                && disambig_file.is_none_or(|f| m.from.file() == f)
                && disambig_rank.is_none_or(|r| m.from.rank() == r)
        })
        .collect();

    match candidates.len() {
        0 => Err(ChessError::IllegalMove(san.to_string())),
        1 => Ok(*candidates[0]),
        _ => Err(ChessError::IllegalMove(format!(
            "{san} is ambiguous ({} candidates)",
            candidates.len()
        ))),
    }
}

fn find_castle(legal: &[Move], san: &str, target_file: u8) -> Result<Move, ChessError> {
    legal
        .iter()
        .find(|m| m.kind == MoveKind::Castle && m.to.file() == target_file)
        .copied()
        .ok_or_else(|| ChessError::IllegalMove(san.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
