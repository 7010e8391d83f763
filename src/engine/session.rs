//! Stateful play session wrapping a Position.
//!
//! A `Session` owns the current position, the snapshot stack that powers
//! undo, and the move records the shell prints. Undo is a rollback to a
//! stored copy, never an inverse-move computation, so it restores every
//! derived field exactly.

use super::board::Position;
use super::san::{self, move_to_san};
use super::types::{ChessError, Color, Move};

// ---------------------------------------------------------------------------
// Records and status
// ---------------------------------------------------------------------------

/// One played move as the history shows it.
#[derive(Clone, Debug)]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
}

/// Coarse state of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A game in progress: position, snapshots, move records.
#[derive(Clone, Debug)]
pub struct Session {
    position: Position,
    /// Snapshot taken before each played move; index i precedes move i.
    position_history: Vec<Position>,
    move_history: Vec<MoveRecord>,
}

impl Session {
    /// Session from the standard starting position.
    pub fn new() -> Session {
        Session {
            position: Position::starting(),
            position_history: Vec::new(),
            move_history: Vec::new(),
        }
    }

    /// Session from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Session, ChessError> {
        Ok(Session {
            position: Position::from_fen(fen)?,
            position_history: Vec::new(),
            move_history: Vec::new(),
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.move_gen()
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Moves played in this session.
    pub fn moves_played(&self) -> usize {
        self.move_history.len()
    }

    pub fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.in_check() {
            GameStatus::Check
        } else {
            GameStatus::Active
        }
    }

    /// Parse a move token (long algebraic or SAN) and play it.
    /// Returns the SAN of the played move.
    pub fn apply_token(&mut self, token: &str) -> Result<String, ChessError> {
        let mv = san::parse_move(&self.position, token)?;
        self.apply(mv)
    }

    /// Play a move from the current legal move list.
    pub fn apply(&mut self, mv: Move) -> Result<String, ChessError> {
        let legal = self.position.move_gen();
        if !legal.contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        let san = move_to_san(&self.position, mv, &legal);

        self.position_history.push(self.position.clone());
        self.position.make_move(mv);
        self.move_history.push(MoveRecord {
            mv,
            san: san.clone(),
        });
        Ok(san)
    }

    /// Undo up to `count` moves by restoring the matching snapshot.
    /// Returns how many were undone; errors when nothing was played.
    pub fn undo(&mut self, count: usize) -> Result<usize, ChessError> {
        if self.move_history.is_empty() {
            return Err(ChessError::NothingToUndo);
        }
        let undone = count.min(self.move_history.len());
        if undone == 0 {
            return Ok(0);
        }
        let keep = self.move_history.len() - undone;
        self.position = self.position_history[keep].clone();
        self.position_history.truncate(keep);
        self.move_history.truncate(keep);
        Ok(undone)
    }

    /// Re-seed from a FEN, dropping all history. On a parse error the
    /// session is left untouched.
    pub fn reset(&mut self, fen: &str) -> Result<(), ChessError> {
        let position = Position::from_fen(fen)?;
        self.position = position;
        self.position_history.clear();
        self.move_history.clear();
        Ok(())
    }

    /// Re-seed from the standard starting position.
    pub fn reset_to_start(&mut self) {
        self.position = Position::starting();
        self.position_history.clear();
        self.move_history.clear();
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
