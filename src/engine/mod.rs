pub mod bitboard;
pub mod board;
pub mod movegen;
pub mod perft;
pub mod rays;
pub mod san;
pub mod session;
pub mod threats;
pub mod types;

pub use bitboard::{Bitboard, Square};
pub use board::{Position, START_FEN};
pub use perft::{Generator, Perft, PerftCounts};
pub use session::{GameStatus, MoveRecord, Session};
pub use types::*;
