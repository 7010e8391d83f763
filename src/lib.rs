//! ray-chess: a ray-walking chess engine core.
//!
//! The [`engine`] module holds the rules: bitboard primitives, ray
//! geometry, threat analysis (checks, pins, spies), legal move
//! generation, SAN/long-algebraic notation, game sessions with undo,
//! and a perft harness with a slow oracle generator for
//! cross-checking. [`shell`] wraps a session in a line-oriented
//! command interface.

pub mod config;
pub mod engine;
pub mod shell;
