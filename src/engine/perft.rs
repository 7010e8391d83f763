//! Perft: exhaustive legal-move tree counting.
//!
//! Walks every legal line to a fixed depth and classifies the leaf moves:
//! captures, en passants, castles, promotions, checks, double checks,
//! discovered checks and checkmates, plus per-root-move subtotals
//! ("divide") for pinning down where two engines diverge. The driver can
//! run on either generator so the fast path is checked against the oracle
//! at full tree scale.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::board::Position;
use super::types::{Move, MoveKind};

/// Which legal-move generator drives the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// Threat-state generator (`move_gen`).
    Fast,
    /// Pseudo-legal generation plus make-and-test filter (`basic_move_gen`).
    Basic,
}

/// Leaf tallies of one perft run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerftCounts {
    /// Leaf nodes.
    pub moves: u64,
    /// Leaf moves taking a piece, en passant included.
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    /// Leaf moves leaving the opponent in check.
    pub checks: u64,
    /// Checks delivered by two pieces at once.
    pub double_checks: u64,
    /// Checks where some checker stands off the moved piece's destination.
    pub discoveries: u64,
    /// Checks with no legal reply.
    pub checkmates: u64,
}

impl std::fmt::Display for PerftCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "moves:         {}", self.moves)?;
        writeln!(f, "captures:      {}", self.captures)?;
        writeln!(f, "en passants:   {}", self.en_passants)?;
        writeln!(f, "castles:       {}", self.castles)?;
        writeln!(f, "promotions:    {}", self.promotions)?;
        writeln!(f, "checks:        {}", self.checks)?;
        writeln!(f, "double checks: {}", self.double_checks)?;
        writeln!(f, "discoveries:   {}", self.discoveries)?;
        write!(f, "checkmates:    {}", self.checkmates)
    }
}

/// Depth-first perft driver owning its own position and snapshot stack.
pub struct Perft {
    cur_pos: Position,
    pos_history: Vec<Position>,
    depth: u32,
    generator: Generator,
    counts: PerftCounts,
    divide: BTreeMap<String, u64>,
    elapsed: Duration,
}

impl Perft {
    /// Driver on the fast generator.
    pub fn new(position: Position, depth: u32) -> Perft {
        Perft::with_generator(position, depth, Generator::Fast)
    }

    pub fn with_generator(position: Position, depth: u32, generator: Generator) -> Perft {
        Perft {
            cur_pos: position,
            pos_history: Vec::new(),
            depth,
            generator,
            counts: PerftCounts::default(),
            divide: BTreeMap::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn position(&self) -> &Position {
        &self.cur_pos
    }

    pub fn counts(&self) -> &PerftCounts {
        &self.counts
    }

    /// Leaf subtotals keyed by the root move's long algebraic form.
    pub fn divide(&self) -> &BTreeMap<String, u64> {
        &self.divide
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Walk the tree. Counts are reset first, so `run` can be repeated.
    pub fn run(&mut self) -> PerftCounts {
        self.counts = PerftCounts::default();
        self.divide.clear();
        let started = Instant::now();

        if self.depth == 0 {
            // An empty walk has exactly one node, the position itself.
            self.counts.moves = 1;
            self.elapsed = started.elapsed();
            return self.counts;
        }

        for mv in self.generate() {
            let before = self.counts.moves;
            if self.depth == 1 {
                self.classify_leaf(mv);
            } else {
                self.make(mv);
                self.walk(self.depth - 1);
                self.undo();
            }
            self.divide
                .insert(mv.to_string(), self.counts.moves - before);
        }

        self.elapsed = started.elapsed();
        self.counts
    }

    fn walk(&mut self, depth: u32) {
        for mv in self.generate() {
            if depth == 1 {
                self.classify_leaf(mv);
            } else {
                self.make(mv);
                self.walk(depth - 1);
                self.undo();
            }
        }
    }

    /// Tally one leaf move, probing the resulting position for the
    /// check-related counters.
    fn classify_leaf(&mut self, mv: Move) {
        self.counts.moves += 1;
        if mv.is_capture() {
            self.counts.captures += 1;
        }
        match mv.kind {
            MoveKind::EnPassant => self.counts.en_passants += 1,
            MoveKind::Castle => self.counts.castles += 1,
            MoveKind::Promotion => self.counts.promotions += 1,
            MoveKind::Standard => {}
        }

        self.make(mv);
        if self.cur_pos.in_check() {
            self.counts.checks += 1;
            let checkers = self.cur_pos.checking_pieces;
            if checkers.pop_count() > 1 {
                self.counts.double_checks += 1;
            }
            if checkers.iter().any(|sq| sq != mv.to) {
                self.counts.discoveries += 1;
            }
            if self.generate().is_empty() {
                self.counts.checkmates += 1;
            }
        }
        self.undo();
    }

    fn generate(&self) -> Vec<Move> {
        match self.generator {
            Generator::Fast => self.cur_pos.move_gen(),
            Generator::Basic => self.cur_pos.basic_move_gen(),
        }
    }

    fn make(&mut self, mv: Move) {
        self.pos_history.push(self.cur_pos.clone());
        self.cur_pos.make_move(mv);
    }

    fn undo(&mut self) {
        debug_assert!(!self.pos_history.is_empty());
        if let Some(prev) = self.pos_history.pop() {
            self.cur_pos = prev;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
