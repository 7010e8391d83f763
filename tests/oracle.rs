//! Cross-checks the ray-walking generator against the basic oracle.
//!
//! The oracle generates pseudo-legal moves and keeps each one only if making
//! it leaves a legal position; the fast generator relies on the incremental
//! threat state (check vectors, pins, spies) instead.  Both must produce
//! identical move sets at every node of every tree walked here.

use ray_chess::engine::board::Position;
use ray_chess::engine::perft::Perft;
use ray_chess::engine::types::Move;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn lans(moves: &[Move]) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(Move::to_string).collect();
    out.sort();
    out
}

/// Assert both generators agree at this node, returning the legal moves.
fn agreeing_moves(position: &Position) -> Vec<Move> {
    let fast = position.move_gen();
    let slow = position.basic_move_gen();
    assert_eq!(
        lans(&fast),
        lans(&slow),
        "generators disagree at {}",
        position.to_fen()
    );
    fast
}

/// Walk the legal tree to `depth`, checking agreement at every node.
fn walk(position: &Position, depth: u32) {
    let moves = agreeing_moves(position);
    if depth <= 1 {
        return;
    }
    for mv in moves {
        let mut child = position.clone();
        child.make_move(mv);
        walk(&child, depth - 1);
    }
}

// =====================================================================
// Tree agreement
// =====================================================================

#[test]
fn agreement_from_the_start() {
    walk(&Position::starting(), 3);
}

#[test]
fn agreement_on_kiwipete() {
    walk(
        &pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
        2,
    );
}

#[test]
fn agreement_on_rook_endgame_with_ep_pins() {
    walk(&pos("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"), 3);
}

#[test]
fn agreement_on_promotion_heavy_middlegame() {
    walk(
        &pos("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1"),
        2,
    );
}

#[test]
fn agreement_on_edwards_bug_catcher() {
    walk(&pos("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8"), 2);
}

#[test]
fn agreement_on_bare_castling_rights() {
    walk(&pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), 3);
}

#[test]
fn agreement_on_horizontal_ep_pin() {
    // exd6 would clear both rank-5 pawns and expose the king to the queen.
    walk(&pos("8/8/8/K2pP2q/8/8/8/7k w - d6 0 1"), 2);
}

#[test]
fn agreement_on_promotion_zoo() {
    walk(&pos("r3k3/1P6/8/8/8/8/6p1/4K2R w Kq - 0 1"), 3);
}

// =====================================================================
// Threat-state consistency
// =====================================================================

const FIXTURE_FENS: &[&str] = &[
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];

#[test]
fn in_check_matches_coverage_after_every_move() {
    for fen in FIXTURE_FENS {
        let position = pos(fen);
        for mv in position.move_gen() {
            let mut child = position.clone();
            child.make_move(mv);
            let mover = child.turn();
            assert_eq!(
                child.in_check(),
                child.square_covered(child.king_square(mover), !mover),
                "stale threat state after {mv} in {fen}"
            );
        }
    }
}

#[test]
fn every_generated_move_leaves_a_legal_position() {
    for fen in FIXTURE_FENS {
        let position = pos(fen);
        for mv in position.move_gen() {
            let mut child = position.clone();
            child.make_move(mv);
            assert!(
                !child.is_position_illegal(),
                "move {mv} leaves an illegal position in {fen}"
            );
        }
    }
}

// =====================================================================
// Mirror symmetry
// =====================================================================

#[test]
fn mirrored_positions_count_identically() {
    for fen in FIXTURE_FENS {
        let position = pos(fen);
        let counts = Perft::new(position.clone(), 2).run();
        let mirrored = Perft::new(position.mirror(), 2).run();
        assert_eq!(counts, mirrored, "mirror asymmetry for {fen}");
    }
}
