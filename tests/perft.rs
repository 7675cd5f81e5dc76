//! Perft integration suite: published node counts for reference positions,
//! plus state-invariant checks woven through the tree walk.

use std::str::FromStr;

use pyrite::board::{Color, EMPTY, Piece, Position};
use pyrite::perft::perft;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "initial position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    TestPosition {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    TestPosition {
        name: "position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    TestPosition {
        name: "position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9_467)],
    },
    TestPosition {
        name: "position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1_486), (3, 62_379)],
    },
    TestPosition {
        name: "en passant tangle",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    TestPosition {
        name: "promotion frenzy",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9_483)],
    },
    TestPosition {
        name: "bare castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

#[test]
fn test_perft_reference_counts() {
    for tp in TEST_POSITIONS {
        let mut pos = Position::from_str(tp.fen).unwrap();
        for &(depth, expected) in tp.depths {
            let nodes = perft(&mut pos, depth);
            assert_eq!(
                nodes, expected,
                "{} at depth {}: got {}, expected {}",
                tp.name, depth, nodes, expected
            );
        }
    }
}

/// perft variant re-checking the position invariants after every make and
/// every unmake: occupancy equals the union of the piece boards, the
/// boards stay disjoint, and the incremental hash matches a recompute.
fn perft_checked(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        let stack_before = pos.history_len();

        pos.make(mv);
        assert_invariants(pos);

        nodes += perft_checked(pos, depth - 1);

        pos.unmake(mv);
        assert_invariants(pos);
        assert_eq!(pos.history_len(), stack_before, "undo stack unbalanced");
    }
    nodes
}

fn assert_invariants(pos: &Position) {
    let mut union = EMPTY;
    for color in [Color::White, Color::Black] {
        for piece in Piece::ALL {
            let bb = pos.pieces(color, piece);
            assert!(
                (union & bb).is_empty(),
                "piece boards overlap in {}",
                pos
            );
            union |= bb;
        }
    }
    assert_eq!(union, pos.occupied(), "occupancy out of sync in {}", pos);
    assert_eq!(
        pos.hash(),
        pos.recompute_hash(),
        "incremental hash diverged in {}",
        pos
    );
    if let Some(ep) = pos.en_passant() {
        let expected_rank = match pos.side_to_move() {
            Color::White => 5, // black just double-pushed
            Color::Black => 2,
        };
        assert_eq!(ep.rank().to_index(), expected_rank, "bad ep square in {}", pos);
    }
}

#[test]
fn test_invariants_hold_through_tree_walk() {
    // depth kept moderate: every node runs a full recompute
    let cases = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3, 8_902),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2, 2_039),
        ("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3", 2, 707),
        ("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", 2, 496),
    ];
    for (fen, depth, expected) in cases {
        let mut pos = Position::from_str(fen).unwrap();
        assert_eq!(perft_checked(&mut pos, depth), expected, "{}", fen);
        assert_eq!(pos.history_len(), 0);
    }
}
