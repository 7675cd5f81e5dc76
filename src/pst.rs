use crate::board::{Color, Piece, Square};
use crate::types::Score;

/// material values indexed by piece (king, queen, rook, bishop, knight,
/// pawn). The king carries no material term; losing it ends the game and
/// the search scores that through mate detection instead.
pub static PIECE_VALUE: [Score; 6] = [0, 900, 500, 320, 301, 100];

/// positional bonus for `piece` of `color` standing on `sq`.
///
/// The tables below are written the way a board diagram reads, rank 8 in
/// the first row. That layout is black's perspective of the index space,
/// so black indexes directly and white mirrors through `sq ^ 56`.
#[inline]
pub fn square_bonus(piece: Piece, color: Color, sq: Square) -> Score {
    let idx = match color {
        Color::White => sq.to_index() ^ 56,
        Color::Black => sq.to_index(),
    };
    PST[piece.to_index()][idx]
}

static PST: [[Score; 64]; 6] = [
    KING_PST, QUEEN_PST, ROOK_PST, BISHOP_PST, KNIGHT_PST, PAWN_PST,
];

#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST: [Score; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_values() {
        assert_eq!(PIECE_VALUE[Piece::Queen.to_index()], 900);
        assert_eq!(PIECE_VALUE[Piece::Knight.to_index()], 301);
        assert_eq!(PIECE_VALUE[Piece::King.to_index()], 0);
    }

    #[test]
    fn test_mirrored_squares_agree() {
        // a white piece on sq scores like a black piece on the mirror square
        for piece in Piece::ALL {
            for i in 0..64u8 {
                let sq = Square::new(i);
                assert_eq!(
                    square_bonus(piece, Color::White, sq),
                    square_bonus(piece, Color::Black, sq.flip_vertical()),
                );
            }
        }
    }

    #[test]
    fn test_white_pawn_advancement_rewarded() {
        let e2 = Square::parse("e2").unwrap();
        let e7 = Square::parse("e7").unwrap();
        assert!(
            square_bonus(Piece::Pawn, Color::White, e7)
                > square_bonus(Piece::Pawn, Color::White, e2)
        );
    }

    #[test]
    fn test_knight_prefers_center() {
        let d4 = Square::parse("d4").unwrap();
        let a1 = Square::parse("a1").unwrap();
        assert!(
            square_bonus(Piece::Knight, Color::White, d4)
                > square_bonus(Piece::Knight, Color::White, a1)
        );
    }
}
