use crate::board::{Color, Piece, Position};
use crate::pst::{PIECE_VALUE, square_bonus};
use crate::types::Score;

/// Static evaluation: material plus piece-square bonuses, white minus
/// black, returned from the side to move's perspective so the search can
/// negate it across plies.
pub fn evaluate(pos: &Position) -> Score {
    let white = side_score(pos, Color::White);
    let black = side_score(pos, Color::Black);
    let score = white - black;

    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

fn side_score(pos: &Position, color: Color) -> Score {
    let mut score = 0;
    for piece in Piece::ALL {
        let value = PIECE_VALUE[piece.to_index()];
        for sq in pos.pieces(color, piece).iter() {
            score += value + square_bonus(piece, color, sq);
        }
    }
    score
}


// The search is a negamax, so this function always speaks for the side to
// move. The only contract with the recursion is that negating the score
// flips the perspective.
