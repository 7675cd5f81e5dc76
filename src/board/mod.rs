mod attacks;
mod bitboard;
mod chessmove;
mod magic;
mod movegen;
mod piece;
mod position;
mod square;
mod zobrist;

pub use attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
pub use bitboard::{BitBoard, EMPTY};
pub use chessmove::{Move, MoveFlag, MoveList};
pub use movegen::{legal_captures, legal_moves, pseudo_legal_moves};
pub use piece::{Color, Piece};
pub use position::{BK, BQ, Position, WK, WQ};
pub use square::{ALL_SQUARES, File, Rank, Square};

/// Build attack tables and Zobrist keys. Everything also initializes
/// lazily on first use; calling this once at startup keeps the cost out
/// of the first search.
pub fn init() {
    attacks::init_attacks();
    zobrist::init_zobrist();
}
