use std::fmt;

use arrayvec::ArrayVec;

use super::piece::Piece;
use super::square::Square;

/// Chess move packed into a u16.
///
/// Layout: `from(6) | to(6) | flag(4)`
///   - bits 0..5:   from square (0-63)
///   - bits 6..11:  to square (0-63)
///   - bits 12..15: move flag
///
/// Castling is encoded as king-from -> rook-from (white kingside is e1h1);
/// make derives both final squares from the flag and the to square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

/// the 4-bit move flag. At most one flag applies per move; plain moves
/// (including double pawn pushes and ordinary captures) carry `Quiet`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u16)]
pub enum MoveFlag {
    Quiet = 0,
    EnPassant = 1,
    Castle = 2,
    PromoQueen = 3,
    PromoRook = 4,
    PromoBishop = 5,
    PromoKnight = 6,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move((from.to_index() as u16) | ((to.to_index() as u16) << 6) | ((flag as u16) << 12))
    }

    #[inline]
    pub fn from(self) -> Square {
        Square::new((self.0 & 0x3F) as u8)
    }

    #[inline]
    pub fn to(self) -> Square {
        Square::new(((self.0 >> 6) & 0x3F) as u8)
    }

    #[inline]
    pub fn flag(self) -> MoveFlag {
        match self.0 >> 12 {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::EnPassant,
            2 => MoveFlag::Castle,
            3 => MoveFlag::PromoQueen,
            4 => MoveFlag::PromoRook,
            5 => MoveFlag::PromoBishop,
            _ => MoveFlag::PromoKnight,
        }
    }

    #[inline]
    pub fn is_castle(self) -> bool {
        self.flag() == MoveFlag::Castle
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.flag() == MoveFlag::EnPassant
    }

    /// the piece a promotion move promotes to, if any.
    #[inline]
    pub fn promotion(self) -> Option<Piece> {
        match self.flag() {
            MoveFlag::PromoQueen => Some(Piece::Queen),
            MoveFlag::PromoRook => Some(Piece::Rook),
            MoveFlag::PromoBishop => Some(Piece::Bishop),
            MoveFlag::PromoKnight => Some(Piece::Knight),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            let c = match promo {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                _ => 'n',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// fixed-capacity move buffer. No chess position has more than ~218 legal
/// moves, so appends never reallocate; overflowing is a generator bug.
pub type MoveList = ArrayVec<Move, 256>;


// move is packed into 16 bits so move lists stay small and comparisons are
// single integer compares. The castling to-square doubles as the rook
// locator, so no extra field is needed to tell the two castles apart.
