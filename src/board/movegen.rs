use super::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::bitboard::{BitBoard, FILE_A, FILE_H, RANK_1, RANK_3, RANK_6, RANK_8};
use super::chessmove::{Move, MoveFlag, MoveList};
use super::piece::{Color, Piece};
use super::position::{BK, BQ, Position, WK, WQ};
use super::square::{File, Rank, Square};

/// Generate all legal moves: pseudo-legal generation followed by the
/// make/test/unmake filter. A move stands iff the mover's king is not
/// attacked once the move is on the board.
pub fn legal_moves(pos: &mut Position) -> MoveList {
    let pseudo = pseudo_legal_moves(pos);
    let us = pos.side_to_move();

    let mut legal = MoveList::new();
    for mv in pseudo {
        pos.make(mv);
        if !pos.in_check(us) {
            legal.push(mv);
        }
        pos.unmake(mv);
    }
    legal
}

/// legal captures only (en passant included), for the quiescence search.
pub fn legal_captures(pos: &mut Position) -> MoveList {
    let their_pieces = pos.color_pieces(!pos.side_to_move());

    let mut captures = MoveList::new();
    for mv in legal_moves(pos) {
        // a castle's to-square holds our own rook, so exclude it before
        // the occupancy test
        if mv.is_en_passant() || (!mv.is_castle() && their_pieces.contains(mv.to())) {
            captures.push(mv);
        }
    }
    captures
}

/// Generate moves that obey piece movement rules but may leave the own
/// king attacked. Castling is the exception: its king-safety conditions
/// are part of the movement rule and checked here.
pub fn pseudo_legal_moves(pos: &Position) -> MoveList {
    let mut moves = MoveList::new();
    let us = pos.side_to_move();
    let our_pieces = pos.color_pieces(us);
    let occupied = pos.occupied();

    pawn_moves(pos, us, &mut moves);

    for from in pos.pieces(us, Piece::Knight).iter() {
        push_targets(from, knight_attacks(from) & !our_pieces, &mut moves);
    }
    for from in pos.pieces(us, Piece::Bishop).iter() {
        push_targets(from, bishop_attacks(from, occupied) & !our_pieces, &mut moves);
    }
    for from in pos.pieces(us, Piece::Rook).iter() {
        push_targets(from, rook_attacks(from, occupied) & !our_pieces, &mut moves);
    }
    for from in pos.pieces(us, Piece::Queen).iter() {
        let targets = (bishop_attacks(from, occupied) | rook_attacks(from, occupied)) & !our_pieces;
        push_targets(from, targets, &mut moves);
    }

    let king_from = pos.king_square(us);
    push_targets(king_from, king_attacks(king_from) & !our_pieces, &mut moves);
    castle_moves(pos, us, &mut moves);

    moves
}

#[inline]
fn push_targets(from: Square, targets: BitBoard, moves: &mut MoveList) {
    for to in targets.iter() {
        moves.push(Move::new(from, to, MoveFlag::Quiet));
    }
}

/// the square `delta` steps behind `to` in push direction.
#[inline]
fn origin(to: Square, delta: i8) -> Square {
    Square::new((to.to_index() as i8 - delta) as u8)
}

fn push_promotions(from: Square, to: Square, moves: &mut MoveList) {
    for flag in [
        MoveFlag::PromoQueen,
        MoveFlag::PromoRook,
        MoveFlag::PromoBishop,
        MoveFlag::PromoKnight,
    ] {
        moves.push(Move::new(from, to, flag));
    }
}

/// Set-wise pawn generation: whole-board shifts for pushes and captures,
/// with the A/H file masks keeping diagonal shifts from wrapping between
/// ranks.
fn pawn_moves(pos: &Position, us: Color, moves: &mut MoveList) {
    let pawns = pos.pieces(us, Piece::Pawn);
    let their_pieces = pos.color_pieces(!us);
    let empty = !pos.occupied();

    let (single, double, east, west, promo_rank, push, east_shift, west_shift) = match us {
        Color::White => {
            let single = pawns.north() & empty;
            let double = (single & RANK_3).north() & empty;
            let east = BitBoard((pawns & !FILE_H).0 << 9) & their_pieces;
            let west = BitBoard((pawns & !FILE_A).0 << 7) & their_pieces;
            (single, double, east, west, RANK_8, 8i8, 9i8, 7i8)
        }
        Color::Black => {
            let single = pawns.south() & empty;
            let double = (single & RANK_6).south() & empty;
            let east = BitBoard((pawns & !FILE_H).0 >> 7) & their_pieces;
            let west = BitBoard((pawns & !FILE_A).0 >> 9) & their_pieces;
            (single, double, east, west, RANK_1, -8i8, -7i8, -9i8)
        }
    };

    for to in (single & !promo_rank).iter() {
        moves.push(Move::new(origin(to, push), to, MoveFlag::Quiet));
    }
    for to in (single & promo_rank).iter() {
        push_promotions(origin(to, push), to, moves);
    }
    // double pushes carry no flag; make spots them by |from - to| == 16
    for to in double.iter() {
        moves.push(Move::new(origin(to, push * 2), to, MoveFlag::Quiet));
    }

    for (targets, shift) in [(east, east_shift), (west, west_shift)] {
        for to in (targets & !promo_rank).iter() {
            moves.push(Move::new(origin(to, shift), to, MoveFlag::Quiet));
        }
        for to in (targets & promo_rank).iter() {
            push_promotions(origin(to, shift), to, moves);
        }
    }

    if let Some(ep) = pos.en_passant() {
        // reverse lookup: our pawns able to capture onto the target square
        for from in (pawn_attacks(!us, ep) & pawns).iter() {
            moves.push(Move::new(from, ep, MoveFlag::EnPassant));
        }
    }
}

/// Castling, encoded king-from -> rook-from. Requires the right to still
/// be set, the squares between king and rook empty, both pieces on their
/// home squares, and the king's path (origin included) unattacked.
fn castle_moves(pos: &Position, us: Color, moves: &mut MoveList) {
    let rights = pos.castling_rights();
    let (kingside, queenside, home_rank) = match us {
        Color::White => (WK, WQ, 0),
        Color::Black => (BK, BQ, 7),
    };
    let them = !us;
    let rank = Rank::from_index(home_rank);
    let at = |file: usize| Square::make_square(rank, File::from_index(file));
    let king_from = at(4);

    if rights & kingside != 0 {
        let rook_from = at(7);
        let between = BitBoard::from_square(at(5)) | BitBoard::from_square(at(6));
        if (between & pos.occupied()).is_empty()
            && pos.pieces(us, Piece::King).contains(king_from)
            && pos.pieces(us, Piece::Rook).contains(rook_from)
            && !pos.is_square_attacked(king_from, them)
            && !pos.is_square_attacked(at(5), them)
            && !pos.is_square_attacked(at(6), them)
        {
            moves.push(Move::new(king_from, rook_from, MoveFlag::Castle));
        }
    }

    if rights & queenside != 0 {
        let rook_from = at(0);
        let between =
            BitBoard::from_square(at(1)) | BitBoard::from_square(at(2)) | BitBoard::from_square(at(3));
        // the b-file square only has to be empty, not safe: the king
        // never crosses it
        if (between & pos.occupied()).is_empty()
            && pos.pieces(us, Piece::King).contains(king_from)
            && pos.pieces(us, Piece::Rook).contains(rook_from)
            && !pos.is_square_attacked(king_from, them)
            && !pos.is_square_attacked(at(3), them)
            && !pos.is_square_attacked(at(2), them)
        {
            moves.push(Move::new(king_from, rook_from, MoveFlag::Castle));
        }
    }
}


// Generate pseudo-legal then filter by make/test/unmake: a few cycles per
// move slower than pin-aware generation, and far fewer ways to get it
// wrong. Perft is the referee for this file.
