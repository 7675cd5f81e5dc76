use std::sync::LazyLock;

struct ZobristKeys {
    /// keys indexed [piece board 0..11][square], piece boards ordered
    /// WK,WQ,WR,WB,WN,WP,BK,BQ,BR,BB,BN,BP
    piece: [[u64; 64]; 12],
    /// key XORed in when it's black's turn
    side: u64,
    /// one key per castling right: WK-side, WQ-side, BK-side, BQ-side
    castling: [u64; 4],
    /// keys for the en passant file (0-7), active only when an en passant
    /// target square exists
    ep: [u64; 8],
}

static KEYS: LazyLock<ZobristKeys> = LazyLock::new(|| {
    let mut rng = XorShift64(0x3243_F6A8_885A_308D); // fixed seed, reproducible hashes

    let mut piece = [[0u64; 64]; 12];
    for board_keys in &mut piece {
        for key in board_keys {
            *key = rng.next();
        }
    }

    let side = rng.next();

    let mut castling = [0u64; 4];
    for key in &mut castling {
        *key = rng.next();
    }

    let mut ep = [0u64; 8];
    for key in &mut ep {
        *key = rng.next();
    }

    ZobristKeys { piece, side, castling, ep }
});

/// Force-init the Zobrist keys. They are also lazily initialized on first
/// access; this just pins the cost to startup.
pub fn init_zobrist() {
    LazyLock::force(&KEYS);
}

#[inline]
pub fn piece_key(board_index: usize, sq: usize) -> u64 {
    KEYS.piece[board_index][sq]
}

#[inline]
pub fn side_key() -> u64 {
    KEYS.side
}

/// XOR of the keys of every castling right set in `rights`. Because XOR is
/// its own inverse this doubles as the delta key for `old ^ new`.
#[inline]
pub fn castling_key(rights: u8) -> u64 {
    let mut key = 0u64;
    for (i, k) in KEYS.castling.iter().enumerate() {
        if rights >> i & 1 == 1 {
            key ^= k;
        }
    }
    key
}

#[inline]
pub fn ep_key(file: usize) -> u64 {
    KEYS.ep[file]
}

/// simple xorshift64 PRNG
struct XorShift64(u64);

impl XorShift64 {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}


// Every independently hashable feature of a position gets its own random
// key; a position's hash is the XOR of the keys of its present features.
// XOR being self-inverse makes incremental maintenance O(1) per move:
// XOR out what left, XOR in what arrived. The fixed seed keeps hashes
// identical across runs, which keeps searches reproducible.
