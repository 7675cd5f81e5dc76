use crate::types::Score;

/// what a stored score means relative to the search window it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// beta cutoff: the true score is at least this
    Lower,
    /// failed low: the true score is at most this
    Upper,
}

#[derive(Clone, Copy)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: Score,
    pub bound: Bound,
}

impl Default for TTEntry {
    fn default() -> Self {
        Self { key: 0, depth: 0, score: 0, bound: Bound::Exact }
    }
}

/// Transposition table: a fixed-size map from Zobrist hash to the result
/// of a previous search of that position. Distinct positions sharing a
/// slot (or, astronomically rarely, a full hash) can only perturb search
/// values, never move legality.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    mask: usize,
}

impl TranspositionTable {
    /// create a table of roughly `mb` megabytes, rounded to a power of two.
    pub fn new(mb: usize) -> Self {
        let entry_size = std::mem::size_of::<TTEntry>();
        let num_entries = (mb * 1024 * 1024) / entry_size;
        let size = (num_entries.next_power_of_two() / 2).max(1024);

        Self {
            entries: vec![TTEntry::default(); size],
            mask: size - 1,
        }
    }

    /// Look up `hash`. Hits require the stored search to have been at
    /// least `depth` deep; shallower entries are no use to the caller.
    pub fn probe(&self, hash: u64, depth: u8) -> Option<&TTEntry> {
        let entry = &self.entries[hash as usize & self.mask];
        if entry.key == hash && entry.depth >= depth {
            Some(entry)
        } else {
            None
        }
    }

    /// Store a search result, preferring deeper entries when evicting.
    pub fn store(&mut self, hash: u64, depth: u8, score: Score, bound: Bound) {
        let idx = hash as usize & self.mask;
        let entry = &self.entries[idx];

        let should_replace = entry.key == 0 || entry.key == hash || depth >= entry.depth;
        if !should_replace {
            return;
        }

        self.entries[idx] = TTEntry { key: hash, depth, score, bound };
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = TTEntry::default();
        }
    }
}


// Depth-gated probing keeps the table sound for a fixed-depth search: an
// entry searched to depth d answers any request for depth <= d, and
// nothing else.
