//! Store B: an incrementally-maintained pair frequency table, and the
//! linear-scan max selector (store C).

use foldhash::fast::RandomState;
use indexmap::IndexMap;

pub type Pair = (u16, u16);

/// Bucket count of the original C reference's `BIGRAM_TABLE_SIZE`, kept
/// only as a documentation/benchmarking constant — the `IndexMap`-backed
/// index below doesn't need a fixed bucket count.
pub const REFERENCE_TABLE_SIZE: usize = 1 << 20;

/// Pair-frequency index. `add` never removes an entry once created;
/// `clear` sets one to exactly zero without removing it either, so stale
/// entries are tolerated by design and simply ignored by `scan_max`.
#[derive(Debug, Default)]
pub struct PairIndex {
    freq: IndexMap<Pair, i64, RandomState>,
}

impl PairIndex {
    pub fn new() -> Self {
        Self {
            freq: IndexMap::with_hasher(RandomState::default()),
        }
    }

    /// Creates or accumulates `pair`'s frequency by `delta`, which may be
    /// negative.
    pub fn add(&mut self, pair: Pair, delta: i64) {
        *self.freq.entry(pair).or_insert(0) += delta;
    }

    /// Forces `pair`'s frequency to exactly zero. Called once per merge
    /// step, after the whole corpus has been rewritten, to retire the
    /// just-consumed pair: the neighbor patches applied during rewriting
    /// (§4.3a) never touch the winning pair directly, so when the two
    /// symbols of the pair are equal (an overlapping run) the entry can
    /// be left with a stale, still-positive residual rather than the
    /// true post-merge value of zero. See DESIGN.md for the derivation.
    pub fn clear(&mut self, pair: Pair) {
        if let Some(freq) = self.freq.get_mut(&pair) {
            *freq = 0;
        }
    }

    /// One linear scan over every entry, returning the first-encountered
    /// pair at the strictly highest frequency (first-encountered
    /// tie-break, mirroring the reference's `update_max_node`). `None` if
    /// every entry's frequency is zero or negative.
    pub fn scan_max(&self) -> Option<(Pair, i64)> {
        let mut best: Option<(Pair, i64)> = None;
        for (&pair, &freq) in &self.freq {
            match best {
                Some((_, best_freq)) if freq <= best_freq => {}
                _ => best = Some((pair, freq)),
            }
        }
        best.filter(|&(_, freq)| freq > 0)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, pair: Pair) -> i64 {
        self.freq.get(&pair).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates() {
        let mut idx = PairIndex::new();
        idx.add((1, 2), 3);
        idx.add((1, 2), 4);
        assert_eq!(idx.get((1, 2)), 7);
    }

    #[test]
    fn scan_max_breaks_ties_by_first_encountered() {
        let mut idx = PairIndex::new();
        idx.add((1, 2), 5);
        idx.add((3, 4), 5);
        assert_eq!(idx.scan_max(), Some(((1, 2), 5)));
    }

    #[test]
    fn scan_max_prefers_strictly_greater() {
        let mut idx = PairIndex::new();
        idx.add((1, 2), 5);
        idx.add((3, 4), 6);
        assert_eq!(idx.scan_max(), Some(((3, 4), 6)));
    }

    #[test]
    fn scan_max_ignores_non_positive_entries() {
        let mut idx = PairIndex::new();
        idx.add((1, 2), 0);
        idx.add((3, 4), -1);
        assert_eq!(idx.scan_max(), None);
    }

    #[test]
    fn clear_zeroes_without_removing() {
        let mut idx = PairIndex::new();
        idx.add((1, 2), 5);
        idx.clear((1, 2));
        assert_eq!(idx.get((1, 2)), 0);
        assert_eq!(idx.scan_max(), None);
    }
}
