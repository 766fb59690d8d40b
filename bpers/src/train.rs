//! Training orchestration (§4.1): builds the symbol store and pair
//! index, then repeatedly selects and applies the highest-frequency
//! merge until `num_merges` is reached or no improving merge remains.

use foldhash::fast::RandomState;
use indexmap::IndexMap;
use log::{debug, info};

use crate::error::TrainError;
use crate::merges::MergeTable;
use crate::pair_index::PairIndex;
use crate::rewrite::rewrite_word;
use crate::symbol::{SymbolStore, MAX_MERGES};

/// A caller-supplied weighted corpus: pre-tokenized words and their
/// occurrence counts. Iterated in this map's own order — callers that
/// need reproducible training across runs are responsible for supplying
/// a deterministic order (§4.1).
pub type WordCounts = IndexMap<Vec<u8>, u16, RandomState>;

/// Learns a BPE merge vocabulary from a weighted corpus.
///
/// Returns the byte expansion of every minted token, in ascending id
/// order. Fewer than `num_merges` entries come back exactly when some
/// merge step finds no pair with positive frequency, per §4.1 step 4's
/// early-halt condition.
pub fn train(word_counts: &WordCounts, num_merges: u32) -> Result<Vec<Vec<u8>>, TrainError> {
    if num_merges > MAX_MERGES {
        return Err(TrainError::TooManyMerges(num_merges));
    }

    let mut store = SymbolStore::new();
    for (word, &count) in word_counts {
        store.insert(word, count);
    }

    let mut pair_index = PairIndex::new();
    for word in &store.words {
        let count = word.count as i64;
        for window in word.symbols.windows(2) {
            pair_index.add((window[0], window[1]), count);
        }
    }

    let mut merges = MergeTable::new();

    for k in 0..num_merges {
        let Some((pair, freq)) = pair_index.scan_max() else {
            debug!("merge {k}: no pair with positive frequency left, stopping early");
            break;
        };

        let new_id = merges.push(pair.0, pair.1);
        for word in &mut store.words {
            rewrite_word(word, pair.0, pair.1, new_id, &mut pair_index);
        }
        pair_index.clear(pair);

        if (k + 1) % 10 == 0 {
            info!("merge {}: {:?} (freq {}) -> token {}", k + 1, pair, freq, new_id);
        }
    }

    Ok((0..merges.len() as u16).map(|i| merges.expand_to_vec(256 + i)).collect())
}
