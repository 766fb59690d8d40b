use thiserror::Error;

/// Failure modes of [`crate::train::train`] (malformed-input class).
#[derive(Debug, Error)]
pub enum TrainError {
    #[error(
        "num_merges {0} exceeds the maximum representable merge count ({})",
        crate::symbol::MAX_MERGES
    )]
    TooManyMerges(u32),
}

/// Failure modes of [`crate::trie::Trie::build`].
#[derive(Debug, Error)]
pub enum TrieError {
    #[error("token id {0} does not fit a 16-bit symbol id")]
    IdOverflow(u32),
}
