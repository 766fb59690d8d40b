//! High-level convenience wrapper tying training, persistence, and trie
//! construction together — the byte-oriented analogue of the teacher's
//! `char`-based `Vocabulary`.

use std::collections::HashMap;

use crate::error::{TrainError, TrieError};
use crate::persist::VocabFile;
use crate::train::{self, WordCounts};
use crate::trie::Trie;

/// A learned vocabulary: the persisted `{id <-> bytes}` dictionary plus
/// a trie built from it, ready to encode.
pub struct Vocabulary {
    file: VocabFile,
    decode_dict: HashMap<u32, Vec<u8>>,
    trie: Trie,
}

impl Vocabulary {
    /// Trains a new vocabulary from a weighted corpus (§6.1) and builds
    /// its trie immediately (§6.2).
    pub fn learn(word_counts: &WordCounts, num_merges: u32) -> Result<Self, TrainError> {
        let expansions = train::train(word_counts, num_merges)?;
        let file = VocabFile::from_merges(&expansions);
        Ok(Self::from_file(file).expect("from_merges only ever mints ids below u16::MAX"))
    }

    /// Reconstructs a vocabulary from a previously persisted file.
    pub fn from_file(file: VocabFile) -> Result<Self, TrieError> {
        let decode_dict = file.decode_dict();
        let trie = Trie::build(&decode_dict)?;
        Ok(Self { file, decode_dict, trie })
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn file(&self) -> &VocabFile {
        &self.file
    }

    pub fn encode_batch(&self, chunks: &[Vec<u8>]) -> Vec<u32> {
        crate::encoder::encode_batch(chunks, &self.trie)
    }

    pub fn encode_stream(&self, chunks: impl Iterator<Item = Vec<u8>>) -> Vec<u32> {
        crate::encoder::encode_stream(chunks, &self.trie)
    }

    /// Concatenates the byte expansion of every id, dropping any id the
    /// dictionary doesn't know about.
    pub fn decode(&self, ids: &[u32]) -> Vec<u8> {
        let mut out = Vec::new();
        for id in ids {
            if let Some(bytes) = self.decode_dict.get(id) {
                out.extend_from_slice(bytes);
            } else {
                log::warn!("decode: no entry for token id {id}, dropping it");
            }
        }
        out
    }
}
