//! Store F: a fixed 256-way byte trie built from a decode dictionary,
//! supporting longest-prefix matching (§4.6).

use std::collections::HashMap;

use crate::error::TrieError;

struct TrieNode {
    children: Box<[Option<Box<TrieNode>>; 256]>,
    token_id: Option<u32>,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: Box::new(std::array::from_fn(|_| None)),
            token_id: None,
        }
    }
}

/// Byte-labeled trie mapping token byte sequences to ids. Append-only
/// while being built in [`Trie::build`]; read-only afterward.
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Builds a trie from `{token_id -> bytes}`. Ids 0..=255 SHOULD be
    /// present with their single-byte expansion (§6.2); missing ones are
    /// only logged, not rejected, since the encoder's raw-byte fallback
    /// covers them regardless of whether the trie knows about them.
    pub fn build(decode_dict: &HashMap<u32, Vec<u8>>) -> Result<Self, TrieError> {
        let mut trie = Self { root: TrieNode::new() };
        for (&id, bytes) in decode_dict {
            if id > u16::MAX as u32 {
                return Err(TrieError::IdOverflow(id));
            }
            trie.insert(bytes, id);
        }
        for b in 0u32..256 {
            if !decode_dict.contains_key(&b) {
                log::warn!("decode dictionary is missing base byte {b}; encoder will still fall back to it");
            }
        }
        Ok(trie)
    }

    fn insert(&mut self, bytes: &[u8], token_id: u32) {
        let mut node = &mut self.root;
        for &b in bytes {
            node = node.children[b as usize].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.token_id = Some(token_id);
    }

    /// Longest-prefix match starting at `input[offset..]`. Returns
    /// `(token_id, bytes_consumed)`, or `None` if no terminal node was
    /// reached along the path (§4.6).
    pub fn longest_match(&self, input: &[u8], offset: usize) -> Option<(u32, usize)> {
        let mut node = &self.root;
        let mut best: Option<(u32, usize)> = None;
        for (i, &b) in input[offset..].iter().enumerate() {
            match &node.children[b as usize] {
                Some(next) => node = next,
                None => break,
            }
            if let Some(id) = node.token_id {
                best = Some((id, i + 1));
            }
        }
        best
    }

    /// Consumes and releases the trie. Ownership-typed equivalent of the
    /// reference's `free_trie`: since this takes `self` by value, the
    /// compiler rejects any further use of the handle, so there is no
    /// runtime use-after-free state to guard against.
    pub fn close(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(u32, &[u8])]) -> HashMap<u32, Vec<u8>> {
        entries.iter().map(|&(id, bytes)| (id, bytes.to_vec())).collect()
    }

    #[test]
    fn longest_match_prefers_the_longer_token() {
        let trie = Trie::build(&dict(&[(97, b"a"), (256, b"ab"), (257, b"abc")])).unwrap();
        assert_eq!(trie.longest_match(b"abcd", 0), Some((257, 3)));
    }

    #[test]
    fn no_match_returns_none() {
        let trie = Trie::build(&dict(&[(97, b"a")])).unwrap();
        assert_eq!(trie.longest_match(b"z", 0), None);
    }

    #[test]
    fn rejects_ids_above_u16_max() {
        let err = Trie::build(&dict(&[(70_000, b"x")])).unwrap_err();
        assert!(matches!(err, TrieError::IdOverflow(70_000)));
    }
}
