//! Store/operation G: segmenting input byte chunks into token ids using a
//! [`Trie`] (§4.7).

use crate::trie::Trie;

/// Encodes one chunk, appending ids to `out`. Every byte is guaranteed to
/// produce at least one id: a miss at the trie root falls back to the
/// byte's own value.
fn encode_chunk(chunk: &[u8], trie: &Trie, out: &mut Vec<u32>) {
    let mut i = 0;
    while i < chunk.len() {
        match trie.longest_match(chunk, i) {
            Some((id, consumed)) => {
                out.push(id);
                i += consumed;
            }
            None => {
                out.push(chunk[i] as u32);
                i += 1;
            }
        }
    }
}

/// Encodes chunks lazily, one at a time, as `chunks` produces them.
pub fn encode_stream(chunks: impl Iterator<Item = Vec<u8>>, trie: &Trie) -> Vec<u32> {
    let mut out = Vec::new();
    for chunk in chunks {
        encode_chunk(&chunk, trie, &mut out);
    }
    out
}

/// Encodes all chunks, materialized up front. Produces identical output
/// to [`encode_stream`] given the same chunks in the same order.
pub fn encode_batch(chunks: &[Vec<u8>], trie: &Trie) -> Vec<u32> {
    let mut out = Vec::with_capacity(chunks.iter().map(Vec::len).sum());
    for chunk in chunks {
        encode_chunk(chunk, trie, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn trie_from(entries: &[(u32, &[u8])]) -> Trie {
        let dict: HashMap<u32, Vec<u8>> = entries.iter().map(|&(id, b)| (id, b.to_vec())).collect();
        Trie::build(&dict).unwrap()
    }

    #[test]
    fn falls_back_to_raw_bytes_on_no_match() {
        let trie = trie_from(&[(97, b"a")]);
        let out = encode_batch(&[b"az".to_vec()], &trie);
        assert_eq!(out, vec![97, b'z' as u32]);
    }

    #[test]
    fn stream_and_batch_agree() {
        let trie = trie_from(&[(97, b"a"), (98, b"b"), (256, b"ab")]);
        let chunks = vec![b"ab".to_vec(), b"ba".to_vec()];
        let batch = encode_batch(&chunks, &trie);
        let stream = encode_stream(chunks.into_iter(), &trie);
        assert_eq!(batch, stream);
        assert_eq!(batch, vec![256, 98, 97]);
    }
}
