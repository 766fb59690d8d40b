//! Durable artifact for a trained vocabulary: the `{id -> bytes}` /
//! `{bytes -> id}` dictionary pair (§6 "persisted state").

use std::collections::HashMap;

use bincode::{Decode, Encode};

/// What gets written to disk: `(token_id, bytes)` pairs, base bytes
/// 0..=255 followed by the byte expansion of every minted merge token,
/// in ascending id order.
#[derive(Debug, Clone, Encode, Decode)]
pub struct VocabFile {
    entries: Vec<(u32, Vec<u8>)>,
}

impl VocabFile {
    /// Builds the base-byte + merge-expansion table that [`crate::train`]
    /// produces (§6.1).
    pub fn from_merges(merge_expansions: &[Vec<u8>]) -> Self {
        let mut entries: Vec<(u32, Vec<u8>)> = (0u32..256).map(|b| (b, vec![b as u8])).collect();
        entries.extend(
            merge_expansions
                .iter()
                .enumerate()
                .map(|(k, bytes)| (256 + k as u32, bytes.clone())),
        );
        Self { entries }
    }

    pub fn decode_dict(&self) -> HashMap<u32, Vec<u8>> {
        self.entries.iter().cloned().collect()
    }

    pub fn encode_dict(&self) -> HashMap<Vec<u8>, u32> {
        self.entries.iter().map(|(id, bytes)| (bytes.clone(), *id)).collect()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (value, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_bytes_round_trip_to_themselves() {
        let file = VocabFile::from_merges(&[]);
        let dict = file.decode_dict();
        assert_eq!(dict.get(&97), Some(&vec![97u8]));
    }

    #[test]
    fn bincode_round_trip_preserves_entries() {
        let file = VocabFile::from_merges(&[vec![97, 98]]);
        let bytes = file.to_bytes().unwrap();
        let restored = VocabFile::from_bytes(&bytes).unwrap();
        assert_eq!(restored.decode_dict(), file.decode_dict());
    }
}
