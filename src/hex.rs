//! Hexadecimal strings (object ids, digests) as hashes.
//!
//! The hex digits are cut into chunks of at most 12; each chunk is read with
//! a leading `1` so that leading zeros survive the trip through a number.

use crate::error::{HashidsError, Result};
use crate::hashids::Hashids;

const HEX_CHUNK_LEN: usize = 12;

impl Hashids {
    /// Encodes a string of hexadecimal digits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHex` if the input is empty or contains anything but
    /// `[0-9a-fA-F]`.
    pub fn encode_hex(&self, hex: &str) -> Result<String> {
        let invalid = || HashidsError::InvalidHex {
            input: hex.to_string(),
        };
        if hex.is_empty() {
            return Err(invalid());
        }

        let numbers = hex
            .as_bytes()
            .chunks(HEX_CHUNK_LEN)
            .map(|chunk| {
                chunk.iter().try_fold(1u64, |acc, &byte| {
                    char::from(byte)
                        .to_digit(16)
                        .map(|digit| acc * 16 + u64::from(digit))
                })
            })
            .collect::<Option<Vec<u64>>>()
            .ok_or_else(invalid)?;

        self.encode_canonical(&numbers)
    }

    /// Decodes a hash produced by [`encode_hex`](Hashids::encode_hex) back to
    /// lowercase hexadecimal digits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHash` if the hash does not decode under this
    /// configuration or is not exactly what [`encode_hex`](Hashids::encode_hex)
    /// produces for the decoded digits.
    pub fn decode_hex(&self, hash: &str) -> Result<String> {
        let invalid = || HashidsError::InvalidHash {
            hash: hash.to_string(),
        };
        let numbers = self.decode_canonical(hash);
        if numbers.is_empty() {
            return Err(invalid());
        }

        let mut hex = String::new();
        for number in numbers {
            let digits = format!("{number:x}");
            match digits.strip_prefix('1') {
                Some(rest) if !rest.is_empty() => hex.push_str(rest),
                _ => return Err(invalid()),
            }
        }

        // Chunks shorter than 12 digits are only valid in last position.
        if self.encode_hex(&hex).ok().as_deref() != Some(hash) {
            return Err(invalid());
        }
        Ok(hex)
    }
}
