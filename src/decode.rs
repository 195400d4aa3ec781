use crate::alphabet::reseed;
use crate::chunk::MAX_NUMBER_U64;
use crate::hashids::Hashids;

/// Reads a base `alphabet.len()` number written with `alphabet` as digits.
///
/// Returns `None` for a character outside `alphabet` or a value above
/// `MAX_NUMBER`. An empty segment reads as zero.
pub(crate) fn from_digits(segment: &str, alphabet: &[char]) -> Option<u64> {
    let base = alphabet.len() as u64;
    segment
        .chars()
        .try_fold(0u64, |acc, ch| {
            let position = alphabet.iter().position(|&c| c == ch)?;
            acc.checked_mul(base)?.checked_add(position as u64)
        })
        .filter(|&value| value <= MAX_NUMBER_U64)
}

impl Hashids {
    /// Decodes a hash produced by [`encode_canonical`](Hashids::encode_canonical).
    ///
    /// Never fails: anything that is not a hash of this exact configuration
    /// yields an empty `Vec`.
    pub fn decode_canonical(&self, hash: &str) -> Vec<u64> {
        self.unpack(hash).unwrap_or_default()
    }

    fn unpack(&self, hash: &str) -> Option<Vec<u64>> {
        if hash.is_empty() {
            return None;
        }
        if let Some(ch) = hash.chars().find(|&ch| !self.tables.is_known(ch)) {
            tracing::trace!(%ch, "rejecting hash with foreign character");
            return None;
        }

        let parts: Vec<&str> = hash.split(|ch| self.tables.is_guard(ch)).collect();
        let core = match parts.len() {
            2 | 3 => parts[1],
            _ => parts[0],
        };

        let mut chars = core.chars();
        let lottery = chars.next()?;

        let mut alphabet = self.tables.working.clone();
        let mut numbers = Vec::new();
        for segment in chars.as_str().split(|ch| self.tables.is_separator(ch)) {
            alphabet = reseed(&alphabet, &self.salt, lottery);
            numbers.push(from_digits(segment, &alphabet)?);
        }

        if self.pack(&numbers) != hash {
            tracing::trace!(?numbers, "rejecting hash that does not re-encode");
            return None;
        }
        Some(numbers)
    }
}
