//! Canonical encoder: lottery seeding, per-number reseeding, separators,
//! guards and minimum-length padding.

use crate::alphabet::{consistent_shuffle, reseed};
use crate::chunk::MAX_NUMBER_U64;
use crate::error::{HashidsError, Result};
use crate::hashids::Hashids;

/// Writes `number` in base `alphabet.len()` using `alphabet` as digits.
///
/// Zero produces no digits at all.
pub(crate) fn to_digits(number: u64, alphabet: &[char]) -> Vec<char> {
    let base = alphabet.len() as u64;
    let mut digits = Vec::new();
    let mut current = number;
    while current > 0 {
        digits.push(alphabet[(current % base) as usize]);
        current /= base;
    }
    digits.reverse();
    digits
}

/// Checksum over the whole input; selects the lottery character and guards.
pub(crate) fn numbers_hash(numbers: &[u64]) -> u64 {
    numbers
        .iter()
        .enumerate()
        .map(|(i, &number)| number % (i as u64 + 100))
        .sum()
}

fn pick(table: &[char], seed: u64) -> char {
    table[(seed % table.len() as u64) as usize]
}

impl Hashids {
    /// Encodes non-negative numbers no larger than [`MAX_NUMBER`](crate::MAX_NUMBER)
    /// with the plain Hashids algorithm, without the chunking layer.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty slice and `NumberOutOfRange` if any
    /// number exceeds `MAX_NUMBER`.
    pub fn encode_canonical(&self, numbers: &[u64]) -> Result<String> {
        if numbers.is_empty() {
            return Err(HashidsError::EmptyInput);
        }
        if let Some(&value) = numbers.iter().find(|&&n| n > MAX_NUMBER_U64) {
            return Err(HashidsError::NumberOutOfRange { value });
        }
        Ok(self.pack(numbers))
    }

    /// Packs already validated numbers into a hash.
    pub(crate) fn pack(&self, numbers: &[u64]) -> String {
        let working = &self.tables.working;
        let separators = &self.tables.separators;
        let checksum = numbers_hash(numbers);
        let lottery = pick(working, checksum);

        let mut alphabet = working.clone();
        let mut result = vec![lottery];
        for (i, &number) in numbers.iter().enumerate() {
            alphabet = reseed(&alphabet, &self.salt, lottery);
            let digits = to_digits(number, &alphabet);
            result.extend_from_slice(&digits);

            if i + 1 < numbers.len() {
                let separator = match digits.first() {
                    Some(&first) => pick(separators, number % (u64::from(first) + i as u64)),
                    None => separators[0],
                };
                result.push(separator);
            }
        }

        self.add_guards(&mut result, checksum);
        self.pad(result, alphabet)
    }

    fn add_guards(&self, result: &mut Vec<char>, checksum: u64) {
        let min_length = self.config.min_hash_length;
        let guards = &self.tables.guards;
        if result.len() >= min_length {
            return;
        }

        let front = pick(guards, checksum + u64::from(result[0]));
        result.insert(0, front);

        if result.len() < min_length {
            // A bare lottery character leaves only two characters to draw from.
            let anchor = result[2.min(result.len() - 1)];
            result.push(pick(guards, checksum + u64::from(anchor)));
        }
    }

    /// Wraps the hash in slices of a self-shuffled alphabet until it reaches
    /// the minimum length, trimming any overshoot evenly from both ends.
    fn pad(&self, mut result: Vec<char>, mut alphabet: Vec<char>) -> String {
        let min_length = self.config.min_hash_length;
        let half = alphabet.len() / 2;
        while result.len() < min_length {
            alphabet = consistent_shuffle(&alphabet, &alphabet);

            let mut padded = Vec::with_capacity(result.len() + alphabet.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.extend_from_slice(&result);
            padded.extend_from_slice(&alphabet[..half]);

            let excess = padded.len().saturating_sub(min_length);
            if excess > 0 {
                let start = excess / 2;
                padded = padded[start..start + min_length].to_vec();
            }
            result = padded;
        }
        result.into_iter().collect()
    }
}
