//! Salt-keyed alphabet permutation and the derived encoding tables.
//!
//! An [`Alphabet`] is built once per configuration and split into three
//! disjoint character sets: the working alphabet used for digits, the
//! separators placed between numbers, and the guards used for padding.

use crate::error::{HashidsError, Result};

/// The 62-character alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Characters preferred as separators, in priority order.
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// Minimum number of unique characters a configured alphabet must hold.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Characters with structural meaning in an encoded string.
pub(crate) const RESERVED_CHARS: [char; 2] = ['-', '='];

const GUARD_DIV: usize = 12;

/// Deterministically permutes `alphabet` using `salt` as the key.
///
/// Walks from the last position down to 1, swapping each position with an
/// index derived from the running sum of salt character codes. An empty salt
/// leaves the alphabet untouched.
pub(crate) fn consistent_shuffle(alphabet: &[char], salt: &[char]) -> Vec<char> {
    let mut shuffled = alphabet.to_vec();
    if salt.is_empty() {
        return shuffled;
    }

    let mut salt_index = 0usize;
    let mut cumulative = 0usize;
    for i in (1..shuffled.len()).rev() {
        salt_index %= salt.len();
        let code = salt[salt_index] as usize;
        cumulative += code;
        let j = (code + salt_index + cumulative) % i;
        shuffled.swap(i, j);
        salt_index += 1;
    }
    shuffled
}

/// Reshuffles `alphabet` keyed by `lottery + salt + alphabet`, cut to the
/// alphabet's length.
pub(crate) fn reseed(alphabet: &[char], salt: &[char], lottery: char) -> Vec<char> {
    let buffer: Vec<char> = std::iter::once(lottery)
        .chain(salt.iter().copied())
        .chain(alphabet.iter().copied())
        .take(alphabet.len())
        .collect();
    consistent_shuffle(alphabet, &buffer)
}

/// The immutable character tables of one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alphabet {
    pub(crate) working: Vec<char>,
    pub(crate) separators: Vec<char>,
    pub(crate) guards: Vec<char>,
}

impl Alphabet {
    /// Validates `alphabet` and derives the working, separator and guard sets.
    ///
    /// Duplicate characters are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet contains whitespace, a control
    /// character or a reserved marker character, has fewer than
    /// [`MIN_ALPHABET_LENGTH`] unique characters, or shares no character with
    /// [`DEFAULT_SEPARATORS`].
    pub(crate) fn new(alphabet: &str, salt: &[char]) -> Result<Self> {
        let mut unique: Vec<char> = Vec::with_capacity(alphabet.len());
        for ch in alphabet.chars() {
            if ch.is_whitespace() {
                return Err(HashidsError::AlphabetContainsWhitespace);
            }
            // A zero code point would zero the separator divisor in `pack`.
            if ch.is_control() {
                return Err(HashidsError::ControlCharacter { ch });
            }
            if RESERVED_CHARS.contains(&ch) {
                return Err(HashidsError::ReservedCharacter { ch });
            }
            if !unique.contains(&ch) {
                unique.push(ch);
            }
        }
        if unique.len() < MIN_ALPHABET_LENGTH {
            return Err(HashidsError::AlphabetTooShort {
                unique: unique.len(),
                min: MIN_ALPHABET_LENGTH,
            });
        }

        let legal: Vec<char> = DEFAULT_SEPARATORS
            .chars()
            .filter(|ch| unique.contains(ch))
            .collect();
        if legal.is_empty() {
            return Err(HashidsError::NoSeparators);
        }

        let mut working: Vec<char> = unique.into_iter().filter(|ch| !legal.contains(ch)).collect();
        let mut separators = consistent_shuffle(&legal, salt);

        // Keep at least one separator per 3.5 working characters (7/2 in integer form).
        if working.len() / separators.len() * 2 > 7 {
            let target = (working.len() * 2).div_ceil(7).max(2);
            if target > separators.len() {
                let difference = target - separators.len();
                separators.extend(working.drain(..difference));
            } else {
                separators.truncate(target);
            }
        }

        let mut working = consistent_shuffle(&working, salt);

        let guard_count = working.len().div_ceil(GUARD_DIV);
        let guards: Vec<char> = if working.len() < 3 {
            separators.drain(..guard_count).collect()
        } else {
            working.drain(..guard_count).collect()
        };

        Ok(Self {
            working,
            separators,
            guards,
        })
    }

    pub(crate) fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }

    pub(crate) fn is_guard(&self, ch: char) -> bool {
        self.guards.contains(&ch)
    }

    /// True if `ch` can appear anywhere in a hash of this configuration.
    pub(crate) fn is_known(&self, ch: char) -> bool {
        self.working.contains(&ch) || self.is_separator(ch) || self.is_guard(ch)
    }
}
