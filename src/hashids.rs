use crate::alphabet::Alphabet;
use crate::chunk::{self, Group, LARGE_NUMBER_SUFFIX, NUMBER_SEPARATOR};
use crate::config::HashidsConfig;
use crate::error::Result;

/// A configured Hashids codec.
///
/// All tables are derived once in the constructor and never change, so one
/// instance can be shared freely between threads.
///
/// ```
/// use hashids::Hashids;
///
/// let hashids = Hashids::new("this is my salt").unwrap();
/// assert_eq!(hashids.encode_one(12345), "NkK9");
/// assert_eq!(hashids.decode("NkK9"), vec![12345]);
/// ```
#[derive(Debug, Clone)]
pub struct Hashids {
    pub(crate) config: HashidsConfig,
    pub(crate) salt: Vec<char>,
    pub(crate) tables: Alphabet,
}

impl Hashids {
    /// Creates a codec with the default alphabet and no minimum length.
    ///
    /// # Errors
    ///
    /// Never fails for the default alphabet; the `Result` mirrors
    /// [`Hashids::with_config`].
    pub fn new(salt: impl Into<String>) -> Result<Self> {
        Self::with_config(HashidsConfig::new(salt))
    }

    /// Creates a codec from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet has fewer than 16 unique characters,
    /// contains whitespace, a control character or one of the reserved
    /// characters `-` and `=`, or contains none of the default separator
    /// characters.
    pub fn with_config(config: HashidsConfig) -> Result<Self> {
        let salt: Vec<char> = config.salt.chars().collect();
        let tables = Alphabet::new(&config.alphabet, &salt)?;
        tracing::debug!(
            alphabet = tables.working.len(),
            separators = tables.separators.len(),
            guards = tables.guards.len(),
            min_hash_length = config.min_hash_length,
            "hashids codec configured"
        );
        Ok(Self {
            config,
            salt,
            tables,
        })
    }

    pub fn config(&self) -> &HashidsConfig {
        &self.config
    }

    pub fn salt(&self) -> &str {
        &self.config.salt
    }

    pub fn min_hash_length(&self) -> usize {
        self.config.min_hash_length
    }

    /// The working alphabet used for digits, after separators and guards
    /// have been taken out.
    pub fn alphabet(&self) -> String {
        self.tables.working.iter().collect()
    }

    pub fn separators(&self) -> String {
        self.tables.separators.iter().collect()
    }

    pub fn guards(&self) -> String {
        self.tables.guards.iter().collect()
    }

    /// Encodes a single number of any sign or magnitude.
    pub fn encode_one(&self, number: i64) -> String {
        if chunk::is_native(number) {
            return self.pack(&[number.unsigned_abs()]);
        }
        let mut hash = self.pack(&chunk::split(number));
        hash.push_str(LARGE_NUMBER_SUFFIX);
        hash
    }

    /// Encodes a sequence of numbers of any sign or magnitude.
    ///
    /// Runs of numbers in `0..=MAX_NUMBER` are packed together; every other
    /// number is chunked on its own and the pieces are joined with `-`.
    /// An empty slice encodes to an empty string.
    pub fn encode(&self, numbers: &[i64]) -> String {
        match numbers {
            [] => String::new(),
            [number] => self.encode_one(*number),
            _ => chunk::group(numbers)
                .into_iter()
                .map(|group| match group {
                    Group::Native(run) => {
                        let run: Vec<u64> = run.iter().map(|n| n.unsigned_abs()).collect();
                        self.pack(&run)
                    }
                    Group::Chunked(number) => self.encode_one(number),
                })
                .collect::<Vec<_>>()
                .join(NUMBER_SEPARATOR),
        }
    }

    /// Decodes a hash produced by [`encode`](Hashids::encode).
    ///
    /// Returns an empty `Vec` for anything that is not a hash of this
    /// configuration, including tampered strings and hashes made with another
    /// salt or alphabet.
    pub fn decode(&self, hash: &str) -> Vec<i64> {
        let mut numbers = Vec::new();
        for piece in hash.split(NUMBER_SEPARATOR) {
            if let Some(chunked) = piece.strip_suffix(LARGE_NUMBER_SUFFIX) {
                match chunk::join(&self.decode_canonical(chunked)) {
                    Some(number) => numbers.push(number),
                    None => return Vec::new(),
                }
            } else {
                let decoded = self.decode_canonical(piece);
                if decoded.is_empty() {
                    return Vec::new();
                }
                // Canonical values never exceed MAX_NUMBER.
                numbers.extend(decoded.into_iter().filter_map(|n| i64::try_from(n).ok()));
            }
        }

        if self.encode(&numbers) != hash {
            tracing::trace!(?numbers, "rejecting hash that does not re-encode");
            return Vec::new();
        }
        numbers
    }
}
