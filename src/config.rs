use crate::alphabet::DEFAULT_ALPHABET;
use crate::error::Result;
use crate::hashids::Hashids;

/// Settings a [`Hashids`] codec is built from.
///
/// The salt and alphabet together identify a configuration: hashes produced
/// under one configuration do not decode under another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HashidsConfig {
    pub salt: String,
    pub min_hash_length: usize,
    pub alphabet: String,
}

impl HashidsConfig {
    pub fn new(salt: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            min_hash_length: 0,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }

    pub fn min_hash_length(mut self, len: usize) -> Self {
        self.min_hash_length = len;
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Builds the codec for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is unusable; see [`Hashids::with_config`].
    pub fn build(self) -> Result<Hashids> {
        Hashids::with_config(self)
    }
}

impl Default for HashidsConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashidsError;

    #[test]
    fn test_new_with_defaults() {
        let config = HashidsConfig::new("this is my salt");
        assert_eq!(config.salt, "this is my salt");
        assert_eq!(config.min_hash_length, 0);
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
    }

    #[test]
    fn test_default_has_empty_salt() {
        let config = HashidsConfig::default();
        assert_eq!(config.salt, "");
        assert_eq!(config, HashidsConfig::new(""));
    }

    #[test]
    fn test_builder_chain() {
        let config = HashidsConfig::new("salt")
            .min_hash_length(8)
            .alphabet("0123456789abcdef");
        assert_eq!(config.salt, "salt");
        assert_eq!(config.min_hash_length, 8);
        assert_eq!(config.alphabet, "0123456789abcdef");
    }

    #[test]
    fn test_build() {
        let hashids = HashidsConfig::new("this is my salt")
            .min_hash_length(8)
            .build()
            .unwrap();
        assert_eq!(hashids.encode_one(1), "gB0NV05e");
    }

    #[test]
    fn test_build_rejects_bad_alphabet() {
        let err = HashidsConfig::new("salt").alphabet("abc").build().unwrap_err();
        assert_eq!(err, HashidsError::AlphabetTooShort { unique: 3, min: 16 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_fills_defaults() {
        let config: HashidsConfig =
            serde_json::from_str(r#"{"salt":"this is my salt","min_hash_length":8}"#).unwrap();
        assert_eq!(config, HashidsConfig::new("this is my salt").min_hash_length(8));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let config = HashidsConfig::new("s").alphabet("0123456789abcdef");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"salt":"s","min_hash_length":0,"alphabet":"0123456789abcdef"}"#
        );
    }
}
