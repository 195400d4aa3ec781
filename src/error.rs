#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashidsError {
    #[error("alphabet must contain at least {min} unique characters, found {unique}")]
    AlphabetTooShort { unique: usize, min: usize },

    #[error("alphabet cannot contain whitespace")]
    AlphabetContainsWhitespace,

    #[error("alphabet cannot contain control character {ch:?}")]
    ControlCharacter { ch: char },

    #[error("alphabet cannot contain reserved character '{ch}'")]
    ReservedCharacter { ch: char },

    #[error("alphabet yields no separator characters")]
    NoSeparators,

    #[error("number {value} is outside the encodable range")]
    NumberOutOfRange { value: u64 },

    #[error("nothing to encode")]
    EmptyInput,

    #[error("invalid identifier hash '{hash}': expected 2 numbers, decoded {count}")]
    InvalidIdentifier { hash: String, count: usize },

    #[error("invalid hex string: {input}")]
    InvalidHex { input: String },

    #[error("invalid hash: {hash}")]
    InvalidHash { hash: String },
}

pub type Result<T> = std::result::Result<T, HashidsError>;
