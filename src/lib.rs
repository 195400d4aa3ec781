pub mod alphabet;
pub mod chunk;
pub mod config;
mod decode;
mod encode;
pub mod error;
pub mod hashids;
mod hex;
mod id;

pub use alphabet::{DEFAULT_ALPHABET, DEFAULT_SEPARATORS, MIN_ALPHABET_LENGTH};
pub use chunk::{LARGE_NUMBER_SUFFIX, MAX_NUMBER, NUMBER_SEPARATOR};
pub use config::HashidsConfig;
pub use error::{HashidsError, Result};
pub use hashids::Hashids;
pub use uuid::Uuid;
