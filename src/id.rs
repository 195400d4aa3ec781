use uuid::Uuid;

use crate::error::{HashidsError, Result};
use crate::hashids::Hashids;

impl Hashids {
    /// Encodes a UUID as its most and least significant 64-bit halves.
    ///
    /// Both halves are reinterpreted as signed numbers, so most UUIDs take
    /// the chunked form for at least one half.
    #[allow(clippy::cast_possible_wrap)]
    pub fn encode_id(&self, id: Uuid) -> String {
        let (msb, lsb) = id.as_u64_pair();
        self.encode(&[msb as i64, lsb as i64])
    }

    /// Decodes a hash produced by [`encode_id`](Hashids::encode_id).
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` unless the hash decodes to exactly two
    /// numbers.
    #[allow(clippy::cast_sign_loss)]
    pub fn decode_id(&self, hash: &str) -> Result<Uuid> {
        match self.decode(hash)[..] {
            [msb, lsb] => Ok(Uuid::from_u64_pair(msb as u64, lsb as u64)),
            ref other => Err(HashidsError::InvalidIdentifier {
                hash: hash.to_string(),
                count: other.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salted() -> Hashids {
        Hashids::new("this is my salt").unwrap()
    }

    #[test]
    fn test_encode_id_fixture() {
        let id = Uuid::parse_str("f81d4fae-7dec-11d0-a765-00a0c91e6bf6").unwrap();
        let hash = salted().encode_id(id);
        assert_eq!(hash, "Y4BeJYlewVVIUgB=-J88qV9JN6q6IU63=");
        assert_eq!(salted().decode_id(&hash).unwrap(), id);
    }

    #[test]
    fn test_small_halves_share_one_group() {
        let id = Uuid::from_u64_pair(1, 2);
        assert_eq!(salted().encode_id(id), "yzHD");
        assert_eq!(salted().decode_id("yzHD").unwrap(), id);
    }

    #[test]
    fn test_nil_and_max() {
        let hashids = salted();
        for id in [Uuid::nil(), Uuid::from_u128(u128::MAX)] {
            let hash = hashids.encode_id(id);
            assert_eq!(hashids.decode_id(&hash).unwrap(), id);
        }
    }

    #[test]
    fn test_random_ids_roundtrip() {
        let hashids = salted();
        for _ in 0..200 {
            let id = Uuid::new_v4();
            assert_eq!(hashids.decode_id(&hashids.encode_id(id)).unwrap(), id);
        }
    }

    #[test]
    fn test_decode_id_wrong_count() {
        let hashids = salted();
        assert_eq!(
            hashids.decode_id("NV"),
            Err(HashidsError::InvalidIdentifier {
                hash: "NV".to_string(),
                count: 1,
            })
        );
        assert_eq!(
            hashids.decode_id("laHquq"),
            Err(HashidsError::InvalidIdentifier {
                hash: "laHquq".to_string(),
                count: 3,
            })
        );
    }

    #[test]
    fn test_decode_id_garbage() {
        assert_eq!(
            salted().decode_id("not a hash"),
            Err(HashidsError::InvalidIdentifier {
                hash: "not a hash".to_string(),
                count: 0,
            })
        );
    }
}
