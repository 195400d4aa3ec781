//! Large and negative number support layered over the canonical codec.
//!
//! A value outside `0..=MAX_NUMBER` is split into a short chunk of native
//! numbers (`[r, q]` when positive, `[-r, 0, -q]` when negative, with
//! `v = q * MAX_NUMBER + r`) and its hash is tagged with
//! [`LARGE_NUMBER_SUFFIX`]. Arrays mixing native and chunked values are
//! encoded group by group and joined with [`NUMBER_SEPARATOR`].

/// Largest value the canonical codec encodes directly (2^53).
pub const MAX_NUMBER: i64 = 9_007_199_254_740_992;

/// Marks a hash holding one chunked value.
pub const LARGE_NUMBER_SUFFIX: &str = "=";

/// Joins the groups of a mixed array.
pub const NUMBER_SEPARATOR: &str = "-";

pub(crate) const MAX_NUMBER_U64: u64 = MAX_NUMBER.unsigned_abs();

pub(crate) const fn is_native(value: i64) -> bool {
    0 <= value && value <= MAX_NUMBER
}

/// Splits `value` into the native numbers that represent it.
pub(crate) fn split(value: i64) -> Vec<u64> {
    if is_native(value) {
        return vec![value.unsigned_abs()];
    }
    let quotient = value / MAX_NUMBER;
    let remainder = value % MAX_NUMBER;
    if value > 0 {
        vec![remainder.unsigned_abs(), quotient.unsigned_abs()]
    } else {
        vec![remainder.unsigned_abs(), 0, quotient.unsigned_abs()]
    }
}

/// Reassembles a value from its chunk; `None` if the chunk is malformed.
pub(crate) fn join(chunk: &[u64]) -> Option<i64> {
    let max = i128::from(MAX_NUMBER);
    let value = match *chunk {
        [value] => i128::from(value),
        [remainder, quotient] => i128::from(quotient) * max + i128::from(remainder),
        [remainder, _, quotient] => -(i128::from(quotient) * max + i128::from(remainder)),
        _ => return None,
    };
    i64::try_from(value).ok()
}

/// One piece of a mixed array encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group<'a> {
    /// A run of consecutive native values, packed together.
    Native(&'a [i64]),
    /// A single value that needs chunking.
    Chunked(i64),
}

/// Groups consecutive native values; every other value stands alone.
pub(crate) fn group(numbers: &[i64]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut run_start = 0;
    for (i, &number) in numbers.iter().enumerate() {
        if is_native(number) {
            continue;
        }
        if run_start < i {
            groups.push(Group::Native(&numbers[run_start..i]));
        }
        groups.push(Group::Chunked(number));
        run_start = i + 1;
    }
    if run_start < numbers.len() {
        groups.push(Group::Native(&numbers[run_start..]));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_native_bounds() {
        assert!(is_native(0));
        assert!(is_native(MAX_NUMBER));
        assert!(!is_native(MAX_NUMBER + 1));
        assert!(!is_native(-1));
        assert!(!is_native(i64::MIN));
    }

    #[test]
    fn test_split_native() {
        assert_eq!(split(42), vec![42]);
    }

    #[test]
    fn test_split_large_positive() {
        assert_eq!(split(MAX_NUMBER + 1), vec![1, 1]);
        assert_eq!(split(MAX_NUMBER + 100), vec![100, 1]);
        assert_eq!(split(i64::MAX), vec![MAX_NUMBER_U64 - 1, 1023]);
    }

    #[test]
    fn test_split_negative() {
        assert_eq!(split(-3), vec![3, 0, 0]);
        assert_eq!(split(-MAX_NUMBER), vec![0, 0, 1]);
        assert_eq!(split(i64::MIN), vec![0, 0, 1024]);
    }

    #[test]
    fn test_join_reverses_split() {
        for value in [
            0,
            7,
            MAX_NUMBER,
            MAX_NUMBER + 1,
            MAX_NUMBER * 3 + 17,
            i64::MAX,
            -1,
            -MAX_NUMBER,
            -(MAX_NUMBER + 100),
            i64::MIN,
        ] {
            assert_eq!(join(&split(value)), Some(value), "value {value}");
        }
    }

    #[test]
    fn test_join_malformed() {
        assert_eq!(join(&[]), None);
        assert_eq!(join(&[1, 2, 3, 4]), None);
        assert_eq!(join(&[0, 1024]), None);
        assert_eq!(join(&[1, 0, 1024]), None);
    }

    #[test]
    fn test_group_all_native() {
        let numbers = [1, 2, 3];
        assert_eq!(group(&numbers), vec![Group::Native(&numbers[..])]);
    }

    #[test]
    fn test_group_mixed() {
        let numbers = [1, 2, -3, 4, i64::MAX, -5];
        assert_eq!(
            group(&numbers),
            vec![
                Group::Native(&numbers[..2]),
                Group::Chunked(-3),
                Group::Native(&numbers[3..4]),
                Group::Chunked(i64::MAX),
                Group::Chunked(-5),
            ]
        );
    }

    #[test]
    fn test_group_empty() {
        assert!(group(&[]).is_empty());
    }
}
