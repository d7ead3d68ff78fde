//! Intel HEX record checksum.
//!
//! The checksum byte is the two's complement of the low byte of the sum of
//! every other byte in the record, so a valid record's bytes (checksum
//! included) always add up to zero modulo 256.

/// Wrapping sum of `bytes` modulo 256.
#[must_use]
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// The checksum byte to append to `bytes` so the record sums to zero.
#[must_use]
pub fn for_bytes(bytes: &[u8]) -> u8 {
    sum(bytes).wrapping_neg()
}

/// `true` if `bytes` (checksum included) sums to zero.
#[must_use]
pub fn is_valid(bytes: &[u8]) -> bool {
    sum(bytes) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_data_record_sums_to_zero() {
        // :0300300002337A1E
        let bytes = [0x03, 0x00, 0x30, 0x00, 0x02, 0x33, 0x7A, 0x1E];
        assert_eq!(sum(&bytes), 0);
        assert!(is_valid(&bytes));
    }

    #[test]
    fn eof_record_checksum_is_ff() {
        assert_eq!(for_bytes(&[0x00, 0x00, 0x00, 0x01]), 0xFF);
    }

    #[test]
    fn empty_sums_to_zero() {
        assert_eq!(sum(&[]), 0);
        assert_eq!(for_bytes(&[]), 0);
    }

    proptest! {
        #[test]
        fn appended_checksum_always_validates(ref body in proptest::collection::vec(any::<u8>(), 0..260)) {
            let mut record = body.clone();
            record.push(for_bytes(body));
            prop_assert!(is_valid(&record));
        }

        #[test]
        fn single_byte_corruption_is_detected(
            ref body in proptest::collection::vec(any::<u8>(), 1..64),
            index in any::<prop::sample::Index>(),
            delta in 1u8..=255,
        ) {
            let mut record = body.clone();
            record.push(for_bytes(body));
            let i = index.index(record.len());
            record[i] = record[i].wrapping_add(delta);
            prop_assert!(!is_valid(&record));
        }
    }
}
