/// Errors raised while decoding a single Intel HEX line.
///
/// The decoder never produces a partially valid record, so every
/// rule in the record grammar has its own variant. None of these carry
/// the line number: the wire layer only sees one line at a time, and the
/// parser in `ihex-decoder` wraps them with the record index.
///
/// ```text
///   RecordError
///   ├── Malformed(MalformedReason)  ← missing ':' or bad hex digit pairs
///   ├── Checksum { sum }            ← bytes do not sum to 0 mod 256
///   ├── Length { declared, actual } ← length byte disagrees with line
///   ├── UnsupportedType { code }    ← record type outside 0x00..=0x05
///   └── Framing { offset, reason }  ← byte-stuffed chunk cannot be unframed
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line fails the `:` + hex-digit-pair syntax check.
    #[error("malformed record: {0}")]
    Malformed(MalformedReason),

    /// The wrapping sum of every decoded byte, checksum included, is not zero.
    #[error("invalid checksum: bytes sum to {sum:#04X}, expected 0x00")]
    Checksum { sum: u8 },

    /// The declared payload length plus the 5 framing bytes does not
    /// match the number of decoded bytes.
    #[error("invalid record length: declared {declared} data bytes, line holds {actual} bytes")]
    Length { declared: u8, actual: usize },

    /// The record type byte is not one of the six Intel HEX record types.
    #[error("unsupported record type {code:#04X}")]
    UnsupportedType { code: u8 },

    /// A framed chunk violates the SOH/DLE/EOT byte-stuffing rules.
    #[error("invalid framing at offset {offset}: {reason}")]
    Framing { offset: usize, reason: &'static str },
}

/// Why a line failed the syntax check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("line does not start with ':'")]
    MissingStartCode,

    #[error("odd number of hex digits after ':'")]
    OddDigitCount,

    /// `column` is the 1-based character position within the line.
    #[error("invalid hex digit {found:?} at column {column}")]
    InvalidHexDigit { column: usize, found: char },
}

impl From<MalformedReason> for RecordError {
    fn from(reason: MalformedReason) -> Self {
        Self::Malformed(reason)
    }
}
