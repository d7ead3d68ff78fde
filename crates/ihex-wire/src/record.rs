use std::fmt;
use std::str::FromStr;

use crate::checksum;
use crate::error::{MalformedReason, RecordError};
use crate::framing;
use crate::record_type::RecordType;

/// Every record line starts with this character.
pub const START_CODE: char = ':';

/// Bytes in a record besides the payload: length, address (2), type, checksum.
pub const RECORD_OVERHEAD: usize = 5;

const ADDRESS_OFFSET: usize = 1;
const TYPE_OFFSET: usize = 3;
const DATA_OFFSET: usize = 4;

/// One decoded and validated Intel HEX line.
///
/// ```text
///   :  03  0030  00  02337A  1E
///   │  │   │     │   │       └─ checksum
///   │  │   │     │   └───────── payload (len bytes)
///   │  │   │     └───────────── record type
///   │  │   └─────────────────── address, big-endian
///   │  └─────────────────────── payload length
///   └────────────────────────── start code
/// ```
///
/// A `Record` can only be built by [`Record::decode_line`], which runs
/// every syntax, checksum, length and type check first. The fields are
/// private so no partially valid record can exist.
///
/// [`contents`](Self::contents) is the byte-stuffed frame of the whole
/// decoded line (length, address, type, payload and checksum), which is
/// what the parser hands to listeners. The structured views
/// ([`address`](Self::address), [`data`](Self::data), ...) read the
/// underlying decoded bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    record_type: RecordType,
    raw: Vec<u8>,
    contents: Vec<u8>,
}

impl Record {
    /// Decode and validate one line of Intel HEX text.
    ///
    /// The line must not include its line terminator. Checks run in a
    /// fixed order and the first failure wins:
    ///
    ///   1. Start code `:` present.
    ///   2. The rest is an even number of hex digits. An odd digit count
    ///      is reported before any invalid digit.
    ///   3. All decoded bytes sum to zero modulo 256.
    ///   4. Byte count equals declared length + 5.
    ///   5. Record type is known.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Malformed`] for steps 1 and 2.
    /// - [`RecordError::Checksum`] for step 3.
    /// - [`RecordError::Length`] for step 4.
    /// - [`RecordError::UnsupportedType`] for step 5.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ihex_wire::{Record, RecordType};
    ///
    /// let record = Record::decode_line(":0300300002337A1E").unwrap();
    /// assert_eq!(record.record_type(), RecordType::Data);
    /// assert_eq!(record.address(), 0x0030);
    /// assert_eq!(record.data(), &[0x02, 0x33, 0x7A]);
    /// ```
    pub fn decode_line(line: &str) -> Result<Self, RecordError> {
        let digits = line
            .strip_prefix(START_CODE)
            .ok_or(MalformedReason::MissingStartCode)?;

        let raw = hex::decode(digits).map_err(|e| digit_error(digits, e))?;

        let sum = checksum::sum(&raw);
        if sum != 0 {
            return Err(RecordError::Checksum { sum });
        }

        let declared = raw.first().copied().unwrap_or(0);
        if raw.len() != usize::from(declared) + RECORD_OVERHEAD {
            return Err(RecordError::Length {
                declared,
                actual: raw.len(),
            });
        }

        let code = raw[TYPE_OFFSET];
        let record_type = RecordType::from_code(code).ok_or(RecordError::UnsupportedType { code })?;

        let contents = framing::frame(&raw);

        Ok(Self {
            record_type,
            raw,
            contents,
        })
    }

    /// Decode a line read as raw bytes.
    ///
    /// Valid UTF-8 goes through [`decode_line`](Self::decode_line). Bytes
    /// that are not UTF-8 can never be hex digits, so they fail the syntax
    /// check: `MissingStartCode` if the line does not begin with `:`,
    /// otherwise `InvalidHexDigit` at the first non-digit character, which
    /// is the first invalid byte (shown as U+FFFD) if everything before it
    /// is a hex digit.
    ///
    /// # Errors
    ///
    /// Everything [`decode_line`](Self::decode_line) rejects.
    pub fn decode_bytes(line: &[u8]) -> Result<Self, RecordError> {
        let err = match std::str::from_utf8(line) {
            Ok(text) => return Self::decode_line(text),
            Err(e) => e,
        };

        let valid = String::from_utf8_lossy(&line[..err.valid_up_to()]);
        if !valid.starts_with(START_CODE) {
            return Err(MalformedReason::MissingStartCode.into());
        }

        let (column, found) = valid
            .chars()
            .enumerate()
            .skip(1)
            .find(|(_, c)| !c.is_ascii_hexdigit())
            .map_or((valid.chars().count() + 1, char::REPLACEMENT_CHARACTER), |(i, c)| {
                (i + 1, c)
            });

        Err(MalformedReason::InvalidHexDigit { column, found }.into())
    }

    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// The framed bytes delivered to listeners.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    #[must_use]
    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }

    /// All decoded bytes of the line, before framing.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The 16-bit load offset from bytes 1..3, big-endian.
    #[must_use]
    pub fn address(&self) -> u16 {
        u16::from_be_bytes([self.raw[ADDRESS_OFFSET], self.raw[ADDRESS_OFFSET + 1]])
    }

    /// The payload bytes between the type byte and the checksum.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.raw[DATA_OFFSET..self.raw.len() - 1]
    }

    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.raw[self.raw.len() - 1]
    }
}

/// Map a `hex` decoding failure onto the line grammar.
///
/// `index` from the `hex` crate is a byte offset into `digits`. Every byte
/// before it is an ASCII hex digit, so it is also the character offset, and
/// the column is one further along to count the `:`.
fn digit_error(digits: &str, err: hex::FromHexError) -> MalformedReason {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => MalformedReason::InvalidHexDigit {
            column: index + 2,
            found: digits[index..].chars().next().unwrap_or(c),
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            MalformedReason::OddDigitCount
        }
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_line(s)
    }
}

/// Re-encodes the record as an upper-case HEX line, without terminator.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{START_CODE}{}", hex::encode_upper(&self.raw))
    }
}
