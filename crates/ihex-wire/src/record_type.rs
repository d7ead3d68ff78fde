/// Intel HEX record types.
///
/// The set is closed: a type byte outside `0x00..=0x05` has no variant
/// and the decoder rejects it with `RecordError::UnsupportedType`.
/// Only `Data` and `EndOfFile` change what the parser does; the address
/// records are accepted and forwarded like any other record.
///
/// ```text
/// ┌──────┬────────────────────────┬─────────────────────────────────┐
/// │ Code │ Variant                │ Meaning                         │
/// ├──────┼────────────────────────┼─────────────────────────────────┤
/// │ 0x00 │ Data                   │ Payload bytes at an address     │
/// │ 0x01 │ EndOfFile              │ Terminal record, exactly once   │
/// │ 0x02 │ ExtendedSegmentAddress │ Segment base (bits 4-19)        │
/// │ 0x03 │ StartSegmentAddress    │ CS:IP start address             │
/// │ 0x04 │ ExtendedLinearAddress  │ Upper 16 bits of address        │
/// │ 0x05 │ StartLinearAddress     │ EIP start address               │
/// └──────┴────────────────────────┴─────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordType {
    Data,
    EndOfFile,
    ExtendedSegmentAddress,
    StartSegmentAddress,
    ExtendedLinearAddress,
    StartLinearAddress,
}

impl RecordType {
    /// Return the wire code for this record type.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Data => 0x00,
            Self::EndOfFile => 0x01,
            Self::ExtendedSegmentAddress => 0x02,
            Self::StartSegmentAddress => 0x03,
            Self::ExtendedLinearAddress => 0x04,
            Self::StartLinearAddress => 0x05,
        }
    }

    /// Map a wire code to a record type, or `None` for unknown codes.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Data),
            0x01 => Some(Self::EndOfFile),
            0x02 => Some(Self::ExtendedSegmentAddress),
            0x03 => Some(Self::StartSegmentAddress),
            0x04 => Some(Self::ExtendedLinearAddress),
            0x05 => Some(Self::StartLinearAddress),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_end_of_file(self) -> bool {
        self == Self::EndOfFile
    }
}
