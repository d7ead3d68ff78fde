use ihex_wire::RecordError;

/// Errors that abort [`Parser::parse`](crate::Parser::parse).
///
/// Record-level failures come from `ihex-wire` and are wrapped with the
/// 1-based index of the offending line. Stream-level failures (a record
/// after the terminal record, or no terminal record at all) only make
/// sense to the parser and live here.
///
/// ```text
///   ParseError
///   ├── Record { record, source }  ← line failed decoding (RecordError)
///   ├── DataAfterEof { record }    ← non-blank line after the EOF record
///   ├── MissingEof { records }     ← input ended without an EOF record
///   └── Io(std::io::Error)         ← source read or listener write failed
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("record {record}: {source}")]
    Record {
        record: usize,
        #[source]
        source: RecordError,
    },

    #[error("record {record}: data after end-of-file record")]
    DataAfterEof { record: usize },

    #[error("no end-of-file record after {records} records")]
    MissingEof { records: usize },

    /// Reading the source or delivering to the listener failed.
    ///
    /// Kept separate from the format errors so callers can tell a bad
    /// file from a bad disk.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Flat classification of a [`ParseError`].
///
/// ```text
/// ┌─────────────────┬────────────────────────────────────────────────┐
/// │ Kind            │ Raised when                                    │
/// ├─────────────────┼────────────────────────────────────────────────┤
/// │ MalformedRecord │ missing ':' or bad hex digit pairs             │
/// │ ChecksumError   │ record bytes do not sum to zero mod 256        │
/// │ LengthError     │ declared length disagrees with the line        │
/// │ UnsupportedType │ record type byte outside 0x00..=0x05           │
/// │ DataAfterEof    │ any line after the end-of-file record          │
/// │ MissingEof      │ input exhausted without an end-of-file record  │
/// │ Io              │ source unreadable or sink unwritable           │
/// └─────────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedRecord,
    ChecksumError,
    LengthError,
    UnsupportedType,
    DataAfterEof,
    MissingEof,
    Io,
}

impl ParseError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            // Framing errors never come out of the decoder; a malformed
            // frame is still a malformed record.
            Self::Record { source, .. } => match source {
                RecordError::Malformed(_) | RecordError::Framing { .. } => {
                    ErrorKind::MalformedRecord
                }
                RecordError::Checksum { .. } => ErrorKind::ChecksumError,
                RecordError::Length { .. } => ErrorKind::LengthError,
                RecordError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            },
            Self::DataAfterEof { .. } => ErrorKind::DataAfterEof,
            Self::MissingEof { .. } => ErrorKind::MissingEof,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The 1-based record index the error points at, if it has one.
    #[must_use]
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::Record { record, .. } | Self::DataAfterEof { record } => Some(*record),
            Self::MissingEof { .. } | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ihex_wire::MalformedReason;

    #[test]
    fn record_errors_map_to_kinds() {
        let cases = [
            (
                RecordError::Malformed(MalformedReason::OddDigitCount),
                ErrorKind::MalformedRecord,
            ),
            (RecordError::Checksum { sum: 1 }, ErrorKind::ChecksumError),
            (
                RecordError::Length {
                    declared: 2,
                    actual: 5,
                },
                ErrorKind::LengthError,
            ),
            (
                RecordError::UnsupportedType { code: 9 },
                ErrorKind::UnsupportedType,
            ),
        ];

        for (source, kind) in cases {
            let err = ParseError::Record { record: 3, source };
            assert_eq!(err.kind(), kind);
            assert_eq!(err.record_index(), Some(3));
        }
    }

    #[test]
    fn display_includes_record_index() {
        let err = ParseError::Record {
            record: 7,
            source: RecordError::Checksum { sum: 0x01 },
        };
        assert_eq!(
            err.to_string(),
            "record 7: invalid checksum: bytes sum to 0x01, expected 0x00"
        );
    }

    #[test]
    fn io_is_its_own_kind() {
        let err = ParseError::from(std::io::Error::other("disk full"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.record_index(), None);
    }
}
