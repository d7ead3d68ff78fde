use std::io::{BufRead, BufReader, Read};

use ihex_wire::{MalformedReason, Record, RecordError, RecordType};

use crate::error::ParseError;
use crate::listener::DataListener;

/// Counters for one successful parse run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Records decoded, the end-of-file record included.
    pub records: usize,

    /// Records of type `Data`.
    pub data_records: usize,

    /// Payload bytes carried by `Data` records.
    pub payload_bytes: usize,

    /// Framed bytes handed to the listener.
    pub output_bytes: usize,
}

/// Line-driven Intel HEX parser.
///
/// Reads the source one line at a time, decodes each line with
/// [`Record::decode_line`], and dispatches the framed contents to a
/// [`DataListener`]. The parser is a two-state machine:
///
/// ```text
///   Running ──(EOF record)──▶ Done
/// ```
///
/// There is no error state. Any failure returns from [`parse`](Self::parse)
/// immediately and nothing after the failing line is read.
///
/// All per-run state (the `Done` flag and the record index) is created
/// fresh inside each `parse` call, so a `Parser` can be pointed at new
/// input with [`get_mut`](Self::get_mut) and run again.
///
/// # Example
///
/// ```rust
/// use ihex_decoder::Parser;
///
/// let input = ":0300300002337A1E\n:00000001FF\n";
/// let mut out = Vec::new();
/// let summary = Parser::new(input.as_bytes()).parse(&mut out).unwrap();
///
/// assert_eq!(summary.records, 2);
/// assert_eq!(summary.payload_bytes, 3);
/// ```
pub struct Parser<R> {
    reader: R,
}

impl<R: Read> Parser<BufReader<R>> {
    /// Wrap an unbuffered byte source.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Parse the whole source, delivering every record to `listener`.
    ///
    /// One physical line is one record, read as raw bytes. A trailing `\r`
    /// is stripped, so CRLF files parse the same as LF files. A byte that
    /// is not UTF-8 is a malformed record like any other non-hex
    /// character. Blank lines at the end of the input are ignored; a blank
    /// line followed by more content is a malformed record.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Record`] if a line fails decoding. The record is
    ///   not delivered.
    /// - [`ParseError::DataAfterEof`] for any non-blank line after the
    ///   end-of-file record.
    /// - [`ParseError::MissingEof`] if the input runs out first. This is
    ///   only reported after the whole input has been read.
    /// - [`ParseError::Io`] if reading the source fails or the listener
    ///   fails.
    pub fn parse<L>(&mut self, listener: &mut L) -> Result<ParseSummary, ParseError>
    where
        L: DataListener + ?Sized,
    {
        let mut run = ParseRun::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            run.step(strip_line_ending(&buf), listener)?;
        }

        run.finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Done,
}

/// State scoped to one `parse` call.
struct ParseRun {
    state: State,
    /// 1-based index of the line being processed.
    record_index: usize,
    /// First blank line not yet known to be trailing.
    pending_blank: Option<usize>,
    summary: ParseSummary,
}

impl ParseRun {
    fn new() -> Self {
        Self {
            state: State::Running,
            record_index: 0,
            pending_blank: None,
            summary: ParseSummary::default(),
        }
    }

    fn step<L>(&mut self, line: &[u8], listener: &mut L) -> Result<(), ParseError>
    where
        L: DataListener + ?Sized,
    {
        self.record_index += 1;
        let index = self.record_index;

        if line.trim_ascii().is_empty() {
            self.pending_blank.get_or_insert(index);
            return Ok(());
        }

        if self.state == State::Done {
            return Err(ParseError::DataAfterEof { record: index });
        }

        if let Some(blank) = self.pending_blank {
            return Err(ParseError::Record {
                record: blank,
                source: RecordError::Malformed(MalformedReason::MissingStartCode),
            });
        }

        let record = Record::decode_bytes(line).map_err(|source| ParseError::Record {
            record: index,
            source,
        })?;

        tracing::debug!(
            record = index,
            record_type = ?record.record_type(),
            address = record.address(),
            data_len = record.data().len(),
            framed_len = record.contents().len(),
            "decoded record"
        );

        listener.data(record.contents()).map_err(|e| {
            tracing::error!(record = index, error = %e, "listener rejected record data");
            e
        })?;

        self.summary.records += 1;
        self.summary.output_bytes += record.contents().len();
        if record.record_type() == RecordType::Data {
            self.summary.data_records += 1;
            self.summary.payload_bytes += record.data().len();
        }

        if record.record_type().is_end_of_file() {
            listener.eof().map_err(|e| {
                tracing::error!(record = index, error = %e, "listener failed at end of stream");
                e
            })?;
            self.state = State::Done;
            tracing::debug!(record = index, "end-of-file record processed");
        }

        Ok(())
    }

    fn finish(self) -> Result<ParseSummary, ParseError> {
        match self.state {
            State::Done => Ok(self.summary),
            State::Running => Err(ParseError::MissingEof {
                records: self.summary.records,
            }),
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
