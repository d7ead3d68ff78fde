use std::io::{self, Write};

use ihex_decoder::DataListener;

/// Listener that concatenates every delivered chunk and writes the whole
/// buffer to `sink` in one go when the end-of-file record arrives.
///
/// Nothing reaches the sink before [`eof`](DataListener::eof). If the
/// parse aborts, `eof` is never called and the sink sees zero bytes.
///
/// ```text
///   data(a) ─┐
///   data(b) ─┼─▶ buffer: a ‖ b ‖ c ──eof()──▶ sink.write_all + flush
///   data(c) ─┘
/// ```
///
/// The chunks are the parser's framed record contents: each decoded line,
/// byte-stuffed and wrapped in SOH/EOT markers, addresses included. The
/// output is therefore a stream of frames, not a flat memory image. A
/// writer that places `Record::data()` at `Record::address()` would be a
/// separate listener.
pub struct BinWriter<W> {
    sink: W,
    buffer: Vec<u8>,
    flushed: bool,
}

impl<W: Write> BinWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
            flushed: false,
        }
    }

    /// Bytes collected and not yet written.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> DataListener for BinWriter<W> {
    fn data(&mut self, contents: &[u8]) -> io::Result<()> {
        if self.flushed {
            return Err(io::Error::other("data delivered after end of stream"));
        }
        self.buffer.extend_from_slice(contents);
        Ok(())
    }

    fn eof(&mut self) -> io::Result<()> {
        if self.flushed {
            return Err(io::Error::other("end of stream delivered twice"));
        }

        self.sink.write_all(&self.buffer)?;
        self.sink.flush()?;
        self.flushed = true;

        tracing::debug!(bytes = self.buffer.len(), "binary image written");
        self.buffer = Vec::new();
        Ok(())
    }
}
