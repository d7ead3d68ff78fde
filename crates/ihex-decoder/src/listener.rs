use std::io;

/// Consumer of parse events.
///
/// The parser calls [`data`](Self::data) once for every decoded record,
/// the end-of-file record included, then [`eof`](Self::eof) exactly once
/// right after the end-of-file record's `data`. Nothing is called after
/// `eof` within the same parse run. If the parse aborts, `eof` is never
/// called, so a listener that only persists on `eof` writes nothing.
///
/// ```text
///   data(rec 1) → data(rec 2) → … → data(EOF rec) → eof()
/// ```
///
/// Both methods return `io::Result` so a listener backed by a file or
/// socket can fail the parse; the parser surfaces that as
/// [`ParseError::Io`](crate::ParseError::Io).
pub trait DataListener {
    /// Receive the framed contents of one record.
    ///
    /// # Errors
    ///
    /// Any I/O error the listener hits; it aborts the parse.
    fn data(&mut self, contents: &[u8]) -> io::Result<()>;

    /// The end-of-file record has been processed.
    ///
    /// # Errors
    ///
    /// Any I/O error the listener hits; it aborts the parse.
    fn eof(&mut self) -> io::Result<()>;
}

impl<L: DataListener + ?Sized> DataListener for &mut L {
    fn data(&mut self, contents: &[u8]) -> io::Result<()> {
        (**self).data(contents)
    }

    fn eof(&mut self) -> io::Result<()> {
        (**self).eof()
    }
}

/// Collects every delivered chunk back to back. `eof` is a no-op.
impl DataListener for Vec<u8> {
    fn data(&mut self, contents: &[u8]) -> io::Result<()> {
        self.extend_from_slice(contents);
        Ok(())
    }

    fn eof(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_concatenates_chunks() {
        let mut out = Vec::new();
        out.data(&[1, 2]).unwrap();
        out.data(&[3]).unwrap();
        out.eof().unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut out = Vec::new();
        {
            let mut borrowed = &mut out;
            DataListener::data(&mut borrowed, &[9]).unwrap();
        }
        assert_eq!(out, vec![9]);
    }
}
