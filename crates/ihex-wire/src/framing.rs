use crate::error::RecordError;

/// Start-of-frame marker.
pub const SOH: u8 = 0x01;

/// End-of-frame marker.
pub const EOT: u8 = 0x04;

/// Escape byte. Placed in front of any byte equal to `SOH`, `EOT` or `DLE`.
pub const DLE: u8 = 0x10;

/// `true` for the three byte values that must be escaped inside a frame.
#[must_use]
pub fn is_reserved(byte: u8) -> bool {
    matches!(byte, SOH | EOT | DLE)
}

/// Byte-stuff `bytes` and bracket the result with start/end markers.
///
/// ```text
///   input:   00 00 00 01 FF              (decoded :00000001FF)
///   output:  01 00 00 00 10 01 FF 04
///            ^^          ^^       ^^
///            SOH         DLE      EOT
/// ```
///
/// Only 0x01, 0x04 and 0x10 are escaped; every other byte passes through.
#[must_use]
pub fn frame(bytes: &[u8]) -> Vec<u8> {
    let escapes = bytes.iter().filter(|&&b| is_reserved(b)).count();
    let mut out = Vec::with_capacity(bytes.len() + escapes + 2);

    out.push(SOH);
    for &b in bytes {
        if is_reserved(b) {
            out.push(DLE);
        }
        out.push(b);
    }
    out.push(EOT);

    out
}

/// Read one frame from the front of `buf`.
///
/// # Returns
///
/// `(unstuffed_bytes, bytes_consumed)`, where `bytes_consumed` includes
/// both markers.
///
/// # Errors
///
/// [`RecordError::Framing`] if the first byte is not `SOH`, an unescaped
/// `SOH` appears inside the frame, an escape precedes a non-reserved byte,
/// or the buffer ends before `EOT`.
pub fn read_frame(buf: &[u8]) -> Result<(Vec<u8>, usize), RecordError> {
    match buf.first() {
        Some(&SOH) => {}
        _ => return Err(framing_error(0, "missing start marker")),
    }

    let mut out = Vec::with_capacity(buf.len());
    let mut escaped = false;

    for (offset, &b) in buf.iter().enumerate().skip(1) {
        if escaped {
            if !is_reserved(b) {
                return Err(framing_error(offset, "escaped byte is not a reserved value"));
            }
            out.push(b);
            escaped = false;
            continue;
        }

        match b {
            DLE => escaped = true,
            EOT => return Ok((out, offset + 1)),
            SOH => return Err(framing_error(offset, "unescaped start marker inside frame")),
            _ => out.push(b),
        }
    }

    let reason = if escaped {
        "dangling escape byte"
    } else {
        "missing end marker"
    };
    Err(framing_error(buf.len(), reason))
}

/// Inverse of [`frame`] for exactly one frame.
///
/// # Errors
///
/// Everything [`read_frame`] rejects, plus trailing bytes after `EOT`.
pub fn unframe(framed: &[u8]) -> Result<Vec<u8>, RecordError> {
    let (bytes, consumed) = read_frame(framed)?;
    if consumed != framed.len() {
        return Err(framing_error(consumed, "data after end marker"));
    }
    Ok(bytes)
}

/// Split a concatenation of frames back into the unstuffed chunks.
///
/// This is the shape of a `BinWriter` output file: one frame per record,
/// back to back.
///
/// # Errors
///
/// The first framing violation, with `offset` relative to the whole of
/// `stream`.
pub fn read_frames(stream: &[u8]) -> Result<Vec<Vec<u8>>, RecordError> {
    let mut cursor = 0;
    let mut frames = Vec::new();

    while cursor < stream.len() {
        let (bytes, consumed) = read_frame(&stream[cursor..]).map_err(|e| match e {
            RecordError::Framing { offset, reason } => framing_error(cursor + offset, reason),
            other => other,
        })?;
        frames.push(bytes);
        cursor += consumed;
    }

    Ok(frames)
}

fn framing_error(offset: usize, reason: &'static str) -> RecordError {
    RecordError::Framing { offset, reason }
}
