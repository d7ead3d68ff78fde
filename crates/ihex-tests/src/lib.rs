//! Shared helpers for the integration tests, the golden fixture generator
//! and the benches.

#![warn(clippy::pedantic)]

use std::path::PathBuf;

use ihex_decoder::{ParseError, ParseSummary, Parser};
use ihex_wire::{RecordType, checksum};
use ihex_writer::BinWriter;

/// Build one Intel HEX line (no terminator) with a correct checksum.
///
/// # Panics
///
/// Panics if `data` is longer than 255 bytes.
#[must_use]
pub fn record_line(record_type: RecordType, address: u16, data: &[u8]) -> String {
    let len = u8::try_from(data.len()).expect("record payload is at most 255 bytes");

    let mut raw = Vec::with_capacity(data.len() + 5);
    raw.push(len);
    raw.extend_from_slice(&address.to_be_bytes());
    raw.push(record_type.code());
    raw.extend_from_slice(data);
    raw.push(checksum::for_bytes(&raw));

    format!(":{}", hex::encode_upper(&raw))
}

/// The terminal record every valid file ends with.
#[must_use]
pub fn eof_line() -> String {
    record_line(RecordType::EndOfFile, 0, &[])
}

/// Split `image` into 16-byte data records starting at `base`, followed by
/// the end-of-file record. Lines are `\n`-terminated.
#[must_use]
pub fn hex_file(base: u16, image: &[u8]) -> String {
    let mut out = String::new();
    let mut address = base;
    for chunk in image.chunks(16) {
        out.push_str(&record_line(RecordType::Data, address, chunk));
        out.push('\n');
        // Only the low 16 bits are addressable; wrap like the format does.
        #[allow(clippy::cast_possible_truncation)]
        let step = chunk.len() as u16;
        address = address.wrapping_add(step);
    }
    out.push_str(&eof_line());
    out.push('\n');
    out
}

/// Parse `input` through a [`BinWriter`] backed by a `Vec`, returning the
/// summary and whatever reached the sink.
///
/// On failure the returned bytes are what the sink saw: a failed parse
/// leaves the sink empty unless the EOF record was already seen, in which
/// case it holds everything up to and including the EOF frame.
pub fn convert(input: &str) -> (Result<ParseSummary, ParseError>, Vec<u8>) {
    let mut writer = BinWriter::new(Vec::new());
    let result = Parser::new(input.as_bytes()).parse(&mut writer);
    (result, writer.into_inner())
}

/// Canonical hex dump used in snapshots: 16 bytes per row, offset prefix.
#[must_use]
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let row: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
            format!("{:04X}: {}", i * 16, row.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Directory holding the committed `.hex` fixtures.
#[must_use]
pub fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Read a golden fixture as text.
///
/// # Panics
///
/// Panics if the fixture is missing; run `generate_golden` to recreate it.
#[must_use]
pub fn golden(name: &str) -> String {
    let path = golden_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}
