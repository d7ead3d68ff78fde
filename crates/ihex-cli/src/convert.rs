/// The conversion behind `hex2bin <hex> <bin>`.
///
/// The parser drives a [`BinWriter`] over an in-memory sink; the bytes
/// reach `<bin>` with a single `fs::write` only after the whole input has
/// parsed. A failure anywhere, a record after the end-of-file record
/// included, leaves `<bin>` as it was.
use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use ihex_decoder::{ParseSummary, Parser};
use ihex_writer::BinWriter;

/// Run one conversion.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, if parsing fails (the
/// [`ParseError`](ihex_decoder::ParseError) is kept as the root cause), or
/// if the output cannot be written.
pub fn run(input: &Path, output: &Path) -> Result<ParseSummary> {
    let source =
        File::open(input).with_context(|| format!("cannot read {}", input.display()))?;

    let mut writer = BinWriter::new(Vec::new());
    let summary = Parser::from_reader(source)
        .parse(&mut writer)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    fs::write(output, writer.into_inner())
        .with_context(|| format!("cannot write {}", output.display()))?;

    Ok(summary)
}
