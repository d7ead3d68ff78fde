/// `hex2bin`: convert an Intel HEX file into the binary stream produced
/// by the record parser.
///
/// ```text
/// hex2bin <hex> <bin> [-v]
///
///   <hex>            Intel HEX input file
///   <bin>            output file, created only when the whole input parses
///   -v, --verbose    debug logging on stderr (RUST_LOG overrides)
/// ```
///
/// Missing or extra arguments print a short usage message and exit 0.
///
/// # Exit codes
///
/// | Code | Meaning                                             |
/// |------|-----------------------------------------------------|
/// | 0    | Success, or usage printed                           |
/// | 1    | I/O failure (input unreadable, output unwritable)   |
/// | 2    | Invalid record (malformed, checksum, length, type)  |
/// | 3    | Stream structure (data after EOF, missing EOF)      |
///
/// All diagnostics go to stderr.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use ihex_decoder::{ErrorKind, ParseError};
use tracing_subscriber::EnvFilter;

mod convert;

#[derive(Parser)]
#[command(name = "hex2bin", version, about = "Convert an Intel HEX file to binary")]
struct Cli {
    /// Intel HEX input file.
    input: PathBuf,

    /// Binary output file.
    output: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

const USAGE: &str = "usage:\n    hex2bin <hex> <bin>";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.verbose);

    match convert::run(&cli.input, &cli.output) {
        Ok(summary) => {
            tracing::info!(
                input = %cli.input.display(),
                output = %cli.output.display(),
                records = summary.records,
                data_records = summary.data_records,
                payload_bytes = summary.payload_bytes,
                output_bytes = summary.output_bytes,
                "conversion complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Map a conversion failure to the process exit code.
///
/// Errors that are not a [`ParseError`] come from opening the input or
/// writing the output and count as I/O failures.
fn exit_code(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<ParseError>().map(ParseError::kind) {
        None | Some(ErrorKind::Io) => 1,
        Some(
            ErrorKind::MalformedRecord
            | ErrorKind::ChecksumError
            | ErrorKind::LengthError
            | ErrorKind::UnsupportedType,
        ) => 2,
        Some(ErrorKind::DataAfterEof | ErrorKind::MissingEof) => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn exit_codes_by_kind() {
        let missing = anyhow::Error::new(ParseError::MissingEof { records: 1 });
        assert_eq!(exit_code(&missing), 3);

        let after = Err::<(), _>(ParseError::DataAfterEof { record: 4 })
            .context("failed to convert")
            .unwrap_err();
        assert_eq!(exit_code(&after), 3);

        let io = anyhow::Error::new(ParseError::Io(std::io::Error::other("full")));
        assert_eq!(exit_code(&io), 1);

        let open = anyhow::Error::new(std::io::Error::other("no such file"));
        assert_eq!(exit_code(&open), 1);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
