//! Golden fixture generator for the conformance and edge case suites.
//!
//! Writes every `.hex` file under `tests/golden/`. The files are committed;
//! rerun this only when a fixture needs to change, then review the
//! snapshot diffs with `cargo insta review`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p ihex-tests
//! ```
//!
//! # Generated fixtures
//!
//! | File                          | Contents                                   |
//! |-------------------------------|--------------------------------------------|
//! | valid/simple.hex              | Four 16-byte data records + EOF            |
//! | valid/crlf.hex                | simple.hex with CRLF and trailing blanks   |
//! | valid/linear_address.hex      | ELA + data with reserved bytes + SLA + EOF |
//! | valid/segment_address.hex     | ESA + SSA + data + EOF                     |
//! | invalid/missing_colon.hex     | First line has no start code               |
//! | invalid/odd_digits.hex        | Odd number of hex digits                   |
//! | invalid/bad_digit.hex         | Non-hex character inside a record          |
//! | invalid/bad_checksum.hex      | Last checksum digit corrupted              |
//! | invalid/bad_length.hex        | Length byte disagrees with the line        |
//! | invalid/unsupported_type.hex  | Record type 0x06                           |
//! | invalid/blank_line_inside.hex | Blank line between records                 |
//! | invalid/data_after_eof.hex    | Data record after EOF                      |
//! | invalid/double_eof.hex        | Two EOF records                            |
//! | invalid/missing_eof.hex       | No EOF record                              |

#![allow(clippy::pedantic)]

use std::path::Path;

use ihex_tests::{eof_line, golden_dir, record_line};
use ihex_wire::RecordType;

const DATA: &str = ":0300300002337A1E";

fn main() {
    let dir = golden_dir();

    generate_valid(&dir.join("valid"));
    generate_invalid(&dir.join("invalid"));

    println!("All golden fixtures written to {}", dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, text).expect("write_file");
    println!("  wrote {}", path.display());
}

fn lines(records: &[&str]) -> String {
    records.iter().map(|r| format!("{r}\n")).collect()
}

// ── Valid fixtures ───────────────────────────────────────────────────────────

fn simple_records() -> Vec<&'static str> {
    vec![
        ":10010000214601360121470136007EFE09D2190140",
        ":100110002146017E17C20001FF5F16002148011928",
        ":10012000194E79234623965778239EDA3F01B2CAA7",
        ":100130003F0156702B5E712B722B732146013421C7",
        ":00000001FF",
    ]
}

fn generate_valid(dir: &Path) {
    let simple = simple_records();
    write_file(&dir.join("simple.hex"), &lines(&simple));

    let mut crlf: String = simple.iter().map(|r| format!("{r}\r\n")).collect();
    crlf.push_str("\r\n\r\n");
    write_file(&dir.join("crlf.hex"), &crlf);

    let linear = [
        record_line(RecordType::ExtendedLinearAddress, 0x0000, &[0x08, 0x00]),
        record_line(
            RecordType::Data,
            0x0000,
            &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x0F, 0x10, 0x11],
        ),
        record_line(RecordType::Data, 0x0010, &[0x10, 0x10, 0x01, 0x04]),
        record_line(RecordType::StartLinearAddress, 0x0000, &[0x08, 0x00, 0x01, 0x01]),
        eof_line(),
    ];
    let linear: Vec<&str> = linear.iter().map(String::as_str).collect();
    write_file(&dir.join("linear_address.hex"), &lines(&linear));

    let segment = [
        record_line(RecordType::ExtendedSegmentAddress, 0x0000, &[0x10, 0x00]),
        record_line(RecordType::StartSegmentAddress, 0x0000, &[0x00, 0x00, 0x38, 0x00]),
        record_line(RecordType::Data, 0x0100, &[0xDE, 0xAD, 0xBE, 0xEF]),
        eof_line(),
    ];
    let segment: Vec<&str> = segment.iter().map(String::as_str).collect();
    write_file(&dir.join("segment_address.hex"), &lines(&segment));
}

// ── Invalid fixtures ─────────────────────────────────────────────────────────

fn generate_invalid(dir: &Path) {
    let eof = eof_line();
    let eof = eof.as_str();

    let cases: [(&str, Vec<&str>); 10] = [
        ("missing_colon.hex", vec!["0300300002337A1E", eof]),
        ("odd_digits.hex", vec![":0300300002337A1", eof]),
        ("bad_digit.hex", vec![":03003000023G7A1E", eof]),
        ("bad_checksum.hex", vec![DATA, ":0300300002337A1F", eof]),
        ("bad_length.hex", vec![":0400300002337A1D", eof]),
        ("unsupported_type.hex", vec![":00000006FA", eof]),
        ("blank_line_inside.hex", vec![DATA, "", eof]),
        ("data_after_eof.hex", vec![eof, DATA]),
        ("double_eof.hex", vec![eof, eof]),
        ("missing_eof.hex", vec![DATA, DATA]),
    ];

    for (name, records) in cases {
        write_file(&dir.join(name), &lines(&records));
    }
}
