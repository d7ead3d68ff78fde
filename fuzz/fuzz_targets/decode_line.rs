#![no_main]

use libfuzzer_sys::fuzz_target;
use ihex_wire::Record;

// Fuzz target: Record::decode_bytes on arbitrary bytes.
//
// Catches bugs in:
// - Short lines indexing past the decoded bytes
// - Column arithmetic around non-ASCII and non-UTF-8 bytes
// - Length byte arithmetic near 255
//
// Valid UTF-8 must decode exactly as decode_line does.
fuzz_target!(|data: &[u8]| {
    let from_bytes = Record::decode_bytes(data);
    if let Ok(line) = std::str::from_utf8(data) {
        assert_eq!(from_bytes, Record::decode_line(line));
    }
});
