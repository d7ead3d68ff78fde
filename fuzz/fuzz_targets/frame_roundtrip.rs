#![no_main]

use libfuzzer_sys::fuzz_target;
use ihex_wire::framing::{frame, read_frame};

// Fuzz target: frame -> read_frame roundtrip.
//
// The frame must consume exactly its own bytes and contain no unescaped
// control byte between its delimiters.
fuzz_target!(|data: &[u8]| {
    let framed = frame(data);

    let (body, consumed) = read_frame(&framed).unwrap();
    assert_eq!(body, data);
    assert_eq!(consumed, framed.len());
});
