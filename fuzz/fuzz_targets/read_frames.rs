#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: framing::read_frames on arbitrary bytes.
//
// Catches bugs in:
// - Truncated frames and dangling escapes
// - Offset arithmetic across consecutive frames
fuzz_target!(|data: &[u8]| {
    let _ = ihex_wire::framing::read_frames(data);
});
