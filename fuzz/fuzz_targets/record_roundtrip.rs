#![no_main]

use libfuzzer_sys::fuzz_target;
use ihex_wire::{checksum, Record, RecordType};

// Fuzz target: build a line -> decode_line -> Display roundtrip.
//
// Input format:
//   byte 0: record type selector
//   bytes 1..3: address
//   bytes 3..: payload (truncated to 255)
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let Some(record_type) = RecordType::from_code(data[0] % 6) else {
        return;
    };
    let payload = &data[3..data.len().min(3 + 255)];

    let mut raw = vec![payload.len() as u8, data[1], data[2], record_type.code()];
    raw.extend_from_slice(payload);
    raw.push(checksum::for_bytes(&raw));

    let line = format!(":{}", hex::encode_upper(&raw));

    let record = Record::decode_line(&line).unwrap();
    assert_eq!(record.record_type(), record_type);
    assert_eq!(record.raw(), raw.as_slice());
    assert_eq!(record.to_string(), line);
});
