#![no_main]

use libfuzzer_sys::fuzz_target;
use ihex_decoder::Parser;
use ihex_writer::BinWriter;

// Fuzz target: full Parser run into a BinWriter.
//
// Whatever the input, a failed parse must leave the sink empty unless the
// EOF record was already seen.
fuzz_target!(|data: &[u8]| {
    let mut writer = BinWriter::new(Vec::new());
    let result = Parser::new(data).parse(&mut writer);
    let flushed = writer.is_flushed();
    let output = writer.into_inner();

    match result {
        Ok(_) => assert!(flushed),
        Err(_) if !flushed => assert!(output.is_empty()),
        Err(_) => {}
    }
});
