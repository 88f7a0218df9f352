#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, attempts to parse as JSON, round-trips anything
// that parses back through the serializer. Goal: no panics on malformed or
// adversarial input, and every value the parser accepts, the serializer
// accepts back.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = jsontools_core::parser::parse(data) {
        let _ = jsontools_core::serializer::to_bytes(&value, false);
    }
});
