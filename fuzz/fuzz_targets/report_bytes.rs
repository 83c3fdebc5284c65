#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary input must never panic, only fail with an error
fuzz_target!(|data: &[u8]| {
    let (output, result) = alphacheck_fuzz::report_bytes(data);
    if result.is_err() {
        assert!(!output.contains("Sample pixels"));
    }
});
