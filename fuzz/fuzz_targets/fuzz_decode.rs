#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are expected on garbage input; panics are bugs.
        let vin = vindecode::Vin::new(s);
        let _ = vin.validate();
        let _ = vin.year();
        let _ = vin.report().to_json();
    }
});
