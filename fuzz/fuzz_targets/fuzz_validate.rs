#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; rejections are fine.
        let outcome = eurovat::validate(s);
        if let Ok(number) = eurovat::parse(s) {
            assert!(outcome.is_valid());
            assert!(eurovat::validate(&number.to_string()).is_valid());
        }
    }
});
