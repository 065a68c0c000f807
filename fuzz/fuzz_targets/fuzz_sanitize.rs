#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(clean) = eurovat::sanitize(s) {
            assert_eq!(eurovat::sanitize(&clean).as_ref(), Ok(&clean));
        }
    }
});
