#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlpath::try_parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(root) = try_parse(s) {
            assert!(root.is_element());
        }
    }
});
