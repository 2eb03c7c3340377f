#![no_main]
use dataconv::{convert, Format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for from in [Format::Json, Format::Yaml] {
            for to in Format::ALL {
                let _ = convert(s, from, to);
            }
        }
    }
});
