#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = dataconv::from_xml_str(s) {
            // Anything read from XML is a single-root tree and must write back
            assert!(dataconv::to_xml_string(&value).is_ok());
        }
    }
});
