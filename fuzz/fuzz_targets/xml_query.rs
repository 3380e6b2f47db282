#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlpath::parse;

const DOCUMENT: &str = r#"<catalog name="c"><book id="1"><title>A</title></book><book id="2"/></catalog>"#;

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = std::str::from_utf8(data) {
        let root = parse(DOCUMENT);
        let first = root.query(pattern);
        assert_eq!(first, root.query(pattern));
    }
});
