#![no_main]
use fleece::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = Document::load(data) {
        assert_eq!(document.dump(), data);
        for indent in [0, 2] {
            let pretty = document.dump_pretty(indent);
            let reparsed = Document::load_str(&pretty).expect("Pretty output is valid JSON");
            assert_eq!(reparsed.root(), document.root());
        }
    }
});
