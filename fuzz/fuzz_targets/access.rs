#![no_main]
use fleece::Document;
use libfuzzer_sys::fuzz_target;

// Input layout: `<pointer>\n<json>`; the pointer line doubles as a `/`-separated path.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|byte| *byte == b'\n') else {
        return;
    };
    let Ok(pointer) = std::str::from_utf8(&data[..split]) else {
        return;
    };
    let Ok(document) = Document::load(&data[split + 1..]) else {
        return;
    };
    let _ = document.pointer(pointer);
    let path: Vec<&str> = pointer.split('/').filter(|key| !key.is_empty()).collect();
    let resolved = document.resolve(&path);
    if let Ok(value) = resolved {
        assert_eq!(document.get_float(&path).ok(), value.as_f64());
        assert_eq!(document.get_str(&path).ok(), value.as_str());
        assert_eq!(document.get_bool(&path).ok(), value.as_bool());
        let _ = document.get_indexed_map(0, &path);
    } else {
        assert!(document.get_int(&path).is_err());
    }
});
