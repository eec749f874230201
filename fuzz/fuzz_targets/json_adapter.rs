#![no_main]

use libfuzzer_sys::fuzz_target;

use cpekit_core::{Cpe, parse};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // 파싱된 레코드의 JSON 어댑터는 무손실 왕복이어야 한다
    if let Ok(cpe) = parse(input) {
        let json = serde_json::to_string(&cpe).expect("record must serialize to json");
        let back: Cpe = serde_json::from_str(&json).expect("json must deserialize");
        assert_eq!(cpe, back);
    }
});
