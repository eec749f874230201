#![no_main]

use libfuzzer_sys::fuzz_target;

use cpekit_core::{URI_PREFIX, parse, to_uri_string};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // 2.2 파싱에 성공한 레코드는 항상 직렬화되고, 선택 필드가 하나라도
    // 있으면 그 결과는 다시 파싱된다. part만 있는 레코드는 "cpe:/h/"로
    // 직렬화되어 part 세그먼트 길이 검사에 걸리므로 제외한다.
    if input.starts_with(URI_PREFIX) {
        if let Ok(cpe) = parse(input) {
            let uri = to_uri_string(&cpe).expect("parsed 2.2 record must serialize");

            let has_optional_field = [
                &cpe.vendor,
                &cpe.product,
                &cpe.version,
                &cpe.update,
                &cpe.edition,
                &cpe.language,
            ]
            .iter()
            .any(|field| !field.is_empty());

            if has_optional_field {
                parse(&uri).expect("serialized uri must reparse");
            }
        }
    }
});
