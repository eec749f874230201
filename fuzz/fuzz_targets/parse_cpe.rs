#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // 크래시나 패닉 없이 Ok 또는 Err을 반환해야 한다
    let _ = cpekit_core::parse(input);
});
