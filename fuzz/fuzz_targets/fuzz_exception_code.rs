// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz ExceptionCode parsing and deserialization.
//!
//! Verifies:
//! 1. Parsing arbitrary strings never panics.
//! 2. Any accepted string is exactly the code's wire identifier.
//! 3. JSON deserialization agrees with `FromStr`.
#![no_main]
use libfuzzer_sys::fuzz_target;
use ogc_wms130::ExceptionCode;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(code) = s.parse::<ExceptionCode>() {
        assert_eq!(code.as_str(), s);
        assert_eq!(code.to_string(), s);
    }

    if let Ok(code) = serde_json::from_str::<ExceptionCode>(s) {
        let json = serde_json::to_string(&code).expect("ExceptionCode must serialize");
        let rt: ExceptionCode = serde_json::from_str(&json).expect("round-trip must succeed");
        assert_eq!(code, rt);
        assert_eq!(code.as_str().parse::<ExceptionCode>(), Ok(code));
    }
});
