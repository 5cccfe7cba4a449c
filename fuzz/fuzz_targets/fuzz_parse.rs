//! Fuzz target for the address parser.
//!
//! Drives all three text entry points with arbitrary UTF-8 input. The
//! parser must reject malformed text with an error, never a panic, and
//! every accepted address must survive a full-render round-trip.

#![no_main]

use addrcalc_core::{parse, parse_identifier, parse_token, render, FormatOptions, RenderMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_token(text);
    let _ = parse_identifier(text);

    if let Ok(addr) = parse(text) {
        let rendered = render(&addr, RenderMode::Full, &FormatOptions::default())
            .expect("full render of a parsed address cannot fail");
        let reparsed = parse(&rendered).expect("rendered address must reparse");
        for i in 0..8 {
            assert_eq!(addr.word(i), reparsed.word(i));
        }
    }
});
