//! Fuzz target: `LedCommand::parse`
//!
//! Drives arbitrary byte sequences through the command parser and asserts
//! that it never panics and only ever accepts the three recognized tokens.
//!
//! cargo fuzz run fuzz_command_parse

#![no_main]

use lamplink::app::commands::LedCommand;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let token = text.trim();
    match LedCommand::parse(text) {
        Some(LedCommand::On) => assert!(token.eq_ignore_ascii_case("ON")),
        Some(LedCommand::Off) => assert!(token.eq_ignore_ascii_case("OFF")),
        Some(LedCommand::Toggle) => assert!(token.eq_ignore_ascii_case("TOGGLE")),
        None => {
            // Rejections must reject: none of the tokens may slip through.
            assert!(
                !token.eq_ignore_ascii_case("ON")
                    && !token.eq_ignore_ascii_case("OFF")
                    && !token.eq_ignore_ascii_case("TOGGLE")
            );
        }
    }
});
