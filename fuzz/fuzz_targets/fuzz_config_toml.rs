#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and validation should never panic
        if let Ok(config) = toml::from_str::<oledmenu::Config>(content) {
            let _ = config.display.validate();
        }
    }
});
