#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use oledmenu::domain::ports::NoopEventSink;
use oledmenu::{build_system, CallbackRegistry, Input, MenuSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = MenuSpec::from_yaml_str(content, Path::new("fuzz.yaml")) else {
        return;
    };
    let Ok(mut system) = build_system(&spec, &CallbackRegistry::announcing()) else {
        return;
    };

    // Walk the parsed tree with inputs derived from the same bytes
    for byte in data.iter().take(256) {
        let input = match byte % 5 {
            0 => Input::MoveUp,
            1 => Input::MoveDown,
            2 => Input::Commit,
            3 => Input::Back,
            _ => Input::Noop,
        };
        let _ = system.handle(input, &NoopEventSink);
        let _ = system.view();
    }
});
