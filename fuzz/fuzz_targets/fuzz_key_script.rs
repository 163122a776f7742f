#![no_main]

use libfuzzer_sys::fuzz_target;
use oledmenu::config::DisplayConfig;
use oledmenu::domain::ports::{FrameObserver, NoopEventSink};
use oledmenu::infrastructure::{OledRenderer, ScriptedInput};
use oledmenu::{build_system, CallbackRegistry, MenuSpec, SessionUseCase};

fuzz_target!(|data: &[u8]| {
    let script = String::from_utf8_lossy(data);
    let Ok(mut system) = build_system(&MenuSpec::demo(), &CallbackRegistry::announcing()) else {
        return;
    };
    let Ok(panel) = OledRenderer::in_memory(&DisplayConfig::default()) else {
        return;
    };

    let observers: Vec<Box<dyn FrameObserver>> = vec![Box::new(panel)];
    let mut session = SessionUseCase::new(observers);
    let mut input = ScriptedInput::parse(&script);
    let _ = session.execute(&mut system, &mut input, &NoopEventSink);
});
