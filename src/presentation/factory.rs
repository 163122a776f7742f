//! Session Factory
//!
//! Creates the session and its infrastructure dependencies from CLI flags
//! and configuration. This is the dependency injection point for the binary.

use std::path::Path;

use crate::application::SessionUseCase;
use crate::config::{Config, ConfigWarning, Verbosity};
use crate::domain::builder::MenuSpec;
use crate::domain::ports::{FrameObserver, InputSource, NavEventSink};
use crate::error::MenuResult;
use crate::infrastructure::{
    ConsoleEventSink, ConsoleRenderer, JsonEventSink, JsonFrameObserver, OledRenderer,
    ScriptedInput, TerminalInput,
};

use super::cli::Cli;

/// Load the config named by `--config`, or fall back to the lookup chain
pub fn load_config(
    cli: &Cli,
    working_dir: Option<&Path>,
) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(working_dir),
    };
    Ok((apply_cli(cli, config), warnings))
}

/// Apply command-line flags on top of file and environment settings
pub fn apply_cli(cli: &Cli, mut config: Config) -> Config {
    if let Some(output) = &cli.output {
        config.display.output = output.clone();
    }
    if cli.no_bitmap {
        config.display.enabled = false;
    }
    if cli.json {
        config.output.console = false;
    }
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);
    config
}

/// The menu file named by `--menu`, or the built-in demo
pub fn load_menu(cli: &Cli) -> MenuResult<MenuSpec> {
    match &cli.menu {
        Some(path) => MenuSpec::load(path),
        None => Ok(MenuSpec::demo()),
    }
}

/// Event sink for the selected output mode
pub fn create_event_sink(
    json: bool,
    verbosity: Verbosity,
    raw_mode: bool,
) -> Box<dyn NavEventSink> {
    if json {
        Box::new(JsonEventSink::stdout(raw_mode))
    } else {
        Box::new(ConsoleEventSink::stderr(verbosity, raw_mode))
    }
}

/// Frame observers enabled by `config`, text output first
///
/// In JSON mode frames go to stdout as `frame` records instead of the
/// console view.
pub fn create_observers(
    config: &Config,
    json: bool,
    interactive: bool,
) -> MenuResult<Vec<Box<dyn FrameObserver>>> {
    let mut observers: Vec<Box<dyn FrameObserver>> = Vec::new();
    if json {
        observers.push(Box::new(JsonFrameObserver::stdout(interactive)));
    } else if config.output.console {
        if interactive {
            observers.push(Box::new(ConsoleRenderer::stdout(true)));
        } else {
            observers.push(Box::new(ConsoleRenderer::with_writer(std::io::stdout())));
        }
    }
    observers.push(Box::new(OledRenderer::new(&config.display)?));
    Ok(observers)
}

/// Session use case with every configured observer attached
pub fn create_session_use_case(
    config: &Config,
    json: bool,
    interactive: bool,
) -> MenuResult<SessionUseCase> {
    Ok(SessionUseCase::new(create_observers(config, json, interactive)?))
}

/// Scripted input for `--keys`, raw-mode terminal input otherwise
pub fn create_input(keys: Option<&str>) -> MenuResult<Box<dyn InputSource>> {
    match keys {
        Some(script) => Ok(Box::new(ScriptedInput::parse(script))),
        None => Ok(Box::new(TerminalInput::enable()?)),
    }
}
