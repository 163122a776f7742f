//! oledmenu CLI - hierarchical menu navigator with a simulated OLED panel
//!
//! Usage: oledmenu [OPTIONS]
//!
//! Without `--keys` the menu is driven from the terminal; with `--keys` a
//! key script is replayed and the session ends when it runs out.

use anyhow::{bail, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use oledmenu::config::{ConfigWarning, Verbosity};
use oledmenu::domain::builder::{build_system, CallbackRegistry};
use oledmenu::presentation::{factory, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = factory::load_config(&cli, cwd.as_deref())?;
    print_config_warnings(&warnings);

    let spec = factory::load_menu(&cli)?;
    let mut system = build_system(&spec, &CallbackRegistry::announcing())?;

    let interactive = cli.is_interactive();
    if interactive && !std::io::stdin().is_terminal() {
        bail!("stdin is not a terminal; pass --keys to replay a key script");
    }

    let mut session = factory::create_session_use_case(&config, cli.json, interactive)?;
    let sink = factory::create_event_sink(cli.json, config.output.verbosity, interactive);

    let outcome = {
        // Dropping the input restores the terminal before anything else is printed
        let mut input = factory::create_input(cli.keys.as_deref())?;
        session.execute(&mut system, input.as_mut(), sink.as_ref())
    };
    let result = outcome?;

    if !cli.json {
        println!();
        println!("Exited the menu system.");
        if config.output.verbosity >= Verbosity::Verbose {
            eprintln!(
                "{} steps, {} frames ({})",
                result.steps,
                result.frames,
                result.reason.as_str()
            );
        }
        if result.render_failures > 0 {
            eprintln!("⚠ {} frame(s) could not be drawn", result.render_failures);
        }
    }

    Ok(())
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(message) = &w.message {
            eprintln!("⚠ Ignoring config file {}: {}", w.file.display(), message.trim_end());
            continue;
        }

        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
