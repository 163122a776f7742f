//! Tests for the config module

use super::loader::{apply_overrides, parse_with_warnings};
use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.display.width, 96);
    assert_eq!(config.display.height, 32);
    assert_eq!(config.display.viewport, 4);
    assert_eq!(config.display.line_height, 8);
    assert_eq!(config.display.glyph_width, 1);
    assert_eq!(config.display.glyph_height, 6);
    assert_eq!(config.display.output, PathBuf::from("oled.bmp"));
    assert!(config.display.enabled);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert!(config.output.console);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[display]
width = 128
height = 64
viewport = 6
output = "frames/panel.bmp"

[output]
verbosity = "verbose"
console = false
"#;

    let (config, warnings) = parse_with_warnings(toml, Path::new("oledmenu.toml")).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.display.width, 128);
    assert_eq!(config.display.height, 64);
    assert_eq!(config.display.viewport, 6);
    assert_eq!(config.display.line_height, 8);
    assert_eq!(config.display.output, PathBuf::from("frames/panel.bmp"));
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert!(!config.output.console);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let toml = "[display]\nwidht = 64\n";
    let (config, warnings) = parse_with_warnings(toml, Path::new("oledmenu.toml")).unwrap();

    assert_eq!(config.display.width, 96);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "widht");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("width"));
    assert!(warnings[0].message.is_none());
}

#[test]
fn test_invalid_toml_is_error() {
    let err = parse_with_warnings("[display\nwidth = 1", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, crate::error::MenuError::InvalidConfig { .. }));
}

#[test]
fn test_malformed_local_config_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("oledmenu.toml");
    fs::write(&path, "[display]\nwidth = \"wide\"\n").unwrap();

    let (_, warnings) = Config::load_or_default(Some(dir.path()));

    let skipped = &warnings[0];
    assert_eq!(skipped.file, path);
    assert!(skipped.key.is_empty());
    assert!(skipped.message.as_deref().unwrap().contains("wide"));
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("oledmenu.toml");
    fs::write(&path, "[display]\nviewport = 2\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.display.viewport, 2);
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(Config::default(), |key| match key {
        "OLEDMENU_VERBOSITY" => Some("Debug".to_string()),
        "OLEDMENU_OUTPUT" => Some("/tmp/panel.bmp".to_string()),
        "OLEDMENU_VIEWPORT" => Some("3".to_string()),
        _ => None,
    });

    assert_eq!(config.output.verbosity, Verbosity::Debug);
    assert_eq!(config.display.output, PathBuf::from("/tmp/panel.bmp"));
    assert_eq!(config.display.viewport, 3);
}

#[test]
fn test_env_overrides_ignore_garbage() {
    let config = apply_overrides(Config::default(), |key| match key {
        "OLEDMENU_VIEWPORT" => Some("many".to_string()),
        "OLEDMENU_OUTPUT" => Some("  ".to_string()),
        _ => None,
    });

    assert_eq!(config.display.viewport, 4);
    assert_eq!(config.display.output, PathBuf::from("oled.bmp"));
}

#[test]
fn test_display_validation() {
    assert!(DisplayConfig::default().validate().is_ok());

    let zero = DisplayConfig {
        width: 0,
        ..DisplayConfig::default()
    };
    assert!(zero.validate().is_err());

    let huge = DisplayConfig {
        height: MAX_DIMENSION + 1,
        ..DisplayConfig::default()
    };
    assert!(huge.validate().is_err());

    let no_rows = DisplayConfig {
        viewport: 0,
        ..DisplayConfig::default()
    };
    assert!(no_rows.validate().is_err());
}

#[test]
fn test_verbosity_raised_by_flags() {
    assert_eq!(Verbosity::Normal.raised_by(0), Verbosity::Normal);
    assert_eq!(Verbosity::Normal.raised_by(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Normal.raised_by(3), Verbosity::Debug);
    assert_eq!(Verbosity::Debug.raised_by(0), Verbosity::Debug);
    assert_eq!(Verbosity::Quiet.raised_by(0), Verbosity::Quiet);
    assert_eq!(Verbosity::Quiet.raised_by(1), Verbosity::Verbose);
}
