//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "oledmenu.toml";

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Either an unknown key (`key` set, `message` empty) or a whole file that
/// was skipped because it could not be read or parsed (`message` set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
    pub message: Option<String>,
}

impl ConfigWarning {
    fn skipped(file: &Path, error: MenuError) -> Self {
        let message = match error {
            MenuError::InvalidConfig { message, .. } => message,
            other => other.to_string(),
        };
        Self {
            key: String::new(),
            file: file.to_path_buf(),
            line: None,
            suggestion: None,
            message: Some(message),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                message: None,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from working-directory config, user config, or defaults.
///
/// A file that cannot be read or parsed is skipped with a warning and the
/// next candidate is tried; its keys never partially apply.
pub fn load_or_default(working_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let local = working_dir.map(|dir| dir.join(LOCAL_CONFIG_FILE));
    let user = dirs::config_dir().map(|dir| dir.join("oledmenu/config.toml"));

    let mut warnings = Vec::new();
    for path in local.into_iter().chain(user).filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((config, mut unknown)) => {
                warnings.append(&mut unknown);
                return (with_env_overrides(config), warnings);
            }
            Err(e) => warnings.push(ConfigWarning::skipped(&path, e)),
        }
    }

    (with_env_overrides(Config::default()), warnings)
}

/// Apply environment variable overrides (OLEDMENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // OLEDMENU_VERBOSITY
    if let Some(verbosity) = var("OLEDMENU_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // OLEDMENU_OUTPUT
    if let Some(output) = var("OLEDMENU_OUTPUT") {
        if !output.trim().is_empty() {
            config.display.output = PathBuf::from(output);
        }
    }

    // OLEDMENU_VIEWPORT
    if let Some(viewport) = var("OLEDMENU_VIEWPORT") {
        if let Ok(rows) = viewport.trim().parse::<usize>() {
            config.display.viewport = rows;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "display",
        "width",
        "height",
        "viewport",
        "line_height",
        "glyph_width",
        "glyph_height",
        "output",
        "enabled",
        "verbosity",
        "console",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
