//! Layered configuration for the calculator shell.
//!
//! Settings are resolved in this order, later sources winning:
//! - Built-in defaults
//! - A TOML file (`calcbook.toml` in the working directory, or `--config`)
//! - Environment variables
//!
//! # Environment Variables
//!
//! Variables are prefixed with `CALCBOOK_` and use double underscores to
//! separate nested levels:
//! - `CALCBOOK_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `CALCBOOK_DISPLAY__SHOW_HISTORY=true` sets `display.show_history`
//!
//! # Example file
//!
//! ```toml
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! calcbook = "debug"
//!
//! [display]
//! prompt = "calc> "
//! show_history = true
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CALCBOOK_";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "calcbook.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Shell presentation
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for every target (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `calcbook::session = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prompt printed before each line in the interactive shell
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the history list after every successful submission
    #[serde(default)]
    pub show_history: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_history: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "calc> ".to_string()
}

impl Settings {
    /// Load settings from defaults, the config file and the environment.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_quiet() {
        let settings = Settings::default();
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
        assert_eq!(settings.display.prompt, "calc> ");
        assert!(!settings.display.show_history);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(settings.display, DisplayConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcbook.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[display]\nshow_history = true\n\n[logging.modules]\n\"calcbook::session\" = \"debug\""
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert!(settings.display.show_history);
        assert_eq!(settings.display.prompt, "calc> ");
        assert_eq!(
            settings.logging.modules.get("calcbook::session").map(String::as_str),
            Some("debug")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcbook.toml");
        std::fs::write(&path, "[display]\nshow_history = \"sometimes\"\n").unwrap();

        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
