use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiosort/config.toml` or `~/.config/audiosort/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AUDIOSORT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tags: TagSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

/// Which tag store to use.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagBackend {
    /// Edit ID3 tags in-process.
    #[default]
    #[serde(alias = "lofty", alias = "builtin")]
    Native,
    /// Run an external helper program.
    #[serde(alias = "external", alias = "script")]
    Command,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub backend: TagBackend,
    /// Program to run for the command backend.
    pub program: String,
    /// Optional script passed to `program` before the file path.
    pub script: Option<PathBuf>,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            backend: TagBackend::Native,
            program: "python3".to_string(),
            script: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Prefix each log line with `[HH:MM:SS]`.
    pub timestamps: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { timestamps: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter used when `RUST_LOG` is not set, e.g. `"warn"` or `"audiosort=debug"`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
