use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load_from` layers environment variables (prefix `AUDIOSORT__`) over
/// an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and a config file.
    ///
    /// `explicit` replaces the default config file location and must exist;
    /// the default file is optional.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = resolve_config_path() {
                    builder =
                        builder.add_source(::config::File::from(path.as_path()).required(false));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("AUDIOSORT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    ///
    /// Tag backend settings are checked when the store is built, so a broken
    /// backend stops the run instead of being replaced by defaults.
    pub fn validate(&self) -> Result<(), String> {
        if self.log.level.trim().is_empty() {
            return Err("log.level must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `AUDIOSORT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("AUDIOSORT_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/audiosort/config.toml`
/// or `~/.config/audiosort/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("audiosort").join("config.toml"))
}
