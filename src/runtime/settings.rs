use std::path::Path;

use crate::config;

pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    match config::Settings::load_from(explicit) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("audiosort: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("audiosort: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
