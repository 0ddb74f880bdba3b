use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_audiosort_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("AUDIOSORT_CONFIG_PATH", "/tmp/audiosort-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/audiosort-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("audiosort")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("audiosort")
            .join("config.toml")
    );
}

#[test]
fn defaults_use_native_tags_and_timestamps() {
    let s = Settings::default();
    assert_eq!(s.tags.backend, TagBackend::Native);
    assert_eq!(s.tags.program, "python3");
    assert!(s.tags.script.is_none());
    assert!(s.output.timestamps);
    assert_eq!(s.log.level, "warn");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_backend_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[tags]
backend = "script"
program = "/usr/bin/python3"
script = "/opt/helpers/update-mp3-tags.py"

[output]
timestamps = false

[log]
level = "audiosort=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("AUDIOSORT_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("AUDIOSORT__OUTPUT__TIMESTAMPS");

    let s = Settings::load_from(None).unwrap();
    assert_eq!(s.tags.backend, TagBackend::Command);
    assert_eq!(s.tags.program, "/usr/bin/python3");
    assert_eq!(
        s.tags.script,
        Some(std::path::PathBuf::from("/opt/helpers/update-mp3-tags.py"))
    );
    assert!(!s.output.timestamps);
    assert_eq!(s.log.level, "audiosort=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[output]
timestamps = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("AUDIOSORT_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("AUDIOSORT__OUTPUT__TIMESTAMPS", "false");

    let s = Settings::load_from(None).unwrap();
    assert!(!s.output.timestamps);
}

#[test]
fn explicit_config_file_must_exist() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    assert!(Settings::load_from(Some(&missing)).is_err());
}

#[test]
fn explicit_config_file_wins_over_env_path() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[log]\nlevel = \"info\"\n").unwrap();
    let other = dir.path().join("other.toml");
    std::fs::write(&other, "[log]\nlevel = \"trace\"\n").unwrap();

    let _g1 = EnvGuard::set("AUDIOSORT_CONFIG_PATH", other.to_str().unwrap());
    let _g2 = EnvGuard::remove("AUDIOSORT__LOG__LEVEL");

    let s = Settings::load_from(Some(&explicit)).unwrap();
    assert_eq!(s.log.level, "info");
}

#[test]
fn validate_rejects_empty_log_level() {
    let mut s = Settings::default();
    s.log.level = " ".to_string();
    assert!(s.validate().is_err());
}

#[test]
fn command_backend_without_program_survives_load() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[tags]\nbackend = \"command\"\nprogram = \"\"\n").unwrap();

    let _g1 = EnvGuard::remove("AUDIOSORT__TAGS__PROGRAM");
    let _g2 = EnvGuard::remove("AUDIOSORT__TAGS__BACKEND");

    let s = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(s.tags.backend, TagBackend::Command);
    assert_eq!(s.tags.program, "");
    assert!(s.validate().is_ok());
}
