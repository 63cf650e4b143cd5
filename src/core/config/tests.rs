use std::sync::{Mutex, OnceLock};

use super::{Settings, default_config_path, resolve_config_path};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
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
fn defaults_when_no_file_or_env() {
    let s = Settings::default();
    assert_eq!(s.artwork.default_cover, None);
    assert_eq!(s.audio.volume, 1.0);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_volume() {
    let mut s = Settings::default();
    s.audio.volume = 1.5;
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_attacca_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ATTACCA_CONFIG_PATH", "/tmp/attacca-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/attacca-test-config.toml")
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
            .join("attacca")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[artwork]
default_cover = "/tmp/cover.png"

[audio]
volume = 0.25
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ATTACCA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ATTACCA__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(
        s.artwork.default_cover,
        Some(std::path::PathBuf::from("/tmp/cover.png"))
    );
    assert_eq!(s.audio.volume, 0.25);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
volume = 0.25
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ATTACCA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ATTACCA__AUDIO__VOLUME", "0.5");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.volume, 0.5);
}
