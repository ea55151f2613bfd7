use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_MOVIES_FILE: &str = "movies.json";
pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_PREFS_FILE: &str = "ui_prefs.txt";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub movies_file: PathBuf,
    pub users_file: PathBuf,
    pub prefs_file: PathBuf,
    pub require_login: bool,
    pub poster_size: [u32; 2],
    pub preview_size: [u32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            movies_file: PathBuf::from(DEFAULT_MOVIES_FILE),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            prefs_file: PathBuf::from(DEFAULT_PREFS_FILE),
            require_login: true,
            poster_size: [200, 300],
            preview_size: [460, 280],
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(alias = "movie_file")]
    movies_file: Option<String>,
    #[serde(alias = "user_file")]
    users_file: Option<String>,
    prefs_file: Option<String>,
    require_login: Option<bool>,
    poster_size: Option<[u32; 2]>,
    preview_size: Option<[u32; 2]>,
}

fn usable_size(name: &str, size: [u32; 2]) -> Option<[u32; 2]> {
    if size[0] == 0 || size[1] == 0 || size[0] > 4096 || size[1] > 4096 {
        warn!("Ignoring {name} {size:?} in {CONFIG_FILE}; keeping default.");
        None
    } else {
        Some(size)
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(Path::new(CONFIG_FILE))
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(p) = parsed.movies_file.filter(|s| !s.trim().is_empty()) {
                    cfg.movies_file = PathBuf::from(p);
                    if raw.contains("\"movie_file\"") {
                        warn!("`movie_file` is deprecated; rename it to `movies_file` in config.json.");
                    }
                }
                if let Some(p) = parsed.users_file.filter(|s| !s.trim().is_empty()) {
                    cfg.users_file = PathBuf::from(p);
                }
                if let Some(p) = parsed.prefs_file.filter(|s| !s.trim().is_empty()) {
                    cfg.prefs_file = PathBuf::from(p);
                }
                if let Some(flag) = parsed.require_login {
                    cfg.require_login = flag;
                }
                if let Some(size) = parsed.poster_size.and_then(|s| usable_size("poster_size", s)) {
                    cfg.poster_size = size;
                }
                if let Some(size) = parsed
                    .preview_size
                    .and_then(|s| usable_size("preview_size", s))
                {
                    cfg.preview_size = size;
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!("Failed to parse {} ({}). Using defaults.", cfg_path.display(), err);
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
        }
    }

    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.json"));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"movies_file": "data/list.json", "require_login": false, "poster_size": [120, 180]}"#,
        )
        .unwrap();
        let cfg = load_config_from(&path);
        assert_eq!(cfg.movies_file, PathBuf::from("data/list.json"));
        assert!(!cfg.require_login);
        assert_eq!(cfg.poster_size, [120, 180]);
        assert_eq!(cfg.users_file, PathBuf::from(DEFAULT_USERS_FILE));
        assert_eq!(cfg.preview_size, [460, 280]);
    }

    #[test]
    fn deprecated_alias_and_bad_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"movie_file": "old.json", "preview_size": [0, 10]}"#).unwrap();
        let cfg = load_config_from(&path);
        assert_eq!(cfg.movies_file, PathBuf::from("old.json"));
        assert_eq!(cfg.preview_size, [460, 280]);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }
}
