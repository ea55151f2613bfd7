//! Login check against a plain `users.json` map of user name to password.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, WatchlistError};

pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct UserBook {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl UserBook {
    /// Read the user file, writing the default account first if it is missing.
    pub fn load_or_seed(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let users = match fs::read(&path) {
            Ok(raw) => serde_json::from_slice::<BTreeMap<String, String>>(&raw)
                .map_err(|e| WatchlistError::parse(&path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let users = BTreeMap::from([(DEFAULT_USER.to_string(), DEFAULT_PASSWORD.to_string())]);
                let json =
                    serde_json::to_vec(&users).map_err(|e| WatchlistError::parse(&path, e))?;
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir).map_err(|e| WatchlistError::io(dir, e))?;
                }
                fs::write(&path, json).map_err(|e| WatchlistError::io(&path, e))?;
                info!("seeded {} with the default account", path.display());
                users
            }
            Err(e) => return Err(WatchlistError::io(&path, e)),
        };
        Ok(Self { path, users })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn verify(&self, user: &str, password: &str) -> bool {
        self.users
            .get(user.trim())
            .is_some_and(|p| p == password.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_default_account_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let book = UserBook::load_or_seed(&path).unwrap();
        assert!(path.exists());
        assert_eq!(book.path(), path.as_path());
        assert!(book.verify("admin", "admin123"));
        assert!(book.verify(" admin ", "admin123 "));
        assert!(!book.verify("admin", "wrong"));
        assert!(!book.verify("", ""));
    }

    #[test]
    fn seeding_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("users.json");
        let book = UserBook::load_or_seed(&path).unwrap();
        assert!(path.is_file());
        assert!(book.verify("admin", "admin123"));
    }

    #[test]
    fn reads_existing_users() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, r#"{"mihir": "popcorn"}"#).unwrap();
        let book = UserBook::load_or_seed(&path).unwrap();
        assert!(book.verify("mihir", "popcorn"));
        assert!(!book.verify("admin", "admin123"));
    }

    #[test]
    fn corrupt_user_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            UserBook::load_or_seed(&path),
            Err(WatchlistError::Parse { .. })
        ));
    }
}
