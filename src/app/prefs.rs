// src/app/prefs.rs
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::warn;

pub const MEDIA_H_MIN: f32 = 200.0;
pub const MEDIA_H_MAX: f32 = 480.0;

/// View settings that survive a restart. Stored as `key=value` lines.
#[derive(Clone, Debug, PartialEq)]
pub struct UiPrefs {
    pub genre_filter: String,
    pub media_panel_h: f32,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            genre_filter: String::new(),
            media_panel_h: 320.0,
        }
    }
}

impl UiPrefs {
    pub fn parse(txt: &str) -> Self {
        let mut prefs = Self::default();
        for line in txt.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((k, v)) = line.split_once('=') else {
                continue;
            };
            let v = v.trim();
            match k.trim() {
                "genre_filter" => prefs.genre_filter = v.to_string(),
                "media_h" => {
                    if let Ok(n) = v.parse::<f32>() {
                        prefs.media_panel_h = n.clamp(MEDIA_H_MIN, MEDIA_H_MAX);
                    }
                }
                _ => {}
            }
        }
        prefs
    }

    pub fn to_text(&self) -> String {
        format!(
            "# watchlist ui prefs\n\
             genre_filter={}\n\
             media_h={:.1}\n",
            self.genre_filter.replace('\n', " "),
            self.media_panel_h,
        )
    }

    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(txt) => Self::parse(&txt),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_text())
    }
}

impl crate::app::WatchlistApp {
    pub(crate) fn mark_dirty(&mut self) {
        self.prefs_dirty = true;
    }

    pub(crate) fn maybe_save_prefs(&mut self) {
        // debounce a bit to avoid writing every frame
        if self.prefs_dirty && self.prefs_last_write.elapsed() >= Duration::from_millis(300) {
            if let Err(err) = self.prefs.save(&self.config.prefs_file) {
                warn!("Failed to save {}: {err}", self.config.prefs_file.display());
            }
            self.prefs_dirty = false;
            self.prefs_last_write = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_comments_unknown_keys_and_bad_numbers() {
        let prefs = UiPrefs::parse(
            "# header\n\
             genre_filter = Action \n\
             media_h=abc\n\
             color=red\n\
             no equals sign\n",
        );
        assert_eq!(prefs.genre_filter, "Action");
        assert_eq!(prefs.media_panel_h, UiPrefs::default().media_panel_h);
    }

    #[test]
    fn media_height_is_clamped() {
        assert_eq!(UiPrefs::parse("media_h=9999").media_panel_h, MEDIA_H_MAX);
        assert_eq!(UiPrefs::parse("media_h=1").media_panel_h, MEDIA_H_MIN);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_prefs.txt");
        let prefs = UiPrefs {
            genre_filter: "Sci-Fi".into(),
            media_panel_h: 280.0,
        };
        prefs.save(&path).unwrap();
        assert_eq!(UiPrefs::load(&path), prefs);
        assert_eq!(UiPrefs::load(&dir.path().join("missing.txt")), UiPrefs::default());
    }
}
