// src/store/record.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Key an older file layout used for the poster path.
pub const LEGACY_IMAGE_KEY: &str = "image";

/// One watchlist entry, as stored in the JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub genre: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub video: Option<String>,
    #[serde(default)]
    pub watched: bool,
    /// Keys this version does not know about; written back untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn blank_as_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(d)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn trimmed_opt(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl MovieRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster = Some(path.into());
        self
    }

    pub fn with_video(mut self, path: impl Into<String>) -> Self {
        self.video = Some(path.into());
        self
    }

    /// Trim every text field; blank optionals become `None`.
    pub(crate) fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            note: self.note.trim().to_string(),
            genre: trimmed_opt(self.genre),
            poster: trimmed_opt(self.poster),
            video: trimmed_opt(self.video),
            watched: self.watched,
            extra: self.extra,
        }
    }

    /// Poster path for display. Falls back to the legacy `image` key
    /// without rewriting it.
    pub fn poster_path(&self) -> Option<&str> {
        self.poster.as_deref().or_else(|| {
            self.extra
                .get(LEGACY_IMAGE_KEY)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
    }

    pub fn uses_legacy_image_key(&self) -> bool {
        self.poster.is_none() && self.extra.contains_key(LEGACY_IMAGE_KEY)
    }

    pub fn genre_label(&self) -> &str {
        self.genre.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_minimal_variant_without_genre_or_video() {
        let raw = r#"{"title":"Heat","note":"","poster":"heat.jpg","watched":false}"#;
        let rec: MovieRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.title, "Heat");
        assert_eq!(rec.genre, None);
        assert_eq!(rec.video, None);
        assert_eq!(rec.poster.as_deref(), Some("heat.jpg"));
        assert!(rec.extra.is_empty());
    }

    #[test]
    fn blank_strings_load_as_none() {
        let raw = r#"{"title":"Heat","note":"x","genre":"","poster":" ","video":"","watched":true}"#;
        let rec: MovieRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.genre, None);
        assert_eq!(rec.poster, None);
        assert_eq!(rec.video, None);
        assert!(rec.watched);
    }

    #[test]
    fn missing_watched_defaults_false() {
        let rec: MovieRecord = serde_json::from_str(r#"{"title":"Alien"}"#).unwrap();
        assert!(!rec.watched);
        assert_eq!(rec.note, "");
    }

    #[test]
    fn null_note_loads_as_empty() {
        let raw = r#"{"title":"Heat","note":null,"genre":null,"watched":false}"#;
        let rec: MovieRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.note, "");
        assert_eq!(rec.genre, None);
        assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"title":"Heat","note":"","watched":false}"#);
    }

    #[test]
    fn legacy_image_key_is_preserved_and_used_for_display() {
        let raw = r#"{"title":"Up","note":"","image":"up.png","watched":false}"#;
        let rec: MovieRecord = serde_json::from_str(raw).unwrap();
        assert!(rec.uses_legacy_image_key());
        assert_eq!(rec.poster_path(), Some("up.png"));

        let out = serde_json::to_string(&rec).unwrap();
        assert!(out.contains(r#""image":"up.png""#));
        assert!(!out.contains("poster"));
    }

    #[test]
    fn trimmed_strips_fields() {
        let rec = MovieRecord::new("  Dune ")
            .with_note(" sand ")
            .with_genre("   ")
            .with_poster(" dune.jpg ")
            .trimmed();
        assert_eq!(rec.title, "Dune");
        assert_eq!(rec.note, "sand");
        assert_eq!(rec.genre, None);
        assert_eq!(rec.poster.as_deref(), Some("dune.jpg"));
    }
}
