// src/app/types.rs
use crate::store::MovieRecord;

// ---- pages ----
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Watchlist,
}

// ---- modal notices (the app's message boxes) ----
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&crate::error::WatchlistError> for Notice {
    fn from(e: &crate::error::WatchlistError) -> Self {
        use crate::error::WatchlistError as E;
        let kind = match e {
            E::Validation(_) | E::Index { .. } => NoticeKind::Warning,
            E::Io { .. } | E::Parse { .. } => NoticeKind::Error,
        };
        Self {
            kind,
            title: e.heading().to_string(),
            body: e.to_string(),
        }
    }
}

// ---- add-movie form ----
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub note: String,
    pub genre: String,
    pub poster: String,
    pub video: String,
}

impl MovieForm {
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            title: self.title.clone(),
            note: self.note.clone(),
            genre: Some(self.genre.clone()),
            poster: Some(self.poster.clone()),
            video: Some(self.video.clone()),
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---- login form ----
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub user: String,
    pub password: String,
}
