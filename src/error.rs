//! Error types shared by the watchlist store and the GUI.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected input on `add`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Movie title is required.")]
    EmptyTitle,

    #[error("\"{0}\" is already on the watchlist.")]
    DuplicateTitle(String),
}

#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Stale or out-of-range selection.
    #[error("No movie at position {index} (watchlist has {len}).")]
    Index { index: usize, len: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON array of movie objects.
    #[error("{} is not a valid watchlist file: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WatchlistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Short heading for the notice window the UI shows.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Input",
            Self::Index { .. } => "Select",
            Self::Io { .. } => "File error",
            Self::Parse { .. } => "Corrupt file",
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchlistError>;
