//! Watchlist store: an ordered list of movies mirrored to one JSON file.
//!
//! Every mutating call rewrites the whole file before returning. If the write
//! fails the in-memory change is undone, so memory and disk never diverge.
//! Records are addressed by position; an index is only valid until the next
//! mutation.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{Result, ValidationError, WatchlistError};

pub mod filters;
pub mod record;

pub use filters::{collect_genres, filtered_indices, normalize_title};
pub use record::MovieRecord;

/// Read the backing file. A missing file is an empty watchlist; nothing is
/// created until the first save.
pub fn load(path: &Path) -> Result<Vec<MovieRecord>> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no watchlist at {}; starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(WatchlistError::io(path, e)),
    };
    let records: Vec<MovieRecord> =
        serde_json::from_slice(&raw).map_err(|e| WatchlistError::parse(path, e))?;

    let legacy = records.iter().filter(|r| r.uses_legacy_image_key()).count();
    if legacy > 0 {
        warn!(
            "{legacy} record(s) in {} use the old `image` key instead of `poster`; kept as-is",
            path.display()
        );
    }
    debug!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Serialize the full sequence and replace the backing file.
/// Writes `<file>.tmp` then renames it over the target.
pub fn save(path: &Path, records: &[MovieRecord]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records).map_err(|e| WatchlistError::parse(path, e))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| WatchlistError::io(dir, e))?;
    }

    let tmp = tmp_path(path);
    if let Err(e) = fs::write(&tmp, &json) {
        let _ = fs::remove_file(&tmp);
        return Err(WatchlistError::io(path, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(WatchlistError::io(path, e));
    }
    debug!("saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}

fn quarantine_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("movies");
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    path.with_file_name(format!("{stem}.corrupt-{stamp}.json"))
}

#[derive(Debug)]
pub struct WatchlistStore {
    path: PathBuf,
    records: Vec<MovieRecord>,
}

impl WatchlistStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load(&path)?;
        info!("watchlist {} opened ({} movies)", path.display(), records.len());
        Ok(Self { path, records })
    }

    /// Like [`open`](Self::open), but a corrupt file is renamed aside and the
    /// store starts empty and unsaved. Returns where the bad file went.
    pub fn open_or_quarantine(path: impl Into<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => Ok((store, None)),
            Err(WatchlistError::Parse { source, .. }) => {
                let dest = quarantine_path(&path);
                fs::rename(&path, &dest).map_err(|e| WatchlistError::io(&path, e))?;
                warn!(
                    "watchlist {} is corrupt ({source}); moved to {} and starting empty",
                    path.display(),
                    dest.display()
                );
                Ok((
                    Self {
                        path,
                        records: Vec::new(),
                    },
                    Some(dest),
                ))
            }
            Err(e) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<()> {
        save(&self.path, &self.records)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(WatchlistError::Index {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Append a new unwatched movie and persist. Returns its index.
    pub fn add(&mut self, record: MovieRecord) -> Result<usize> {
        let record = MovieRecord {
            watched: false,
            ..record.trimmed()
        };
        if record.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let key = normalize_title(&record.title);
        if self.records.iter().any(|r| normalize_title(&r.title) == key) {
            return Err(ValidationError::DuplicateTitle(record.title).into());
        }

        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        let index = self.records.len() - 1;
        info!("added \"{}\" at {index}", self.records[index].title);
        Ok(index)
    }

    /// Remove the movie at `index` and persist. Later indices shift down.
    pub fn delete_at(&mut self, index: usize) -> Result<MovieRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }
        info!("deleted \"{}\" from {index}", removed.title);
        Ok(removed)
    }

    pub fn mark_watched_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let was = self.records[index].watched;
        self.records[index].watched = true;
        if let Err(e) = self.persist() {
            self.records[index].watched = was;
            return Err(e);
        }
        info!("marked \"{}\" watched", self.records[index].title);
        Ok(())
    }

    pub fn filter_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        self.filter_indices_by_genre(genre)
            .into_iter()
            .map(|i| self.records[i].clone())
            .collect()
    }

    /// Store indices of the movies [`filter_by_genre`](Self::filter_by_genre)
    /// would return, so a filtered view can still address the store.
    pub fn filter_indices_by_genre(&self, genre: &str) -> Vec<usize> {
        filtered_indices(&self.records, Some(genre))
    }

    pub fn list_genres(&self) -> BTreeSet<String> {
        collect_genres(&self.records)
    }
}
