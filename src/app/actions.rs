// src/app/actions.rs — button handlers; every store failure becomes a notice
use std::path::Path;

use tracing::info;

use super::types::{Notice, Page};
use super::WatchlistApp;
use crate::error::WatchlistError;
use crate::recommend::recommendation_text;

impl WatchlistApp {
    fn report(&mut self, err: &WatchlistError) {
        self.notice = Some(Notice::from(err));
    }

    /// Store index of the current selection, or a notice asking for one.
    fn require_selection(&mut self, what: &str) -> Option<usize> {
        if self.selected_idx.is_none() {
            self.notice = Some(Notice::warning("Select", format!("Select movie to {what}.")));
        }
        self.selected_idx
    }

    /// Indices into the store for the rows currently on screen.
    pub fn visible_indices(&self) -> Vec<usize> {
        match &self.active_genre {
            Some(g) => self.store.filter_indices_by_genre(g),
            None => (0..self.store.len()).collect(),
        }
    }

    pub fn active_genre(&self) -> Option<&str> {
        self.active_genre.as_deref()
    }

    pub fn select(&mut self, idx: usize) {
        if idx < self.store.len() {
            self.selected_idx = Some(idx);
        }
    }

    pub fn try_login(&mut self) {
        let ok = self
            .users
            .as_ref()
            .is_some_and(|book| book.verify(&self.login.user, &self.login.password));
        if ok {
            info!("user {} logged in", self.login.user.trim());
            self.login.password.clear();
            self.show_page(Page::Watchlist);
        } else {
            self.notice = Some(Notice::error(
                "Login Failed",
                "Invalid username or password.",
            ));
        }
    }

    pub fn add_movie(&mut self) {
        match self.store.add(self.form.to_record()) {
            Ok(_) => self.form.clear(),
            Err(e) => self.report(&e),
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(idx) = self.require_selection("delete") else {
            return;
        };
        match self.store.delete_at(idx) {
            Ok(_) => {
                // every index after `idx` just shifted
                self.selected_idx = None;
                self.poster_tex = None;
                self.poster_failed = None;
            }
            Err(e) => {
                self.selected_idx = None;
                self.report(&e);
            }
        }
    }

    pub fn mark_selected_watched(&mut self) {
        let Some(idx) = self.require_selection("mark as watched") else {
            return;
        };
        if let Err(e) = self.store.mark_watched_at(idx) {
            self.selected_idx = None;
            self.report(&e);
        }
    }

    pub fn show_recommendations(&mut self) {
        let Some(idx) = self.require_selection("see recommendations for") else {
            return;
        };
        let Some(rec) = self.store.get(idx) else {
            self.selected_idx = None;
            return;
        };
        self.notice = Some(Notice::info(
            format!("Recommendations for {}", rec.title),
            recommendation_text(&rec.title),
        ));
    }

    pub fn play_selected_video(&mut self) {
        let Some(idx) = self.require_selection("play") else {
            return;
        };
        let video = self.store.get(idx).and_then(|r| r.video.clone());
        let Some(path) = video else {
            self.notice = Some(Notice::error("Video", "Invalid video path"));
            return;
        };
        self.video_tex = None;
        self.video_status = None;
        match self.player.play(Path::new(&path), self.config.preview_size) {
            Ok(_) => {}
            Err(WatchlistError::Io { .. }) => {
                self.notice = Some(Notice::error("Video", "Invalid video path"));
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn stop_video(&mut self) {
        self.player.stop();
    }

    pub fn apply_genre_filter(&mut self) {
        let g = self.genre_input.trim();
        if g.is_empty() {
            return;
        }
        self.active_genre = Some(g.to_string());
        self.prefs.genre_filter = g.to_string();
        self.mark_dirty();

        // a selection the filter hides must not stay actionable
        if let Some(idx) = self.selected_idx {
            if !self.visible_indices().contains(&idx) {
                self.selected_idx = None;
                self.poster_tex = None;
                self.poster_failed = None;
            }
        }
    }

    pub fn reset_filter(&mut self) {
        self.active_genre = None;
        self.genre_input.clear();
        self.prefs.genre_filter.clear();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::NoticeKind;
    use crate::config::AppConfig;
    use crate::store::{load, MovieRecord};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir, require_login: bool) -> WatchlistApp {
        let config = AppConfig {
            movies_file: dir.path().join("movies.json"),
            users_file: dir.path().join("users.json"),
            prefs_file: dir.path().join("ui_prefs.txt"),
            require_login,
            ..AppConfig::default()
        };
        WatchlistApp::new(config).unwrap()
    }

    fn add(app: &mut WatchlistApp, title: &str, genre: &str) {
        app.form.title = title.into();
        app.form.genre = genre.into();
        app.add_movie();
        assert!(app.notice.is_none(), "{:?}", app.notice);
    }

    #[test]
    fn login_gate() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, true);
        assert_eq!(app.page(), Page::Home);

        app.login.user = "admin".into();
        app.login.password = "nope".into();
        app.try_login();
        assert_eq!(app.page(), Page::Home);
        assert_eq!(app.notice().unwrap().title, "Login Failed");

        app.notice = None;
        app.login.password = "admin123".into();
        app.try_login();
        assert_eq!(app.page(), Page::Watchlist);
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn add_clears_form_and_rejects_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        app.form.title = "Dune".into();
        app.form.note = "book first".into();
        app.add_movie();
        assert_eq!(app.form.title, "");
        assert_eq!(app.store().len(), 1);

        app.form.note = "no title".into();
        app.add_movie();
        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.body, "Movie title is required.");
        assert_eq!(app.form.note, "no title");
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn actions_without_selection_ask_for_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Heat", "");
        app.delete_selected();
        assert_eq!(app.notice().unwrap().body, "Select movie to delete.");
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn delete_in_filtered_view_hits_the_right_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Up", "Animation");
        add(&mut app, "Heat", "Action");
        add(&mut app, "Coco", "Animation");
        add(&mut app, "Rambo", "action");

        app.genre_input = "ACTION".into();
        app.apply_genre_filter();
        let visible = app.visible_indices();
        assert_eq!(visible, vec![1, 3]);

        // second visible row is "Rambo", store index 3
        app.select(visible[1]);
        app.delete_selected();
        assert!(app.notice.is_none());
        assert_eq!(app.selected(), None);

        let titles: Vec<_> = load(&dir.path().join("movies.json"))
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Up", "Heat", "Coco"]);
        assert_eq!(app.visible_indices(), vec![1]);

        app.reset_filter();
        assert_eq!(app.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn filtering_out_the_selection_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Up", "Animation");
        add(&mut app, "Heat", "Action");
        app.select(0);
        app.poster_failed = Some("up.png".into());

        app.genre_input = "Action".into();
        app.apply_genre_filter();
        assert_eq!(app.visible_indices(), vec![1]);
        assert_eq!(app.selected(), None);
        assert_eq!(app.poster_failed, None);

        app.delete_selected();
        assert_eq!(app.notice().unwrap().body, "Select movie to delete.");
        let titles: Vec<_> = load(&dir.path().join("movies.json"))
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Up", "Heat"]);
    }

    #[test]
    fn filtering_keeps_a_visible_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Up", "Animation");
        add(&mut app, "Heat", "Action");
        app.select(1);
        app.genre_input = "action".into();
        app.apply_genre_filter();
        assert_eq!(app.selected(), Some(1));
    }

    #[test]
    fn mark_watched_and_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Inception", "Sci-Fi");
        app.select(0);
        app.mark_selected_watched();
        assert!(app.store().get(0).unwrap().watched);

        app.show_recommendations();
        let notice = app.notice().unwrap();
        assert_eq!(notice.title, "Recommendations for Inception");
        assert!(notice.body.contains("Tenet"));
    }

    #[test]
    fn play_without_video_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, false);
        add(&mut app, "Heat", "");
        app.select(0);
        app.play_selected_video();
        assert_eq!(app.notice().unwrap().body, "Invalid video path");
    }

    #[test]
    fn corrupt_watchlist_starts_empty_with_notice() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("movies.json"), "{{{").unwrap();
        let mut app = app_in(&dir, false);
        assert!(app.store().is_empty());
        assert_eq!(app.notice().unwrap().title, "Corrupt file");

        app.notice = None;
        add(&mut app, "Heat", "");
        assert_eq!(
            load(&dir.path().join("movies.json")).unwrap(),
            vec![MovieRecord::new("Heat")]
        );
    }

    #[test]
    fn genre_filter_is_restored_from_prefs() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app_in(&dir, false);
            add(&mut app, "Heat", "Action");
            app.genre_input = "Action".into();
            app.apply_genre_filter();
            app.prefs_last_write -= std::time::Duration::from_secs(1);
            app.maybe_save_prefs();
        }
        let app = app_in(&dir, false);
        assert_eq!(app.active_genre(), Some("Action"));
    }
}
