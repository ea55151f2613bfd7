// src/app/mod.rs — watchlist window: page routing, preview polling, notices

use std::time::{Duration, Instant};

use egui::{self as eg, TextureHandle};
use tracing::{info, warn};

pub mod actions;
pub mod detail;
pub mod gfx;
pub mod prefs;
pub mod preview;
pub mod types;
pub mod ui;

use crate::auth::UserBook;
use crate::config::AppConfig;
use crate::error::Result;
use crate::store::WatchlistStore;
use prefs::UiPrefs;
use preview::{PreviewMsg, PreviewPlayer};
use types::{LoginForm, MovieForm, Notice, Page};

// ---- Tunables ----
const PREVIEW_REPAINT_MS: u64 = 15;

pub struct WatchlistApp {
    config: AppConfig,
    store: WatchlistStore,
    users: Option<UserBook>,

    // navigation
    page: Page,
    login: LoginForm,

    // watchlist page
    form: MovieForm,
    genre_input: String,
    active_genre: Option<String>,
    selected_idx: Option<usize>,
    notice: Option<Notice>,

    // media
    poster_tex: Option<(String, TextureHandle)>,
    poster_failed: Option<String>,
    player: PreviewPlayer,
    video_tex: Option<TextureHandle>,
    video_status: Option<String>,

    // prefs
    prefs: UiPrefs,
    prefs_dirty: bool,
    prefs_last_write: Instant,
}

impl WatchlistApp {
    /// Open the watchlist and user files named by `config`. A corrupt
    /// watchlist is moved aside and the app starts empty with a warning.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (store, quarantined) = WatchlistStore::open_or_quarantine(&config.movies_file)?;

        let users = match UserBook::load_or_seed(&config.users_file) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!("login disabled: {err}");
                None
            }
        };

        let prefs = UiPrefs::load(&config.prefs_file);
        let active_genre = Some(prefs.genre_filter.clone()).filter(|g| !g.trim().is_empty());

        let notice = quarantined.map(|dest| {
            Notice::warning(
                "Corrupt file",
                format!(
                    "{} could not be read and was moved to {}.\nStarting with an empty watchlist.",
                    config.movies_file.display(),
                    dest.display()
                ),
            )
        });

        let page = if config.require_login {
            Page::Home
        } else {
            Page::Watchlist
        };

        info!(
            "watchlist ready: {} movies, login {}",
            store.len(),
            if config.require_login { "required" } else { "skipped" }
        );

        Ok(Self {
            config,
            store,
            users,
            page,
            login: LoginForm::default(),
            form: MovieForm::default(),
            genre_input: prefs.genre_filter.clone(),
            active_genre,
            selected_idx: None,
            notice,
            poster_tex: None,
            poster_failed: None,
            player: PreviewPlayer::default(),
            video_tex: None,
            video_status: None,
            prefs,
            prefs_dirty: false,
            prefs_last_write: Instant::now(),
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn store(&self) -> &WatchlistStore {
        &self.store
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected_idx
    }

    pub(crate) fn show_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Turn finished preview frames into texture updates. (UI thread only)
    fn poll_preview(&mut self, ctx: &eg::Context) {
        for msg in self.player.poll() {
            match msg {
                PreviewMsg::Frame(f) => match self.video_tex.as_mut() {
                    Some(tex) => gfx::update_rgba(tex, f.width, f.height, &f.rgba),
                    None => {
                        self.video_tex =
                            Some(gfx::upload_rgba(ctx, f.width, f.height, &f.rgba, "video_preview"));
                    }
                },
                PreviewMsg::Finished { .. } => {}
                PreviewMsg::Failed { .. } => {
                    self.video_tex = None;
                    self.video_status = Some("Cannot play".into());
                }
            }
        }
        if self.player.is_playing() {
            ctx.request_repaint_after(Duration::from_millis(PREVIEW_REPAINT_MS));
        }
    }

    fn ui_render_notice(&mut self, ctx: &eg::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let color = match notice.kind {
            types::NoticeKind::Info => ctx.style().visuals.text_color(),
            types::NoticeKind::Warning => eg::Color32::from_rgb(230, 180, 60),
            types::NoticeKind::Error => eg::Color32::from_rgb(231, 76, 60),
        };
        let mut close = false;
        eg::Window::new(notice.title.as_str())
            .id(eg::Id::new("notice_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(eg::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(eg::RichText::new(&notice.body).color(color));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });
        if close || ctx.input(|i| i.key_pressed(eg::Key::Escape)) {
            self.notice = None;
        }
    }
}

// ========== App impl ==========
impl eframe::App for WatchlistApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        self.poll_preview(ctx);

        match self.page {
            Page::Home => self.ui_render_home(ctx),
            Page::Login => self.ui_render_login(ctx),
            Page::Watchlist => {
                self.ui_render_side_panel(ctx);
                self.ui_render_media_panel(ctx);
                eg::CentralPanel::default().show(ctx, |ui| {
                    self.ui_render_table(ui);
                });
            }
        }

        self.ui_render_notice(ctx);
        self.maybe_save_prefs();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.player.stop();
        if self.prefs_dirty {
            if let Err(err) = self.prefs.save(&self.config.prefs_file) {
                warn!("Failed to save {}: {err}", self.config.prefs_file.display());
            }
        }
    }
}
