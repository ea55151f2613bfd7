// src/app/detail.rs — poster + video preview strip under the list
use egui as eg;

use super::gfx;
use super::prefs::{MEDIA_H_MAX, MEDIA_H_MIN};

fn placeholder(ui: &mut eg::Ui, size: eg::Vec2, text: &str) {
    let (rect, _resp) = ui.allocate_exact_size(size, eg::Sense::hover());
    ui.painter().rect_filled(rect, 8.0, eg::Color32::from_gray(40));
    ui.painter().text(
        rect.center(),
        eg::Align2::CENTER_CENTER,
        text,
        eg::FontId::proportional(14.0),
        eg::Color32::WHITE,
    );
}

fn fit(size: [u32; 2], max: eg::Vec2) -> eg::Vec2 {
    let (w, h) = (size[0] as f32, size[1] as f32);
    let scale = (max.x / w).min(max.y / h).min(1.0).max(0.05);
    eg::vec2(w * scale, h * scale)
}

impl crate::app::WatchlistApp {
    /// Load (or reuse) the texture for the selected movie's poster.
    fn ensure_poster(&mut self, ctx: &eg::Context) {
        let path = self
            .selected_idx
            .and_then(|i| self.store.get(i))
            .and_then(|r| r.poster_path())
            .map(str::to_string);

        let Some(path) = path else {
            self.poster_tex = None;
            self.poster_failed = None;
            return;
        };
        if self.poster_tex.as_ref().is_some_and(|(p, _)| *p == path)
            || self.poster_failed.as_deref() == Some(path.as_str())
        {
            return;
        }
        match gfx::load_texture_from_path(ctx, &path, self.config.poster_size) {
            Ok(tex) => {
                self.poster_tex = Some((path, tex));
                self.poster_failed = None;
            }
            Err(err) => {
                tracing::debug!("poster unavailable: {err}");
                self.poster_tex = None;
                self.poster_failed = Some(path);
            }
        }
    }

    pub(crate) fn ui_render_media_panel(&mut self, ctx: &eg::Context) {
        self.ensure_poster(ctx);

        let panel = eg::TopBottomPanel::bottom("media_panel")
            .resizable(true)
            .default_height(self.prefs.media_panel_h)
            .height_range(MEDIA_H_MIN..=MEDIA_H_MAX)
            .show(ctx, |ui| {
                ui.columns(2, |cols| {
                    let poster_ui = &mut cols[0];
                    poster_ui.label(eg::RichText::new("Poster").strong());
                    let max = poster_ui.available_size() - eg::vec2(0.0, 8.0);
                    let size = fit(self.config.poster_size, max);
                    match &self.poster_tex {
                        Some((_, tex)) => {
                            poster_ui.image((tex.id(), size));
                        }
                        None if self.poster_failed.is_some() => {
                            placeholder(poster_ui, size, "Image not found")
                        }
                        None => placeholder(poster_ui, size, "Select a movie"),
                    }

                    let video_ui = &mut cols[1];
                    video_ui.label(eg::RichText::new("Video Preview").strong());
                    let max = video_ui.available_size() - eg::vec2(0.0, 8.0);
                    let size = fit(self.config.preview_size, max);
                    match (&self.video_tex, &self.video_status) {
                        (_, Some(status)) => placeholder(video_ui, size, status),
                        (Some(tex), None) => {
                            video_ui.image((tex.id(), size));
                        }
                        (None, None) => placeholder(video_ui, size, "No video playing"),
                    }
                });
            });

        let h = panel.response.rect.height();
        if (h - self.prefs.media_panel_h).abs() > 0.5 {
            self.prefs.media_panel_h = h.clamp(MEDIA_H_MIN, MEDIA_H_MAX);
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fit;
    use egui as eg;

    #[test]
    fn fit_keeps_aspect_and_never_upscales() {
        let s = fit([200, 300], eg::vec2(100.0, 1000.0));
        assert!((s.x - 100.0).abs() < 1e-3 && (s.y - 150.0).abs() < 1e-3);
        let s = fit([200, 300], eg::vec2(1000.0, 1000.0));
        assert_eq!(s, eg::vec2(200.0, 300.0));
    }
}
