// src/app/ui/form.rs — left panel: add form, genre filter, actions
use egui as eg;

fn form_row(ui: &mut eg::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(eg::TextEdit::singleline(value).desired_width(200.0));
    ui.end_row();
}

fn action_button(ui: &mut eg::Ui, text: &str, color: eg::Color32) -> bool {
    ui.add_sized(
        [ui.available_width(), 28.0],
        eg::Button::new(eg::RichText::new(text).strong().color(eg::Color32::WHITE)).fill(color),
    )
    .clicked()
}

impl crate::app::WatchlistApp {
    pub(crate) fn ui_render_side_panel(&mut self, ctx: &eg::Context) {
        eg::SidePanel::left("form_panel")
            .exact_width(350.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("🎬 Add New Movie");
                ui.add_space(4.0);

                eg::Grid::new("add_form")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        form_row(ui, "Title:", &mut self.form.title);
                        form_row(ui, "Note:", &mut self.form.note);
                        form_row(ui, "Genre:", &mut self.form.genre);
                        form_row(ui, "Poster Path:", &mut self.form.poster);
                        form_row(ui, "Video Path:", &mut self.form.video);
                    });
                ui.add_space(6.0);
                if action_button(ui, "➕ Add Movie", eg::Color32::from_rgb(46, 204, 113)) {
                    self.add_movie();
                }

                ui.add_space(10.0);
                ui.separator();
                self.ui_render_genre_filter(ui);

                ui.add_space(10.0);
                ui.separator();
                ui.label(eg::RichText::new("Actions").strong());
                ui.add_space(4.0);
                if action_button(ui, "✅ Mark as Watched", eg::Color32::from_rgb(26, 188, 156)) {
                    self.mark_selected_watched();
                }
                if action_button(ui, "🗑 Delete Movie", eg::Color32::from_rgb(231, 76, 60)) {
                    self.delete_selected();
                }
                if action_button(ui, "🎁 Show Recommendations", eg::Color32::from_rgb(155, 89, 182)) {
                    self.show_recommendations();
                }
                if action_button(ui, "▶ Play Video", eg::Color32::from_rgb(41, 128, 185)) {
                    self.play_selected_video();
                }
                if action_button(ui, "⏹ Stop Video", eg::Color32::from_rgb(149, 165, 166)) {
                    self.stop_video();
                }
            });
    }

    fn ui_render_genre_filter(&mut self, ui: &mut eg::Ui) {
        ui.label(eg::RichText::new("🔍 Filter by Genre").strong());
        let genres = self.store.list_genres();

        ui.horizontal(|ui| {
            ui.add(
                eg::TextEdit::singleline(&mut self.genre_input)
                    .hint_text("Genre…")
                    .desired_width(150.0),
            );
            eg::ComboBox::from_id_source("genre_filter_combo")
                .selected_text("Pick")
                .width(80.0)
                .show_ui(ui, |ui| {
                    for g in &genres {
                        if ui.selectable_label(self.genre_input == *g, g).clicked() {
                            self.genre_input = g.clone();
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            if ui.button("Filter").clicked() {
                self.apply_genre_filter();
            }
            if ui.button("Reset").clicked() {
                self.reset_filter();
            }
            if let Some(g) = self.active_genre() {
                ui.label(eg::RichText::new(format!("showing: {g}")).weak());
            }
        });
    }
}
