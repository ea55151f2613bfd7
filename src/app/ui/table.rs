// src/app/ui/table.rs
use egui as eg;
use egui_extras::{Column, TableBuilder};

pub const ROW_H: f32 = 22.0;

struct RowView {
    idx: usize,
    title: String,
    note: String,
    genre: String,
    watched: bool,
}

impl crate::app::WatchlistApp {
    pub(crate) fn ui_render_table(&mut self, ui: &mut eg::Ui) {
        // snapshot rows so the table closures don't borrow self
        let rows: Vec<RowView> = self
            .visible_indices()
            .into_iter()
            .filter_map(|idx| {
                self.store.get(idx).map(|r| RowView {
                    idx,
                    title: r.title.clone(),
                    note: r.note.clone(),
                    genre: r.genre_label().to_string(),
                    watched: r.watched,
                })
            })
            .collect();

        ui.horizontal(|ui| {
            ui.heading("Watchlist");
            ui.label(
                eg::RichText::new(format!("{} of {} movies", rows.len(), self.store.len())).weak(),
            );
        });
        ui.separator();

        if rows.is_empty() {
            ui.label(if self.store.is_empty() {
                "No movies yet. Add one on the left."
            } else {
                "No movies match this genre."
            });
            return;
        }

        let selected = self.selected_idx;
        let mut clicked: Option<usize> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(eg::Layout::left_to_right(eg::Align::Center))
            .column(Column::initial(200.0).at_least(120.0))
            .column(Column::initial(180.0).at_least(80.0))
            .column(Column::initial(120.0).at_least(60.0))
            .column(Column::remainder().at_least(70.0))
            .header(ROW_H, |mut header| {
                for name in ["Title", "Note", "Genre", "Watched"] {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for row in &rows {
                    body.row(ROW_H, |mut tr| {
                        tr.col(|ui| {
                            if ui
                                .selectable_label(selected == Some(row.idx), &row.title)
                                .clicked()
                            {
                                clicked = Some(row.idx);
                            }
                        });
                        tr.col(|ui| {
                            ui.label(&row.note);
                        });
                        tr.col(|ui| {
                            ui.label(&row.genre);
                        });
                        tr.col(|ui| {
                            ui.label(if row.watched { "✅" } else { "❌" });
                        });
                    });
                }
            });

        if let Some(idx) = clicked {
            self.select(idx);
        }
    }
}
