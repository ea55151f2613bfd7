// src/app/ui/mod.rs
pub mod form;
pub mod table;

use egui as eg;

use super::types::Page;

const ACCENT: eg::Color32 = eg::Color32::from_rgb(229, 9, 20);

impl crate::app::WatchlistApp {
    pub(crate) fn ui_render_home(&mut self, ctx: &eg::Context) {
        eg::CentralPanel::default()
            .frame(eg::Frame::default().fill(eg::Color32::BLACK))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label(
                        eg::RichText::new("Movies Watchlist")
                            .size(40.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        eg::RichText::new("Your Personalized Movie Watchlist App")
                            .size(18.0)
                            .color(eg::Color32::WHITE),
                    );
                    ui.add_space(40.0);
                    let btn = eg::Button::new(
                        eg::RichText::new("Login to Continue ▶")
                            .size(16.0)
                            .color(eg::Color32::WHITE),
                    )
                    .fill(ACCENT)
                    .min_size(eg::vec2(220.0, 44.0));
                    if ui.add(btn).clicked() {
                        self.show_page(Page::Login);
                    }
                });
            });
    }

    pub(crate) fn ui_render_login(&mut self, ctx: &eg::Context) {
        eg::CentralPanel::default()
            .frame(eg::Frame::default().fill(eg::Color32::from_gray(34)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(
                        eg::RichText::new("🔐 Login")
                            .size(28.0)
                            .strong()
                            .color(eg::Color32::WHITE),
                    );
                    ui.add_space(30.0);

                    ui.label("Username");
                    ui.add(eg::TextEdit::singleline(&mut self.login.user).desired_width(240.0));
                    ui.add_space(10.0);
                    ui.label("Password");
                    let pw = ui.add(
                        eg::TextEdit::singleline(&mut self.login.password)
                            .password(true)
                            .desired_width(240.0),
                    );
                    let submit = pw.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter));

                    ui.add_space(20.0);
                    if self.users.is_none() {
                        ui.label(
                            eg::RichText::new(format!(
                                "{} could not be read; login is unavailable.",
                                self.config.users_file.display()
                            ))
                            .weak(),
                        );
                    }
                    let login = ui.add(
                        eg::Button::new(eg::RichText::new("Login").color(eg::Color32::WHITE))
                            .fill(ACCENT),
                    );
                    if login.clicked() || submit {
                        self.try_login();
                    }
                    ui.add_space(6.0);
                    if ui.small_button("Back to Home").clicked() {
                        self.show_page(Page::Home);
                    }
                });
            });
    }
}
