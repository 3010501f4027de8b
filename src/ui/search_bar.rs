use eframe::egui::{Key, RichText, TextEdit, Ui};

use crate::app::DashboardApp;
use crate::config::API;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::AppInstant;

impl DashboardApp {
    pub(crate) fn render_search_card(&mut self, ui: &mut Ui, now: AppInstant) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.search_heading)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(RichText::new(UI_TEXT.search_hint_detail).color(UI_CONFIG.colors.subdued));
            });
            ui.add_space(6.0);

            // The text edit works on a copy so the controller stays the
            // single writer of the query (it uppercases on every change).
            let mut buffer = self.lookup.query.clone();
            let response = ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut buffer)
                        .hint_text(UI_TEXT.search_hint)
                        .desired_width(360.0),
                );
                if self.searches.any_loading() {
                    ui.spinner();
                }
                response
            });
            let response = response.inner;

            if response.changed() {
                self.lookup.on_query_change(&buffer, now);
            }
            if response.gained_focus() {
                self.lookup.on_focus();
            }
            if response.lost_focus() {
                if ui.input(|i| i.key_pressed(Key::Enter)) {
                    if let Some(symbol) = self.lookup.submit() {
                        self.select_symbol(symbol);
                    }
                } else {
                    self.lookup.on_blur(now);
                }
            }
            if ui.input(|i| i.key_pressed(Key::Escape)) {
                self.lookup.close_panel();
            }

            if self.lookup.show_suggestions {
                self.render_suggestions(ui);
            }
        });
    }

    fn render_suggestions(&mut self, ui: &mut Ui) {
        if self.lookup.suggestions.is_empty() {
            // Distinct "no matches" row once a real (non-loading) answer is in.
            let long_enough = self.lookup.query.chars().count() >= API.lookup.min_query_len;
            if long_enough && !self.searches.any_loading() {
                ui.label(RichText::new(UI_TEXT.search_no_matches).color(UI_CONFIG.colors.subdued));
            }
            return;
        }

        let mut picked = None;
        UI_CONFIG.tile_frame().show(ui, |ui| {
            ui.set_min_width(360.0);
            for symbol in &self.lookup.suggestions {
                let row = ui.selectable_label(
                    false,
                    RichText::new(symbol).color(UI_CONFIG.colors.label),
                );
                if row.clicked() {
                    picked = Some(symbol.clone());
                }
            }
        });

        if let Some(symbol) = picked {
            let symbol = self.lookup.select_suggestion(&symbol);
            self.select_symbol(symbol);
        }
    }
}
