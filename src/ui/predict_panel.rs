use eframe::egui::{Align, Button, Layout, RichText, Ui};
use strum::IntoEnumIterator;

use crate::app::DashboardApp;
use crate::data::AsyncState;
use crate::models::{PredictionResult, Timeframe};
use crate::ui::utils::{
    confidence_color, confidence_label, direction_color, direction_icon, direction_label,
    format_currency, format_probability,
};
use crate::ui::{UI_CONFIG, UI_TEXT};

impl DashboardApp {
    pub(crate) fn render_predict_panel(&mut self, ui: &mut Ui) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.predict_heading)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(RichText::new(UI_TEXT.predict_subheading).color(UI_CONFIG.colors.subdued));
            });
            ui.add_space(8.0);

            // Each horizon card runs independently; clicks are collected and
            // applied after the borrow of the tracker states ends.
            let mut clicked = None;
            ui.columns(3, |cols| {
                for (col, timeframe) in cols.iter_mut().zip(Timeframe::iter()) {
                    if prediction_card(col, timeframe, self.predictions.state(&timeframe)) {
                        clicked = Some(timeframe);
                    }
                }
            });
            if let Some(timeframe) = clicked {
                self.run_prediction(timeframe);
            }

            ui.add_space(8.0);
            ui.label(RichText::new(UI_TEXT.predict_disclaimer).color(UI_CONFIG.colors.subdued));
        });
    }
}

/// Renders one horizon card; returns true when its Predict button was clicked.
fn prediction_card(
    ui: &mut Ui,
    timeframe: Timeframe,
    state: &AsyncState<PredictionResult>,
) -> bool {
    let mut clicked = false;

    UI_CONFIG.tile_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(timeframe.label())
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let button =
                    ui.add_enabled(!state.is_loading(), Button::new(UI_TEXT.predict_button));
                if button.clicked() {
                    clicked = true;
                }
            });
        });
        ui.add_space(4.0);

        match state {
            AsyncState::Idle => {
                ui.label(RichText::new(UI_TEXT.predict_idle_hint).color(UI_CONFIG.colors.subdued));
            }
            AsyncState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(UI_TEXT.predict_running).color(UI_CONFIG.colors.subdued));
                });
            }
            AsyncState::Ready(prediction) => render_prediction(ui, prediction),
            AsyncState::Failed(message) => {
                UI_CONFIG.banner_frame(UI_CONFIG.colors.loss).show(ui, |ui| {
                    ui.label(RichText::new(message).color(UI_CONFIG.colors.loss));
                });
            }
        }
    });

    clicked
}

fn render_prediction(ui: &mut Ui, prediction: &PredictionResult) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "{} {}",
                direction_icon(prediction.direction),
                direction_label(prediction.direction)
            ))
            .strong()
            .color(direction_color(prediction.direction)),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(format_probability(prediction.probability))
                    .strong()
                    .color(direction_color(prediction.direction)),
            );
        });
    });

    ui.add_space(4.0);
    ui.label(RichText::new(UI_TEXT.label_price_range).color(UI_CONFIG.colors.subdued));
    ui.label(
        RichText::new(format!(
            "{} {}  —  {} {}",
            UI_TEXT.label_range_low,
            format_currency(prediction.price_range.min, "USD"),
            UI_TEXT.label_range_high,
            format_currency(prediction.price_range.max, "USD"),
        ))
        .color(UI_CONFIG.colors.label),
    );

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(UI_TEXT.label_confidence).color(UI_CONFIG.colors.subdued));
        ui.label(
            RichText::new(confidence_label(prediction.confidence))
                .strong()
                .color(confidence_color(prediction.confidence)),
        );
    });

    ui.add_space(4.0);
    ui.label(RichText::new(UI_TEXT.label_reasoning).color(UI_CONFIG.colors.subdued));
    ui.label(RichText::new(&prediction.reasoning).color(UI_CONFIG.colors.label));

    ui.add_space(4.0);
    ui.label(RichText::new(&prediction.risk_warning).color(UI_CONFIG.colors.warning));
}
