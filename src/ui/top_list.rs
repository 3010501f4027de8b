use eframe::egui::{Align, Button, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::app::DashboardApp;
use crate::models::TopStocksReport;
use crate::ui::utils::{
    direction_color, direction_icon, direction_label, expected_return_color, format_probability,
    risk_color, risk_label,
};
use crate::ui::{UI_CONFIG, UI_TEXT};

impl DashboardApp {
    pub(crate) fn render_top_list(&mut self, ui: &mut Ui) {
        let mut refresh_clicked = false;

        UI_CONFIG.card_frame().show(ui, |ui| {
            let loading = self.top_picks.state(&()).is_loading();

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.top_heading)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label(RichText::new(UI_TEXT.top_subheading).color(UI_CONFIG.colors.subdued));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let button = ui.add_enabled(!loading, Button::new(UI_TEXT.top_refresh));
                    if button.clicked() {
                        refresh_clicked = true;
                    }
                    if loading {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(8.0);

            if let Some(message) = self.top_picks.state(&()).error() {
                UI_CONFIG.banner_frame(UI_CONFIG.colors.loss).show(ui, |ui| {
                    ui.label(RichText::new(message).color(UI_CONFIG.colors.loss));
                });
                ui.add_space(8.0);
            }

            match &self.top_report {
                Some(report) => render_report(ui, report),
                // Full-card spinner only on the very first load.
                None if loading => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(30.0);
                        ui.spinner();
                        ui.label(
                            RichText::new(UI_TEXT.top_generating).color(UI_CONFIG.colors.subdued),
                        );
                        ui.add_space(30.0);
                    });
                }
                None => {}
            }
        });

        if refresh_clicked {
            self.refresh_top_picks();
        }
    }
}

fn render_report(ui: &mut Ui, report: &TopStocksReport) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(30.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in [
                UI_TEXT.col_rank,
                UI_TEXT.col_symbol,
                UI_TEXT.col_name,
                UI_TEXT.col_direction,
                UI_TEXT.col_probability,
                UI_TEXT.col_return,
                UI_TEXT.col_risk,
                UI_TEXT.col_reasoning,
            ] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong().color(UI_CONFIG.colors.subdued));
                });
            }
        })
        .body(|mut body| {
            for (rank, stock) in report.stocks.iter().enumerate() {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("#{}", rank + 1))
                                .color(UI_CONFIG.colors.subdued),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(&stock.symbol)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(stock.name.as_deref().unwrap_or(&stock.symbol))
                                .color(UI_CONFIG.colors.label),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                direction_icon(stock.direction),
                                direction_label(stock.direction)
                            ))
                            .color(direction_color(stock.direction)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format_probability(stock.probability))
                                .color(UI_CONFIG.colors.label),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(&stock.expected_return)
                                .color(expected_return_color(&stock.expected_return)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(risk_label(stock.risk_level))
                                .color(risk_color(stock.risk_level)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&stock.reasoning).color(UI_CONFIG.colors.label));
                    });
                });
            }
        });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!(
                "{}: {}",
                UI_TEXT.top_generated_at, report.generated_at
            ))
            .color(UI_CONFIG.colors.subdued),
        );
    });

    ui.add_space(8.0);
    UI_CONFIG
        .banner_frame(UI_CONFIG.colors.warning)
        .show(ui, |ui| {
            ui.label(RichText::new(&report.disclaimer).color(UI_CONFIG.colors.label));
        });
}
