use eframe::egui::{Align, Context, Grid, Layout, RichText, TopBottomPanel, Ui};

use crate::app::DashboardApp;
use crate::models::StockData;
use crate::ui::utils::{format_currency, format_market_cap};
use crate::ui::{UI_CONFIG, UI_TEXT};

impl DashboardApp {
    pub(crate) fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label(RichText::new(UI_TEXT.app_tagline).color(UI_CONFIG.colors.subdued));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.selected_symbol)
                                .strong()
                                .color(UI_CONFIG.colors.accent),
                        );
                        if self.stocks.any_loading() {
                            ui.spinner();
                        }
                    });
                });
            });
    }

    /// Overview, chart, error and loading states for the primary stock fetch.
    /// The last-settled payload stays visible while a refresh is in flight.
    pub(crate) fn render_stock_section(&mut self, ui: &mut Ui) {
        if let Some(stock) = &self.shown_stock {
            render_stock_overview(ui, stock);
            ui.add_space(12.0);
            self.render_price_chart(ui);
        }

        let state = self.stocks.state(&self.selected_symbol);

        if let Some(message) = state.error() {
            ui.add_space(8.0);
            UI_CONFIG.banner_frame(UI_CONFIG.colors.loss).show(ui, |ui| {
                ui.label(
                    RichText::new(UI_TEXT.fetch_failed_heading)
                        .strong()
                        .color(UI_CONFIG.colors.loss),
                );
                ui.label(RichText::new(message).color(UI_CONFIG.colors.label));
            });
        }

        if state.is_loading() {
            ui.add_space(8.0);
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(UI_TEXT.loading_stock).color(UI_CONFIG.colors.subdued));
                });
            });
        }
    }

    pub(crate) fn render_footer(&mut self, ui: &mut Ui) {
        UI_CONFIG
            .banner_frame(UI_CONFIG.colors.warning)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(UI_TEXT.footer_heading)
                        .strong()
                        .color(UI_CONFIG.colors.warning),
                );
                ui.label(RichText::new(UI_TEXT.footer_body).color(UI_CONFIG.colors.label));
            });
    }
}

fn render_stock_overview(ui: &mut Ui, stock: &StockData) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        let info = &stock.info;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(
                    RichText::new(format!("{} ({})", info.name, stock.symbol))
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(
                    RichText::new(format!("{} • {}", info.sector, info.industry))
                        .color(UI_CONFIG.colors.subdued),
                );
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_currency(info.current_price, &info.currency))
                                .size(22.0)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}: {}",
                                UI_TEXT.label_market_cap,
                                format_market_cap(info.market_cap, &info.currency)
                            ))
                            .color(UI_CONFIG.colors.subdued),
                        );
                    });
                });
            });
        });

        ui.add_space(8.0);
        render_indicator_tiles(ui, stock);

        // Support/resistance tiles only when the backend provided levels.
        if let Some(sr) = stock.support_resistance {
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                metric_tile(
                    &mut cols[0],
                    UI_TEXT.label_support,
                    format_currency(sr.support, &stock.info.currency),
                    UI_CONFIG.colors.profit,
                );
                metric_tile(
                    &mut cols[1],
                    UI_TEXT.label_resistance,
                    format_currency(sr.resistance, &stock.info.currency),
                    UI_CONFIG.colors.loss,
                );
            });
        }
    });
}

fn render_indicator_tiles(ui: &mut Ui, stock: &StockData) {
    let rsi = stock
        .indicators
        .rsi
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| UI_TEXT.label_na.to_string());
    let macd = stock
        .indicators
        .macd
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| UI_TEXT.label_na.to_string());
    let signal = stock
        .signal_strength
        .strength
        .clone()
        .unwrap_or_else(|| UI_TEXT.label_neutral.to_string());
    let score = stock
        .signal_strength
        .score
        .map(|v| format!("{:.0}", v))
        .unwrap_or_else(|| "0".to_string());

    Grid::new("indicator_tiles")
        .num_columns(4)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in [
                (UI_TEXT.label_rsi, rsi),
                (UI_TEXT.label_macd, macd),
                (UI_TEXT.label_signal, signal),
                (UI_TEXT.label_score, score),
            ] {
                metric_tile(ui, label, value, UI_CONFIG.colors.heading);
            }
            ui.end_row();
        });
}

fn metric_tile(ui: &mut Ui, label: &str, value: String, value_color: eframe::egui::Color32) {
    UI_CONFIG.tile_frame().show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).color(UI_CONFIG.colors.subdued));
            ui.label(RichText::new(value).strong().color(value_color));
        });
    });
}
