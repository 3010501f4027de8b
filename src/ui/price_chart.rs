use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::app::DashboardApp;
use crate::models::{ChartRecord, ChartSeries, SupportResistance};
use crate::ui::utils::format_signed_percent;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::short_date;

impl DashboardApp {
    pub(crate) fn render_price_chart(&self, ui: &mut Ui) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(
                RichText::new(UI_TEXT.chart_heading)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(RichText::new(UI_TEXT.chart_subheading).color(UI_CONFIG.colors.subdued));
            ui.add_space(6.0);

            match &self.chart {
                ChartSeries::Empty => {
                    // Explicit no-data state, never an empty plot.
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(
                            RichText::new(UI_TEXT.chart_no_data).color(UI_CONFIG.colors.subdued),
                        );
                        ui.add_space(40.0);
                    });
                }
                ChartSeries::Ready {
                    records,
                    support_resistance,
                } => {
                    draw_chart(ui, records, *support_resistance);
                }
            }
        });
    }
}

fn draw_chart(ui: &mut Ui, records: &[ChartRecord], support_resistance: Option<SupportResistance>) {
    let closes: Vec<[f64; 2]> = records
        .iter()
        .enumerate()
        .map(|(i, r)| [i as f64, r.close])
        .collect();

    // Y span including the reference levels, so overlays are never clipped.
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for r in records {
        y_min = y_min.min(r.close);
        y_max = y_max.max(r.close);
    }
    if let Some(sr) = support_resistance {
        y_min = y_min.min(sr.support);
        y_max = y_max.max(sr.resistance);
    }
    let span = (y_max - y_min).max(1e-9);

    // Volume bars live in the bottom fifth of the price range.
    let base = y_min - span * 0.05;
    let max_volume = records.iter().map(|r| r.volume).max().unwrap_or(1).max(1) as f64;
    let bars: Vec<Bar> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.volume as f64 / max_volume * span * 0.2).base_offset(base)
        })
        .collect();

    let axis_dates: Vec<String> = records.iter().map(|r| short_date(r.date)).collect();
    let readouts: Vec<String> = records.iter().map(point_readout).collect();

    Plot::new("price_history")
        .height(320.0)
        .legend(Legend::default())
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 0.25 {
                return String::new();
            }
            axis_dates.get(idx as usize).cloned().unwrap_or_default()
        })
        .label_formatter(move |_name, value| {
            let idx = value.x.round();
            if idx < 0.0 {
                return String::new();
            }
            readouts.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(UI_TEXT.label_volume, bars).color(UI_CONFIG.colors.subdued),
            );
            plot_ui.line(
                Line::new(UI_TEXT.label_close_price, PlotPoints::new(closes))
                    .color(UI_CONFIG.colors.accent)
                    .width(2.0),
            );

            if let Some(sr) = support_resistance {
                plot_ui.hline(
                    HLine::new(UI_TEXT.label_support, sr.support)
                        .color(UI_CONFIG.colors.profit)
                        .style(LineStyle::Dashed { length: 8.0 })
                        .width(1.5),
                );
                plot_ui.hline(
                    HLine::new(UI_TEXT.label_resistance, sr.resistance)
                        .color(UI_CONFIG.colors.loss)
                        .style(LineStyle::Dashed { length: 8.0 })
                        .width(1.5),
                );
            }
        });
}

fn point_readout(record: &ChartRecord) -> String {
    let change = match record.price_change_percent {
        Some(percent) => format_signed_percent(percent),
        None => UI_TEXT.label_na.to_string(),
    };
    format!(
        "{}\nO {:.2}  H {:.2}  L {:.2}  C {:.2}\n{} {}\n{}",
        short_date(record.date),
        record.open,
        record.high,
        record.low,
        record.close,
        UI_TEXT.label_volume,
        record.volume,
        change,
    )
}
