use eframe::egui::{Color32, Context, Visuals};

use crate::models::{Confidence, Direction, RiskLevel};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.panel;
    visuals.panel_fill = UI_CONFIG.colors.panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

pub fn format_currency(value: f64, currency: &str) -> String {
    if currency == "USD" {
        format!("${}", group_thousands(value))
    } else {
        format!("{} {}", group_thousands(value), currency)
    }
}

/// Abbreviated large amounts for the market-cap readout, e.g. "$2.90T".
pub fn format_market_cap(value: f64, currency: &str) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else {
        return format_currency(value, currency);
    };

    if currency == "USD" {
        format!("${:.2}{}", scaled, suffix)
    } else {
        format!("{:.2}{} {}", scaled, suffix, currency)
    }
}

/// Probability in [0, 1] shown as a whole percent.
pub fn format_probability(probability: f64) -> String {
    format!("{:.0}%", probability * 100.0)
}

pub fn format_signed_percent(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

pub fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => UI_TEXT.direction_up,
        Direction::Down => UI_TEXT.direction_down,
        Direction::Flat => UI_TEXT.direction_flat,
    }
}

pub fn direction_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Flat => "–",
    }
}

pub fn direction_color(direction: Direction) -> Color32 {
    match direction {
        Direction::Up => UI_CONFIG.colors.profit,
        Direction::Down => UI_CONFIG.colors.loss,
        Direction::Flat => UI_CONFIG.colors.neutral,
    }
}

pub fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Low => UI_TEXT.confidence_low,
        Confidence::Medium => UI_TEXT.confidence_medium,
        Confidence::High => UI_TEXT.confidence_high,
    }
}

pub fn confidence_color(confidence: Confidence) -> Color32 {
    match confidence {
        Confidence::Low => UI_CONFIG.colors.loss,
        Confidence::Medium => UI_CONFIG.colors.warning,
        Confidence::High => UI_CONFIG.colors.profit,
    }
}

pub fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => UI_TEXT.risk_low,
        RiskLevel::Medium => UI_TEXT.risk_medium,
        RiskLevel::High => UI_TEXT.risk_high,
    }
}

pub fn risk_color(risk: RiskLevel) -> Color32 {
    match risk {
        RiskLevel::Low => UI_CONFIG.colors.profit,
        RiskLevel::Medium => UI_CONFIG.colors.warning,
        RiskLevel::High => UI_CONFIG.colors.loss,
    }
}

/// The backend sends expected returns as signed strings ("+3.2%").
pub fn expected_return_color(expected_return: &str) -> Color32 {
    if expected_return.starts_with('+') {
        UI_CONFIG.colors.profit
    } else if expected_return.starts_with('-') {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.label
    }
}
