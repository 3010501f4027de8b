use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub tile: Color32,
    pub accent: Color32,
    pub profit: Color32,
    pub loss: Color32,
    pub neutral: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::from_rgb(235, 235, 240),
        label: Color32::from_rgb(200, 200, 205),
        subdued: Color32::from_rgb(130, 130, 140),
        panel: Color32::from_rgb(18, 18, 22),
        card: Color32::from_rgb(28, 28, 34),
        tile: Color32::from_rgb(38, 38, 46),
        accent: Color32::from_rgb(80, 140, 255),
        profit: Color32::from_rgb(40, 180, 100),
        loss: Color32::from_rgb(230, 80, 80),
        neutral: Color32::from_rgb(160, 160, 165),
        warning: Color32::from_rgb(235, 180, 60),
    },
};

impl UiConfig {
    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    /// Frame for a dashboard card (search, chart, predictions, top picks)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for a small metric tile inside a card
    pub fn tile_frame(&self) -> Frame {
        Frame {
            fill: self.colors.tile,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for an inline banner (errors, disclaimers); the border color
    /// carries the severity
    pub fn banner_frame(&self, color: Color32) -> Frame {
        Frame {
            fill: self.colors.tile,
            stroke: Stroke::new(1.0, color),
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}
