mod panels;
mod predict_panel;
mod price_chart;
mod search_bar;
mod top_list;
mod ui_config;
mod ui_text;
pub(crate) mod utils;

pub use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;
