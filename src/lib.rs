#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::DashboardApp;
pub use data::{AsyncState, RequestTracker};
pub use models::{ChartSeries, Timeframe};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend
    #[arg(long, default_value_t = config::API.default_base_url.to_string())]
    pub api_base: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> DashboardApp {
    DashboardApp::new(cc, args)
}
