//! Configuration module for the stock-scope application.

mod api;
mod debug;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;
