mod lookup;
mod root;

pub use lookup::SymbolLookup;
pub use root::DashboardApp;
