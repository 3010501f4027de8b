use std::time::Duration;

/// Route templates on the prediction backend.
pub struct ApiPaths {
    pub search: &'static str,
    pub stock: &'static str,
    pub predict: &'static str,
    pub top_stocks: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

/// Timing knobs for the debounced symbol lookup.
pub struct LookupConfig {
    /// Quiet period after the last keystroke before a search is dispatched.
    pub debounce_ms: u64,
    /// Grace period between input blur and the suggestion panel closing,
    /// long enough for a click on a suggestion to land first.
    pub blur_grace_ms: u64,
    /// Queries shorter than this never hit the network.
    pub min_query_len: usize,
}

pub struct ApiConfig {
    pub default_base_url: &'static str,
    pub default_symbol: &'static str,
    pub paths: ApiPaths,
    pub client: ClientDefaults,
    pub lookup: LookupConfig,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://127.0.0.1:8000",
    default_symbol: "AAPL",
    paths: ApiPaths {
        search: "/api/search",
        stock: "/api/stock",
        predict: "/api/predict",
        top_stocks: "/api/top-stocks",
    },
    client: ClientDefaults {
        timeout_ms: 30_000,
        connect_timeout_ms: 5_000,
    },
    lookup: LookupConfig {
        debounce_ms: 300,
        blur_grace_ms: 200,
        min_query_len: 1,
    },
};

impl ApiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.lookup.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.lookup.blur_grace_ms)
    }
}
