//! All user-facing strings in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub app_tagline: &'static str,

    // --- Search card ---
    pub search_heading: &'static str,
    pub search_hint: &'static str,
    pub search_hint_detail: &'static str,
    pub search_no_matches: &'static str,

    // --- Stock section ---
    pub loading_stock: &'static str,
    pub fetch_failed_heading: &'static str,
    pub label_market_cap: &'static str,
    pub label_rsi: &'static str,
    pub label_macd: &'static str,
    pub label_signal: &'static str,
    pub label_score: &'static str,
    pub label_na: &'static str,
    pub label_neutral: &'static str,
    pub label_support: &'static str,
    pub label_resistance: &'static str,

    // --- Chart ---
    pub chart_heading: &'static str,
    pub chart_subheading: &'static str,
    pub chart_no_data: &'static str,
    pub label_close_price: &'static str,
    pub label_volume: &'static str,

    // --- Prediction panel ---
    pub predict_heading: &'static str,
    pub predict_subheading: &'static str,
    pub predict_button: &'static str,
    pub predict_running: &'static str,
    pub predict_idle_hint: &'static str,
    pub predict_disclaimer: &'static str,
    pub label_price_range: &'static str,
    pub label_range_low: &'static str,
    pub label_range_high: &'static str,
    pub label_confidence: &'static str,
    pub label_reasoning: &'static str,
    pub direction_up: &'static str,
    pub direction_down: &'static str,
    pub direction_flat: &'static str,
    pub confidence_low: &'static str,
    pub confidence_medium: &'static str,
    pub confidence_high: &'static str,

    // --- Top picks ---
    pub top_heading: &'static str,
    pub top_subheading: &'static str,
    pub top_refresh: &'static str,
    pub top_generating: &'static str,
    pub top_generated_at: &'static str,
    pub risk_low: &'static str,
    pub risk_medium: &'static str,
    pub risk_high: &'static str,
    pub col_rank: &'static str,
    pub col_symbol: &'static str,
    pub col_name: &'static str,
    pub col_direction: &'static str,
    pub col_probability: &'static str,
    pub col_return: &'static str,
    pub col_risk: &'static str,
    pub col_reasoning: &'static str,

    // --- Footer ---
    pub footer_heading: &'static str,
    pub footer_body: &'static str,

    // --- Generic failure fallbacks (used when the backend sends no usable
    // message; search failures are silent but still recorded) ---
    pub fetch_failed: &'static str,
    pub predict_failed: &'static str,
    pub top_picks_failed: &'static str,
    pub search_failed: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Stock Scope",
    app_tagline: "AI-assisted stock dashboard",

    search_heading: "Stock Search",
    search_hint: "Symbol or name, e.g. AAPL, MSFT, TSLA...",
    search_hint_detail: "Search by ticker symbol, e.g. AAPL, MSFT, TSLA",
    search_no_matches: "No matching symbols",

    loading_stock: "Loading stock data...",
    fetch_failed_heading: "Failed to load stock data",
    label_market_cap: "Market cap",
    label_rsi: "RSI",
    label_macd: "MACD",
    label_signal: "Signal",
    label_score: "Score",
    label_na: "N/A",
    label_neutral: "neutral",
    label_support: "Support",
    label_resistance: "Resistance",

    chart_heading: "Price History",
    chart_subheading: "Last 30 trading days (OHLCV)",
    chart_no_data: "No chart data available",
    label_close_price: "Close",
    label_volume: "Volume",

    predict_heading: "AI Predictions",
    predict_subheading: "Directional outlook per horizon",
    predict_button: "Predict",
    predict_running: "Analyzing...",
    predict_idle_hint: "Run a prediction for this horizon",
    predict_disclaimer: "Predictions are produced by an AI workflow for research purposes and \
carry real uncertainty; they are not investment advice.",
    label_price_range: "Expected price range",
    label_range_low: "Low",
    label_range_high: "High",
    label_confidence: "Confidence",
    label_reasoning: "Reasoning",
    direction_up: "Bullish",
    direction_down: "Bearish",
    direction_flat: "Sideways",
    confidence_low: "Low",
    confidence_medium: "Medium",
    confidence_high: "High",

    top_heading: "Top 10 Picks",
    top_subheading: "AI-ranked weekly ideas",
    top_refresh: "Refresh",
    top_generating: "Generating picks...",
    top_generated_at: "Generated",
    risk_low: "Low risk",
    risk_medium: "Medium risk",
    risk_high: "High risk",
    col_rank: "#",
    col_symbol: "Symbol",
    col_name: "Name",
    col_direction: "Direction",
    col_probability: "Probability",
    col_return: "Expected return",
    col_risk: "Risk",
    col_reasoning: "Reasoning",

    footer_heading: "Important notice",
    footer_body: "All analysis and predictions are for research purposes only and do not \
constitute investment advice. Markets are risky; past performance does not guarantee \
future results.",

    fetch_failed: "Failed to fetch stock data. Please try again later.",
    predict_failed: "Prediction failed. Please try again later.",
    top_picks_failed: "Failed to fetch top picks. Please try again later.",
    search_failed: "Search failed.",
};
