mod chart;
mod prediction;
mod stock;

pub use chart::{ChartRecord, ChartSeries};
pub use prediction::{
    Confidence, Direction, PredictRequest, PredictionResult, PriceRange, RiskLevel, Timeframe,
    TopStock, TopStocksReport,
};
pub use stock::{
    Indicators, OhlcvRecord, SearchMatches, SignalStrength, StockData, StockInfo,
    SupportResistance,
};
