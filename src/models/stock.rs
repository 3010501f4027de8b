use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One trading period of open/high/low/close/volume, exactly as the backend
/// serves it. High/low sanity is the backend's problem, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRecord {
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

// The backend emits pandas timestamps ("2024-03-04T00:00:00"); only the
// calendar date is meaningful for daily rows.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(raw.as_str());
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    pub sector: String,
    pub industry: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub currency: String,
}

/// Latest technical-indicator values. The backend sends a map of whatever it
/// managed to compute; we only surface the two the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalStrength {
    pub strength: Option<String>,
    pub score: Option<f64>,
}

/// Price levels historically acting as floor/ceiling, drawn as chart
/// overlays. Absent means "not provided", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
}

/// Everything the stock endpoint returns for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    pub symbol: String,
    pub info: StockInfo,
    pub data: Vec<OhlcvRecord>,
    #[serde(default)]
    pub indicators: Indicators,
    #[serde(default)]
    pub signal_strength: SignalStrength,
    #[serde(default)]
    pub support_resistance: Option<SupportResistance>,
}

/// Symbol suggestions in backend relevance order. No dedup is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatches {
    pub query: String,
    pub matches: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohlcv_date_accepts_pandas_timestamps() {
        let row: OhlcvRecord = serde_json::from_str(
            r#"{"date":"2024-03-04T00:00:00","open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":100}"#,
        )
        .unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

        let row: OhlcvRecord = serde_json::from_str(
            r#"{"date":"2024-03-04","open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":100}"#,
        )
        .unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn stock_data_tolerates_missing_optionals() {
        let payload = r#"{
            "symbol": "AAPL",
            "info": {
                "name": "Apple Inc.",
                "sector": "Technology",
                "industry": "Consumer Electronics",
                "current_price": 190.5,
                "market_cap": 2.9e12,
                "currency": "USD"
            },
            "data": []
        }"#;
        let data: StockData = serde_json::from_str(payload).unwrap();
        assert_eq!(data.indicators.rsi, None);
        assert!(data.support_resistance.is_none());
        assert!(data.data.is_empty());
    }
}
