use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Prediction horizon. Wire names match the backend ("1h"/"1d"/"1w").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1w")]
    W1,
}

impl Timeframe {
    /// Card heading in the prediction panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::H1 => "Next Hour",
            Self::D1 => "Next Day",
            Self::W1 => "Next Week",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::H1 => write!(f, "1h"),
            Self::D1 => write!(f, "1d"),
            Self::W1 => write!(f, "1w"),
        }
    }
}

// The backend emits these as lowercase strings. Resolving them into closed
// enums here means the rest of the app never string-compares a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub direction: Direction,
    /// In [0, 1].
    pub probability: f64,
    pub price_range: PriceRange,
    pub confidence: Confidence,
    pub reasoning: String,
    pub risk_warning: String,
}

/// Body of the predict POST.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub symbol: String,
    pub timeframe: Timeframe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStock {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub direction: Direction,
    pub probability: f64,
    /// Signed percentage string straight from the backend, e.g. "+3.2%".
    pub expected_return: String,
    pub risk_level: RiskLevel,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStocksReport {
    pub stocks: Vec<TopStock>,
    pub generated_at: String,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_decodes_backend_payload() {
        let payload = r#"{
            "symbol": "AAPL",
            "timeframe": "1d",
            "direction": "up",
            "probability": 0.72,
            "price_range": {"min": 185.0, "max": 195.0},
            "confidence": "medium",
            "reasoning": "Momentum remains positive.",
            "risk_warning": "Research use only."
        }"#;
        let result: PredictionResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.timeframe, Timeframe::D1);
        assert_eq!(result.direction, Direction::Up);
        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.price_range.min, 185.0);
    }

    #[test]
    fn unknown_direction_tag_is_a_decode_error() {
        // Closed enums: no silent "unknown" fall-through at the boundary.
        let payload = r#"{
            "symbol": "AAPL",
            "timeframe": "1d",
            "direction": "sideways",
            "probability": 0.5,
            "price_range": {"min": 1.0, "max": 2.0},
            "confidence": "low",
            "reasoning": "",
            "risk_warning": ""
        }"#;
        assert!(serde_json::from_str::<PredictionResult>(payload).is_err());
    }

    #[test]
    fn predict_request_omits_absent_price() {
        let body = PredictRequest {
            symbol: "TSLA".into(),
            timeframe: Timeframe::H1,
            current_price: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"symbol":"TSLA","timeframe":"1h"}"#);
    }

    #[test]
    fn top_stock_risk_levels_decode() {
        let payload = r#"{
            "symbol": "NVDA",
            "direction": "up",
            "probability": 0.8,
            "expected_return": "+5.1%",
            "risk_level": "high",
            "reasoning": "AI demand."
        }"#;
        let stock: TopStock = serde_json::from_str(payload).unwrap();
        assert_eq!(stock.risk_level, RiskLevel::High);
        assert_eq!(stock.name, None);
    }
}
