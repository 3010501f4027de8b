use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::API;
use crate::models::{PredictRequest, PredictionResult, SearchMatches, StockData, TopStocksReport};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a failure status; `detail` carries its
    /// human-readable message when it sent one.
    #[error("backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The message shown to the user: the backend-supplied detail when it is
    /// usable, otherwise the caller's generic per-flow fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

// FastAPI error envelope: {"detail": "..."}
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}

/// The four backend operations the dashboard consumes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait StockBackend {
    async fn search_stocks(&self, query: &str) -> Result<SearchMatches, ApiError>;
    async fn stock_data(&self, symbol: &str) -> Result<StockData, ApiError>;
    async fn predict(&self, request: PredictRequest) -> Result<PredictionResult, ApiError>;
    async fn top_stocks(&self) -> Result<TopStocksReport, ApiError>;
}

/// Shared handle the app threads requests through. Native producers cross
/// into the tokio runtime, so they need the Send + Sync bounds; wasm futures
/// never leave the browser's single thread.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedBackend = std::sync::Arc<dyn StockBackend + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type SharedBackend = std::rc::Rc<dyn StockBackend>;

/// reqwest client for the prediction backend's REST API.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(API.client.timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(
                API.client.connect_timeout_ms,
            ))
            .build()
            .expect("failed to build http client");

        // The browser owns all socket timeouts on wasm.
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.client.get(&url).send().await?;
        Self::read_body(response).await
    }

    async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or_default();
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl StockBackend for HttpBackend {
    async fn search_stocks(&self, query: &str) -> Result<SearchMatches, ApiError> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            API.paths.search,
            urlencoding::encode(query)
        );
        self.get_json(url).await
    }

    async fn stock_data(&self, symbol: &str) -> Result<StockData, ApiError> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            API.paths.stock,
            urlencoding::encode(symbol)
        );
        self.get_json(url).await
    }

    async fn predict(&self, request: PredictRequest) -> Result<PredictionResult, ApiError> {
        let url = format!("{}{}", self.base_url, API.paths.predict);
        let response = self.client.post(&url).json(&request).send().await?;
        Self::read_body(response).await
    }

    async fn top_stocks(&self) -> Result<TopStocksReport, ApiError> {
        let url = format!("{}{}", self.base_url, API.paths.top_stocks);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = ApiError::Backend {
            status: 500,
            detail: "Prediction failed: model offline".into(),
        };
        assert_eq!(
            err.user_message("generic fallback"),
            "Prediction failed: model offline"
        );
    }

    #[test]
    fn empty_or_blank_detail_falls_back() {
        for detail in ["", "   "] {
            let err = ApiError::Backend {
                status: 502,
                detail: detail.into(),
            };
            assert_eq!(err.user_message("generic fallback"), "generic fallback");
        }
    }

    #[test]
    fn error_envelope_decodes_with_and_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid stock symbol"}"#).unwrap();
        assert_eq!(body.detail, "Invalid stock symbol");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url, "http://localhost:8000");
    }
}
