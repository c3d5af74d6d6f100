//! HTTP API Client
//!
//! Functions for communicating with the trading agent REST API. Each call is
//! a single fire-and-forget request: no retry, no caching, no timeout beyond
//! the browser's defaults. Failures surface verbatim to the calling page.

use gloo_net::http::Request;

use crate::model::{
    CurrencyPerformance, Judgment, PerformancePoint, PortfolioSnapshot, Transaction,
};

/// Default API base URL for local development
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default page size for judgment and transaction listings
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// API base URL, taken from the `AGENT_API_URL` environment variable at
/// build time, falling back to the local development address.
pub fn api_base() -> String {
    let url = option_env!("AGENT_API_URL").unwrap_or(DEFAULT_API_BASE);
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body returned by the backend on non-2xx responses.
///
/// FastAPI-style backends put the message under `detail`.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(alias = "detail")]
    pub error: String,
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the current portfolio snapshot
pub async fn fetch_current_portfolio() -> Result<PortfolioSnapshot, String> {
    get_json(&format!("{}/api/portfolio/current", api_base())).await
}

/// Fetch portfolio performance over the fixed set of periods
pub async fn fetch_performance() -> Result<Vec<PerformancePoint>, String> {
    get_json(&format!("{}/api/portfolio/performance", api_base())).await
}

/// Fetch per-currency price and change data
pub async fn fetch_currency_performance() -> Result<Vec<CurrencyPerformance>, String> {
    get_json(&format!("{}/api/portfolio/currency-performance", api_base())).await
}

/// Fetch judgment history, newest first, capped at `limit`.
///
/// `last_key` is the backend's pagination cursor. The client accepts it but
/// no page currently passes one (there is no "load more" control).
pub async fn fetch_judgments(
    limit: usize,
    last_key: Option<&str>,
) -> Result<Vec<Judgment>, String> {
    let mut url = format!("{}/api/judgments?limit={}", api_base(), limit);
    if let Some(key) = last_key {
        url.push_str(&format!("&last_key={}", key));
    }
    get_json(&url).await
}

/// Fetch a single judgment by id. Unknown ids surface the backend's
/// not-found message.
pub async fn fetch_judgment(id: &str) -> Result<Judgment, String> {
    get_json(&format!("{}/api/judgments/{}", api_base(), id)).await
}

/// Fetch transaction history, newest first, capped at `limit`.
pub async fn fetch_transactions(
    limit: usize,
    last_key: Option<&str>,
) -> Result<Vec<Transaction>, String> {
    let mut url = format!("{}/api/transactions?limit={}", api_base(), limit);
    if let Some(key) = last_key {
        url.push_str(&format!("&last_key={}", key));
    }
    get_json(&url).await
}

/// Fetch a single transaction by id
pub async fn fetch_transaction(id: &str) -> Result<Transaction, String> {
    get_json(&format!("{}/api/transactions/{}", api_base(), id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn api_error_reads_fastapi_detail_field() {
        let err: ApiError = serde_json::from_str(r#"{"detail": "Judgment not found"}"#).unwrap();
        assert_eq!(err.error, "Judgment not found");
    }

    #[test]
    fn api_error_reads_plain_error_field() {
        let err: ApiError = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(err.error, "boom");
    }
}
