//! Domain Entities
//!
//! Typed records mirroring the trading agent's REST responses. Everything here
//! is an immutable snapshot: the dashboard only deserializes and renders.
//!
//! Allocation-style mappings use `IndexMap` so they render in the order the
//! backend returned them.

use indexmap::IndexMap;

/// Allocation entries at or below this fraction are hidden from portfolio
/// and transaction displays.
pub const PORTFOLIO_ALLOCATION_FLOOR: f64 = 0.01;

/// Judgment target allocations use a finer materiality threshold.
pub const JUDGMENT_ALLOCATION_FLOOR: f64 = 0.001;

/// Confidence scores at or above this get the high-confidence treatment.
pub const HIGH_CONFIDENCE_MIN: i64 = 8;

/// Current portfolio state: holdings, per-asset values, and allocation ratios.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PortfolioSnapshot {
    pub holdings: IndexMap<String, f64>,
    pub values_usdt: IndexMap<String, f64>,
    pub total_value_usdt: f64,
    pub allocations: IndexMap<String, f64>,
    pub timestamp: String,
}

/// Total portfolio value at a named period, with percent change versus a
/// prior baseline. The backend returns these in chronological order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PerformancePoint {
    pub period: String,
    pub total_value_usdt: f64,
    pub change_percent: f64,
}

/// Per-asset price and percent changes over fixed horizons. Horizons with no
/// data yet are absent.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CurrencyPerformance {
    pub symbol: String,
    pub current_price: f64,
    pub change_24h: f64,
    #[serde(default)]
    pub change_1d: Option<f64>,
    #[serde(default)]
    pub change_1w: Option<f64>,
    #[serde(default)]
    pub change_1m: Option<f64>,
}

/// One trading decision recorded by the agent's decision engine.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Judgment {
    pub judgment_id: String,
    pub timestamp: String,
    pub confidence_score: i64,
    pub target_allocations: IndexMap<String, f64>,
    pub reasoning_text: String,
    pub source_urls: Vec<String>,
    pub info_fetch_status: IndexMap<String, bool>,
    pub failed_sources: Vec<String>,
}

impl Judgment {
    /// Scores of 8 and above get the high-confidence badge.
    pub fn is_high_confidence(&self) -> bool {
        self.confidence_score >= HIGH_CONFIDENCE_MIN
    }
}

/// One executed (or attempted) trade, with the allocation state immediately
/// before and after.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub timestamp: String,
    pub symbol: String,
    pub side: String,
    pub amount: f64,
    pub price: f64,
    pub status: String,
    pub pre_allocation: IndexMap<String, f64>,
    pub post_allocation: IndexMap<String, f64>,
}

impl Transaction {
    pub fn is_buy(&self) -> bool {
        self.side == "buy"
    }

    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

/// Allocation entries strictly above `floor`, in response order. Entries at
/// or below the floor are immaterial and omitted from display.
pub fn visible_allocations(
    allocations: &IndexMap<String, f64>,
    floor: f64,
) -> Vec<(String, f64)> {
    allocations
        .iter()
        .filter(|(_, ratio)| **ratio > floor)
        .map(|(symbol, ratio)| (symbol.clone(), *ratio))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocations(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(s, v)| (s.to_string(), *v))
            .collect()
    }

    #[test]
    fn portfolio_floor_hides_entries_at_or_below_one_percent() {
        let map = allocations(&[("BTC", 0.6), ("DOGE", 0.01), ("DUST", 0.005), ("ETH", 0.385)]);
        let visible = visible_allocations(&map, PORTFOLIO_ALLOCATION_FLOOR);
        assert_eq!(
            visible,
            vec![("BTC".to_string(), 0.6), ("ETH".to_string(), 0.385)]
        );
    }

    #[test]
    fn judgment_floor_is_finer_than_portfolio_floor() {
        let map = allocations(&[("BTC", 0.002), ("DUST", 0.001), ("ETH", 0.005)]);
        let visible = visible_allocations(&map, JUDGMENT_ALLOCATION_FLOOR);
        assert_eq!(
            visible,
            vec![("BTC".to_string(), 0.002), ("ETH".to_string(), 0.005)]
        );
        // The same map through the portfolio floor hides everything
        assert!(visible_allocations(&map, PORTFOLIO_ALLOCATION_FLOOR).is_empty());
    }

    #[test]
    fn confidence_boundary_is_inclusive_at_eight() {
        let mut judgment: Judgment = serde_json::from_value(sample_judgment_json()).unwrap();
        judgment.confidence_score = 8;
        assert!(judgment.is_high_confidence());
        judgment.confidence_score = 7;
        assert!(!judgment.is_high_confidence());
    }

    #[test]
    fn portfolio_snapshot_deserializes_from_backend_json() {
        let snapshot: PortfolioSnapshot = serde_json::from_str(
            r#"{
                "holdings": {"BTC": 1.5},
                "values_usdt": {"BTC": 90000},
                "total_value_usdt": 90000,
                "allocations": {"BTC": 1.0},
                "timestamp": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.total_value_usdt, 90000.0);
        assert_eq!(snapshot.holdings["BTC"], 1.5);
        assert_eq!(
            visible_allocations(&snapshot.allocations, PORTFOLIO_ALLOCATION_FLOOR),
            vec![("BTC".to_string(), 1.0)]
        );
    }

    #[test]
    fn allocations_keep_backend_response_order() {
        // Backend orders by weight, not alphabetically; display must follow
        let snapshot: PortfolioSnapshot = serde_json::from_str(
            r#"{
                "holdings": {"USDT": 5000.0, "BTC": 0.04, "ETH": 0.5},
                "values_usdt": {"USDT": 5000.0, "BTC": 2400.0, "ETH": 1600.0},
                "total_value_usdt": 9000.0,
                "allocations": {"USDT": 0.556, "BTC": 0.267, "ETH": 0.177},
                "timestamp": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let visible = visible_allocations(&snapshot.allocations, PORTFOLIO_ALLOCATION_FLOOR);
        let symbols: Vec<&str> = visible.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(symbols, vec!["USDT", "BTC", "ETH"]);
    }

    #[test]
    fn currency_performance_allows_missing_horizons() {
        let perf: CurrencyPerformance = serde_json::from_str(
            r#"{"symbol": "ETH", "current_price": 3120.5, "change_24h": -1.2}"#,
        )
        .unwrap();

        assert_eq!(perf.change_1d, None);
        assert_eq!(perf.change_1w, None);
        assert_eq!(perf.change_1m, None);
    }

    #[test]
    fn transaction_side_and_status_helpers() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "transaction_id": "tx-1",
                "timestamp": "2024-01-02T09:30:00Z",
                "symbol": "BTC",
                "side": "sell",
                "amount": 0.25,
                "price": 61250.0,
                "status": "failure",
                "pre_allocation": {"BTC": 0.8, "USDT": 0.2},
                "post_allocation": {"BTC": 0.8, "USDT": 0.2}
            }"#,
        )
        .unwrap();

        assert!(!tx.is_buy());
        assert!(!tx.succeeded());
    }

    fn sample_judgment_json() -> serde_json::Value {
        serde_json::json!({
            "judgment_id": "j-1",
            "timestamp": "2024-01-01T12:00:00Z",
            "confidence_score": 9,
            "target_allocations": {"BTC": 0.5, "USDT": 0.5},
            "reasoning_text": "Momentum remains positive.",
            "source_urls": ["https://example.com/news"],
            "info_fetch_status": {"news": true, "prices": false},
            "failed_sources": ["prices"]
        })
    }
}
