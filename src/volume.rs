use crate::model;

/// Keeps the tickers that traded more than `threshold` USDT, in snapshot order.
pub fn filter_by_volume(tickers: &[model::Ticker], threshold: f64) -> Vec<model::Ticker> {
    tickers
        .iter()
        .filter(|ticker| ticker.usdt_volume > threshold)
        .cloned()
        .collect()
}
