use crate::{http::client::RequestError, model};

/// Source of tickers and candles for a scan.
pub trait MarketDataGateway {
    /// All tradeable symbols with their 24h USDT volume.
    async fn snapshot(&self) -> model::Result<Vec<model::Ticker>>;

    /// Candles for `symbol` between `start_ms` and `end_ms`, oldest first.
    async fn history(
        &self,
        symbol: &str,
        interval: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<model::Candle>, RequestError>;
}
