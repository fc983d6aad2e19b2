use chrono::Utc;

use crate::{
    constants,
    gateway::MarketDataGateway,
    model::{self, Skip},
};

/// Seconds per candle for an interval token. Unknown tokens fall back to one hour.
pub fn interval_seconds(interval: &str) -> i64 {
    match interval {
        "1D" => 86_400,
        "1m" => 60,
        _ => 3_600,
    }
}

/// `(start, end)` in ms covering `limit` candles that end at `end_ms`.
pub fn time_window(interval: &str, limit: u32, end_ms: i64) -> (i64, i64) {
    let start_ms = end_ms - limit as i64 * interval_seconds(interval) * 1000;
    (start_ms, end_ms)
}

/// Fetches the last `limit` candles for `symbol` and validates them.
pub async fn fetch<G: MarketDataGateway>(
    gateway: &G,
    symbol: &str,
    interval: &str,
    limit: u32,
) -> Result<model::Series, Skip> {
    let (start_ms, end_ms) = time_window(interval, limit, Utc::now().timestamp_millis());
    log::info!(
        "Fetching candles for {} with interval {}, start {}, end {}",
        symbol,
        interval,
        start_ms,
        end_ms
    );

    let candles = gateway
        .history(symbol, interval, start_ms, end_ms)
        .await?;
    if candles.is_empty() {
        return Err(Skip::NoData);
    }

    validate(symbol, candles)
}

/// Every close must be present and strictly positive, and there must be enough rows.
pub fn validate(symbol: &str, candles: Vec<model::Candle>) -> Result<model::Series, Skip> {
    let mut closes = Vec::with_capacity(candles.len());
    for (i, candle) in candles.iter().enumerate() {
        match candle.close {
            Some(close) if !close.is_finite() => return Err(Skip::MissingClose(i)),
            Some(close) if close <= 0.0 => return Err(Skip::NonPositiveClose(i, close)),
            Some(close) => closes.push(close),
            None => return Err(Skip::MissingClose(i)),
        }
    }

    if closes.len() < constants::MIN_SERIES_ROWS {
        return Err(Skip::TooShort {
            len: closes.len(),
            min: constants::MIN_SERIES_ROWS,
        });
    }

    Ok(model::Series {
        symbol: symbol.to_string(),
        candles,
        closes,
    })
}
