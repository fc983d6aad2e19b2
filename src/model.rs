use std::io;

use thiserror::Error;

use crate::http::client;

/// A perpetual futures ticker from the exchange snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub symbol: String,   // Contract symbol, e.g. BTCUSDT_UMCBL.
    pub usdt_volume: f64, // 24h traded value in USDT.
}

/// Structure representing a candle (OHLCV data).
///
/// Numeric fields are `None` when the exchange sent a null or something that is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: Option<i64>,    // Bucket open time, ms since epoch.
    pub open: Option<f64>,         // Opening price.
    pub high: Option<f64>,         // Highest price.
    pub low: Option<f64>,          // Lowest price.
    pub close: Option<f64>,        // Closing price.
    pub base_volume: Option<f64>,  // Volume in the base coin.
    pub quote_volume: Option<f64>, // Volume in USDT.
}

/// A validated candle series. Only `series::validate` builds one.
#[derive(Debug, Clone)]
pub struct Series {
    pub symbol: String,
    pub candles: Vec<Candle>,
    pub closes: Vec<f64>,
}

/// A symbol whose RSI sits outside the neutral band.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEntry {
    pub symbol: String,
    pub volume: f64,
    pub rsi: f64, // Rounded to 2 decimal places.
}

/// Why a symbol produced no RSI value. Logged, never raised past the symbol.
#[derive(Error, Debug)]
pub enum Skip {
    #[error("no candle data returned")]
    NoData,
    #[error("gateway request failed: {0}")]
    Gateway(#[from] client::RequestError),
    #[error("missing close price at row {0}")]
    MissingClose(usize),
    #[error("non-positive close price {1} at row {0}")]
    NonPositiveClose(usize, f64),
    #[error("only {len} rows, need at least {min}")]
    TooShort { len: usize, min: usize },
    #[error("only {len} price changes, need {period}")]
    InsufficientDeltas { len: usize, period: usize },
    #[error("RSI computed as 0")]
    ZeroRsi,
    #[error("RSI is not a finite number")]
    NotFinite,
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("gateway request failed: {0}")]
    Gateway(#[from] client::RequestError),
    #[error("malformed usdtVolume for {0}: {1}")]
    MalformedTicker(String, String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<url::ParseError> for ScanError {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_messages_name_the_cause() {
        let err = ScanError::MalformedTicker("ETHUSDT_UMCBL".into(), "\"lots\"".into());
        assert_eq!(err.to_string(), "malformed usdtVolume for ETHUSDT_UMCBL: \"lots\"");

        let err: ScanError = client::RequestError::Other("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "gateway request failed: Other error: connection refused"
        );

        let err: ScanError = url::Url::parse("::nope").unwrap_err().into();
        assert!(matches!(err, ScanError::InvalidConfig(_)));
    }
}
