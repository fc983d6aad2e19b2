// Default values for a scan run. Every one of them can be overridden from the command line
// or the environment.

/// Base URL of the Bitget REST API.
pub const BASE_URL: &str = "https://api.bitget.com/";

/// USDT-margined perpetual futures.
pub const PRODUCT_TYPE: &str = "umcbl";

/// Request timeout for the REST client, in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Minimum 24h USDT traded value for a ticker to be scanned.
pub const VOLUME_THRESHOLD: f64 = 5_000_000.0;

/// Number of candles requested per symbol.
pub const CANDLE_LIMIT: u32 = 15;

/// Fewest rows a fetched series may have before it is rejected.
pub const MIN_SERIES_ROWS: usize = 14;

/// RSI look-back period.
pub const RSI_PERIOD: usize = 14;

/// RSI above this is reported as overbought.
pub const OVERBOUGHT: f64 = 70.0;

/// RSI below this is reported as oversold.
pub const OVERSOLD: f64 = 30.0;

/// Candle interval token sent to the exchange.
pub const INTERVAL: &str = "1H";

/// Printed instead of a report when nothing qualifies.
pub const EMPTY_REPORT: &str = "{}";

// Success code returned in every Bitget response envelope.
pub const SUCCESS_CODE: &str = "00000";
