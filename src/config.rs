use std::env;

use clap::ValueEnum;
use url::Url;

use crate::{
    constants,
    model::{self, ScanError},
};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

/// Thresholds and sizes for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub volume_threshold: f64,
    pub interval: String,
    pub candle_limit: u32,
    pub rsi_period: usize,
    pub overbought: f64,
    pub oversold: f64,
    pub format: OutputFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            volume_threshold: constants::VOLUME_THRESHOLD,
            interval: constants::INTERVAL.into(),
            candle_limit: constants::CANDLE_LIMIT,
            rsi_period: constants::RSI_PERIOD,
            overbought: constants::OVERBOUGHT,
            oversold: constants::OVERSOLD,
            format: OutputFormat::Text,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> model::Result<()> {
        if self.rsi_period == 0 {
            return Err(ScanError::InvalidConfig("rsi period must be positive".into()));
        }
        if (self.candle_limit as usize) < constants::MIN_SERIES_ROWS {
            return Err(ScanError::InvalidConfig(format!(
                "candle limit {} is below the {} rows a series needs",
                self.candle_limit,
                constants::MIN_SERIES_ROWS
            )));
        }
        // An RSI over `period` changes needs `period + 1` closes.
        if self.rsi_period + 1 > self.candle_limit as usize {
            return Err(ScanError::InvalidConfig(format!(
                "rsi period {} needs a candle limit of at least {}, got {}",
                self.rsi_period,
                self.rsi_period + 1,
                self.candle_limit
            )));
        }
        if !(0.0..=100.0).contains(&self.oversold)
            || !(0.0..=100.0).contains(&self.overbought)
            || self.oversold > self.overbought
        {
            return Err(ScanError::InvalidConfig(format!(
                "signal band must satisfy 0 <= oversold ({}) <= overbought ({}) <= 100",
                self.oversold, self.overbought
            )));
        }
        Ok(())
    }
}

/// Connection settings handed to the gateway when it is built.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: Url,
    pub product_type: String,
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Reads `bitget_base_url`, `bitget_product_type` and `bitget_timeout_secs` from the
    /// environment, falling back to the defaults in `constants`.
    pub fn from_env() -> model::Result<Self> {
        let base_url = env::var("bitget_base_url").unwrap_or_else(|_| constants::BASE_URL.into());
        let product_type =
            env::var("bitget_product_type").unwrap_or_else(|_| constants::PRODUCT_TYPE.into());
        let timeout_secs = match env::var("bitget_timeout_secs") {
            Ok(v) => v.trim().parse::<u64>().map_err(|_| {
                ScanError::InvalidConfig(format!("bitget_timeout_secs is not a number: {}", v))
            })?,
            Err(_) => constants::TIMEOUT_SECS,
        };
        Self::new(&base_url, &product_type, timeout_secs)
    }

    pub fn new(base_url: &str, product_type: &str, timeout_secs: u64) -> model::Result<Self> {
        // Url::join drops the last path segment unless it ends with a slash.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        if product_type.trim().is_empty() {
            return Err(ScanError::InvalidConfig("product type is empty".into()));
        }
        Ok(Self {
            base_url,
            product_type: product_type.trim().to_string(),
            timeout_secs,
        })
    }

    pub fn endpoint(&self, path: &str) -> model::Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
