use std::io::Write;

use crate::{
    config::ScanConfig,
    gateway::MarketDataGateway,
    model::{self, Skip},
    report, rsi, series, signal, volume,
};

/// Fetches and scores one symbol.
pub async fn score<G: MarketDataGateway>(
    gateway: &G,
    symbol: &str,
    config: &ScanConfig,
) -> Result<f64, Skip> {
    let series = series::fetch(gateway, symbol, &config.interval, config.candle_limit).await?;
    if let Some(last) = series.candles.last() {
        log::debug!(
            "{}: {} candles, last opened at {:?}, close {:?}",
            series.symbol,
            series.candles.len(),
            last.timestamp,
            last.close
        );
    }
    rsi::compute(&series.closes, config.rsi_period)
}

/// Runs one scan and returns the ranked signals.
///
/// Per-symbol failures are logged and skipped; only snapshot-level failures come back as `Err`.
pub async fn run<G: MarketDataGateway>(
    gateway: &G,
    config: &ScanConfig,
) -> model::Result<Vec<model::SignalEntry>> {
    let tickers = gateway.snapshot().await?;
    if tickers.is_empty() {
        log::warn!("No ticker data received");
        return Ok(Vec::new());
    }

    let high_volume = volume::filter_by_volume(&tickers, config.volume_threshold);
    if high_volume.is_empty() {
        log::info!(
            "No tickers above {} USDT volume out of {}",
            config.volume_threshold,
            tickers.len()
        );
        return Ok(Vec::new());
    }
    log::info!(
        "{} of {} tickers above {} USDT volume",
        high_volume.len(),
        tickers.len(),
        config.volume_threshold
    );

    let mut scored = Vec::with_capacity(high_volume.len());
    // Sequential on purpose: one request in flight at a time.
    for ticker in high_volume {
        log::info!("Fetching data and calculating RSI for {}", ticker.symbol);
        let rsi = score(gateway, &ticker.symbol, config).await;
        match &rsi {
            Ok(value) => log::info!(
                "Symbol: {}, RSI: {:.2}, USDT Volume: {}",
                ticker.symbol,
                value,
                ticker.usdt_volume
            ),
            Err(skip) => log::warn!("Skipping {}: {}", ticker.symbol, skip),
        }
        scored.push((ticker, rsi));
    }

    let entries = signal::select(scored, config.overbought, config.oversold);
    if entries.is_empty() {
        log::info!(
            "No tickers found with RSI > {} or < {}",
            config.overbought,
            config.oversold
        );
    } else {
        log::info!(
            "Found {} tickers with RSI > {} or < {}",
            entries.len(),
            config.overbought,
            config.oversold
        );
    }
    Ok(entries)
}

/// Runs a scan and writes the report. A failed run is logged and reported as empty.
pub async fn scan_and_report<G: MarketDataGateway, W: Write>(
    gateway: &G,
    config: &ScanConfig,
    out: W,
) -> model::Result<()> {
    let entries = match run(gateway, config).await {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("Scan failed: {}", err);
            Vec::new()
        }
    };
    report::write_report(&entries, config.format, out)
}
