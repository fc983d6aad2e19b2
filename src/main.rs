// Bitget perpetual futures RSI scanner.
mod bitget {
    // REST gateway for Bitget market data.
    pub mod api_caller;
    // Response structures for the Bitget API.
    pub mod response;
}
// HTTP client module.
mod http {
    // HTTP client implementation.
    pub mod client;
}
// Data models and errors.
mod model;
// Runtime configuration.
mod config;
// module storing defaults
mod constants;
// Market data source abstraction.
mod gateway;
// Volume filtering.
mod volume;
// Candle series retrieval and validation.
mod series;
// Relative Strength Index.
mod rsi;
// Overbought/oversold selection.
mod signal;
// Report output.
mod report;
// Scan pipeline.
mod scan;

use std::io;

use clap::{Parser, Subcommand};
use dotenv::dotenv;

use crate::{
    bitget::api_caller::Bitget,
    config::{GatewayConfig, OutputFormat, ScanConfig},
};

// Command-line argument parser.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

// Subcommands for the application.
#[derive(Subcommand, Debug)]
enum Commands {
    // Scan all high-volume tickers and report overbought/oversold ones.
    Scan {
        #[arg(long, default_value_t = constants::VOLUME_THRESHOLD)]
        volume_threshold: f64,
        #[arg(long, default_value = constants::INTERVAL)]
        interval: String,
        #[arg(long, default_value_t = constants::CANDLE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = constants::RSI_PERIOD)]
        period: usize,
        #[arg(long, default_value_t = constants::OVERBOUGHT)]
        overbought: f64,
        #[arg(long, default_value_t = constants::OVERSOLD)]
        oversold: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    // Compute the RSI of a single symbol.
    Rsi {
        symbol: String,
        #[arg(long, default_value = constants::INTERVAL)]
        interval: String,
        #[arg(long, default_value_t = constants::CANDLE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = constants::RSI_PERIOD)]
        period: usize,
    },
}

fn build_gateway() -> model::Result<Bitget> {
    let config = GatewayConfig::from_env()?;
    log::info!(
        "Using {} for product type {}",
        config.base_url,
        config.product_type
    );
    Bitget::new(config)
}

#[tokio::main]
// Main function entry point.
async fn main() {
    dotenv().ok();

    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Scan {
            volume_threshold,
            interval,
            limit,
            period,
            overbought,
            oversold,
            format,
        } => {
            let config = ScanConfig {
                volume_threshold,
                interval,
                candle_limit: limit,
                rsi_period: period,
                overbought,
                oversold,
                format,
            };
            let gateway = config.validate().and_then(|_| build_gateway());
            let result = match gateway {
                Ok(gateway) => scan::scan_and_report(&gateway, &config, io::stdout().lock()).await,
                Err(err) => {
                    log::error!("Error setting up scan: {}", err);
                    report::write_report(&[], config.format, io::stdout().lock())
                }
            };
            if let Err(err) = result {
                log::error!("Error writing report: {}", err);
            }
        }

        Commands::Rsi {
            symbol,
            interval,
            limit,
            period,
        } => {
            let config = ScanConfig {
                interval,
                candle_limit: limit,
                rsi_period: period,
                ..ScanConfig::default()
            };
            let gateway = match config.validate().and_then(|_| build_gateway()) {
                Ok(gateway) => gateway,
                Err(err) => {
                    log::error!("Error setting up gateway: {}", err);
                    return;
                }
            };
            match scan::score(&gateway, &symbol, &config).await {
                Ok(rsi) => println!("Symbol: {}, RSI: {:.2}", symbol, rsi::round2(rsi)),
                Err(skip) => println!("Symbol: {}, RSI unavailable: {}", symbol, skip),
            }
        }
    }
}
