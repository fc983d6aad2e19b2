use super::response::{self, CandleRow};
use crate::{
    config::GatewayConfig,
    constants,
    gateway::MarketDataGateway,
    http::client::{self, RequestError},
    model::{self, ScanError},
};

const TICKERS_PATH: &str = "api/mix/v1/market/tickers";
const CANDLES_PATH: &str = "api/mix/v1/market/candles";

// Checks the code returned in the envelope and returns an error if it is not the success code.
fn check_code(code: &str, msg: &Option<String>) -> Result<(), RequestError> {
    match code {
        constants::SUCCESS_CODE => Ok(()),
        _ => Err(RequestError::ApiError {
            code: code.into(),
            msg: msg.clone().unwrap_or_else(|| "Unknown error".into()),
        }),
    }
}

/// REST gateway for Bitget USDT-margined futures market data.
pub struct Bitget {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl Bitget {
    pub fn new(config: GatewayConfig) -> model::Result<Self> {
        let client = client::build(config.timeout_secs)?;
        Ok(Self { client, config })
    }
}

impl MarketDataGateway for Bitget {
    async fn snapshot(&self) -> model::Result<Vec<model::Ticker>> {
        let url = self.config.endpoint(TICKERS_PATH)?;
        let resp = client::get::<response::TickersResponse>(
            &self.client,
            url.as_str(),
            &[("productType", self.config.product_type.clone())],
        )
        .await?;
        check_code(&resp.code, &resp.msg)?;

        tickers_from(resp.data.unwrap_or_default())
    }

    async fn history(
        &self,
        symbol: &str,
        interval: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<model::Candle>, RequestError> {
        let url = self
            .config
            .endpoint(CANDLES_PATH)
            .map_err(|e| RequestError::Other(e.to_string()))?;
        let resp = client::get::<response::CandlesResponse>(
            &self.client,
            url.as_str(),
            &[
                ("symbol", symbol.to_string()),
                ("granularity", interval.to_string()),
                ("startTime", start_ms.to_string()),
                ("endTime", end_ms.to_string()),
            ],
        )
        .await?;

        let rows = match resp {
            response::CandlesResponse::Rows(rows) => rows,
            response::CandlesResponse::Envelope { code, msg, data } => {
                check_code(&code, &msg)?;
                data.unwrap_or_default()
            }
        };
        Ok(rows.iter().map(candle_from).collect())
    }
}

/// Converts the raw ticker list. A missing volume counts as zero; one that is present but not a
/// number makes the whole snapshot malformed.
pub fn tickers_from(data: Vec<response::TickerData>) -> model::Result<Vec<model::Ticker>> {
    let mut tickers = Vec::with_capacity(data.len());
    for raw in data {
        let usdt_volume = match &raw.usdt_volume {
            None | Some(serde_json::Value::Null) => 0.0,
            Some(value) => response::number(Some(value)).ok_or_else(|| {
                ScanError::MalformedTicker(raw.symbol.clone(), value.to_string())
            })?,
        };
        tickers.push(model::Ticker {
            symbol: raw.symbol,
            usdt_volume,
        });
    }
    Ok(tickers)
}

fn candle_from(row: &CandleRow) -> model::Candle {
    model::Candle {
        timestamp: response::number(row.first()).map(|t| t as i64),
        open: response::number(row.get(1)),
        high: response::number(row.get(2)),
        low: response::number(row.get(3)),
        close: response::number(row.get(4)),
        base_volume: response::number(row.get(5)),
        quote_volume: response::number(row.get(6)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_code_passes() {
        assert!(check_code("00000", &None).is_ok());
        assert!(matches!(
            check_code("40001", &Some("bad".into())),
            Err(RequestError::ApiError { .. })
        ));
    }

    #[test]
    fn missing_volume_reads_as_zero() {
        let data = vec![
            response::TickerData {
                symbol: "ETHUSDT_UMCBL".into(),
                usdt_volume: Some(json!("98765432.1")),
            },
            response::TickerData {
                symbol: "DOGEUSDT_UMCBL".into(),
                usdt_volume: None,
            },
        ];
        let tickers = tickers_from(data).unwrap();
        assert_eq!(tickers[0].usdt_volume, 98765432.1);
        assert_eq!(tickers[1].usdt_volume, 0.0);
    }

    #[test]
    fn null_volume_reads_as_zero() {
        let data = vec![response::TickerData {
            symbol: "NEWUSDT_UMCBL".into(),
            usdt_volume: Some(serde_json::Value::Null),
        }];
        assert_eq!(tickers_from(data).unwrap()[0].usdt_volume, 0.0);
    }

    #[test]
    fn unparsable_volume_is_malformed_snapshot() {
        let data = vec![response::TickerData {
            symbol: "ETHUSDT_UMCBL".into(),
            usdt_volume: Some(json!("lots")),
        }];
        assert!(matches!(
            tickers_from(data),
            Err(ScanError::MalformedTicker(symbol, _)) if symbol == "ETHUSDT_UMCBL"
        ));
    }

    #[test]
    fn short_row_leaves_fields_empty() {
        let candle = candle_from(&vec![json!("1700000000000"), json!("1.5")]);
        assert_eq!(candle.timestamp, Some(1_700_000_000_000));
        assert_eq!(candle.open, Some(1.5));
        assert_eq!(candle.close, None);
        assert_eq!(candle.quote_volume, None);
    }
}
