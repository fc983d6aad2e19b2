use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct TickersResponse {
    pub code: String,
    pub msg: Option<String>,
    pub data: Option<Vec<TickerData>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TickerData {
    pub symbol: String,
    // Sent as a decimal string; tolerate plain numbers and nulls too.
    pub usdt_volume: Option<Value>,
}

/// Each row is `[ts, open, high, low, close, baseVolume, quoteVolume]`, all as strings.
pub type CandleRow = Vec<Value>;

/// The candles endpoint answers with a bare array on success and an envelope on failure.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum CandlesResponse {
    Rows(Vec<CandleRow>),
    Envelope {
        code: String,
        msg: Option<String>,
        data: Option<Vec<CandleRow>>,
    },
}

/// Reads a numeric field that may be a string, a number, or missing.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tickers_envelope_decodes() {
        let body = r#"{
            "code": "00000",
            "msg": "success",
            "requestTime": 1700000000000,
            "data": [
                {"symbol": "BTCUSDT_UMCBL", "last": "37000.5", "usdtVolume": "1234567890.12"},
                {"symbol": "XRPUSDT_UMCBL", "last": "0.61"}
            ]
        }"#;
        let resp: TickersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.code, "00000");
        let data = resp.data.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].symbol, "BTCUSDT_UMCBL");
        assert_eq!(number(data[0].usdt_volume.as_ref()), Some(1234567890.12));
        assert!(data[1].usdt_volume.is_none());
    }

    #[test]
    fn candles_bare_array_decodes() {
        let body = r#"[
            ["1700000000000", "1.0", "1.2", "0.9", "1.1", "100", "110"],
            ["1700003600000", "1.1", "1.3", "1.0", null, "80", "96"]
        ]"#;
        match serde_json::from_str::<CandlesResponse>(body).unwrap() {
            CandlesResponse::Rows(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(number(rows[0].get(4)), Some(1.1));
                assert_eq!(number(rows[1].get(4)), None);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn candles_error_envelope_decodes() {
        let body = r#"{"code": "40034", "msg": "Parameter symbol does not exist", "data": null}"#;
        match serde_json::from_str::<CandlesResponse>(body).unwrap() {
            CandlesResponse::Envelope { code, data, .. } => {
                assert_eq!(code, "40034");
                assert!(data.is_none());
            }
            other => panic!("expected envelope, got {:?}", other),
        }
    }

    #[test]
    fn number_rejects_garbage() {
        assert_eq!(number(Some(&json!("abc"))), None);
        assert_eq!(number(Some(&json!("NaN"))), None);
        assert_eq!(number(Some(&json!(null))), None);
        assert_eq!(number(None), None);
        assert_eq!(number(Some(&json!(42))), Some(42.0));
        assert_eq!(number(Some(&json!(" 7.5 "))), Some(7.5));
    }
}
