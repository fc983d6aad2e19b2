use crate::{
    model::{self, Skip},
    rsi,
};

/// Keeps the symbols whose RSI is above `overbought` or below `oversold`, ranked by ascending
/// rounded RSI. Symbols without a value are dropped. Ties keep their input order.
pub fn select(
    scored: Vec<(model::Ticker, Result<f64, Skip>)>,
    overbought: f64,
    oversold: f64,
) -> Vec<model::SignalEntry> {
    let mut entries: Vec<model::SignalEntry> = Vec::new();
    for (ticker, rsi) in scored {
        let Ok(rsi) = rsi else { continue };
        if !(rsi > overbought || rsi < oversold) {
            continue;
        }
        let entry = model::SignalEntry {
            symbol: ticker.symbol,
            volume: ticker.usdt_volume,
            rsi: rsi::round2(rsi),
        };
        // A repeated symbol overwrites the earlier entry and keeps its slot.
        match entries.iter_mut().find(|e| e.symbol == entry.symbol) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    // sort_by is stable
    entries.sort_by(|a, b| a.rsi.total_cmp(&b.rsi));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(symbol: &str, rsi: Result<f64, Skip>) -> (model::Ticker, Result<f64, Skip>) {
        (
            model::Ticker {
                symbol: symbol.into(),
                usdt_volume: 10_000_000.0,
            },
            rsi,
        )
    }

    #[test]
    fn neutral_band_is_excluded() {
        let entries = select(
            vec![
                scored("A", Ok(70.0)),
                scored("B", Ok(30.0)),
                scored("C", Ok(50.0)),
                scored("D", Ok(70.001)),
                scored("E", Ok(29.5)),
            ],
            70.0,
            30.0,
        );
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["E", "D"]);
        // The band is checked on the raw value; the stored value is rounded afterwards.
        assert_eq!(entries[1].rsi, 70.0);
        assert_eq!(entries[0].rsi, 29.5);
    }

    #[test]
    fn unavailable_symbols_are_dropped() {
        let entries = select(
            vec![scored("A", Err(Skip::NoData)), scored("B", Ok(85.0))],
            70.0,
            30.0,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symbol, "B");
    }

    #[test]
    fn sorted_ascending_and_stable_on_ties() {
        let entries = select(
            vec![
                scored("HIGH", Ok(91.2)),
                scored("TIE1", Ok(12.341)),
                scored("LOW", Ok(3.0)),
                scored("TIE2", Ok(12.339)),
                scored("MID", Ok(75.0)),
            ],
            70.0,
            30.0,
        );
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        // Both ties round to 12.34 and keep input order.
        assert_eq!(symbols, ["LOW", "TIE1", "TIE2", "MID", "HIGH"]);
        assert!(entries.windows(2).all(|w| w[0].rsi <= w[1].rsi));
    }

    #[test]
    fn repeated_symbol_appears_once() {
        let entries = select(
            vec![scored("A", Ok(80.0)), scored("B", Ok(10.0)), scored("A", Ok(90.0))],
            70.0,
            30.0,
        );
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["B", "A"]);
        assert_eq!(entries[1].rsi, 90.0);
    }

    #[test]
    fn stored_rsi_is_rounded() {
        let entries = select(vec![scored("A", Ok(71.23456))], 70.0, 30.0);
        assert_eq!(entries[0].rsi, 71.23);
        assert_eq!(entries[0].volume, 10_000_000.0);
    }
}
