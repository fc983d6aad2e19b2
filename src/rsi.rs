//! Relative Strength Index over a single window of closes.
//!
//! This is the simple-average variant: one window of `period` price changes, no Wilder
//! smoothing across later bars. The window is the *first* `period` changes of the series,
//! so with more than `period + 1` closes the most recent changes do not contribute.

use crate::model::Skip;

/// Computes the RSI of `closes` over `period` price changes.
///
/// Needs `period + 1` closes to produce a value. An RSI of exactly 0 (no gains in the window)
/// is reported as [`Skip::ZeroRsi`] rather than as a value.
pub fn compute(closes: &[f64], period: usize) -> Result<f64, Skip> {
    if closes.len() < period {
        return Err(Skip::TooShort {
            len: closes.len(),
            min: period,
        });
    }
    for (i, &close) in closes.iter().enumerate() {
        if !close.is_finite() {
            return Err(Skip::MissingClose(i));
        }
        if close <= 0.0 {
            return Err(Skip::NonPositiveClose(i, close));
        }
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    // Rolling mean aligned at index period - 1, i.e. the mean of the first `period` changes.
    let window = deltas.get(..period).ok_or(Skip::InsufficientDeltas {
        len: deltas.len(),
        period,
    })?;

    let avg_gain = window.iter().map(|d| d.max(0.0)).sum::<f64>() / period as f64;
    let avg_loss = window.iter().map(|d| (-d).max(0.0)).sum::<f64>() / period as f64;

    let rsi = if avg_loss == 0.0 {
        if avg_gain > 0.0 { 100.0 } else { 0.0 }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    if !rsi.is_finite() {
        return Err(Skip::NotFinite);
    }
    if rsi == 0.0 {
        return Err(Skip::ZeroRsi);
    }
    Ok(rsi)
}

/// Rounds to two decimal places for reporting.
///
/// Rounds the exact binary value through its decimal expansion, so exact ties such as 12.125
/// go to the even digit (12.12) instead of away from zero.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
