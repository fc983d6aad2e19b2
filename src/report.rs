use std::io::Write;

use csv::Writer;

use crate::{config::OutputFormat, constants, model};

/// One report line per entry, in the order given.
pub fn format_line(entry: &model::SignalEntry) -> String {
    format!(
        "Symbol: {}, USDT Volume: {}, RSI: {:.2}",
        entry.symbol, entry.volume, entry.rsi
    )
}

/// Writes the ranked entries, or the empty marker when there are none.
pub fn write_report<W: Write>(
    entries: &[model::SignalEntry],
    format: OutputFormat,
    mut out: W,
) -> model::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{}", constants::EMPTY_REPORT)?;
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{}", format_line(entry))?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = Writer::from_writer(out);
            writer.write_record(["symbol", "usdt_volume", "rsi"])?;
            for entry in entries {
                let volume = entry.volume.to_string();
                let rsi = format!("{:.2}", entry.rsi);
                writer.write_record([entry.symbol.as_str(), volume.as_str(), rsi.as_str()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
