// =============================================================================
// Run report — signal table, performance summary, CSV export
// =============================================================================
//
// The textual table stands in for a plotted chart: price, both bands, and
// a marker column for buy/sell rows. The CSV export carries every derived
// column plus the date index so a charting collaborator can redraw the run.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::{IndicatorRow, Summary};

/// Print the filtered indicator table with buy/sell markers.
pub fn print_signal_table(rows: &[IndicatorRow]) {
    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>10}  {}",
        "Date", "Price", "SMA", "Upper", "Lower", "Signal"
    );
    for row in rows {
        let marker = if row.buy_signal {
            "▲ BUY"
        } else if row.sell_signal {
            "▼ SELL"
        } else {
            ""
        };
        println!(
            "{:>10} {:>10.2} {:>10.2} {:>10.2} {:>10.2}  {}",
            row.date, row.price, row.sma, row.upper_band, row.lower_band, marker
        );
    }
}

/// Print the performance summary for a run.
pub fn print_summary(symbol: &str, summary: &Summary) {
    println!();
    println!("Strategy Performance — {symbol}");
    println!("Initial Price:   {:.2}", summary.first_price);
    println!("Final Price:     {:.2}", summary.last_price);
    println!("Strategy Return: {:.2}%", summary.return_pct);
}

/// Write the indicator table as `{SYMBOL}_mean_reversion.csv` under `out_dir`
/// and return the path written.
pub fn export_csv(rows: &[IndicatorRow], symbol: &str, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(format!("{symbol}_mean_reversion.csv"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_rows(rows, file)?;
    Ok(path)
}

/// Serialize `rows` as CSV (header + one record per row) into `out`.
fn write_rows<W: Write>(rows: &[IndicatorRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer
            .serialize(row)
            .context("failed to serialize indicator row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(buy: bool, sell: bool) -> IndicatorRow {
        IndicatorRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            price: 184.25,
            sma: 190.5,
            std_dev: 2.5,
            upper_band: 195.5,
            lower_band: 185.5,
            buy_signal: buy,
            sell_signal: sell,
        }
    }

    fn csv_string(rows: &[IndicatorRow]) -> String {
        let mut buf = Vec::new();
        write_rows(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_lists_every_derived_column() {
        let out = csv_string(&[row(true, false)]);
        assert_eq!(
            out.lines().next().unwrap(),
            "date,price,sma,std_dev,upper_band,lower_band,buy_signal,sell_signal"
        );
    }

    #[test]
    fn rows_carry_date_index_and_signals() {
        let out = csv_string(&[row(true, false)]);
        assert_eq!(
            out.lines().nth(1).unwrap(),
            "2024-01-31,184.25,190.5,2.5,195.5,185.5,true,false"
        );
    }

    #[test]
    fn empty_table_still_emits_utf8() {
        // csv only writes the header once a record is serialized, so an empty
        // table produces an empty (still valid UTF-8) file.
        assert_eq!(csv_string(&[]), "");
    }
}
