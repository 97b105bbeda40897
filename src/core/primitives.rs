use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts a timestamp into a real-valued year (`2000-07-02T00:00Z` is `≈2000.5`).
pub fn fractional_year(time: DateTime<Utc>) -> ChartResult<f64> {
    let year = time.year();
    let start = year_start(year)?;
    let end = year_start(year + 1)?;

    let elapsed = (time - start).num_milliseconds() as f64;
    let length = (end - start).num_milliseconds() as f64;
    Ok(f64::from(year) + elapsed / length)
}

fn year_start(year: i32) -> ChartResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| ChartError::InvalidData(format!("year {year} is out of range")))
}
