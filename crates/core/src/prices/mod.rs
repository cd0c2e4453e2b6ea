pub mod simulation;

pub use simulation::{holding_simulation, SimulationRow, SIMULATION_HORIZONS_YEARS};

use crate::evaluate::debt::percent_change;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One daily bar of price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
}

/// Trailing return over an oldest-first history: first open to last close, in percent.
pub fn one_year_return_pct(history: &[PricePoint]) -> Option<f64> {
    let first = history.first()?;
    let last = history.last()?;
    percent_change(first.open, last.close)
}

/// Trailing one-year return as of `as_of`: only bars dated within the 365 days up to and
/// including `as_of` count, so a multi-year history still yields a one-year figure.
pub fn trailing_year_return_pct(history: &[PricePoint], as_of: NaiveDate) -> Option<f64> {
    let start = as_of - Duration::days(365);
    let mut window: Vec<PricePoint> = history
        .iter()
        .filter(|p| p.date >= start && p.date <= as_of)
        .copied()
        .collect();
    window.sort_by_key(|p| p.date);
    one_year_return_pct(&window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(d: u32, open: f64, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            open,
            close,
        }
    }

    #[test]
    fn return_uses_first_open_and_last_close() {
        let h = [bar(2, 200.0, 205.0), bar(3, 206.0, 210.0), bar(6, 211.0, 230.0)];
        assert_eq!(one_year_return_pct(&h), Some(15.0));
    }

    #[test]
    fn trailing_return_ignores_bars_older_than_a_year() {
        let at = |y: i32, m: u32, d: u32, open: f64, close: f64| PricePoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open,
            close,
        };
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let history = [
            at(2016, 3, 10, 1000.0, 1010.0),
            at(2021, 3, 10, 2000.0, 2050.0),
            at(2025, 3, 10, 2500.0, 2600.0),
            at(2025, 9, 1, 2800.0, 2900.0),
            at(2026, 3, 10, 3100.0, 3125.0),
        ];

        // Whole file would be 1000 -> 3125; the trailing year is 2500 -> 3125.
        assert_eq!(one_year_return_pct(&history), Some(212.5));
        assert_eq!(trailing_year_return_pct(&history, as_of), Some(25.0));
    }

    #[test]
    fn trailing_return_skips_bars_after_as_of() {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let h = [bar(2, 200.0, 205.0), bar(3, 206.0, 210.0), bar(6, 211.0, 230.0)];
        assert_eq!(trailing_year_return_pct(&h, as_of), Some(5.0));
        assert_eq!(
            trailing_year_return_pct(&h, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            None
        );
    }

    #[test]
    fn empty_history_has_no_return() {
        assert_eq!(one_year_return_pct(&[]), None);
        assert_eq!(one_year_return_pct(&[bar(2, 0.0, 5.0)]), None);
    }
}
