use crate::evaluate::debt::{percent_change, round2};
use crate::prices::PricePoint;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const SIMULATION_HORIZONS_YEARS: [u32; 5] = [1, 2, 3, 5, 10];

// Half-open search window around each target date, to skip weekends and holidays.
const WINDOW_DAYS: i64 = 5;

/// What one share bought `years_ago` would be worth at `current_price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub years_ago: u32,
    pub buy_price: Option<f64>,
    pub current_price: f64,
    pub return_pct: Option<f64>,
}

/// "If you bought one share earlier" table over the fixed horizons.
///
/// `history` may be in any order. A horizon with no bar inside its window yields `None`s.
pub fn holding_simulation(
    history: &[PricePoint],
    as_of: NaiveDate,
    current_price: f64,
) -> Vec<SimulationRow> {
    SIMULATION_HORIZONS_YEARS
        .iter()
        .map(|&years| {
            let target = as_of - Duration::days(365 * i64::from(years));
            let from = target - Duration::days(WINDOW_DAYS);
            let to = target + Duration::days(WINDOW_DAYS);

            let buy_price = history
                .iter()
                .filter(|p| p.date >= from && p.date < to)
                .min_by_key(|p| p.date)
                .map(|p| round2(p.close));

            SimulationRow {
                years_ago: years,
                buy_price,
                current_price,
                return_pct: buy_price.and_then(|buy| percent_change(buy, current_price)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(y: i32, m: u32, d: u32, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: close,
            close,
        }
    }

    #[test]
    fn picks_earliest_bar_in_window() {
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        // 365 days back from 2026-03-10 is 2025-03-10.
        let history = [
            point(2025, 3, 7, 80.0),
            point(2025, 3, 6, 79.999),
            point(2025, 3, 20, 10.0),
        ];

        let rows = holding_simulation(&history, as_of, 120.0);
        assert_eq!(rows.len(), SIMULATION_HORIZONS_YEARS.len());

        let one = rows[0];
        assert_eq!(one.years_ago, 1);
        assert_eq!(one.buy_price, Some(80.0));
        assert_eq!(one.return_pct, Some(50.0));
        assert_eq!(one.current_price, 120.0);
    }

    #[test]
    fn missing_horizons_are_none() {
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let rows = holding_simulation(&[], as_of, 120.0);
        assert!(rows.iter().all(|r| r.buy_price.is_none() && r.return_pct.is_none()));
        assert_eq!(
            rows.iter().map(|r| r.years_ago).collect::<Vec<_>>(),
            vec![1, 2, 3, 5, 10]
        );
    }

    #[test]
    fn window_end_is_exclusive() {
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let rows = holding_simulation(&[point(2025, 3, 15, 50.0)], as_of, 100.0);
        assert_eq!(rows[0].buy_price, None);
    }
}
