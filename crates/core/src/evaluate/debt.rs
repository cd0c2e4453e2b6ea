use crate::domain::DebtTrend;

/// Debt trend from a total-debt series ordered most recent first.
///
/// Short series and non-positive earlier values give `None` for that horizon.
pub fn debt_trend(series: &[f64]) -> DebtTrend {
    let Some(&current) = series.first() else {
        return DebtTrend::default();
    };

    let back = |periods: usize| {
        series
            .get(periods)
            .and_then(|&old| percent_change(old, current))
    };

    DebtTrend {
        one_year_pct: back(1),
        three_year_pct: back(3),
    }
}

/// `(new - old) / old * 100` rounded to two decimals, guarded against a zero, negative or
/// non-finite base.
pub fn percent_change(old: f64, new: f64) -> Option<f64> {
    if !old.is_finite() || !new.is_finite() || old <= 0.0 {
        return None;
    }
    Some(round2((new - old) / old * 100.0))
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
