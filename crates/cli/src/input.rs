use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use stockinsight_core::prices::{PricePoint, SimulationRow};
use stockinsight_core::StockSnapshot;

pub fn load_snapshot(path: &Path) -> anyhow::Result<StockSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("snapshot file is not valid JSON: {}", path.display()))?;
    let snapshot = StockSnapshot::from_json(&value)
        .with_context(|| format!("invalid snapshot in {}", path.display()))?;

    if snapshot.is_empty() {
        tracing::warn!(path = %path.display(), "snapshot has no metrics; every rule will be skipped");
    }
    Ok(snapshot)
}

pub fn load_price_history(path: &Path) -> anyhow::Result<Vec<PricePoint>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read price history {}", path.display()))?;
    let mut points: Vec<PricePoint> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse price history {}", path.display()))?;
    points.sort_by_key(|p| p.date);
    Ok(points)
}

pub fn ticker_from_path(path: &Path) -> anyhow::Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .with_context(|| format!("cannot derive ticker from {}; pass --ticker", path.display()))?;
    Ok(stem.to_string())
}

/// Parses "120,100,95.5,80" (most recent first). Blank entries are rejected rather than skipped
/// so the periods keep their positions.
pub fn parse_debt_history(s: &str) -> anyhow::Result<Vec<f64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .enumerate()
        .map(|(i, part)| {
            let part = part.trim();
            let v = part
                .parse::<f64>()
                .with_context(|| format!("debt history entry {i} is not a number: {part:?}"))?;
            anyhow::ensure!(v.is_finite(), "debt history entry {i} is not finite");
            Ok(v)
        })
        .collect()
}

pub fn resolve_as_of_date(arg: Option<&str>, now_utc: DateTime<Utc>) -> anyhow::Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid --as-of-date {s:?} (expected YYYY-MM-DD)")),
        None => Ok(now_utc.date_naive()),
    }
}

pub fn render_simulation(rows: &[SimulationRow]) -> String {
    let mut out = String::from("If You Bought 1 Share Earlier\n");
    out.push_str(&format!(
        "{:<16} {:>14} {:>14} {:>10}\n",
        "Investment Time", "Buy Price", "Value Today", "Return %"
    ));
    for row in rows {
        let buy = row
            .buy_price
            .map_or_else(|| "N/A".to_string(), |v| format!("₹ {v}"));
        let ret = row
            .return_pct
            .map_or_else(|| "N/A".to_string(), |v| format!("{v} %"));
        out.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>10}\n",
            format!("{} Years Ago", row.years_ago),
            buy,
            format!("₹ {}", row.current_price),
            ret
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_debt_history_in_order() {
        assert_eq!(parse_debt_history("120, 100,95.5").unwrap(), vec![120.0, 100.0, 95.5]);
        assert!(parse_debt_history("").unwrap().is_empty());
        assert!(parse_debt_history("120,,80").is_err());
        assert!(parse_debt_history("120,abc").is_err());
        assert!(parse_debt_history("NaN").is_err());
    }

    #[test]
    fn ticker_defaults_to_file_stem() {
        assert_eq!(ticker_from_path(Path::new("/tmp/TCS.NS.json")).unwrap(), "TCS.NS");
    }

    #[test]
    fn as_of_date_defaults_to_utc_today() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 23, 30, 0).unwrap();
        assert_eq!(
            resolve_as_of_date(None, now).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
        assert_eq!(
            resolve_as_of_date(Some("2025-12-31"), now).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert!(resolve_as_of_date(Some("31/12/2025"), now).is_err());
    }

    #[test]
    fn simulation_table_prints_na_for_missing_horizons() {
        let rows = [
            SimulationRow {
                years_ago: 1,
                buy_price: Some(80.0),
                current_price: 120.0,
                return_pct: Some(50.0),
            },
            SimulationRow {
                years_ago: 10,
                buy_price: None,
                current_price: 120.0,
                return_pct: None,
            },
        ];
        let text = render_simulation(&rows);
        assert!(text.contains("1 Years Ago"));
        assert!(text.contains("₹ 80"));
        assert!(text.contains("50 %"));
        assert!(text.lines().last().unwrap().contains("N/A"));
    }
}
