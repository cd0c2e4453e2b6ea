use crate::domain::{Assessment, StockSnapshot};
use crate::evaluate::debt::round2;

const CRORE: f64 = 1.0e7;

/// Plain-text summary of an assessment, the body a notification sink would send.
pub fn render_report(ticker: &str, snapshot: &StockSnapshot, assessment: &Assessment) -> String {
    let debt = assessment.debt_trend;
    let evaluation = &assessment.evaluation;

    let mut lines = vec![
        format!("Stock Insight: {ticker}"),
        String::new(),
        format!("Company Name: {}", snapshot.company_name.as_deref().unwrap_or("N/A")),
        format!("Current Price: {}", rupees(snapshot.current_price)),
        format!("1Y Return (%): {}", plain(snapshot.one_year_return_pct)),
        String::new(),
        format!("PE Ratio: {}", plain(snapshot.pe_ratio)),
        format!("Market Cap: {}", crore(snapshot.market_cap)),
        format!("ROE: {}", roe_percent(snapshot.roe)),
        String::new(),
        format!("Total Debt: {}", crore(snapshot.total_debt)),
        format!("Debt to Equity: {}", plain(snapshot.debt_to_equity)),
        format!("Debt Change (1Y): {}", percent(debt.one_year_pct)),
        format!("Debt Change (3Y): {}", percent(debt.three_year_pct)),
        String::new(),
        format!("52W High: {}", rupees(snapshot.week52_high)),
        format!("52W Low: {}", rupees(snapshot.week52_low)),
        String::new(),
        format!(
            "Confidence Score ({}): {} / 100",
            assessment.strategy, assessment.confidence_score
        ),
        format!("Beginner Risk Level: {}", assessment.risk.level.label()),
    ];
    lines.extend(bullets(&assessment.risk.reasons));
    lines.push(String::new());

    lines.push("Pros:".to_string());
    lines.extend(bullets_or_none(&evaluation.pros));
    lines.push("Cons:".to_string());
    lines.extend(bullets_or_none(&evaluation.cons));
    lines.push(String::new());

    lines.push(format!("Verdict: {}", evaluation.verdict.label()));
    lines.push(format!("Investment Advice: {}", evaluation.advice));
    lines.push(String::new());
    lines.push("Note: Educational purpose only.".to_string());

    lines.join("\n")
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("  - {item}"))
}

fn bullets_or_none(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec!["  (none)".to_string()];
    }
    bullets(items).collect()
}

pub fn rupees(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("₹ {}", round2(v)))
}

pub fn crore(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("₹ {} Cr", round2(v / CRORE)))
}

pub fn roe_percent(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{} %", round2(v * 100.0)))
}

fn percent(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{v} %"))
}

fn plain(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}
