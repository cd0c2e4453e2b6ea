use crate::domain::{Evaluation, EvaluationError, StockSnapshot, Verdict};

const ROE_EXCELLENT_PCT: f64 = 25.0;
const ROE_STRONG_PCT: f64 = 15.0;
const LOW_DEBT_TO_EQUITY: f64 = 0.5;
const HIGH_DEBT_TO_EQUITY: f64 = 1.0;
const REASONABLE_PE: f64 = 25.0;
const EXPENSIVE_PE: f64 = 40.0;
const GOOD_RETURN_PCT: f64 = 10.0;
const NEAR_LOW_FACTOR: f64 = 1.15;
const NEAR_HIGH_FACTOR: f64 = 0.9;

/// Runs the pros/cons rule set and picks a verdict.
///
/// Each rule group emits at most one finding, and only when its inputs are present.
pub fn evaluate(snapshot: &StockSnapshot) -> Result<Evaluation, EvaluationError> {
    snapshot.validate()?;

    let mut pros = Vec::new();
    let mut cons = Vec::new();

    if let Some(roe) = snapshot.roe {
        let roe_pct = roe * 100.0;
        if roe_pct >= ROE_EXCELLENT_PCT {
            pros.push("Excellent profitability (ROE above 25%)");
        } else if roe_pct >= ROE_STRONG_PCT {
            pros.push("Strong profitability (ROE above 15%)");
        } else {
            cons.push("Low profitability");
        }
    }

    if let Some(de) = snapshot.debt_to_equity {
        if de < LOW_DEBT_TO_EQUITY {
            pros.push("Low debt improves financial stability");
        } else if de > HIGH_DEBT_TO_EQUITY {
            cons.push("High debt increases risk");
        }
    }

    if let Some(pe) = snapshot.pe_ratio {
        if pe < REASONABLE_PE {
            pros.push("Valuation is reasonable for long-term investors");
        } else if pe > EXPENSIVE_PE {
            cons.push("Stock valuation looks expensive");
        }
    }

    if let Some(ret) = snapshot.one_year_return_pct {
        if ret > GOOD_RETURN_PCT {
            pros.push("Good price performance in last 1 year");
        } else if ret < 0.0 {
            cons.push("Negative return in last 1 year");
        }
    }

    if let Some((price, high, low)) = snapshot.price_range() {
        if price < low * NEAR_LOW_FACTOR {
            pros.push("Trading near lower range (better margin of safety)");
        } else if price > high * NEAR_HIGH_FACTOR {
            cons.push("Trading near upper range (limited upside)");
        }
    }

    let verdict = select_verdict(pros.len(), cons.len());

    Ok(Evaluation {
        pros: pros.into_iter().map(str::to_string).collect(),
        cons: cons.into_iter().map(str::to_string).collect(),
        verdict,
        advice: verdict.advice().to_string(),
    })
}

pub fn select_verdict(pros: usize, cons: usize) -> Verdict {
    if pros >= 4 && cons <= 1 {
        Verdict::GoodForLongTerm
    } else if cons >= 3 {
        Verdict::HighRisk
    } else {
        Verdict::ModerateOpportunity
    }
}
