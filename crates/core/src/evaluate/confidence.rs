use crate::domain::{ConfidenceStrategy, EvaluationError, StockSnapshot};

const MAX_SCORE: u32 = 100;
const PENALTY_STEP: i32 = 30;

pub fn confidence_score(
    snapshot: &StockSnapshot,
    strategy: ConfidenceStrategy,
) -> Result<u8, EvaluationError> {
    match strategy {
        ConfidenceStrategy::WeightedSum => weighted_sum_confidence(snapshot),
        ConfidenceStrategy::Penalty => penalty_confidence(snapshot),
    }
}

/// Additive score. Each metric contributes its bracket's points, or nothing when absent.
///
/// | metric | points |
/// |---|---|
/// | ROE | 25 / 18 / 10 / 0 |
/// | debt to equity | 20 / 12 / 5 |
/// | P/E | 15 / 8 / 3 |
/// | price in 52-week range | 15 / 10 / 5 |
/// | 1Y return | 10 / 6 / 2 |
pub fn weighted_sum_confidence(snapshot: &StockSnapshot) -> Result<u8, EvaluationError> {
    snapshot.validate()?;

    let mut score: u32 = 0;

    if let Some(roe) = snapshot.roe {
        let roe_pct = roe * 100.0;
        score += if roe_pct >= 25.0 {
            25
        } else if roe_pct >= 15.0 {
            18
        } else if roe_pct >= 10.0 {
            10
        } else {
            0
        };
    }

    if let Some(de) = snapshot.debt_to_equity {
        score += if de < 0.5 {
            20
        } else if de < 1.0 {
            12
        } else {
            5
        };
    }

    if let Some(pe) = snapshot.pe_ratio {
        score += if pe < 25.0 {
            15
        } else if pe < 40.0 {
            8
        } else {
            3
        };
    }

    if let Some((price, high, low)) = snapshot.price_range() {
        score += if price < low * 1.15 {
            15
        } else if price < high * 0.9 {
            10
        } else {
            5
        };
    }

    if let Some(ret) = snapshot.one_year_return_pct {
        score += if ret > 15.0 {
            10
        } else if ret > 0.0 {
            6
        } else {
            2
        };
    }

    Ok(score.min(MAX_SCORE) as u8)
}

/// Subtractive score starting from 100. A missing ROE counts as weak.
pub fn penalty_confidence(snapshot: &StockSnapshot) -> Result<u8, EvaluationError> {
    snapshot.validate()?;

    let mut score: i32 = MAX_SCORE as i32;

    match snapshot.roe {
        Some(roe) if roe * 100.0 >= 15.0 => {}
        _ => score -= PENALTY_STEP,
    }

    if snapshot.debt_to_equity.is_some_and(|de| de > 1.0) {
        score -= PENALTY_STEP;
    }

    Ok(score.clamp(0, MAX_SCORE as i32) as u8)
}
