use crate::domain::{RiskAssessment, RiskLevel, StockSnapshot};

const HIGH_LEVERAGE: f64 = 1.0;
const LOW_CONFIDENCE: u8 = 50;

/// Beginner-oriented risk label from debt direction, leverage and the confidence score.
pub fn classify_risk(
    snapshot: &StockSnapshot,
    confidence_score: u8,
    debt_trend_1y: Option<f64>,
    debt_trend_3y: Option<f64>,
) -> RiskAssessment {
    let mut reasons = Vec::new();

    let rising = |v: Option<f64>| v.is_some_and(|pct| pct > 0.0);
    if rising(debt_trend_1y) || rising(debt_trend_3y) {
        reasons.push("Debt is increasing".to_string());
    }

    if snapshot.debt_to_equity.is_some_and(|de| de > HIGH_LEVERAGE) {
        reasons.push("High debt to equity ratio".to_string());
    }

    if confidence_score < LOW_CONFIDENCE {
        reasons.push("Low confidence score".to_string());
    }

    let level = match reasons.len() {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    if level == RiskLevel::Low {
        reasons.push("No major beginner risks".to_string());
    }

    RiskAssessment { level, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_flags_is_high() {
        let s = StockSnapshot {
            debt_to_equity: Some(1.5),
            ..Default::default()
        };
        let r = classify_risk(&s, 40, Some(10.0), None);
        assert_eq!(r.level, RiskLevel::High);
        assert_eq!(
            r.reasons,
            vec![
                "Debt is increasing",
                "High debt to equity ratio",
                "Low confidence score",
            ]
        );
    }

    #[test]
    fn single_flag_is_medium() {
        let r = classify_risk(&StockSnapshot::default(), 70, None, Some(3.5));
        assert_eq!(r.level, RiskLevel::Medium);
        assert_eq!(r.reasons, vec!["Debt is increasing"]);
    }

    #[test]
    fn no_flags_is_low_with_default_reason() {
        let s = StockSnapshot {
            debt_to_equity: Some(1.0),
            ..Default::default()
        };
        let r = classify_risk(&s, 50, Some(-4.0), Some(0.0));
        assert_eq!(r.level, RiskLevel::Low);
        assert_eq!(r.reasons, vec!["No major beginner risks"]);
    }

    #[test]
    fn two_flags_is_high() {
        let r = classify_risk(&StockSnapshot::default(), 10, Some(1.0), None);
        assert_eq!(r.level, RiskLevel::High);
        assert_eq!(r.reasons.len(), 2);
    }
}
