pub mod confidence;
pub mod debt;
pub mod risk;
pub mod rules;

pub use confidence::{confidence_score, penalty_confidence, weighted_sum_confidence};
pub use debt::debt_trend;
pub use risk::classify_risk;
pub use rules::evaluate;

use crate::domain::{Assessment, ConfidenceStrategy, EvaluationError, StockSnapshot};

/// Full analysis of one security: verdict, confidence under `strategy`, debt trend and risk.
///
/// `debt_history` is total debt ordered most recent first; pass an empty slice when unknown.
pub fn assess(
    snapshot: &StockSnapshot,
    debt_history: &[f64],
    strategy: ConfidenceStrategy,
) -> Result<Assessment, EvaluationError> {
    let evaluation = evaluate(snapshot)?;
    let confidence_score = confidence_score(snapshot, strategy)?;
    let trend = debt_trend(debt_history);
    let risk = classify_risk(
        snapshot,
        confidence_score,
        trend.one_year_pct,
        trend.three_year_pct,
    );

    tracing::debug!(
        company = snapshot.company_name.as_deref().unwrap_or("-"),
        pros = evaluation.pros.len(),
        cons = evaluation.cons.len(),
        verdict = ?evaluation.verdict,
        confidence_score,
        %strategy,
        risk = ?risk.level,
        "assessed snapshot"
    );

    Ok(Assessment {
        evaluation,
        confidence_score,
        strategy,
        risk,
        debt_trend: trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLevel, Verdict};

    #[test]
    fn empty_snapshot_under_both_strategies() {
        let s = StockSnapshot::default();

        let weighted = assess(&s, &[], ConfidenceStrategy::WeightedSum).unwrap();
        assert_eq!(weighted.confidence_score, 0);
        assert_eq!(weighted.evaluation.verdict, Verdict::ModerateOpportunity);
        assert_eq!(weighted.risk.level, RiskLevel::Medium);
        assert_eq!(weighted.risk.reasons, vec!["Low confidence score"]);

        let penalty = assess(&s, &[], ConfidenceStrategy::Penalty).unwrap();
        assert_eq!(penalty.confidence_score, 70);
        assert_eq!(penalty.risk.level, RiskLevel::Low);
    }

    #[test]
    fn leveraged_company_with_rising_debt() {
        let s = StockSnapshot {
            company_name: Some("Leveraged Industries".to_string()),
            roe: Some(0.08),
            debt_to_equity: Some(1.8),
            pe_ratio: Some(45.0),
            one_year_return_pct: Some(-12.0),
            ..Default::default()
        };

        let a = assess(&s, &[150.0, 120.0, 110.0, 100.0], ConfidenceStrategy::Penalty).unwrap();
        assert_eq!(a.confidence_score, 40);
        assert_eq!(a.debt_trend.one_year_pct, Some(25.0));
        assert_eq!(a.debt_trend.three_year_pct, Some(50.0));
        assert_eq!(a.risk.level, RiskLevel::High);
        assert_eq!(a.risk.reasons.len(), 3);
        assert_eq!(a.evaluation.verdict, Verdict::HighRisk);
        assert_eq!(a.strategy, ConfidenceStrategy::Penalty);
    }

    #[test]
    fn invalid_snapshot_aborts_assessment() {
        let s = StockSnapshot {
            debt_to_equity: Some(f64::NAN),
            ..Default::default()
        };
        let err = assess(&s, &[], ConfidenceStrategy::Penalty).unwrap_err();
        assert_eq!(err.field(), "debt_to_equity");
    }
}
