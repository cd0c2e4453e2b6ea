pub mod assessment;
pub mod error;
pub mod snapshot;

pub use assessment::{
    Assessment, ConfidenceStrategy, DebtTrend, Evaluation, RiskAssessment, RiskLevel, Verdict,
};
pub use error::EvaluationError;
pub use snapshot::StockSnapshot;
