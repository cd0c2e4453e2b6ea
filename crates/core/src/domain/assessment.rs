use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    GoodForLongTerm,
    ModerateOpportunity,
    HighRisk,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::GoodForLongTerm => "Good for long-term investment",
            Verdict::ModerateOpportunity => "Moderate opportunity",
            Verdict::HighRisk => "High risk at current levels",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Verdict::GoodForLongTerm => "Can be considered for SIP or gradual accumulation",
            Verdict::ModerateOpportunity => "Invest cautiously with partial exposure",
            Verdict::HighRisk => "Better to wait or avoid for now",
        }
    }
}

/// Pros/cons in rule order plus the verdict they select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub verdict: Verdict,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reasons: Vec<String>,
}

/// Percent change of total debt against one and three periods back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtTrend {
    pub one_year_pct: Option<f64>,
    pub three_year_pct: Option<f64>,
}

/// The two confidence scores are different numbers for the same input and are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceStrategy {
    /// Additive points per metric, capped at 100.
    WeightedSum,
    /// Starts at 100 and subtracts for weak ROE and high leverage.
    #[default]
    Penalty,
}

impl ConfidenceStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceStrategy::WeightedSum => "weighted",
            ConfidenceStrategy::Penalty => "penalty",
        }
    }
}

impl fmt::Display for ConfidenceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConfidenceStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted" | "weighted_sum" | "weighted-sum" => Ok(ConfidenceStrategy::WeightedSum),
            "penalty" => Ok(ConfidenceStrategy::Penalty),
            other => anyhow::bail!("unknown confidence strategy: {other} (expected penalty|weighted)"),
        }
    }
}

/// Everything one "analyze" run produces for a single security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub evaluation: Evaluation,
    pub confidence_score: u8,
    pub strategy: ConfidenceStrategy,
    pub risk: RiskAssessment,
    pub debt_trend: DebtTrend,
}
