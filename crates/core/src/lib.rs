pub mod domain;
pub mod evaluate;
pub mod prices;
pub mod report;
pub mod storage;

pub use domain::{Assessment, ConfidenceStrategy, EvaluationError, StockSnapshot};
pub use evaluate::assess;

pub mod config {
    use crate::domain::ConfidenceStrategy;
    use anyhow::Context;

    const DEFAULT_HISTORY_LIMIT: usize = 20;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub database_url: Option<String>,
        pub sentry_dsn: Option<String>,
        pub confidence_strategy: ConfidenceStrategy,
        pub history_limit: usize,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Builds settings from any key lookup. Set-but-malformed values are errors.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let set = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

            let confidence_strategy = match set("CONFIDENCE_STRATEGY") {
                Some(s) => s
                    .parse()
                    .context("CONFIDENCE_STRATEGY must be 'penalty' or 'weighted'")?,
                None => ConfidenceStrategy::default(),
            };

            let history_limit = match set("CONFIDENCE_HISTORY_LIMIT") {
                Some(s) => s
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("CONFIDENCE_HISTORY_LIMIT must be a positive integer (got {s:?})"))?,
                None => DEFAULT_HISTORY_LIMIT,
            };
            anyhow::ensure!(history_limit >= 1, "CONFIDENCE_HISTORY_LIMIT must be >= 1");

            Ok(Self {
                database_url: lookup("DATABASE_URL"),
                sentry_dsn: lookup("SENTRY_DSN"),
                confidence_strategy,
                history_limit,
            })
        }

        pub fn require_database_url(&self) -> anyhow::Result<&str> {
            self.database_url
                .as_deref()
                .context("DATABASE_URL is required")
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn defaults_when_unset() {
            let s = settings(&[]).unwrap();
            assert_eq!(s.confidence_strategy, ConfidenceStrategy::Penalty);
            assert_eq!(s.history_limit, 20);
            assert!(s.require_database_url().is_err());
        }

        #[test]
        fn parses_set_values() {
            let s = settings(&[
                ("CONFIDENCE_STRATEGY", "weighted"),
                ("CONFIDENCE_HISTORY_LIMIT", " 50 "),
                ("DATABASE_URL", "postgres://localhost/insight"),
            ])
            .unwrap();
            assert_eq!(s.confidence_strategy, ConfidenceStrategy::WeightedSum);
            assert_eq!(s.history_limit, 50);
            assert_eq!(s.require_database_url().unwrap(), "postgres://localhost/insight");
        }

        #[test]
        fn malformed_values_are_errors() {
            assert!(settings(&[("CONFIDENCE_HISTORY_LIMIT", "twenty")]).is_err());
            assert!(settings(&[("CONFIDENCE_HISTORY_LIMIT", "0")]).is_err());
            assert!(settings(&[("CONFIDENCE_STRATEGY", "median")]).is_err());
        }
    }
}
