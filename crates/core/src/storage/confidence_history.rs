use crate::domain::ConfidenceStrategy;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the append-only confidence log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub ticker: String,
    pub company_name: Option<String>,
    pub strategy: ConfidenceStrategy,
    pub confidence_score: u8,
}

impl ConfidenceRecord {
    pub fn new(
        ticker: &str,
        company_name: Option<&str>,
        strategy: ConfidenceStrategy,
        confidence_score: u8,
        recorded_at: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        let ticker = ticker.trim().to_string();
        anyhow::ensure!(!ticker.is_empty(), "ticker must be non-empty");
        anyhow::ensure!(
            confidence_score <= 100,
            "confidence score must be 0..=100 (got {confidence_score})"
        );

        Ok(Self {
            id: Uuid::new_v4(),
            recorded_at,
            ticker,
            company_name: company_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            strategy,
            confidence_score,
        })
    }
}

/// Sink for confidence scores, keyed by time and ticker. Nothing in the evaluator reads it back.
#[async_trait::async_trait]
pub trait ConfidenceLog: Send + Sync {
    async fn append(&self, record: &ConfidenceRecord) -> anyhow::Result<()>;

    /// Newest first.
    async fn recent(&self, limit: usize) -> anyhow::Result<Vec<ConfidenceRecord>>;

    /// Returns the number of rows removed.
    async fn clear(&self) -> anyhow::Result<u64>;
}

#[derive(Debug, Clone)]
pub struct PgConfidenceLog {
    pool: sqlx::PgPool,
}

impl PgConfidenceLog {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ConfidenceLog for PgConfidenceLog {
    async fn append(&self, record: &ConfidenceRecord) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO confidence_history (id, recorded_at, ticker, company_name, strategy, confidence_score) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .persistent(false)
        .bind(record.id)
        .bind(record.recorded_at)
        .bind(&record.ticker)
        .bind(&record.company_name)
        .bind(record.strategy.as_str())
        .bind(i16::from(record.confidence_score))
        .execute(&self.pool)
        .await
        .context("insert confidence_history failed")?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> anyhow::Result<Vec<ConfidenceRecord>> {
        let rows = sqlx::query_as::<_, (Uuid, DateTime<Utc>, String, Option<String>, String, i16)>(
            "SELECT id, recorded_at, ticker, company_name, strategy, confidence_score \
             FROM confidence_history \
             ORDER BY recorded_at DESC, id ASC \
             LIMIT $1",
        )
        .persistent(false)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .context("select confidence_history failed")?;

        let mut out = Vec::with_capacity(rows.len());
        for (id, recorded_at, ticker, company_name, strategy, score) in rows {
            out.push(ConfidenceRecord {
                id,
                recorded_at,
                ticker,
                company_name,
                strategy: strategy
                    .parse()
                    .with_context(|| format!("invalid strategy in DB for id={id}"))?,
                confidence_score: u8::try_from(score)
                    .ok()
                    .filter(|s| *s <= 100)
                    .with_context(|| format!("invalid confidence_score in DB for id={id}: {score}"))?,
            });
        }
        Ok(out)
    }

    async fn clear(&self) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM confidence_history")
            .persistent(false)
            .execute(&self.pool)
            .await
            .context("delete confidence_history failed")?;
        Ok(res.rows_affected())
    }
}
