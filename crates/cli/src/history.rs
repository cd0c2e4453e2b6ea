use anyhow::Context;
use stockinsight_core::config::Settings;
use stockinsight_core::storage::{ConfidenceLog, PgConfidenceLog};

pub async fn connect(settings: &Settings) -> anyhow::Result<PgConfidenceLog> {
    let db_url = settings.require_database_url()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(db_url)
        .await
        .context("connect DATABASE_URL failed")?;

    stockinsight_core::storage::migrate(&pool).await?;
    Ok(PgConfidenceLog::new(pool))
}

pub async fn show(settings: &Settings, limit: usize) -> anyhow::Result<()> {
    anyhow::ensure!(limit >= 1, "history limit must be >= 1");

    let log = connect(settings).await?;
    let rows = log.recent(limit).await?;

    if rows.is_empty() {
        println!("No confidence history yet.");
        return Ok(());
    }

    println!("{:<17} {:<14} {:<32} {:<9} {:>5}", "Timestamp", "Ticker", "Company Name", "Strategy", "Score");
    for r in rows {
        println!(
            "{:<17} {:<14} {:<32} {:<9} {:>5}",
            r.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            r.ticker,
            r.company_name.as_deref().unwrap_or("-"),
            r.strategy,
            r.confidence_score
        );
    }
    Ok(())
}

pub async fn clear(settings: &Settings) -> anyhow::Result<()> {
    let log = connect(settings).await?;
    let removed = log.clear().await?;
    tracing::info!(removed, "cleared confidence history");
    println!("Removed {removed} confidence history rows.");
    Ok(())
}
