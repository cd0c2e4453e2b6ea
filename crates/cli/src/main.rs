use anyhow::Context;
use clap::{Parser, Subcommand};
use stockinsight_core::config::Settings;
use stockinsight_core::domain::ConfidenceStrategy;
use stockinsight_core::prices::{holding_simulation, trailing_year_return_pct};
use stockinsight_core::storage::{ConfidenceLog, ConfidenceRecord};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod history;
mod input;

#[derive(Debug, Parser)]
#[command(name = "stockinsight", about = "Rule-based stock confidence and risk check")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one snapshot and print the report.
    Evaluate(EvaluateArgs),

    /// Show the most recent confidence log entries.
    History {
        /// Number of rows. Defaults to CONFIDENCE_HISTORY_LIMIT or 20.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Delete every confidence log entry.
    ClearHistory,
}

#[derive(Debug, clap::Args)]
struct EvaluateArgs {
    /// JSON file holding the metrics snapshot.
    #[arg(long)]
    snapshot: std::path::PathBuf,

    /// Ticker used in the report and the log. Defaults to the snapshot file stem.
    #[arg(long)]
    ticker: Option<String>,

    /// Total debt observations, most recent first (e.g. "120,100,95,80").
    #[arg(long)]
    debt_history: Option<String>,

    /// JSON array of {date, open, close} bars, oldest first.
    #[arg(long)]
    prices: Option<std::path::PathBuf>,

    /// Reference date for the holding simulation (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long)]
    as_of_date: Option<String>,

    /// Confidence strategy: penalty | weighted. Defaults to CONFIDENCE_STRATEGY or penalty.
    #[arg(long)]
    strategy: Option<ConfidenceStrategy>,

    /// Print the assessment as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Append the confidence score to the history log (needs DATABASE_URL).
    #[arg(long)]
    record: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let res = match args.command {
        Command::Evaluate(eval) => run_evaluate(&settings, eval).await,
        Command::History { limit } => {
            history::show(&settings, limit.unwrap_or(settings.history_limit)).await
        }
        Command::ClearHistory => history::clear(&settings).await,
    };

    if let Err(err) = &res {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "command failed");
    }
    res
}

async fn run_evaluate(settings: &Settings, args: EvaluateArgs) -> anyhow::Result<()> {
    let mut snapshot = input::load_snapshot(&args.snapshot)?;
    let ticker = match args.ticker.as_deref() {
        Some(t) => t.trim().to_string(),
        None => input::ticker_from_path(&args.snapshot)?,
    };
    let debt_history = match args.debt_history.as_deref() {
        Some(s) => input::parse_debt_history(s)?,
        None => Vec::new(),
    };
    let strategy = args.strategy.unwrap_or(settings.confidence_strategy);

    let price_history = match &args.prices {
        Some(path) => input::load_price_history(path)?,
        None => Vec::new(),
    };
    let as_of_date = input::resolve_as_of_date(args.as_of_date.as_deref(), chrono::Utc::now())?;
    if snapshot.one_year_return_pct.is_none() {
        snapshot.one_year_return_pct = trailing_year_return_pct(&price_history, as_of_date);
    }

    let assessment = stockinsight_core::assess(&snapshot, &debt_history, strategy)
        .with_context(|| format!("evaluation failed for {ticker}"))?;

    tracing::info!(
        %ticker,
        %strategy,
        confidence_score = assessment.confidence_score,
        verdict = ?assessment.evaluation.verdict,
        risk = ?assessment.risk.level,
        "evaluated snapshot"
    );

    let simulation = match (snapshot.current_price, price_history.is_empty()) {
        (Some(price), false) => holding_simulation(&price_history, as_of_date, price),
        _ => Vec::new(),
    };

    if args.json {
        let out = serde_json::json!({
            "ticker": ticker,
            "snapshot": snapshot,
            "assessment": assessment,
            "simulation": simulation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{}",
            stockinsight_core::report::render_report(&ticker, &snapshot, &assessment)
        );
        if !simulation.is_empty() {
            println!();
            print!("{}", input::render_simulation(&simulation));
        }
    }

    if args.record {
        let log = history::connect(settings).await?;
        let record = ConfidenceRecord::new(
            &ticker,
            snapshot.company_name.as_deref(),
            strategy,
            assessment.confidence_score,
            chrono::Utc::now(),
        )?;
        log.append(&record).await?;
        tracing::info!(%ticker, record_id = %record.id, "recorded confidence score");
    }

    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
