use std::sync::Arc;

use anyhow::{Context, Result};
use sales_report_core::config::ReportConfig;
use sales_report_core::dispatcher::ReportDispatcher;
use sales_report_core::loader::load_records;
use sales_report_core::mailer::SmtpMailer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    dotenvy::dotenv().ok();
    let config = ReportConfig::from_env().context("invalid report configuration")?;

    let records = load_records(&config.input_path)
        .await
        .with_context(|| format!("failed to load {}", config.input_path.display()))?;
    debug!(
        count = records.len(),
        records = %serde_json::to_string(&records)?,
        "Parsed store records"
    );

    let mailer = SmtpMailer::new(&config.smtp, &config.sender)
        .context("failed to configure SMTP transport")?;
    let dispatcher = ReportDispatcher::new(Arc::new(mailer), config.chart_base_url.clone());

    let summary = dispatcher.dispatch_all(&records).await;
    info!(
        sent = summary.sent,
        skipped = summary.skipped,
        failed = summary.failed,
        reports = %serde_json::to_string(&summary.reports)?,
        "Report run finished"
    );

    Ok(())
}
