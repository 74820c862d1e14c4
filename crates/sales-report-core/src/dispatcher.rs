use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{error, info, warn};
use url::Url;

use sales_report_parser::StoreRecord;

use crate::chart::ChartSpec;
use crate::envelope::NotificationEnvelope;
use crate::error::RecordError;
use crate::mailer::MailTransport;
use crate::metrics::derive_metrics;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordStatus {
    Sent,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    pub line: u64,
    pub store: Option<String>,
    pub recipient: Option<String>,
    pub status: RecordStatus,
    pub message: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct DispatchSummary {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
    pub reports: Vec<RecordReport>,
}

impl DispatchSummary {
    fn push(&mut self, report: RecordReport) {
        match report.status {
            RecordStatus::Sent => self.sent += 1,
            RecordStatus::Skipped => self.skipped += 1,
            RecordStatus::Failed => self.failed += 1,
        }
        self.reports.push(report);
    }
}

pub fn validate_recipient(value: Option<&str>) -> Result<&str, RecordError> {
    match value.map(str::trim) {
        Some(address) if EMAIL_PATTERN.is_match(address) => Ok(address),
        other => Err(RecordError::InvalidRecipient {
            value: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Turns store rows into mailed reports, one row at a time.
pub struct ReportDispatcher {
    transport: Arc<dyn MailTransport>,
    chart_base_url: Url,
}

impl ReportDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>, chart_base_url: Url) -> Self {
        Self {
            transport,
            chart_base_url,
        }
    }

    /// Validation, metrics, chart and body for one row. No I/O.
    pub fn prepare(&self, record: &StoreRecord) -> Result<NotificationEnvelope, RecordError> {
        let recipient = validate_recipient(record.manager_email())?;
        let metrics = derive_metrics(record)?;
        let chart_url = ChartSpec::from_shares(&metrics.shares).render_url(&self.chart_base_url);
        Ok(NotificationEnvelope::compose(
            recipient, record, &metrics, &chart_url,
        ))
    }

    pub async fn dispatch(&self, record: &StoreRecord) -> Result<NotificationEnvelope, RecordError> {
        let envelope = self.prepare(record)?;
        self.transport.send(&envelope).await?;
        Ok(envelope)
    }

    /// Sends every eligible row in input order. Per-row failures are logged and
    /// recorded in the summary; they never stop the batch.
    pub async fn dispatch_all(&self, records: &[StoreRecord]) -> DispatchSummary {
        let mut summary = DispatchSummary::default();

        for record in records {
            let store = record.shop_name().map(str::to_string);
            let line = record.line();

            let report = match self.dispatch(record).await {
                Ok(envelope) => {
                    info!(store = %record, recipient = %envelope.recipient, "Report sent");
                    RecordReport {
                        line,
                        store,
                        recipient: Some(envelope.recipient),
                        status: RecordStatus::Sent,
                        message: None,
                    }
                }
                Err(RecordError::Send(err)) => {
                    let recipient = record.manager_email().map(str::to_string);
                    error!(
                        store = %record,
                        recipient = recipient.as_deref().unwrap_or_default(),
                        error = %err,
                        "Failed to send report"
                    );
                    RecordReport {
                        line,
                        store,
                        recipient,
                        status: RecordStatus::Failed,
                        message: Some(err.to_string()),
                    }
                }
                Err(err) => {
                    warn!(store = %record, error = %err, "Skipping store");
                    RecordReport {
                        line,
                        store,
                        recipient: None,
                        status: RecordStatus::Skipped,
                        message: Some(err.to_string()),
                    }
                }
            };

            summary.push(report);
        }

        summary
    }
}
