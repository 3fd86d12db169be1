use crate::aggregate::summarize;
use crate::config::ScanConfig;
use crate::progress::ProgressReporter;
use crate::scanner::scan_target_with_cancel;
use crate::types::{ScanSession, TargetSummary};
use std::sync::Arc;
use time::{format_description::well_known, OffsetDateTime};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Scan all configured targets one after another, never overlapping.
///
/// `on_target` fires as each summary is ready, so callers can print
/// incrementally. Summaries come back in target input order. After
/// cancellation the remaining targets are skipped.
pub async fn run_session<F>(
    config: &ScanConfig,
    reporter: Arc<dyn ProgressReporter>,
    cancel: CancellationToken,
    mut on_target: F,
) -> ScanSession
where
    F: FnMut(&TargetSummary),
{
    let started_at = now_rfc3339();
    let mut summaries = Vec::with_capacity(config.targets.len());

    for target in &config.targets {
        if cancel.is_cancelled() {
            info!(target_host = %target, "scan cancelled, skipping remaining targets");
            break;
        }
        let scan = scan_target_with_cancel(
            target,
            &config.ports,
            config.workers,
            config.dialer,
            reporter.clone(),
            cancel.clone(),
        )
        .await;
        let summary = summarize(target, scan.outcomes, scan.duration);
        on_target(&summary);
        summaries.push(summary);
    }

    ScanSession {
        started_at,
        summaries,
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
