use crate::types::{PortOutcome, TargetSummary};
use std::time::Duration;

/// Fold a target's outcomes into its summary. Outcome order is kept as given.
pub fn summarize(target: &str, outcomes: Vec<PortOutcome>, duration: Duration) -> TargetSummary {
    let open_count = outcomes.iter().filter(|o| o.open).count();
    TargetSummary {
        target: target.to_string(),
        total_ports: outcomes.len(),
        open_count,
        results: outcomes,
        duration,
    }
}
