use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// One (target, port) pair awaiting a single connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTask {
    pub target: String,
    pub port: u16,
}

/// Result of probing one port.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortOutcome {
    pub port: u16,
    pub open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

impl PortOutcome {
    pub fn closed(port: u16) -> Self {
        Self {
            port,
            open: false,
            banner: None,
        }
    }

    pub fn open(port: u16, banner: Option<String>) -> Self {
        Self {
            port,
            open: true,
            banner,
        }
    }
}

/// Aggregated outcomes for one target.
///
/// `results` is in completion order, not port order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TargetSummary {
    pub target: String,
    pub results: Vec<PortOutcome>,
    pub open_count: usize,
    pub total_ports: usize,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

impl TargetSummary {
    pub fn open_ports(&self) -> impl Iterator<Item = &PortOutcome> {
        self.results.iter().filter(|o| o.open)
    }
}

/// The whole run: one summary per target, in target input order.
#[derive(Debug, Clone)]
pub struct ScanSession {
    pub started_at: String,
    pub summaries: Vec<TargetSummary>,
}

/// Human readable duration such as `1.203s`, `512.4ms` or `87µs`.
pub fn format_duration(d: Duration) -> String {
    let rounded = if d >= Duration::from_secs(1) {
        Duration::from_millis(d.as_millis() as u64)
    } else {
        Duration::from_micros(d.as_micros() as u64)
    };
    format!("{rounded:?}")
}

fn serialize_duration<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_duration(*d))
}
