use crate::error::{Result, ScanError};
use crate::ports;
use crate::probe::Dialer;
use std::time::Duration;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub targets: Vec<String>,
    pub ports: Vec<u16>,
    pub workers: usize,
    pub dialer: Dialer,
}

/// Raw user input, before precedence rules are applied.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs<'a> {
    pub target: Option<&'a str>,
    pub targets: Option<&'a str>,
    pub ports: Option<&'a str>,
    pub start_port: u16,
    pub end_port: u16,
    pub workers: usize,
    pub timeout: Duration,
}

impl ScanConfig {
    /// Apply precedence (`targets` over `target`, `ports` over the range) and
    /// validate. Targets are checked first, then ports.
    pub fn resolve(args: &ScanArgs<'_>) -> Result<Self> {
        let targets = resolve_targets(args.target, args.targets)?;
        let ports = ports::build_ports(args.ports, args.start_port, args.end_port)?;
        Ok(Self {
            targets,
            ports,
            workers: args.workers.max(1),
            dialer: Dialer::new(args.timeout),
        })
    }
}

/// A non-blank comma list wins over the single target. Blank list entries are dropped.
pub fn resolve_targets(target: Option<&str>, targets: Option<&str>) -> Result<Vec<String>> {
    if let Some(list) = targets.filter(|l| !l.trim().is_empty()) {
        let out: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        if !out.is_empty() {
            return Ok(out);
        }
    }
    match target.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(vec![t.to_string()]),
        _ => Err(ScanError::MissingTarget),
    }
}
