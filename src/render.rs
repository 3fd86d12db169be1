use crate::error::Result;
use crate::types::{format_duration, TargetSummary};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::Write;

/// Banners longer than this are cut in the text report.
const BANNER_SNIPPET: usize = 60;

/// Plain text block printed after each target finishes.
pub fn render_summary(summary: &TargetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nScan Summary for {}:", summary.target);
    let _ = writeln!(out, " Open ports: {}", summary.open_count);
    let _ = writeln!(out, " Total ports scanned: {}", summary.total_ports);
    let _ = writeln!(out, " Time taken: {}", format_duration(summary.duration));

    let mut open: Vec<_> = summary.open_ports().collect();
    if open.is_empty() {
        return out;
    }
    open.sort_by_key(|o| o.port);
    let _ = writeln!(out, " {:>5}  banner", "port");
    for o in open {
        let banner = o
            .banner
            .as_deref()
            .map(|b| snippet(b, BANNER_SNIPPET))
            .unwrap_or_default();
        let _ = writeln!(out, " {:>5}  {}", o.port, banner);
    }
    out
}

/// Indented JSON array of summaries (one space per level).
pub fn render_json(summaries: &[TargetSummary]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    summaries.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// First line of a banner, cut to `max` chars.
fn snippet(banner: &str, max: usize) -> String {
    let line = banner.lines().next().unwrap_or_default();
    line.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortOutcome;
    use std::time::Duration;

    fn sample() -> TargetSummary {
        TargetSummary {
            target: "192.0.2.10".into(),
            results: vec![
                PortOutcome::open(8080, None),
                PortOutcome::closed(21),
                PortOutcome::open(22, Some("SSH-2.0-OpenSSH_9.6\r\nextra".into())),
            ],
            open_count: 2,
            total_ports: 3,
            duration: Duration::from_millis(1203),
        }
    }

    #[test]
    fn summary_lists_counts_and_open_ports() {
        let text = render_summary(&sample());
        assert!(text.contains("Scan Summary for 192.0.2.10:"));
        assert!(text.contains(" Open ports: 2"));
        assert!(text.contains(" Total ports scanned: 3"));
        assert!(text.contains(" Time taken: 1.203s"));
        let ssh = text.find("SSH-2.0-OpenSSH_9.6").unwrap();
        let http = text.find(" 8080").unwrap();
        assert!(ssh < http, "open ports listed by port number");
        assert!(!text.contains("extra"));
        assert!(!text.contains("   21"));
    }

    #[test]
    fn json_is_array_in_input_order() {
        let mut second = sample();
        second.target = "192.0.2.11".into();
        let json = render_json(&[sample(), second]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["target"], "192.0.2.10");
        assert_eq!(arr[1]["target"], "192.0.2.11");
        assert_eq!(arr[0]["duration"], "1.203s");
        assert!(arr[0]["results"][1].get("banner").is_none());
        assert!(json.contains("\n {"), "one-space indentation");
    }

    #[test]
    fn empty_session_renders_empty_array() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn snippet_takes_first_line_only() {
        assert_eq!(snippet("220 ready\r\nmore", 60), "220 ready");
        assert_eq!(snippet("abcdef", 3), "abc");
    }
}
