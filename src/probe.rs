use crate::types::{PortOutcome, ScanTask};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time;
use tracing::debug;

/// Fixed window for reading a banner once a connection is established.
pub const BANNER_READ_TIMEOUT: Duration = Duration::from_secs(2);
/// Maximum number of banner bytes captured.
pub const BANNER_MAX_BYTES: usize = 1024;

/// Connection settings shared by every worker of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialer {
    pub connect_timeout: Duration,
}

impl Dialer {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }

    pub async fn probe(&self, task: &ScanTask) -> PortOutcome {
        probe(&task.target, task.port, self.connect_timeout).await
    }
}

impl Default for Dialer {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

/// Attempt a TCP connect to `target:port` and grab a passive banner.
///
/// Never fails: refused, unreachable, timed out and unresolvable targets all
/// come back as a closed outcome. Name resolution counts against
/// `connect_timeout`. Worst case this takes `connect_timeout` plus
/// [`BANNER_READ_TIMEOUT`].
pub async fn probe(target: &str, port: u16, connect_timeout: Duration) -> PortOutcome {
    let connect = TcpStream::connect((target, port));
    let mut stream = match time::timeout(connect_timeout, connect).await {
        Ok(Ok(stream)) => stream,
        _ => return PortOutcome::closed(port),
    };

    let banner = read_banner(&mut stream).await;
    debug!(target_host = target, port, banner = banner.as_deref(), "port open");
    // stream is dropped on return, closing the connection
    PortOutcome::open(port, banner)
}

/// Read up to [`BANNER_MAX_BYTES`] within [`BANNER_READ_TIMEOUT`], lossy UTF-8, trimmed.
async fn read_banner(stream: &mut TcpStream) -> Option<String> {
    let mut buf = vec![0u8; BANNER_MAX_BYTES];
    match time::timeout(BANNER_READ_TIMEOUT, stream.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => {
            buf.truncate(n);
            let s = String::from_utf8_lossy(&buf).trim().to_string();
            (!s.is_empty()).then_some(s)
        }
        _ => None,
    }
}
