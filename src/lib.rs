//! Library crate for portsweep: a concurrent TCP connect scanner.
pub mod aggregate;
pub mod config;
pub mod error;
pub mod logging;
pub mod ports;
pub mod probe;
pub mod progress;
pub mod render;
pub mod scanner;
pub mod session;
pub mod types;

pub use error::{Result, ScanError};
pub use logging::init_tracing;
