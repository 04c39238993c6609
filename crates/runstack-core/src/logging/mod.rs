//! Logging setup.
//!
//! The runner itself only emits through the `log` facade. This module is the
//! convenience entry point for binaries that want `env_logger` output.

mod init;

pub use init::{init_logging, LoggingConfig};
