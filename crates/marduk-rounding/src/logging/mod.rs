//! Logging utilities.
//!
//! Only the `log` facade is used inside the crate; `init_logging` installs
//! `env_logger` for binaries and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
