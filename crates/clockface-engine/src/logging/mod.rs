//! Logging utilities.
//!
//! This module centralizes logger initialization.
//! It avoids imposing a specific logging backend beyond the standard `log` facade;
//! `env_logger` is only wired up when a binary asks for it.

mod init;

pub use init::{init_logging, LoggingConfig};
