//! Error types for the Lumen workspace.
//!
//! The transformation layer itself never errors on absent or malformed
//! upstream fields; those resolve through defaults or `None`. Errors only
//! exist at the polling boundary and in config loading.

mod config_error;
mod status_error;

pub use config_error::ConfigError;
pub use status_error::StatusError;

/// Top-level error aggregating all subsystems.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type LumenResult<T> = Result<T, LumenError>;
