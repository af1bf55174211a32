//! Error types for stowpack.

use thiserror::Error;

/// Result type alias for stowpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when validating packing inputs.
///
/// The placement engine itself never fails: units that cannot be placed are
/// routed to the unpacked list of the result. These errors are produced only
/// by the `validate` helpers, which callers are expected to run before
/// invoking the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box specification provided.
    #[error("Invalid box spec: {0}")]
    InvalidSpec(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),
}
