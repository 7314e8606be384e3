//! Error types for file descriptor limit management.

use std::io;
use thiserror::Error;

/// Errors which can occur while querying or raising file descriptor limits.
#[derive(Debug, Error)]
pub enum FdLimitError {
    /// The platform has no notion of file descriptor limits, or none that
    /// this crate can drive.
    #[error("file descriptor management is not supported on this platform")]
    NotSupported,

    /// The current limits could not be read from the operating system. The
    /// underlying error is propagated unchanged.
    #[error(transparent)]
    GetLimit(#[from] io::Error),

    /// The requested limit lies above the hard limit and the process lacks
    /// the privileges to raise it.
    #[error("cannot set rlimit, {requested} is larger than the hard limit {hard}")]
    ExceedsHardLimit {
        /// The limit that was asked for.
        requested: u64,

        /// The hard limit of the process at the time of the request.
        hard: u64,
    },

    /// The operating system rejected the new limits for a reason other than
    /// missing privileges.
    #[error("error setting ulimit")]
    SetLimit(#[source] io::Error),

    /// The privilege restricted retry, which leaves the hard limit alone,
    /// failed as well.
    #[error("error setting ulimit without hard limit")]
    SetSoftLimit(#[source] io::Error),
}
