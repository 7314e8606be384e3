//! File descriptor limit negotiation.

use crate::{error::FdLimitError, limits::Limits, rlimit::DefaultLimit};
use std::io::{self, ErrorKind};
use tracing::{debug, info};

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Manager for the file descriptor limits of the current process.
#[derive(Debug, Default)]
pub struct FdLimit<T> {
    imp: T,
}

impl<T> FdLimit<T>
where
    T: LimitImpl,
{
    /// Create a new manager on top of the provided backend.
    pub fn new(imp: T) -> Self {
        Self { imp }
    }

    /// Retrieve the current soft and hard limits for open file descriptors.
    pub fn get(&self) -> Result<Limits, FdLimitError> {
        if !self.imp.supported() {
            return Err(FdLimitError::NotSupported);
        }

        let (soft, hard) = self.imp.get_limit()?;
        Ok(Limits::new(soft, hard))
    }

    /// Raise the soft limit for open file descriptors to `requested` and
    /// return the limit which was achieved.
    ///
    /// The hard limit gets raised along with the soft one so that the
    /// process keeps headroom for later raises. Without the privileges to do
    /// that, only the soft limit is raised, up to the existing hard ceiling.
    /// Requests at or below the current soft limit succeed without touching
    /// the operating system.
    pub fn set(&self, requested: u64) -> Result<u64, FdLimitError> {
        if !self.imp.supported() {
            return Err(FdLimitError::NotSupported);
        }

        let (soft, hard) = self.imp.get_limit()?;
        if requested <= soft {
            debug!("Soft limit {soft} already at or above the requested {requested}");
            return Ok(soft);
        }

        if let Err(err) = self.imp.set_limit(requested, requested) {
            match err.kind() {
                ErrorKind::PermissionDenied => {
                    debug!("Missing privileges to raise the hard limit, raising only the soft limit");
                    if requested > hard {
                        return Err(FdLimitError::ExceedsHardLimit { requested, hard });
                    }
                    self.imp
                        .set_limit(requested, hard)
                        .map_err(FdLimitError::SetSoftLimit)?;
                }
                _ => return Err(FdLimitError::SetLimit(err)),
            }
        }

        info!("Raised soft file descriptor limit from {soft} to {requested}");
        Ok(requested)
    }
}

/// The platform capability behind [`FdLimit`].
///
/// [`DefaultLimit`] selects the real implementation for the current target.
/// Custom implementations can be injected through [`FdLimit::new`].
#[cfg_attr(test, automock)]
pub trait LimitImpl {
    /// Whether the platform supports file descriptor limit management.
    ///
    /// When this returns `false` the manager fails early and never calls the
    /// other methods.
    fn supported(&self) -> bool;

    /// Read the current `(soft, hard)` limit pair for open file descriptors.
    fn get_limit(&self) -> io::Result<(u64, u64)>;

    /// Apply a `(soft, hard)` limit pair, raising but never lowering the
    /// current values. Pairs with `soft > hard` are rejected before any
    /// interaction with the operating system.
    fn set_limit(&self, soft: u64, hard: u64) -> io::Result<()>;
}

/// Retrieve the current soft and hard limits for open file descriptors.
pub fn get_fd_limit() -> Result<Limits, FdLimitError> {
    FdLimit::new(DefaultLimit).get()
}

/// Raise the soft limit for open file descriptors to `requested` and return
/// the limit which was achieved.
pub fn set_fd_limit(requested: u64) -> Result<u64, FdLimitError> {
    FdLimit::new(DefaultLimit).set(requested)
}
