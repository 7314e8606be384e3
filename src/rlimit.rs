//! Platform backends for resource limits.

use crate::fd_limit::LimitImpl;
use std::io;

#[cfg(unix)]
use libc::rlim_t;
#[cfg(unix)]
use nix::sys::resource::{Resource, getrlimit, setrlimit};

/// The resource limit implementation for the current platform.
#[derive(Debug, Default)]
pub struct DefaultLimit;

#[cfg(unix)]
impl LimitImpl for DefaultLimit {
    fn supported(&self) -> bool {
        true
    }

    fn get_limit(&self) -> io::Result<(u64, u64)> {
        let (soft, hard) = getrlimit(Resource::RLIMIT_NOFILE).map_err(io::Error::from)?;
        Ok((soft as u64, hard as u64))
    }

    fn set_limit(&self, soft: u64, hard: u64) -> io::Result<()> {
        if soft > hard {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("soft limit {soft} is larger than the hard limit {hard}"),
            ));
        }

        let (cur_soft, cur_hard) = getrlimit(Resource::RLIMIT_NOFILE).map_err(io::Error::from)?;

        // Raise towards the request, never lower what is already in place.
        let hard = (hard as rlim_t).max(cur_hard);
        let soft = (soft as rlim_t).max(cur_soft);

        setrlimit(Resource::RLIMIT_NOFILE, soft, hard).map_err(io::Error::from)
    }
}

#[cfg(not(unix))]
impl LimitImpl for DefaultLimit {
    fn supported(&self) -> bool {
        false
    }

    fn get_limit(&self) -> io::Result<(u64, u64)> {
        Err(io::ErrorKind::Unsupported.into())
    }

    fn set_limit(&self, _soft: u64, _hard: u64) -> io::Result<()> {
        Err(io::ErrorKind::Unsupported.into())
    }
}
