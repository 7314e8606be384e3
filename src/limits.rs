use getset::CopyGetters;
use std::fmt;

/// A soft and hard limit pair for open file descriptors.
#[derive(Clone, Copy, CopyGetters, Debug, Eq, PartialEq)]
pub struct Limits {
    /// The limit enforced by the kernel. Can be raised up to the hard limit
    /// without additional privileges.
    #[getset(get_copy = "pub")]
    soft: u64,

    /// The ceiling for the soft limit. Raising it requires a privileged
    /// process.
    #[getset(get_copy = "pub")]
    hard: u64,
}

impl Limits {
    /// Create a new limit pair.
    pub fn new(soft: u64, hard: u64) -> Self {
        Self { soft, hard }
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "soft limit {} / hard limit {}", self.soft, self.hard)
    }
}
