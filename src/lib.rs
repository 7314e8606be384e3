#![doc = include_str!("../README.md")]

pub use error::FdLimitError;
pub use fd_limit::{FdLimit, LimitImpl, get_fd_limit, set_fd_limit};
pub use limits::Limits;
pub use rlimit::DefaultLimit;

mod error;
mod fd_limit;
mod limits;
mod rlimit;
