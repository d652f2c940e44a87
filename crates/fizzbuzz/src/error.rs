//! Driver error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The recursive driver would need more stack frames than it allows.
    #[error("recursion bound {max} exceeds the stack cap of {cap}")]
    RecursionTooDeep { max: i64, cap: i64 },
}
