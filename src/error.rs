/**
 * The errors the interval operations can produce.
 */

use thiserror::Error;

/// Represents every failure the crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Constructing an interval from a sequence that doesn't hold exactly
    /// two values.
    #[error("an interval requires exactly two bounds, got {0}")]
    InvalidArity(usize),

    /// Combining two intervals that neither overlap nor touch.
    #[error("cannot combine non-overlapping intervals")]
    NonOverlapping,
}
