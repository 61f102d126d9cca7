
mod error;
mod interval;
mod interval_set;
mod normalize;

pub use error::Error;
pub use interval::Interval;
pub use interval_set::{IntervalSet, Intervals};
pub use normalize::normalize;
