/**
 * The closed integer interval the whole crate is built around.
 */

use std::convert::TryFrom;
use crate::error::Error;

/// Represents a closed integer interval `[begin, end]` with
/// `begin <= end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Interval {
    begin: i64,
    end: i64,
}

/**
 * Constructing an interval.
 */

impl Interval {
    /// Creates an interval from two bounds, in either order. The smaller
    /// value always becomes `begin`.
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self{ begin: a, end: b }
        }
        else {
            Self{ begin: b, end: a }
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    pub fn singleton(value: i64) -> Self {
        Self::new(value, value)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((a, b): (i64, i64)) -> Self {
        Self::new(a, b)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.begin, interval.end)
    }
}

impl From<std::ops::RangeInclusive<i64>> for Interval {
    fn from(range: std::ops::RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl TryFrom<&[i64]> for Interval {
    type Error = Error;

    /// The sequence must hold exactly two values.
    fn try_from(values: &[i64]) -> Result<Self, Error> {
        match *values {
            [a, b] => Ok(Self::new(a, b)),
            _ => Err(Error::InvalidArity(values.len())),
        }
    }
}

impl TryFrom<Vec<i64>> for Interval {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self, Error> {
        Self::try_from(values.as_slice())
    }
}

/**
 * Info about a single interval.
 */

impl Interval {
    /// The lower bound (inclusive).
    pub fn begin(&self) -> i64 {
        self.begin
    }

    /// The upper bound (inclusive).
    pub fn end(&self) -> i64 {
        self.end
    }
}

/**
 * Relation of intervals.
 */

impl Interval {
    /// Checks if two intervals share at least one point. Intervals that
    /// merely touch at a boundary (`[1, 3]` and `[3, 5]`) count as
    /// intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        other.begin <= self.end && other.end >= self.begin
    }

    /// Checks if `other` is a subset of this interval.
    pub fn contains(&self, other: &Self) -> bool {
        other.begin >= self.begin && other.end <= self.end
    }

    /// Checks if a single integer falls inside the interval.
    pub fn contains_value(&self, value: i64) -> bool {
        self.contains(&Self::singleton(value))
    }
}

/**
 * Combining intervals.
 */

impl Interval {
    /// Unifies two intersecting intervals into the smallest interval
    /// covering both. Since the operands must intersect, the result is
    /// exactly their union and never bridges a gap.
    pub fn combine(&self, other: &Self) -> Result<Self, Error> {
        if self.intersects(other) {
            Ok(self.hull(other))
        }
        else {
            Err(Error::NonOverlapping)
        }
    }

    // Only exact when the operands intersect, `combine` checks that first.
    pub(crate) fn hull(&self, other: &Self) -> Self {
        Self{
            begin: std::cmp::min(self.begin, other.begin),
            end: std::cmp::max(self.end, other.end),
        }
    }
}

/**
 * Display an interval.
 */

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}

/// The debug form is the display form.
impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod interval_tests {
    use super::*;

    // Just to make it easier to type
    fn iv(a: i64, b: i64) -> Interval {
        Interval::new(a, b)
    }

    /**
     * Construction tests.
     */

    #[test]
    fn bounds_sorted_in_order() {
        let i = iv(1, 5);
        assert_eq!(i.begin(), 1);
        assert_eq!(i.end(), 5);
    }

    #[test]
    fn bounds_sorted_reversed() {
        let i = iv(5, 1);
        assert_eq!(i.begin(), 1);
        assert_eq!(i.end(), 5);
    }

    #[test]
    fn singleton_bounds() {
        let i = Interval::singleton(3);
        assert_eq!(i, iv(3, 3));
    }

    #[test]
    fn from_pair_sorts() {
        assert_eq!(Interval::from((7, 2)), iv(2, 7));
    }

    #[test]
    fn from_range_inclusive() {
        assert_eq!(Interval::from(2..=7), iv(2, 7));
    }

    #[test]
    fn try_from_two_values() {
        assert_eq!(Interval::try_from(&[4, 1][..]), Ok(iv(1, 4)));
    }

    #[test]
    fn try_from_wrong_arity() {
        assert_eq!(Interval::try_from(&[][..]), Err(Error::InvalidArity(0)));
        assert_eq!(Interval::try_from(&[1][..]), Err(Error::InvalidArity(1)));
        assert_eq!(Interval::try_from(&[1, 2, 3][..]), Err(Error::InvalidArity(3)));
    }

    /**
     * Relation tests.
     */

    #[test]
    fn overlapping_intersect() {
        assert!(iv(1, 5).intersects(&iv(3, 8)));
        assert!(iv(3, 8).intersects(&iv(1, 5)));
    }

    #[test]
    fn touching_intersect() {
        assert!(iv(1, 3).intersects(&iv(3, 5)));
        assert!(iv(3, 5).intersects(&iv(1, 3)));
    }

    #[test]
    fn disjunct_do_not_intersect() {
        assert!(!iv(1, 2).intersects(&iv(3, 4)));
        assert!(!iv(3, 4).intersects(&iv(1, 2)));
    }

    #[test]
    fn contained_intersects() {
        assert!(iv(1, 10).intersects(&iv(3, 4)));
        assert!(iv(3, 4).intersects(&iv(1, 10)));
    }

    #[test]
    fn contains_subset() {
        assert!(iv(1, 10).contains(&iv(3, 4)));
        assert!(!iv(3, 4).contains(&iv(1, 10)));
    }

    #[test]
    fn contains_itself() {
        assert!(iv(1, 10).contains(&iv(1, 10)));
    }

    #[test]
    fn contains_overlapping_but_not_subset() {
        assert!(!iv(1, 5).contains(&iv(3, 8)));
    }

    #[test]
    fn contains_value_inside() {
        assert!(iv(1, 5).contains_value(1));
        assert!(iv(1, 5).contains_value(3));
        assert!(iv(1, 5).contains_value(5));
    }

    #[test]
    fn contains_value_outside() {
        assert!(!iv(1, 5).contains_value(0));
        assert!(!iv(1, 5).contains_value(6));
    }

    /**
     * Combination tests.
     */

    #[test]
    fn combine_overlapping() {
        assert_eq!(iv(1, 5).combine(&iv(3, 8)), Ok(iv(1, 8)));
    }

    #[test]
    fn combine_touching() {
        assert_eq!(iv(1, 3).combine(&iv(3, 5)), Ok(iv(1, 5)));
    }

    #[test]
    fn combine_contained() {
        assert_eq!(iv(1, 10).combine(&iv(3, 4)), Ok(iv(1, 10)));
    }

    #[test]
    fn combine_disjunct_fails() {
        assert_eq!(iv(1, 2).combine(&iv(5, 6)), Err(Error::NonOverlapping));
    }

    /**
     * Ordering tests.
     */

    #[test]
    fn ordered_by_begin_then_end() {
        assert!(iv(1, 9) < iv(2, 3));
        assert!(iv(1, 3) < iv(1, 9));
        assert!(iv(1, 3) == iv(3, 1));
    }

    #[test]
    fn display_format() {
        assert_eq!(iv(1, 5).to_string(), "[1, 5]");
    }

    #[test]
    fn debug_matches_display() {
        assert_eq!(format!("{:?}", iv(1, 5)), "[1, 5]");
    }

    /**
     * Serialization tests.
     */

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_sorts_bounds() {
        let i: Interval = serde_json::from_str("[5, 1]").unwrap();
        assert_eq!(i, iv(1, 5));
        assert!(i.begin() <= i.end());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization_round_trip() {
        let json = serde_json::to_string(&iv(1, 5)).unwrap();
        assert_eq!(json, "[1,5]");
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv(1, 5));
    }
}
