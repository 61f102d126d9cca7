/**
 * Stores a set of disjunct intervals, unifying them when possible.
 */

use crate::interval::Interval;
use crate::normalize::normalize;

/// Represents the union of a collection of intervals in canonical form:
/// the stored intervals are sorted ascending and pairwise disjunct, not
/// even touching. Every way to build one goes through `normalize`, so the
/// invariant holds from construction on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Interval>", into = "Vec<Interval>")
)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

/// A uniform view of the two operand shapes the set operations accept: a
/// single interval behaves as a one-element collection.
pub trait Intervals {
    fn intervals(&self) -> &[Interval];
}

impl Intervals for Interval {
    fn intervals(&self) -> &[Interval] {
        std::slice::from_ref(self)
    }
}

impl Intervals for IntervalSet {
    fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

/**
 * Constructing a set.
 */

impl IntervalSet {
    pub fn new() -> Self {
        IntervalSet{ intervals: Vec::new() }
    }

    /// Builds a set from `(begin, end)` pairs, each in either bound order.
    /// Overlapping and touching pairs are unified right away.
    pub fn from_pairs<I>(pairs: I) -> Self
        where I : IntoIterator<Item = (i64, i64)> {
        pairs.into_iter().map(Interval::from).collect()
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        IntervalSet{ intervals: vec![interval] }
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        IntervalSet{ intervals: normalize(intervals) }
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.intervals
    }
}

impl std::iter::FromIterator<Interval> for IntervalSet {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = Interval> {
        IntervalSet{ intervals: normalize(iter.into_iter().collect()) }
    }
}

/**
 * Info about a set.
 */

impl IntervalSet {
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Positional access without the out-of-range panic of indexing.
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }
}

/**
 * Relation of sets.
 */

impl IntervalSet {
    /// Checks if any interval of `self` shares a point with any interval
    /// of `other`. The argument is a single interval or a whole set.
    pub fn intersects<O>(&self, other: &O) -> bool where O : Intervals + ?Sized {
        other
            .intervals()
            .iter()
            .any(|o| self.intervals.iter().any(|r| o.intersects(r)))
    }

    /// Checks if every interval of `other` fits entirely within a single
    /// interval of `self`. An argument interval straddling two stored
    /// intervals is not contained, even when their union covers it.
    pub fn contains<O>(&self, other: &O) -> bool where O : Intervals + ?Sized {
        other
            .intervals()
            .iter()
            .all(|o| self.intervals.iter().any(|r| r.contains(o)))
    }

    /// Checks if a single integer is covered by the set.
    pub fn contains_value(&self, value: i64) -> bool {
        self.contains(&Interval::singleton(value))
    }
}

/**
 * Combining sets.
 */

impl IntervalSet {
    /// Unions the intervals of both operands into a new normalized set.
    /// Neither operand is touched.
    pub fn combine<O>(&self, other: &O) -> Self where O : Intervals + ?Sized {
        self.intervals
            .iter()
            .chain(other.intervals().iter())
            .copied()
            .collect()
    }
}

impl <O> std::ops::Add<&O> for &IntervalSet where O : Intervals + ?Sized {
    type Output = IntervalSet;

    fn add(self, other: &O) -> IntervalSet {
        self.combine(other)
    }
}

impl std::ops::Add<Interval> for &IntervalSet {
    type Output = IntervalSet;

    fn add(self, other: Interval) -> IntervalSet {
        self.combine(&other)
    }
}

/**
 * Positional access and iteration.
 */

impl std::ops::Index<usize> for IntervalSet {
    type Output = Interval;

    /// Panics when `index` is out of range, like slice indexing does.
    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

impl <'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/**
 * Display a set.
 */

impl std::fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
