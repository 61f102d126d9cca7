/**
 * Collapsing a list of intervals into its canonical disjunct form.
 */

use crate::interval::Interval;

/// Merges an arbitrary, possibly overlapping and unsorted list of
/// intervals into the minimal ascending sequence of disjunct intervals
/// covering the same integers. Touching intervals are unified too, so in
/// the result `out[i].end() < out[i + 1].begin()` holds strictly.
pub fn normalize(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort();

    // Since the input is sorted by begin, the last accepted interval is
    // always the rightmost-reaching one, so it's the only merge candidate.
    let mut result = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match result.last_mut() {
            Some(last) if interval.intersects(last) => {
                *last = interval.hull(last);
            },
            _ => result.push(interval),
        }
    }
    result
}

// Tests ///////////////////////////////////////////////////////////////////////
