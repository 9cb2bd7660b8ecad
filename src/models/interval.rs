//! Occupancy interval model.
//!
//! An interval is a half-open time window `[start, end)` during which a
//! single entity (an aircraft at a gate, a meeting in a room) occupies
//! one resource unit exclusively.
//!
//! # Time Representation
//! All times are in milliseconds relative to a scheduling epoch (t=0).
//! The consumer defines what t=0 means (e.g., midnight, shift start).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use serde::{Deserialize, Serialize};

/// A half-open occupancy window `[start_ms, end_ms)` with an opaque identity.
///
/// The id carries no meaning to the partitioner beyond identity; callers
/// typically use flight numbers or registration codes. Distinct intervals
/// may share identical start and end times.
///
/// # Invariant
/// `start_ms < end_ms` for a schedulable interval. Construction does not
/// enforce this — [`partition`](crate::partition::partition) rejects
/// violations so the caller gets a typed error instead of a panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Opaque identifier (e.g., flight number).
    pub id: String,
    /// Window start (ms, inclusive).
    pub start_ms: i64,
    /// Window end (ms, exclusive).
    pub end_ms: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(id: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            id: id.into(),
            start_ms,
            end_ms,
        }
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether the window is well-formed (`start < end`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start_ms < self.end_ms
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two windows overlap.
    ///
    /// Half-open semantics: an interval ending exactly when another
    /// starts does not overlap it.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let iv = Interval::new("TC-LSU", 1_000, 5_000);
        assert_eq!(iv.id, "TC-LSU");
        assert_eq!(iv.duration_ms(), 4_000);
        assert!(iv.is_valid());
        assert!(iv.contains(1_000));
        assert!(iv.contains(4_999));
        assert!(!iv.contains(5_000)); // end is exclusive
    }

    #[test]
    fn test_degenerate_intervals() {
        assert!(!Interval::new("empty", 100, 100).is_valid());
        assert!(!Interval::new("inverted", 200, 100).is_valid());
    }

    #[test]
    fn test_overlap_half_open() {
        let a = Interval::new("a", 0, 100);
        let b = Interval::new("b", 100, 200); // touches a's end
        let c = Interval::new("c", 50, 150);

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_identical_windows_overlap() {
        let a = Interval::new("a", 0, 100);
        let b = Interval::new("b", 0, 100);
        assert!(a.overlaps(&b));
    }
}
