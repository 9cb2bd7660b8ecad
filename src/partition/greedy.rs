//! Greedy minimal-gate partitioning.
//!
//! # Algorithm
//!
//! 1. Sort intervals by ascending start time (stable: input order
//!    breaks ties, so output is reproducible).
//! 2. Keep open gates in a min-heap keyed by the end time of their
//!    last assignment.
//! 3. For each interval: if the earliest-freed gate is free no later
//!    than the interval starts, reuse it; otherwise open a new gate.
//!
//! A gate freed exactly at an interval's start is reusable — windows
//! are half-open, and treating the touch as a conflict would break
//! minimality.
//!
//! # Complexity
//! O(n log n) time (sort + heap operations), O(n) space.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{GateAssignment, GateId, GatePlan, Interval};

/// Failure returned by [`partition`] and
/// [`place_first_fit`](super::place_first_fit).
///
/// The single variant carries the offending interval's id and exact
/// window values so the caller can report it without further lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// An interval with `start_ms >= end_ms` was supplied.
    #[error("interval '{id}' has an empty or inverted window ({start_ms}..{end_ms})")]
    InvalidInterval {
        id: String,
        start_ms: i64,
        end_ms: i64,
    },
}

impl PartitionError {
    pub(crate) fn invalid(interval: &Interval) -> Self {
        Self::InvalidInterval {
            id: interval.id.clone(),
            start_ms: interval.start_ms,
            end_ms: interval.end_ms,
        }
    }
}

/// Partitions intervals onto the minimum number of gates.
///
/// Returns a [`GatePlan`] whose `gate_count` equals the interval depth
/// (the maximum number of simultaneously open windows) and whose
/// per-gate assignments never overlap. Gate labels are assigned in
/// creation order (0, 1, 2, …). The input slice is read-only; order
/// does not matter except to break ties between equal start times.
///
/// # Errors
/// [`PartitionError::InvalidInterval`] if any interval has
/// `start_ms >= end_ms`. The check runs before any assignment is made,
/// so a failed call produces no partial plan.
///
/// # Example
///
/// ```
/// use gate_plan::models::Interval;
/// use gate_plan::partition::partition;
///
/// let intervals = vec![
///     Interval::new("TC-LSU", 0, 30),
///     Interval::new("TC-JSI", 10, 40),
///     Interval::new("TC-JTR", 30, 60), // reuses TC-LSU's gate
/// ];
/// let plan = partition(&intervals).unwrap();
/// assert_eq!(plan.gate_count, 2);
/// assert_eq!(plan.gate_for("TC-JTR"), plan.gate_for("TC-LSU"));
/// ```
pub fn partition(intervals: &[Interval]) -> Result<GatePlan, PartitionError> {
    // All-or-nothing: reject malformed input before assigning anything.
    if let Some(bad) = intervals.iter().find(|iv| !iv.is_valid()) {
        return Err(PartitionError::invalid(bad));
    }

    let mut order: Vec<&Interval> = intervals.iter().collect();
    order.sort_by_key(|iv| iv.start_ms);

    let mut plan = GatePlan::new();
    // Open gates keyed by (last end, label); ties on end go to the
    // lower label, keeping output deterministic.
    let mut open: BinaryHeap<Reverse<(i64, GateId)>> = BinaryHeap::with_capacity(order.len());

    for iv in order {
        let gate = match open.peek() {
            Some(&Reverse((free_at, gate))) if free_at <= iv.start_ms => {
                open.pop();
                gate
            }
            _ => plan.gate_count,
        };
        open.push(Reverse((iv.end_ms, gate)));
        trace!(
            interval = %iv.id,
            gate,
            start_ms = iv.start_ms,
            end_ms = iv.end_ms,
            "interval assigned"
        );
        plan.add_assignment(GateAssignment::new(
            iv.id.clone(),
            gate,
            iv.start_ms,
            iv.end_ms,
        ));
    }

    debug!(
        intervals = intervals.len(),
        gates = plan.gate_count,
        "partition complete"
    );
    Ok(plan)
}
