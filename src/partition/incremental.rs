//! Non-reshuffling single insert.
//!
//! Once a plan has been published (gate numbers shown on the board),
//! adding one more interval must not move anything already assigned.
//! First-fit placement does that: scan gates in label order, take the
//! first without a conflict, open a new gate only when none fits.
//!
//! The price of stability is optimality — a plan grown this way may use
//! more gates than [`partition`](super::partition) would for the same
//! set. Re-running the full partitioner is the way to re-minimize.

use tracing::trace;

use crate::models::{GateAssignment, GateId, GatePlan, Interval};

use super::PartitionError;

/// Inserts one interval into an existing plan without reassigning
/// anything, returning the gate it landed on.
///
/// Scans gates `0..gate_count` in label order and places the interval
/// on the first gate where it overlaps no existing assignment; if every
/// gate conflicts, a new gate is opened and `gate_count` grows.
///
/// # Errors
/// [`PartitionError::InvalidInterval`] if `start_ms >= end_ms`; the
/// plan is left untouched.
///
/// # Example
///
/// ```
/// use gate_plan::models::Interval;
/// use gate_plan::partition::{partition, place_first_fit};
///
/// let mut plan = partition(&[Interval::new("A", 0, 100)]).unwrap();
/// let gate = place_first_fit(&mut plan, Interval::new("B", 100, 200)).unwrap();
/// assert_eq!(gate, 0); // boundary touch: A's gate is free
/// assert_eq!(plan.gate_count, 1);
/// ```
pub fn place_first_fit(
    plan: &mut GatePlan,
    interval: Interval,
) -> Result<GateId, PartitionError> {
    if !interval.is_valid() {
        return Err(PartitionError::invalid(&interval));
    }

    let gate = (0..plan.gate_count)
        .find(|&g| {
            plan.assignments
                .iter()
                .filter(|a| a.gate == g)
                .all(|a| a.end_ms <= interval.start_ms || interval.end_ms <= a.start_ms)
        })
        .unwrap_or(plan.gate_count);

    trace!(
        interval = %interval.id,
        gate,
        opened = (gate == plan.gate_count),
        "first-fit placement"
    );
    plan.add_assignment(GateAssignment::new(
        interval.id,
        gate,
        interval.start_ms,
        interval.end_ms,
    ));
    Ok(gate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    fn iv(id: &str, start_ms: i64, end_ms: i64) -> Interval {
        Interval::new(id, start_ms, end_ms)
    }

    #[test]
    fn test_insert_into_empty_plan() {
        let mut plan = GatePlan::new();
        let gate = place_first_fit(&mut plan, iv("A", 0, 10)).unwrap();
        assert_eq!(gate, 0);
        assert_eq!(plan.gate_count, 1);
    }

    #[test]
    fn test_prior_assignments_untouched() {
        let intervals = vec![iv("A", 0, 50), iv("B", 20, 70)];
        let mut plan = partition(&intervals).unwrap();
        let before = plan.assignments.clone();

        place_first_fit(&mut plan, iv("C", 30, 90)).unwrap();

        assert_eq!(&plan.assignments[..before.len()], &before[..]);
        assert!(plan.is_conflict_free());
    }

    #[test]
    fn test_first_fitting_gate_wins() {
        // Gate 0 busy [0,50), gate 1 busy [20,70): a [50,60) window
        // fits gate 0 and conflicts with gate 1.
        let mut plan = partition(&[iv("A", 0, 50), iv("B", 20, 70)]).unwrap();
        let gate = place_first_fit(&mut plan, iv("C", 50, 60)).unwrap();
        assert_eq!(gate, 0);
        assert_eq!(plan.gate_count, 2);
    }

    #[test]
    fn test_opens_new_gate_when_all_conflict() {
        let mut plan = partition(&[iv("A", 0, 50), iv("B", 20, 70)]).unwrap();
        let gate = place_first_fit(&mut plan, iv("C", 40, 60)).unwrap();
        assert_eq!(gate, 2);
        assert_eq!(plan.gate_count, 3);
    }

    #[test]
    fn test_invalid_interval_leaves_plan_untouched() {
        let mut plan = partition(&[iv("A", 0, 50)]).unwrap();
        let before = plan.clone();

        let err = place_first_fit(&mut plan, iv("bad", 60, 60)).unwrap_err();
        match err {
            PartitionError::InvalidInterval { id, .. } => assert_eq!(id, "bad"),
        }
        assert_eq!(plan, before);
    }

    #[test]
    fn test_first_fit_can_exceed_minimum() {
        // Insertion order matters: grown in this order the plan needs
        // 3 gates, while a fresh partition of the same set needs 2.
        let mut plan = GatePlan::new();
        place_first_fit(&mut plan, iv("v1", 0, 2)).unwrap(); // gate 0
        place_first_fit(&mut plan, iv("v4", 3, 5)).unwrap(); // gate 0
        place_first_fit(&mut plan, iv("v2", 1, 3)).unwrap(); // gate 1
        place_first_fit(&mut plan, iv("v3", 2, 4)).unwrap(); // blocked on 0 and 1
        assert_eq!(plan.gate_count, 3);
        assert!(plan.is_conflict_free());

        let intervals = vec![iv("v1", 0, 2), iv("v2", 1, 3), iv("v3", 2, 4), iv("v4", 3, 5)];
        assert_eq!(partition(&intervals).unwrap().gate_count, 2);
    }
}
