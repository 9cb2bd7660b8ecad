//! Interval partitioning for gate assignment.
//!
//! Assigns half-open time windows (aircraft turnarounds, meetings,
//! berth calls) to interchangeable resource units — "gates" — so that
//! no two windows on the same gate overlap, using the provably minimal
//! number of gates. The minimum always equals the interval depth: the
//! maximum number of windows open at any single instant.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `GateAssignment`, `GatePlan`
//! - **`partition`**: The greedy partitioner, the depth oracle, and
//!   first-fit single inserts
//! - **`validation`**: Pre-flight input checks (duplicate IDs, bad windows)
//! - **`timefmt`**: "HH:MM" ↔ millisecond conversions for front-ends
//!
//! # Architecture
//!
//! Pure library: intervals in, plan out. No I/O, no shared state, no
//! blocking — every call is independent and reentrant. Collecting
//! interval data, rendering plans, and mapping gate labels to physical
//! gate names belong to the caller.
//!
//! # Example
//!
//! ```
//! use gate_plan::models::Interval;
//! use gate_plan::partition::partition;
//!
//! let intervals = vec![
//!     Interval::new("TC-LSU", 0, 90),
//!     Interval::new("TC-JSI", 45, 135),
//!     Interval::new("TC-JTR", 135, 210),
//! ];
//!
//! let plan = partition(&intervals).unwrap();
//! assert_eq!(plan.gate_count, 2);
//! // TC-JTR starts exactly when TC-JSI ends and reuses a gate.
//! assert_eq!(plan.gate_for("TC-JTR"), plan.gate_for("TC-LSU"));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs"

pub mod models;
pub mod partition;
pub mod timefmt;
pub mod validation;
