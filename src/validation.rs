//! Input validation for partitioning problems.
//!
//! Checks structural integrity of an interval list before partitioning.
//! Detects:
//! - Duplicate IDs
//! - Empty or inverted windows (`start >= end`)
//!
//! [`partition`](crate::partition::partition) rejects bad windows on
//! its own, one at a time; this module is the collaborator-facing
//! pre-flight check that reports every problem at once — including
//! duplicate IDs, which the partitioner treats as opaque and does not
//! police.

use std::collections::HashSet;

use crate::models::Interval;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two intervals share the same ID.
    DuplicateId,
    /// An interval has `start_ms >= end_ms`.
    InvalidRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an interval list before partitioning.
///
/// Checks:
/// 1. No duplicate interval IDs
/// 2. Every interval satisfies `start_ms < end_ms`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_intervals(intervals: &[Interval]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for iv in intervals {
        if !seen.insert(iv.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate interval ID: {}", iv.id),
            ));
        }

        if !iv.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRange,
                format!(
                    "Interval '{}' has an empty or inverted window ({}..{})",
                    iv.id, iv.start_ms, iv.end_ms
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
