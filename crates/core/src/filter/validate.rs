//! Cross-field conflict validation for filter specifications.
//!
//! Validation is an ordered list of independent rule functions over the spec.
//! Each rule either accepts or reports a typed [`ConflictReason`]; the first
//! violated rule determines the error. New domain rules are appended to
//! [`RULES`] without touching existing ones.

use crate::error::{ConflictReason, FilterError};
use crate::filter::FilterSpec;

type RuleCheck = fn(&FilterSpec) -> Result<(), ConflictReason>;

/// Ordered validation rules. Evaluated front to back, first failure wins.
const RULES: &[RuleCheck] = &[length_bounds];

/// Accept the spec or reject it with the first conflict found.
///
/// Known gap, intentionally unchecked: word count versus length bounds may be
/// practically unsatisfiable (e.g. one word with `min_length` 1000).
pub fn validate(spec: &FilterSpec) -> Result<(), FilterError> {
    for rule in RULES {
        rule(spec).map_err(FilterError::Conflicting)?;
    }
    Ok(())
}

/// `min_length` must not exceed `max_length` when both are present.
fn length_bounds(spec: &FilterSpec) -> Result<(), ConflictReason> {
    if let (Some(min), Some(max)) = (spec.min_length, spec.max_length) {
        if min > max {
            return Err(ConflictReason::LengthBounds { min, max });
        }
    }
    Ok(())
}
