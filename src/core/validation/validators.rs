//! Reusable field validators
//!
//! These rules are shared by the payload `Validate` implementations.

use super::Violation;

/// Validator: string must contain at least one non-whitespace character
pub fn not_blank(field: &str, value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::new(field, format!("{} is required", field)))
    } else {
        Ok(())
    }
}

/// Validator: number must be strictly positive
pub fn positive(field: &str, value: f64) -> Result<(), Violation> {
    // NaN fails the comparison and is rejected too
    if value > 0.0 {
        Ok(())
    } else {
        Err(Violation::new(
            field,
            format!("{} must be greater than zero (value: {})", field, value),
        ))
    }
}

/// Validator: integer must not be negative
pub fn non_negative(field: &str, value: i64) -> Result<(), Violation> {
    if value < 0 {
        Err(Violation::new(
            field,
            format!("{} must not be negative (value: {})", field, value),
        ))
    } else {
        Ok(())
    }
}
