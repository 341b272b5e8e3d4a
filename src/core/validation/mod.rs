//! Validation of write payloads
//!
//! Validation is split in two stages that both produce [`Violations`]:
//!
//! - field rules ([`Validate`]), which only look at the payload itself
//! - reference rules ([`ReferenceCheck`]), which look up referenced records
//!   in the store
//!
//! Neither stage mutates anything; the write pipeline merges their output
//! and decides whether the store is touched at all.

pub mod references;
pub mod validators;

pub use references::ReferenceCheck;

use serde::Serialize;
use std::fmt;

/// Field name used for the violation reported on an absent payload
pub const PAYLOAD_FIELD: &str = "payload";

/// A single validation failure tied to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of violations reported for one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Record the outcome of a single rule, keeping only failures
    pub fn check(&mut self, outcome: Result<(), Violation>) {
        if let Err(violation) = outcome {
            self.push(violation);
        }
    }

    /// Append every violation of `other`
    pub fn merge(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Names of the violated fields, in report order
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }

    /// Whether any violation is keyed to `field`
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", msgs.join(", "))
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Structural (field-level) validation of a payload
pub trait Validate {
    /// Evaluate every field rule and return all failures
    fn validate(&self) -> Violations;
}

/// Validate a possibly absent payload.
///
/// An absent payload is a single "payload required" violation and no field
/// rule is evaluated.
pub fn validate_payload<P: Validate>(payload: Option<&P>) -> Violations {
    match payload {
        Some(payload) => payload.validate(),
        None => Violations::from(vec![Violation::new(PAYLOAD_FIELD, "payload required")]),
    }
}
