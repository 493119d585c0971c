//! The validation error value.
//!
//! A [`ValidationError`] pairs a field identifier with one [`Rule`]
//! instance. Description and recovery suggestion are derived from the rule
//! on demand, never stored, so there is a single source of truth for
//! message text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::Rule;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// An immutable `(field, rule)` pair describing one validation failure.
///
/// Two errors are equal iff both the field and the rule compare equal.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::{Rule, ValidationError};
///
/// let error = ValidationError::new("email", Rule::InvalidEmail);
/// assert_eq!(error.description(), "email must be a valid email address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    field: String,
    rule: Rule,
}

impl ValidationError {
    /// Creates a new validation error for `field` violating `rule`.
    #[must_use]
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    /// The identifier of the field that failed.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The rule that was violated.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Stable machine-readable code of the violated rule.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.rule.code()
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn description(&self) -> String {
        self.rule.description(&self.field)
    }

    /// Generic advice for fixing the failure, where any applies.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<String> {
        self.rule.recovery_suggestion(&self.field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
