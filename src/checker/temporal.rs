//! Checks over one named timestamp.
//!
//! The rule vocabulary is closed and has no temporal case, so past/future
//! violations are recorded as [`Rule::BusinessRule`] with a reason that
//! carries the field name.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::rule::Rule;

// ============================================================================
// TEMPORAL CHECKER
// ============================================================================

/// Applies an ordered set of checks to one named timestamp.
///
/// "Now" is sampled at check time; a value exactly equal to now passes both
/// `not_future` and `not_past`.
///
/// # Examples
///
/// ```rust,ignore
/// use chrono::Utc;
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new();
/// v.timestamp("birth_date", Some(Utc::now()), |c| {
///     c.required().not_future();
/// });
/// assert!(v.is_valid());
/// ```
#[derive(Debug)]
pub struct TemporalChecker<'a> {
    field: &'a str,
    value: Option<DateTime<Utc>>,
    errors: Vec<ValidationError>,
}

impl<'a> TemporalChecker<'a> {
    pub(crate) fn new(field: &'a str, value: Option<DateTime<Utc>>) -> Self {
        Self {
            field,
            value,
            errors: Vec::new(),
        }
    }

    pub(crate) fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn fail(&mut self, rule: Rule) {
        self.errors.push(ValidationError::new(self.field, rule));
    }

    /// Fails with [`Rule::Required`] iff the value is absent.
    pub fn required(&mut self) -> &mut Self {
        if self.value.is_none() {
            self.fail(Rule::Required);
        }
        self
    }

    /// Fails if the timestamp is strictly after now.
    pub fn not_future(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            if value > Utc::now() {
                self.fail(Rule::BusinessRule {
                    reason: format!("{} cannot be in the future", self.field),
                });
            }
        }
        self
    }

    /// Fails if the timestamp is strictly before now.
    pub fn not_past(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            if value < Utc::now() {
                self.fail(Rule::BusinessRule {
                    reason: format!("{} cannot be in the past", self.field),
                });
            }
        }
        self
    }

    /// Fails with [`Rule::NotMatching`] if both this value and `other` are
    /// present and unequal. A missing value on either side passes.
    pub fn matches(&mut self, other: Option<DateTime<Utc>>, other_field: &str) -> &mut Self {
        if let (Some(this), Some(that)) = (self.value, other) {
            if this != that {
                self.fail(Rule::NotMatching {
                    other_field: other_field.to_owned(),
                });
            }
        }
        self
    }

    /// Fails with the supplied rule iff `predicate` returns `false` for the
    /// (possibly absent) value.
    pub fn custom<F>(&mut self, rule: Rule, predicate: F) -> &mut Self
    where
        F: FnOnce(Option<DateTime<Utc>>) -> bool,
    {
        if !predicate(self.value) {
            self.fail(rule);
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
