//! The per-call error aggregator and the external validation capability.

use chrono::{DateTime, Utc};

use crate::checker::{NumberChecker, NumericValue, TemporalChecker, TextChecker};
use crate::error::ValidationError;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Collects per-field checker output into one ordered error list.
///
/// A `Validator` lives for exactly one validation call: created empty,
/// populated by a sequence of field declarations, then handed to the caller
/// and discarded. Nothing accumulates across calls, and independent calls
/// may run in parallel as long as they do not share an instance.
///
/// Error order equals field-declaration order; within a field, check order.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new();
/// v.text("name", Some("Ada"), |c| {
///     c.required().not_empty().max_length(50);
/// })
/// .number("age", Some(36_i64), |c| {
///     c.required().range(18, 65);
/// });
/// assert!(v.is_valid());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    /// Creates an empty validator for one validation call.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Declares checks for a named text value.
    ///
    /// Instantiates a [`TextChecker`] for `(field, value)`, runs `checks`
    /// against it, and appends its failures in check order.
    pub fn text(
        &mut self,
        field: &str,
        value: Option<&str>,
        checks: impl FnOnce(&mut TextChecker<'_>),
    ) -> &mut Self {
        let mut checker = TextChecker::new(field, value);
        checks(&mut checker);
        self.errors.extend(checker.into_errors());
        self
    }

    /// Declares checks for a named numeric value.
    pub fn number<T: NumericValue>(
        &mut self,
        field: &str,
        value: Option<T>,
        checks: impl FnOnce(&mut NumberChecker<'_, T>),
    ) -> &mut Self {
        let mut checker = NumberChecker::new(field, value);
        checks(&mut checker);
        self.errors.extend(checker.into_errors());
        self
    }

    /// Declares checks for a named timestamp.
    pub fn timestamp(
        &mut self,
        field: &str,
        value: Option<DateTime<Utc>>,
        checks: impl FnOnce(&mut TemporalChecker<'_>),
    ) -> &mut Self {
        let mut checker = TemporalChecker::new(field, value);
        checks(&mut checker);
        self.errors.extend(checker.into_errors());
        self
    }

    /// The full ordered error list built so far.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the validator, yielding the ordered error list.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// True iff no declared check has failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// The single capability a data model exposes to its callers: produce the
/// ordered list of validation errors for its current state.
///
/// An empty list means valid. Implementations build a [`Validator`],
/// declare checks per field, and return the result; they must not carry
/// state between invocations, so validating an unmutated model twice
/// yields structurally identical lists.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::{Validatable, ValidationError, Validator};
///
/// struct Contact {
///     name: Option<String>,
///     email: Option<String>,
/// }
///
/// impl Validatable for Contact {
///     fn validation_errors(&self) -> Vec<ValidationError> {
///         let mut v = Validator::new();
///         v.text("name", self.name.as_deref(), |c| {
///             c.required().not_empty().max_length(50);
///         })
///         .text("email", self.email.as_deref(), |c| {
///             c.required().matches_email();
///         });
///         v.into_errors()
///     }
/// }
/// ```
pub trait Validatable {
    /// Produces the ordered list of validation errors for the current
    /// state. Empty means valid.
    fn validation_errors(&self) -> Vec<ValidationError>;

    /// True iff [`validation_errors`](Self::validation_errors) is empty.
    fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
