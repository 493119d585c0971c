//! Checks over one named numeric value.

use crate::error::ValidationError;
use crate::rule::Rule;

// ============================================================================
// NUMERIC VALUE
// ============================================================================

/// Value shapes the numeric checker accepts.
///
/// `as_bound` coerces a bound into the integral form stored in
/// [`Rule::OutOfRange`]. For real values this truncates — preserved
/// behavior: the bound payload is integral even when the check ran on
/// non-integral bounds.
pub trait NumericValue: PartialOrd + PartialEq + Copy {
    /// The integral form of this value used in error payloads.
    fn as_bound(self) -> i64;
}

impl NumericValue for i32 {
    fn as_bound(self) -> i64 {
        i64::from(self)
    }
}

impl NumericValue for i64 {
    fn as_bound(self) -> i64 {
        self
    }
}

impl NumericValue for f32 {
    fn as_bound(self) -> i64 {
        self as i64
    }
}

impl NumericValue for f64 {
    fn as_bound(self) -> i64 {
        self as i64
    }
}

// ============================================================================
// NUMBER CHECKER
// ============================================================================

/// Applies an ordered set of checks to one named numeric value.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new();
/// v.number("age", Some(17_i64), |c| {
///     c.required().range(18, 65);
/// });
/// assert!(!v.is_valid());
/// ```
#[derive(Debug)]
pub struct NumberChecker<'a, T> {
    field: &'a str,
    value: Option<T>,
    errors: Vec<ValidationError>,
}

impl<'a, T: NumericValue> NumberChecker<'a, T> {
    pub(crate) fn new(field: &'a str, value: Option<T>) -> Self {
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

    /// Fails with [`Rule::OutOfRange`] if the value lies outside
    /// `min..=max`. Values equal to either bound pass.
    pub fn range(&mut self, min: T, max: T) -> &mut Self {
        if let Some(value) = self.value {
            if value < min || value > max {
                self.fail(Rule::OutOfRange {
                    min: min.as_bound(),
                    max: max.as_bound(),
                });
            }
        }
        self
    }

    /// Fails with [`Rule::NotMatching`] if both this value and `other` are
    /// present and unequal. A missing value on either side passes.
    pub fn matches(&mut self, other: Option<T>, other_field: &str) -> &mut Self {
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
        F: FnOnce(Option<T>) -> bool,
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
