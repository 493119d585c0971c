//! The closed vocabulary of validation failures.
//!
//! Every failure a checker can record is one of the [`Rule`] cases below;
//! there is no generic or unknown failure. Each case carries exactly the
//! data its message needs, so the rendered text is always derivable from the
//! rule alone (plus the field name for interpolation).

use serde::{Deserialize, Serialize};

// ============================================================================
// RULE
// ============================================================================

/// A named, data-carrying failure kind.
///
/// Equality is structural: two rules are equal iff their case tags and
/// payloads are equal. Payloads are owned values captured at validation
/// time, so later mutation of the original input cannot change an
/// already-produced error.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::Rule;
///
/// let rule = Rule::TooLong { max: 50 };
/// assert_eq!(rule.code(), "too_long");
/// assert_eq!(rule.description("name"), "name is too long (maximum 50 characters)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Rule {
    /// A value was expected but absent.
    Required,
    /// A present text value is blank once trimmed.
    Empty,
    /// Trimmed text exceeds the maximum length.
    TooLong {
        /// Maximum allowed length in characters.
        max: usize,
    },
    /// Trimmed text falls short of the minimum length.
    TooShort {
        /// Minimum required length in characters.
        min: usize,
    },
    /// A numeric value lies outside its inclusive bounds.
    ///
    /// Bounds are stored in integral form even for real-valued checks; the
    /// coercion happens at validation time (see `NumericValue::as_bound`).
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// A value does not conform to an expected format.
    InvalidFormat {
        /// What the expected format is, in plain language.
        reason: String,
    },
    /// A domain constraint was violated.
    ///
    /// The reason is the whole message; no generic suggestion applies.
    BusinessRule {
        /// The full failure text, including the field name if relevant.
        reason: String,
    },
    /// A caller-supplied failure with a caller-supplied message.
    Custom {
        /// The full failure text.
        message: String,
    },
    /// Text is not a valid email address.
    InvalidEmail,
    /// Text is not a valid URL.
    InvalidUrl,
    /// Text is not a valid phone number.
    InvalidPhoneNumber,
    /// The value was declared non-unique by the caller.
    ///
    /// Determining non-uniqueness is an external responsibility; this case
    /// only records the verdict.
    NotUnique,
    /// The value does not match another field's value.
    NotMatching {
        /// Name of the field this value must match.
        other_field: String,
    },
}

impl Rule {
    /// Stable machine-readable identifier for this rule kind.
    ///
    /// This is the i18n hook: localization maps over `code` plus the rule
    /// payload, while [`description`](Self::description) provides the
    /// default-language text.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Empty => "empty",
            Rule::TooLong { .. } => "too_long",
            Rule::TooShort { .. } => "too_short",
            Rule::OutOfRange { .. } => "out_of_range",
            Rule::InvalidFormat { .. } => "invalid_format",
            Rule::BusinessRule { .. } => "business_rule",
            Rule::Custom { .. } => "custom",
            Rule::InvalidEmail => "invalid_email",
            Rule::InvalidUrl => "invalid_url",
            Rule::InvalidPhoneNumber => "invalid_phone_number",
            Rule::NotUnique => "not_unique",
            Rule::NotMatching { .. } => "not_matching",
        }
    }

    /// Renders the default-language description for this rule.
    ///
    /// `field` is interpolated into every template except `BusinessRule`
    /// and `Custom`, whose payloads are already complete sentences.
    #[must_use]
    pub fn description(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("{field} is required"),
            Rule::Empty => format!("{field} cannot be empty"),
            Rule::TooLong { max } => {
                format!("{field} is too long (maximum {max} characters)")
            }
            Rule::TooShort { min } => {
                format!("{field} is too short (minimum {min} characters)")
            }
            Rule::OutOfRange { min, max } => {
                format!("{field} must be between {min} and {max}")
            }
            Rule::InvalidFormat { reason } => {
                format!("{field} has invalid format: {reason}")
            }
            Rule::BusinessRule { reason } => reason.clone(),
            Rule::Custom { message } => message.clone(),
            Rule::InvalidEmail => format!("{field} must be a valid email address"),
            Rule::InvalidUrl => format!("{field} must be a valid URL"),
            Rule::InvalidPhoneNumber => format!("{field} must be a valid phone number"),
            Rule::NotUnique => format!("{field} must be unique"),
            Rule::NotMatching { other_field } => {
                format!("{field} must match {other_field}")
            }
        }
    }

    /// Renders the recovery suggestion for this rule, if a generic one
    /// applies.
    ///
    /// `BusinessRule` and `Custom` carry caller-authored text for which no
    /// generic advice exists; they return `None`.
    #[must_use]
    pub fn recovery_suggestion(&self, field: &str) -> Option<String> {
        match self {
            Rule::Required => Some(format!("Please provide a value for {field}")),
            Rule::Empty => Some(format!("Enter a non-empty value for {field}")),
            Rule::TooLong { max } => {
                Some(format!("Shorten {field} to {max} characters or less"))
            }
            Rule::TooShort { min } => {
                Some(format!("Lengthen {field} to at least {min} characters"))
            }
            Rule::OutOfRange { min, max } => {
                Some(format!("Choose a value between {min} and {max}"))
            }
            Rule::InvalidFormat { reason } => Some(format!("Check the format: {reason}")),
            Rule::BusinessRule { .. } | Rule::Custom { .. } => None,
            Rule::InvalidEmail => {
                Some("Enter a valid email address (e.g., user@example.com)".to_string())
            }
            Rule::InvalidUrl => {
                Some("Enter a valid URL (e.g., https://example.com)".to_string())
            }
            Rule::InvalidPhoneNumber => Some("Enter a valid phone number".to_string()),
            Rule::NotUnique => Some(format!("This {field} is already in use")),
            Rule::NotMatching { other_field } => {
                Some(format!("Ensure {field} matches {other_field}"))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
