//! Checks over one named text value.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::rule::Rule;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static PHONE_INTERNATIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

static PHONE_DOMESTIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Formatting characters stripped before phone-number matching.
const PHONE_FORMATTING: [char; 5] = [' ', '-', '(', ')', '.'];

// ============================================================================
// TEXT CHECKER
// ============================================================================

/// Applies an ordered set of checks to one named text value.
///
/// Checks chain on `&mut Self` and accumulate failures; nothing
/// short-circuits. Lengths are measured in Unicode scalar values on the
/// trimmed text.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new();
/// v.text("username", Some("al"), |c| {
///     c.required().not_empty().min_length(3).max_length(20);
/// });
/// assert_eq!(v.errors().len(), 1); // too short
/// ```
#[derive(Debug)]
pub struct TextChecker<'a> {
    field: &'a str,
    value: Option<&'a str>,
    errors: Vec<ValidationError>,
}

impl<'a> TextChecker<'a> {
    pub(crate) fn new(field: &'a str, value: Option<&'a str>) -> Self {
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

    fn trimmed_len(value: &str) -> usize {
        value.trim().chars().count()
    }

    /// Fails with [`Rule::Required`] iff the value is absent.
    pub fn required(&mut self) -> &mut Self {
        if self.value.is_none() {
            self.fail(Rule::Required);
        }
        self
    }

    /// Fails with [`Rule::Empty`] if the trimmed text is empty.
    pub fn not_empty(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            if value.trim().is_empty() {
                self.fail(Rule::Empty);
            }
        }
        self
    }

    /// Fails with [`Rule::TooShort`] if the trimmed length is below `min`.
    ///
    /// A length exactly equal to `min` passes.
    pub fn min_length(&mut self, min: usize) -> &mut Self {
        if let Some(value) = self.value {
            if Self::trimmed_len(value) < min {
                self.fail(Rule::TooShort { min });
            }
        }
        self
    }

    /// Fails with [`Rule::TooLong`] if the trimmed length exceeds `max`.
    ///
    /// A length exactly equal to `max` passes.
    pub fn max_length(&mut self, max: usize) -> &mut Self {
        if let Some(value) = self.value {
            if Self::trimmed_len(value) > max {
                self.fail(Rule::TooLong { max });
            }
        }
        self
    }

    /// Fails with [`Rule::InvalidEmail`] if the whole string does not match
    /// the email pattern.
    pub fn matches_email(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            if !EMAIL_RE.is_match(value) {
                self.fail(Rule::InvalidEmail);
            }
        }
        self
    }

    /// Fails with [`Rule::InvalidUrl`] unless the text parses as a URL with
    /// a non-empty scheme and a non-empty host.
    pub fn matches_url(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            let ok = url::Url::parse(value).is_ok_and(|parsed| {
                !parsed.scheme().is_empty()
                    && parsed.host_str().is_some_and(|host| !host.is_empty())
            });
            if !ok {
                self.fail(Rule::InvalidUrl);
            }
        }
        self
    }

    /// Fails with [`Rule::InvalidPhoneNumber`] if the text, after stripping
    /// spaces, hyphens, parentheses, and periods, is not a phone number.
    ///
    /// With `allow_international` the remainder must match `^\+?[0-9]{7,15}$`;
    /// otherwise it must be exactly 10 digits.
    pub fn matches_phone_number(&mut self, allow_international: bool) -> &mut Self {
        if let Some(value) = self.value {
            let cleaned: String = value
                .chars()
                .filter(|c| !PHONE_FORMATTING.contains(c))
                .collect();
            let pattern = if allow_international {
                &PHONE_INTERNATIONAL_RE
            } else {
                &PHONE_DOMESTIC_RE
            };
            if !pattern.is_match(&cleaned) {
                self.fail(Rule::InvalidPhoneNumber);
            }
        }
        self
    }

    /// Fails with [`Rule::NotMatching`] if both this value and `other` are
    /// present and unequal. A missing value on either side passes.
    pub fn matches(&mut self, other: Option<&str>, other_field: &str) -> &mut Self {
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
        F: FnOnce(Option<&str>) -> bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: Option<&str>, checks: impl FnOnce(&mut TextChecker<'_>)) -> Vec<ValidationError> {
        let mut checker = TextChecker::new("field", value);
        checks(&mut checker);
        checker.into_errors()
    }

    mod presence {
        use super::*;

        #[test]
        fn required_fails_on_absent() {
            let errors = run(None, |c| {
                c.required();
            });
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].rule(), &Rule::Required);
        }

        #[test]
        fn required_passes_on_present_even_if_empty() {
            let errors = run(Some(""), |c| {
                c.required();
            });
            assert!(errors.is_empty());
        }

        #[test]
        fn other_checks_pass_on_absent() {
            let errors = run(None, |c| {
                c.not_empty()
                    .min_length(3)
                    .max_length(5)
                    .matches_email()
                    .matches_url()
                    .matches_phone_number(true)
                    .matches(Some("x"), "other");
            });
            assert!(errors.is_empty());
        }
    }

    mod emptiness_and_length {
        use super::*;

        #[test]
        fn not_empty_fails_on_whitespace_only() {
            let errors = run(Some("   \t"), |c| {
                c.not_empty();
            });
            assert_eq!(errors[0].rule(), &Rule::Empty);
        }

        #[test]
        fn empty_string_accumulates_two_errors() {
            // required passes (value is present), not_empty and min_length
            // each fail independently.
            let errors = run(Some(""), |c| {
                c.required().not_empty().min_length(8);
            });
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].rule(), &Rule::Empty);
            assert_eq!(errors[1].rule(), &Rule::TooShort { min: 8 });
            assert!(errors.iter().all(|e| e.field() == "field"));
        }

        #[test]
        fn length_boundaries_pass() {
            let errors = run(Some("abcde"), |c| {
                c.min_length(5).max_length(5);
            });
            assert!(errors.is_empty());
        }

        #[test]
        fn length_measured_on_trimmed_text() {
            let errors = run(Some("  ab  "), |c| {
                c.max_length(2);
            });
            assert!(errors.is_empty());

            let errors = run(Some("  ab  "), |c| {
                c.min_length(3);
            });
            assert_eq!(errors[0].rule(), &Rule::TooShort { min: 3 });
        }

        #[test]
        fn length_counts_chars_not_bytes() {
            // "héllo" is 5 chars, 6 bytes
            let errors = run(Some("h\u{e9}llo"), |c| {
                c.max_length(5);
            });
            assert!(errors.is_empty());
        }

        #[test]
        fn too_long_carries_the_bound() {
            let errors = run(Some("abcdef"), |c| {
                c.max_length(5);
            });
            assert_eq!(errors[0].rule(), &Rule::TooLong { max: 5 });
        }
    }

    mod email {
        use super::*;

        #[test]
        fn accepts_plus_tag_and_multi_label_domain() {
            let errors = run(Some("user+tag@example.co.uk"), |c| {
                c.matches_email();
            });
            assert!(errors.is_empty());
        }

        #[test]
        fn rejects_malformed_addresses() {
            for bad in ["test@.com", "test@", "@example.com", "test @example.com"] {
                let errors = run(Some(bad), |c| {
                    c.matches_email();
                });
                assert_eq!(errors.len(), 1, "expected one error for {bad:?}");
                assert_eq!(errors[0].rule(), &Rule::InvalidEmail);
            }
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn accepts_scheme_and_host() {
            for good in ["https://example.com", "http://example.com/path?q=1"] {
                let errors = run(Some(good), |c| {
                    c.matches_url();
                });
                assert!(errors.is_empty(), "expected pass for {good:?}");
            }
        }

        #[test]
        fn rejects_unparseable_or_hostless() {
            // "mailto:user@example.com" parses but has no host
            for bad in ["not a url", "mailto:user@example.com", "/relative/path"] {
                let errors = run(Some(bad), |c| {
                    c.matches_url();
                });
                assert_eq!(errors.len(), 1, "expected one error for {bad:?}");
                assert_eq!(errors[0].rule(), &Rule::InvalidUrl);
            }
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn domestic_requires_exactly_ten_digits() {
            assert!(run(Some("(415) 555-1234"), |c| {
                c.matches_phone_number(false);
            })
            .is_empty());

            assert_eq!(
                run(Some("555-1234"), |c| {
                    c.matches_phone_number(false);
                })[0]
                    .rule(),
                &Rule::InvalidPhoneNumber
            );
        }

        #[test]
        fn international_allows_plus_and_seven_to_fifteen_digits() {
            for good in ["+14155551234", "+44 20 7123 4567", "1234567"] {
                assert!(
                    run(Some(good), |c| {
                        c.matches_phone_number(true);
                    })
                    .is_empty(),
                    "expected pass for {good:?}"
                );
            }
            for bad in ["123456", "+1234567890123456", "call me"] {
                assert_eq!(
                    run(Some(bad), |c| {
                        c.matches_phone_number(true);
                    })
                    .len(),
                    1,
                    "expected one error for {bad:?}"
                );
            }
        }

        #[test]
        fn formatting_characters_are_stripped() {
            assert!(run(Some("415.555.1234"), |c| {
                c.matches_phone_number(false);
            })
            .is_empty());
        }
    }

    mod matching {
        use super::*;

        #[test]
        fn equal_values_pass() {
            assert!(run(Some("secret"), |c| {
                c.matches(Some("secret"), "password");
            })
            .is_empty());
        }

        #[test]
        fn unequal_values_fail_with_other_field() {
            let errors = run(Some("secret"), |c| {
                c.matches(Some("Secret"), "password");
            });
            assert_eq!(
                errors[0].rule(),
                &Rule::NotMatching {
                    other_field: "password".into()
                }
            );
        }

        #[test]
        fn absent_other_side_passes() {
            assert!(run(Some("secret"), |c| {
                c.matches(None, "password");
            })
            .is_empty());
        }
    }

    mod custom {
        use super::*;

        #[test]
        fn failing_predicate_attaches_supplied_rule() {
            let rule = Rule::Custom {
                message: "nickname is reserved".into(),
            };
            let errors = run(Some("admin"), |c| {
                c.custom(rule.clone(), |v| v != Some("admin"));
            });
            assert_eq!(errors[0].rule(), &rule);
        }

        #[test]
        fn predicate_sees_absent_values() {
            // Unlike the built-in checks, custom predicates decide for
            // themselves what absence means.
            let errors = run(None, |c| {
                c.custom(Rule::NotUnique, |v| v.is_some());
            });
            assert_eq!(errors[0].rule(), &Rule::NotUnique);
        }
    }

    #[test]
    fn checks_run_in_declaration_order_without_dedup() {
        let errors = run(Some(""), |c| {
            c.not_empty().min_length(3).matches_email();
        });
        assert_eq!(
            errors.iter().map(ValidationError::rule).collect::<Vec<_>>(),
            vec![
                &Rule::Empty,
                &Rule::TooShort { min: 3 },
                &Rule::InvalidEmail
            ]
        );
    }
}
