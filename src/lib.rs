//! # fieldcheck
//!
//! Declarative per-field validation with accumulated, renderable errors.
//!
//! Given a named value and a sequence of declared checks, the engine
//! produces a normalized, ordered list of [`ValidationError`]s — failures
//! are data, never control flow. Data models expose a single capability,
//! [`Validatable`], that builds a [`Validator`], declares checks per field,
//! and returns the resulting list; an empty list means valid.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! struct Contact {
//!     name: Option<String>,
//!     email: Option<String>,
//!     age: Option<i64>,
//! }
//!
//! impl Validatable for Contact {
//!     fn validation_errors(&self) -> Vec<ValidationError> {
//!         let mut v = Validator::new();
//!         v.text("name", self.name.as_deref(), |c| {
//!             c.required().not_empty().max_length(MAX_NAME_LENGTH);
//!         })
//!         .text("email", self.email.as_deref(), |c| {
//!             c.required().matches_email();
//!         })
//!         .number("age", self.age, |c| {
//!             c.range(18, 130);
//!         });
//!         v.into_errors()
//!     }
//! }
//! ```
//!
//! ## Semantics
//!
//! - Checks are independent: a failing check never suppresses later checks
//!   on the same field, and a failing field never skips later fields.
//! - Every check except `required` passes silently on an absent value;
//!   omitting `required` makes a field fully optional.
//! - Error order equals field-declaration order; within a field, check
//!   order. No deduplication.
//! - Each rule renders a fixed description and, where generic advice
//!   applies, a recovery suggestion; both are pure functions of the rule.

pub mod checker;
pub mod error;
pub mod limits;
pub mod prelude;
pub mod rule;
pub mod validator;

pub use error::ValidationError;
pub use rule::Rule;
pub use validator::{Validatable, Validator};
