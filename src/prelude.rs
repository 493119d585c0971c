//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in
//! the rule vocabulary, the error type, the checkers, and the validator
//! surface.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let mut v = Validator::new();
//! v.text("name", Some("Ada"), |c| {
//!     c.required().not_empty().max_length(MAX_NAME_LENGTH);
//! });
//! assert!(v.is_valid());
//! ```

pub use crate::checker::{NumberChecker, NumericValue, TemporalChecker, TextChecker};
pub use crate::error::ValidationError;
pub use crate::limits::{
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use crate::rule::Rule;
pub use crate::validator::{Validatable, Validator};
