//! Per-field checkers, one type per value shape.
//!
//! Capability gating is expressed through the type system: a checker only
//! exposes the checks that are legal for its value shape, so `range` cannot
//! be called on text and `matches_email` cannot be called on a number.
//!
//! - [`TextChecker`] — length, emptiness, and format checks over text
//! - [`NumberChecker`] — inclusive range checks over integral/real values
//! - [`TemporalChecker`] — past/future checks over timestamps
//!
//! Every checker is scoped to one `(field, value)` pair for one validation
//! pass. Checks are independent: each appends at most one error and never
//! suppresses later checks. Every check except `required` passes silently
//! on an absent value, so required-ness is the sole gate for presence.

pub mod number;
pub mod temporal;
pub mod text;

pub use number::{NumberChecker, NumericValue};
pub use temporal::TemporalChecker;
pub use text::TextChecker;
