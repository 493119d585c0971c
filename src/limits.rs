//! Default field limits shared with callers.
//!
//! These are conveniences for the common model fields; nothing in the
//! engine depends on them.

/// Default maximum length for name-like fields.
pub const MAX_NAME_LENGTH: usize = 50;

/// Default maximum length for description-like fields.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Default minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;
