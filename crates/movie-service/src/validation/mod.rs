//! Rule-based validators
//!
//! Validators are stateless values. Lookups they need (uniqueness, referenced
//! users) go through the repository passed to each call. Every rule is
//! evaluated and all violations are reported together; a persistence failure
//! during a lookup aborts validation with that failure instead.

mod ban;
mod registration;

pub use ban::{BanDraft, BanValidator};
pub use registration::{RegistrationCandidate, RegistrationValidator};

/// Treat empty strings as absent
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
