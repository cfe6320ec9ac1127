//! Structured validation findings
//!
//! Validators collect every violated rule instead of stopping at the first,
//! so the caller can show the full list in one round trip.

use serde::Serialize;
use std::fmt;

/// Input field a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Login,
    Password,
    PasswordConfirmation,
    UserId,
    AdminId,
    StartDate,
    EndDate,
    Reason,
}

/// Rule that was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    /// Value missing or empty
    Required,
    /// Value does not match the expected format
    Format,
    /// Value length outside the allowed range
    Length,
    /// Value already taken by another record
    AlreadyExists,
    /// Referenced record does not exist
    NotFound,
    /// Referenced user has the wrong role
    WrongRole,
    /// Password is single-case
    SingleCase,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    /// Confirmation does not match
    Mismatch,
    /// End date not after start date
    Ordering,
}

/// A single broken rule with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    pub fn new(field: Field, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// Ordered list of violations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn add(&mut self, field: Field, rule: Rule, message: impl Into<String>) -> &mut Self {
        self.0.push(Violation::new(field, rule, message));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Check whether a given rule was broken for a field
    pub fn contains(&self, field: Field, rule: Rule) -> bool {
        self.0.iter().any(|v| v.field == field && v.rule == rule)
    }

    /// Messages in the order they were recorded
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.message.as_str()).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise the wrapped violations
    pub fn finish<E, F>(self, wrap: F) -> Result<(), E>
    where
        F: FnOnce(Violations) -> E,
    {
        if self.is_empty() {
            Ok(())
        } else {
            Err(wrap(self))
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&violation.message)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
