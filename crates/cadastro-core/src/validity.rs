//! The native validity model: per-field boolean failure flags, the custom
//! error slot, and the constraint evaluation that computes the flags from a
//! field's value.
//!
//! This mirrors the subset of the HTML constraint-validation API the form
//! relies on: `valueMissing`, `typeMismatch`, `patternMismatch`, and
//! `customError`.  The first three are derived from the field's built-in
//! constraints by [`ValidityState::refresh`]; the custom-error flag is owned
//! by field validators through [`ValidityState::set_custom_validity`] and is
//! preserved across refreshes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::field::FieldKind;

/// The WHATWG email production for `input type="email"` without `multiple`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

/// CEP format: five digits, optional hyphen, three digits.
static CEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}-?[0-9]{3}$")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

/// The password rule the form declares: 8 to 15 characters including at
/// least one lowercase letter, one uppercase letter, and one digit.
///
/// The declared HTML pattern uses lookaheads, which the `regex` crate does
/// not support; the three character-class requirements are checked directly.
fn password_matches(value: &str) -> bool {
    let len = value.chars().count();
    (8..=15).contains(&len)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// The kinds of validity failure a field can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidityKind {
    /// The field is required and its value is empty.
    ValueMissing,
    /// The value does not conform to the field's input type (email).
    TypeMismatch,
    /// The value does not match the field's declared pattern.
    PatternMismatch,
    /// A field validator set a custom error message.
    CustomError,
}

impl ValidityKind {
    /// Returns the DOM property name for this failure kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValueMissing => "valueMissing",
            Self::TypeMismatch => "typeMismatch",
            Self::PatternMismatch => "patternMismatch",
            Self::CustomError => "customError",
        }
    }
}

impl fmt::Display for ValidityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed priority order in which failure kinds are reported: the error
/// message shown for an invalid field belongs to the first kind in this
/// order that is set.
pub const FAILURE_PRIORITY: [ValidityKind; 4] = [
    ValidityKind::ValueMissing,
    ValidityKind::TypeMismatch,
    ValidityKind::PatternMismatch,
    ValidityKind::CustomError,
];

/// A field's validity flags plus the validator-owned custom error message.
///
/// A non-empty custom message forces the overall state invalid, exactly like
/// `setCustomValidity` in the browser API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityState {
    /// Required constraint violated.
    pub value_missing: bool,
    /// Input-type constraint violated.
    pub type_mismatch: bool,
    /// Pattern constraint violated.
    pub pattern_mismatch: bool,
    custom_message: String,
}

impl ValidityState {
    /// Returns `true` when a validator has set a non-empty custom message.
    pub fn custom_error(&self) -> bool {
        !self.custom_message.is_empty()
    }

    /// The current custom error message (empty when none is set).
    pub fn custom_message(&self) -> &str {
        &self.custom_message
    }

    /// Sets or clears the custom error message.  An empty message clears the
    /// custom-error flag.
    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.custom_message = message.into();
    }

    /// Overall validity: no native flag set and no custom message.
    pub fn valid(&self) -> bool {
        !self.value_missing && !self.type_mismatch && !self.pattern_mismatch && !self.custom_error()
    }

    /// Returns `true` when the given failure kind is currently set.
    pub fn is_set(&self, kind: ValidityKind) -> bool {
        match kind {
            ValidityKind::ValueMissing => self.value_missing,
            ValidityKind::TypeMismatch => self.type_mismatch,
            ValidityKind::PatternMismatch => self.pattern_mismatch,
            ValidityKind::CustomError => self.custom_error(),
        }
    }

    /// The first set failure kind in [`FAILURE_PRIORITY`] order, or `None`
    /// when the state is valid.
    pub fn first_failure(&self) -> Option<ValidityKind> {
        FAILURE_PRIORITY.into_iter().find(|&kind| self.is_set(kind))
    }

    /// Recomputes the native flags from `value` and the built-in constraints
    /// of `kind`.  All ten field kinds are required; email is type-checked;
    /// password and CEP carry patterns.  The custom message is left alone —
    /// only validators set and clear it.
    pub fn refresh(&mut self, kind: FieldKind, value: &str) {
        self.value_missing = false;
        self.type_mismatch = false;
        self.pattern_mismatch = false;

        if value.is_empty() {
            self.value_missing = true;
            return;
        }

        match kind {
            FieldKind::Email => self.type_mismatch = !EMAIL_RE.is_match(value),
            FieldKind::Password => self.pattern_mismatch = !password_matches(value),
            FieldKind::Cep => self.pattern_mismatch = !CEP_RE.is_match(value),
            FieldKind::Name
            | FieldKind::BirthDate
            | FieldKind::Cpf
            | FieldKind::Street
            | FieldKind::City
            | FieldKind::State
            | FieldKind::Price => {}
        }
    }
}
