//! The CEP address-lookup model: the request a caller sends to an address
//! service and the continuation that applies the outcome to the form.
//!
//! This crate performs no I/O.  The caller obtains a [`LookupRequest`] from
//! [`FieldSet::begin_cep_lookup`], resolves it against an address service
//! (the `cadastro-viacep` crate provides the HTTP client), and hands the
//! [`LookupOutcome`] back to [`FieldSet::apply_cep_lookup`].
//!
//! Each request is tagged with a sequence number drawn from a counter on the
//! [`FieldSet`].  Beginning a new lookup bumps the counter, so an outcome
//! that arrives for a superseded request no longer matches and is discarded
//! — a late response can never clobber fields derived from a newer CEP.

use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldSet};
use crate::messages::CEP_NOT_FOUND_MESSAGE;

/// A resolved address, in form terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street (logradouro).
    pub street: String,
    /// City (localidade).
    pub city: String,
    /// Two-letter state code (UF).
    pub state: String,
}

/// The logical outcome of one address lookup.
///
/// Transport failures are not an outcome — the resolving side surfaces those
/// as its own error and never calls the continuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOutcome {
    /// The service resolved the code to an address.
    Found(Address),
    /// The service reports the code as unknown.
    NotFound,
}

/// A pending address lookup: the cleaned postal code plus the sequence tag
/// that ties the eventual outcome back to the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    code: String,
    seq: u64,
}

impl LookupRequest {
    /// The cleaned postal code (digits only).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The sequence tag of this request.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl FieldSet {
    /// Starts an address lookup for the CEP field.
    ///
    /// Refreshes the field's native validity first and returns `None` when
    /// there is no CEP field, the value is missing, or the pattern does not
    /// match — a syntactically implausible code is never sent to the
    /// service.  Otherwise strips non-digits, bumps the sequence counter,
    /// and returns the tagged request.
    pub fn begin_cep_lookup(&mut self) -> Option<LookupRequest> {
        let field = self.get_mut(FieldKind::Cep)?;
        field.refresh_validity();
        if field.validity.value_missing || field.validity.pattern_mismatch {
            return None;
        }
        let code: String = field.value.chars().filter(char::is_ascii_digit).collect();
        self.lookup_seq += 1;
        Some(LookupRequest {
            code,
            seq: self.lookup_seq,
        })
    }

    /// Applies a lookup outcome to the form.
    ///
    /// Returns `false` without touching anything when `request` is stale
    /// (a newer lookup has begun since it was issued).  Otherwise:
    ///
    /// - [`LookupOutcome::NotFound`] sets the CEP custom error and leaves
    ///   the dependent fields untouched;
    /// - [`LookupOutcome::Found`] clears the CEP custom error and writes the
    ///   street, city, and state into the first field of each of those
    ///   kinds.
    ///
    /// Presentation state is not updated here; it refreshes on the next
    /// `validate` call for the field.
    pub fn apply_cep_lookup(&mut self, request: &LookupRequest, outcome: LookupOutcome) -> bool {
        if request.seq != self.lookup_seq {
            return false;
        }
        match outcome {
            LookupOutcome::NotFound => {
                if let Some(field) = self.get_mut(FieldKind::Cep) {
                    field.validity.set_custom_validity(CEP_NOT_FOUND_MESSAGE);
                }
            }
            LookupOutcome::Found(address) => {
                if let Some(field) = self.get_mut(FieldKind::Cep) {
                    field.validity.set_custom_validity("");
                }
                self.set_value(FieldKind::Street, address.street);
                self.set_value(FieldKind::City, address.city);
                self.set_value(FieldKind::State, address.state);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::field::Field;

    fn form_with_cep(value: &str) -> FieldSet {
        let mut form = FieldSet::signup_form();
        form.set_value(FieldKind::Cep, value);
        form
    }

    fn found(street: &str, city: &str, state: &str) -> LookupOutcome {
        LookupOutcome::Found(Address {
            street: street.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
        })
    }

    #[test]
    fn begin_strips_formatting_and_tags_sequence() {
        let mut form = form_with_cep("01001-000");
        let request = form.begin_cep_lookup().expect("plausible code");
        assert_eq!(request.code(), "01001000");
        assert_eq!(request.seq(), 1);

        let second = form.begin_cep_lookup().expect("plausible code");
        assert_eq!(second.seq(), 2);
    }

    #[test]
    fn begin_refuses_missing_or_malformed_code() {
        assert!(form_with_cep("").begin_cep_lookup().is_none());
        assert!(form_with_cep("12").begin_cep_lookup().is_none());
        assert!(form_with_cep("abcde-fgh").begin_cep_lookup().is_none());
    }

    #[test]
    fn begin_requires_a_cep_field() {
        let mut form = FieldSet::new();
        form.insert(Field::with_value(FieldKind::Street, "Rua A"));
        assert!(form.begin_cep_lookup().is_none());
    }

    #[test]
    fn found_outcome_populates_dependents_and_clears_error() {
        let mut form = form_with_cep("01001-000");
        let request = form.begin_cep_lookup().expect("request");

        let applied = form.apply_cep_lookup(&request, found("Praça da Sé", "São Paulo", "SP"));
        assert!(applied);

        let get = |kind| {
            form.get(kind)
                .map(|f: &Field| f.value.clone())
                .unwrap_or_default()
        };
        assert_eq!(get(FieldKind::Street), "Praça da Sé");
        assert_eq!(get(FieldKind::City), "São Paulo");
        assert_eq!(get(FieldKind::State), "SP");

        let cep = form.get(FieldKind::Cep).expect("cep field");
        assert!(!cep.validity.custom_error());
    }

    #[test]
    fn not_found_outcome_sets_error_and_leaves_dependents() {
        let mut form = form_with_cep("99999-999");
        form.set_value(FieldKind::Street, "preenchido antes");
        let request = form.begin_cep_lookup().expect("request");

        assert!(form.apply_cep_lookup(&request, LookupOutcome::NotFound));

        let cep = form.get(FieldKind::Cep).expect("cep field");
        assert_eq!(cep.validity.custom_message(), CEP_NOT_FOUND_MESSAGE);
        assert_eq!(
            form.get(FieldKind::Street).map(|f| f.value.as_str()),
            Some("preenchido antes")
        );
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut form = form_with_cep("01001-000");
        let first = form.begin_cep_lookup().expect("first request");

        form.set_value(FieldKind::Cep, "20040-020");
        let _second = form.begin_cep_lookup().expect("second request");

        // The first response arrives late; it must not win.
        let applied = form.apply_cep_lookup(&first, found("Praça da Sé", "São Paulo", "SP"));
        assert!(!applied);
        assert_eq!(
            form.get(FieldKind::Street).map(|f| f.value.as_str()),
            Some("")
        );
    }

    #[test]
    fn successful_lookup_clears_a_previous_not_found() {
        let mut form = form_with_cep("01001-000");
        let request = form.begin_cep_lookup().expect("request");
        assert!(form.apply_cep_lookup(&request, LookupOutcome::NotFound));

        let retry = form.begin_cep_lookup().expect("retry request");
        assert!(form.apply_cep_lookup(&retry, found("Praça da Sé", "São Paulo", "SP")));

        let cep = form.get(FieldKind::Cep).expect("cep field");
        assert!(!cep.validity.custom_error());
    }
}
