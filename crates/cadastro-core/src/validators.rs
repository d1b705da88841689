//! Field-specific validation rules and the per-field dispatch entry point.
//!
//! Two kinds carry a synchronous rule: the birth date (age of majority) and
//! the CPF (check digits).  Each rule is a zero-sized struct implementing
//! [`FieldValidator`]; [`validator_for`] maps a kind to its rule.  Kinds
//! without a rule fall through to native-only validation — a no-op, not an
//! error.
//!
//! The CEP field also has a field-specific step, but it is asynchronous and
//! mutates other fields; it is modeled as an explicit request/continuation
//! pair on [`FieldSet`] (see the lookup module) rather than as a rule here.

use crate::age::{of_age_today, parse_birth_date};
use crate::check_digits;
use crate::field::{Field, FieldKind, FieldSet};
use crate::messages::{INVALID_CPF_MESSAGE, UNDER_AGE_MESSAGE, message_for};

/// A stateless, synchronous rule for one field kind.
///
/// Rules communicate only through the field's custom-error slot: a failing
/// check sets a message, a passing check clears it.  The trait is
/// object-safe; [`validator_for`] hands out `&'static dyn FieldValidator`.
pub trait FieldValidator {
    /// The field kind this rule applies to.
    fn kind(&self) -> FieldKind;

    /// Runs the check, setting or clearing the field's custom error.
    fn check(&self, field: &mut Field);
}

/// Age-of-majority rule for the birth-date field.
///
/// An unparseable value counts as under-age: the shifted date of a garbage
/// input can never be on or before today.
pub struct BirthDateRule;

impl FieldValidator for BirthDateRule {
    fn kind(&self) -> FieldKind {
        FieldKind::BirthDate
    }

    fn check(&self, field: &mut Field) {
        let of_age = parse_birth_date(&field.value).is_some_and(of_age_today);
        if of_age {
            field.validity.set_custom_validity("");
        } else {
            field.validity.set_custom_validity(UNDER_AGE_MESSAGE);
        }
    }
}

/// Check-digit rule for the CPF field.
pub struct CpfRule;

impl FieldValidator for CpfRule {
    fn kind(&self) -> FieldKind {
        FieldKind::Cpf
    }

    fn check(&self, field: &mut Field) {
        if check_digits::cpf(&field.value) {
            field.validity.set_custom_validity("");
        } else {
            field.validity.set_custom_validity(INVALID_CPF_MESSAGE);
        }
    }
}

/// Returns the rule registered for a field kind, if any.
pub fn validator_for(kind: FieldKind) -> Option<&'static dyn FieldValidator> {
    match kind {
        FieldKind::BirthDate => Some(&BirthDateRule),
        FieldKind::Cpf => Some(&CpfRule),
        FieldKind::Name
        | FieldKind::Email
        | FieldKind::Password
        | FieldKind::Cep
        | FieldKind::Street
        | FieldKind::City
        | FieldKind::State
        | FieldKind::Price => None,
    }
}

/// Validates one field and updates its presentation state.
///
/// Refreshes the native validity flags, runs the registered rule (if any),
/// then reads the overall validity: a valid field has its invalid marker and
/// message cleared; an invalid field gets the marker plus the catalog
/// message for the first set failure kind in priority order.  A combination
/// absent from the catalog shows an empty message.
pub fn validate(field: &mut Field) {
    field.refresh_validity();
    if let Some(rule) = validator_for(field.kind) {
        debug_assert_eq!(rule.kind(), field.kind);
        rule.check(field);
    }

    if field.validity.valid() {
        field.presentation.clear();
    } else {
        field.presentation.invalid = true;
        field.presentation.message = field
            .validity
            .first_failure()
            .and_then(|failure| message_for(field.kind, failure))
            .unwrap_or("")
            .to_owned();
    }
}

/// Validates every field in the set.
pub fn validate_all(fields: &mut FieldSet) {
    for field in fields.iter_mut() {
        validate(field);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn registry_covers_birth_date_and_cpf_only() {
        assert!(validator_for(FieldKind::BirthDate).is_some());
        assert!(validator_for(FieldKind::Cpf).is_some());
        for kind in [
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Password,
            FieldKind::Cep,
            FieldKind::Street,
            FieldKind::City,
            FieldKind::State,
            FieldKind::Price,
        ] {
            assert!(validator_for(kind).is_none(), "{kind} must be native-only");
        }
    }

    #[test]
    fn empty_required_field_shows_catalog_message() {
        let mut field = Field::new(FieldKind::Name);
        validate(&mut field);
        assert!(field.presentation.invalid);
        assert_eq!(
            field.presentation.message,
            "Este campo nome não pode estar vazio."
        );
    }

    #[test]
    fn valid_field_clears_stale_presentation() {
        let mut field = Field::with_value(FieldKind::Name, "Ana");
        field.presentation.invalid = true;
        field.presentation.message = "sobrou".to_owned();
        validate(&mut field);
        assert!(!field.presentation.invalid);
        assert!(field.presentation.message.is_empty());
    }

    #[test]
    fn cpf_rule_sets_and_clears_custom_error() {
        let mut field = Field::with_value(FieldKind::Cpf, "11111111111");
        validate(&mut field);
        assert!(field.presentation.invalid);
        assert_eq!(field.presentation.message, INVALID_CPF_MESSAGE);

        field.value = "111.444.777-35".to_owned();
        validate(&mut field);
        assert!(!field.presentation.invalid);
        assert!(field.validity.valid());
    }

    #[test]
    fn birth_date_rule_rejects_minor_and_garbage() {
        let mut field = Field::with_value(FieldKind::BirthDate, "2020-01-01");
        validate(&mut field);
        assert!(field.presentation.invalid);
        assert_eq!(field.presentation.message, UNDER_AGE_MESSAGE);

        field.value = "não é uma data".to_owned();
        validate(&mut field);
        assert!(field.presentation.invalid);
        assert_eq!(field.presentation.message, UNDER_AGE_MESSAGE);
    }

    #[test]
    fn birth_date_rule_accepts_adult() {
        let mut field = Field::with_value(FieldKind::BirthDate, "1990-06-15");
        validate(&mut field);
        assert!(!field.presentation.invalid);
        assert!(field.validity.valid());
    }

    #[test]
    fn value_missing_outranks_custom_error() {
        // An empty birth date is both value-missing and under-age; the
        // priority order picks the value-missing message.
        let mut field = Field::new(FieldKind::BirthDate);
        validate(&mut field);
        assert_eq!(
            field.presentation.message,
            "Este campo data de nascimento não pode estar vazio."
        );
    }

    #[test]
    fn unregistered_kind_degrades_to_native_validation() {
        let mut field = Field::with_value(FieldKind::Price, "89,90");
        validate(&mut field);
        assert!(!field.presentation.invalid);
    }

    #[test]
    fn uncataloged_failure_yields_empty_message() {
        // A stray custom error on a kind without a customError entry.
        let mut field = Field::with_value(FieldKind::Price, "89,90");
        field.validity.set_custom_validity("erro avulso");
        validate(&mut field);
        assert!(field.presentation.invalid);
        assert!(field.presentation.message.is_empty());
    }

    #[test]
    fn validate_all_touches_every_field() {
        let mut form = FieldSet::signup_form();
        form.set_value(FieldKind::Name, "Ana");
        validate_all(&mut form);

        let name = form.get(FieldKind::Name).expect("name field");
        assert!(!name.presentation.invalid);

        let email = form.get(FieldKind::Email).expect("email field");
        assert!(email.presentation.invalid);
        assert_eq!(
            email.presentation.message,
            "Este campo email não pode estar vazio."
        );
    }
}
