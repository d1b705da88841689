//! The static error-message catalog: one fixed Portuguese string per
//! `(field kind, failure kind)` pair the form can actually produce.
//!
//! The catalog is total over the reachable combinations — every failure kind
//! a field's built-in constraints or registered validator can raise has an
//! entry.  Combinations outside the catalog yield `None`, which the
//! dispatcher renders as an empty message.

use crate::field::FieldKind;
use crate::validity::ValidityKind;

/// Custom message set by the age-of-majority rule.
pub const UNDER_AGE_MESSAGE: &str = "Você deve ser maior de 18 anos para se cadastrar.";

/// Custom message set by the CPF check-digit rule.
pub const INVALID_CPF_MESSAGE: &str = "O CPF digitado não é válido.";

/// Custom message set when the address service reports an unknown CEP.
pub const CEP_NOT_FOUND_MESSAGE: &str = "Não foi possível buscar o CEP.";

const CATALOG: &[(FieldKind, ValidityKind, &str)] = &[
    (
        FieldKind::Name,
        ValidityKind::ValueMissing,
        "Este campo nome não pode estar vazio.",
    ),
    (
        FieldKind::Email,
        ValidityKind::ValueMissing,
        "Este campo email não pode estar vazio.",
    ),
    (
        FieldKind::Email,
        ValidityKind::TypeMismatch,
        "O email não é válido.",
    ),
    (
        FieldKind::Password,
        ValidityKind::ValueMissing,
        "Este campo senha não pode estar vazio.",
    ),
    (
        FieldKind::Password,
        ValidityKind::PatternMismatch,
        "A senha deve conter entre 8 a 15 caracteres, e deve incluir pelo menos uma letra maiúscula, uma letra minúscula e um dígito numérico.",
    ),
    (
        FieldKind::BirthDate,
        ValidityKind::ValueMissing,
        "Este campo data de nascimento não pode estar vazio.",
    ),
    (FieldKind::BirthDate, ValidityKind::CustomError, UNDER_AGE_MESSAGE),
    (
        FieldKind::Cpf,
        ValidityKind::ValueMissing,
        "Este campo CPF não pode estar vazio.",
    ),
    (FieldKind::Cpf, ValidityKind::CustomError, INVALID_CPF_MESSAGE),
    (
        FieldKind::Cep,
        ValidityKind::ValueMissing,
        "Este campo CEP não pode estar vazio.",
    ),
    (
        FieldKind::Cep,
        ValidityKind::PatternMismatch,
        "O CEP digitado não é válido.",
    ),
    (FieldKind::Cep, ValidityKind::CustomError, CEP_NOT_FOUND_MESSAGE),
    (
        FieldKind::Street,
        ValidityKind::ValueMissing,
        "Este campo logradouro não pode estar vazio.",
    ),
    (
        FieldKind::City,
        ValidityKind::ValueMissing,
        "Este campo cidade não pode estar vazio.",
    ),
    (
        FieldKind::State,
        ValidityKind::ValueMissing,
        "Este campo estado não pode estar vazio.",
    ),
    (
        FieldKind::Price,
        ValidityKind::ValueMissing,
        "Este campo preço não pode estar vazio.",
    ),
];

/// Looks up the catalog message for a field kind and failure kind.
///
/// Returns `None` for combinations the catalog does not address.
pub fn message_for(kind: FieldKind, failure: ValidityKind) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(k, f, _)| *k == kind && *f == failure)
        .map(|(_, _, message)| *message)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    /// Every field kind is required, so every kind has a value-missing entry.
    #[test]
    fn every_kind_has_value_missing_message() {
        for kind in FieldKind::ALL {
            assert!(
                message_for(kind, ValidityKind::ValueMissing).is_some(),
                "{kind} lacks a valueMissing message"
            );
        }
    }

    /// Every failure kind a field's constraints or validator can raise has
    /// a catalog entry.
    #[test]
    fn reachable_failures_are_covered() {
        assert!(message_for(FieldKind::Email, ValidityKind::TypeMismatch).is_some());
        assert!(message_for(FieldKind::Password, ValidityKind::PatternMismatch).is_some());
        assert!(message_for(FieldKind::Cep, ValidityKind::PatternMismatch).is_some());
        assert!(message_for(FieldKind::BirthDate, ValidityKind::CustomError).is_some());
        assert!(message_for(FieldKind::Cpf, ValidityKind::CustomError).is_some());
        assert!(message_for(FieldKind::Cep, ValidityKind::CustomError).is_some());
    }

    /// Unaddressed combinations yield `None`.
    #[test]
    fn unaddressed_combinations_are_none() {
        assert_eq!(message_for(FieldKind::Name, ValidityKind::TypeMismatch), None);
        assert_eq!(message_for(FieldKind::Price, ValidityKind::CustomError), None);
        assert_eq!(message_for(FieldKind::Cpf, ValidityKind::PatternMismatch), None);
    }

    #[test]
    fn custom_messages_match_catalog_entries() {
        assert_eq!(
            message_for(FieldKind::BirthDate, ValidityKind::CustomError),
            Some(UNDER_AGE_MESSAGE)
        );
        assert_eq!(
            message_for(FieldKind::Cpf, ValidityKind::CustomError),
            Some(INVALID_CPF_MESSAGE)
        );
        assert_eq!(
            message_for(FieldKind::Cep, ValidityKind::CustomError),
            Some(CEP_NOT_FOUND_MESSAGE)
        );
    }
}
