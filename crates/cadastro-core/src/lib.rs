#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod age;
pub mod check_digits;
pub mod field;
pub mod lookup;
pub mod messages;
pub mod validators;
pub mod validity;

pub use field::{Field, FieldKind, FieldSet, Presentation};
pub use lookup::{Address, LookupOutcome, LookupRequest};
pub use messages::{
    CEP_NOT_FOUND_MESSAGE, INVALID_CPF_MESSAGE, UNDER_AGE_MESSAGE, message_for,
};
pub use validators::{
    BirthDateRule, CpfRule, FieldValidator, validate, validate_all, validator_for,
};
pub use validity::{FAILURE_PRIORITY, ValidityKind, ValidityState};

/// Returns the current version of the cadastro-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
