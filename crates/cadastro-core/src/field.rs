//! The field model: semantic field kinds, per-field state, and the
//! [`FieldSet`] registry a form is validated through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validity::ValidityState;

/// The semantic tag of a form field.
///
/// The string form of each variant is the `data-tipo` tag the sign-up form
/// uses (`"nome"`, `"dataNascimento"`, `"cpf"`, ...); serde round-trips
/// those tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    /// Registrant name.
    #[serde(rename = "nome")]
    Name,
    /// Email address, type-checked against the WHATWG email production.
    #[serde(rename = "email")]
    Email,
    /// Password, pattern-checked (8–15 chars, lower + upper + digit).
    #[serde(rename = "senha")]
    Password,
    /// Birth date (ISO `YYYY-MM-DD`); the age-of-majority rule applies.
    #[serde(rename = "dataNascimento")]
    BirthDate,
    /// CPF taxpayer identifier; the check-digit rule applies.
    #[serde(rename = "cpf")]
    Cpf,
    /// CEP postal code; pattern-checked and resolvable via address lookup.
    #[serde(rename = "cep")]
    Cep,
    /// Street, filled in by a successful CEP lookup.
    #[serde(rename = "logradouro")]
    Street,
    /// City, filled in by a successful CEP lookup.
    #[serde(rename = "cidade")]
    City,
    /// State code, filled in by a successful CEP lookup.
    #[serde(rename = "estado")]
    State,
    /// Price.
    #[serde(rename = "preco")]
    Price,
}

impl FieldKind {
    /// Every field kind, in form order.
    pub const ALL: [FieldKind; 10] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::BirthDate,
        FieldKind::Cpf,
        FieldKind::Cep,
        FieldKind::Street,
        FieldKind::City,
        FieldKind::State,
        FieldKind::Price,
    ];

    /// Returns the `data-tipo` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Email => "email",
            Self::Password => "senha",
            Self::BirthDate => "dataNascimento",
            Self::Cpf => "cpf",
            Self::Cep => "cep",
            Self::Street => "logradouro",
            Self::City => "cidade",
            Self::State => "estado",
            Self::Price => "preco",
        }
    }

    /// Looks up a kind by its `data-tipo` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The presentation state of a field's container: the invalid-style marker
/// (a CSS class in the original form) and the inline error text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    /// Whether the invalid-style marker is applied.
    pub invalid: bool,
    /// The inline error message (empty when none is shown).
    pub message: String,
}

impl Presentation {
    /// Clears the marker and the message.
    pub fn clear(&mut self) {
        self.invalid = false;
        self.message.clear();
    }
}

/// One form field: semantic kind, current value, validity, presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The semantic tag.
    pub kind: FieldKind,
    /// The current raw value.
    pub value: String,
    /// Native validity flags plus the custom error slot.
    pub validity: ValidityState,
    /// Error-display state of the field's container.
    pub presentation: Presentation,
}

impl Field {
    /// Creates an empty field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            validity: ValidityState::default(),
            presentation: Presentation::default(),
        }
    }

    /// Creates a field with an initial value.
    pub fn with_value(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(kind)
        }
    }

    /// Recomputes the native validity flags from the current value and the
    /// kind's built-in constraints.  The custom error is untouched.
    pub fn refresh_validity(&mut self) {
        self.validity.refresh(self.kind, &self.value);
    }
}

/// The field registry: the fields of one form, queried by semantic kind.
///
/// Also carries the postal-lookup sequence counter used to discard stale
/// lookup responses (see the lookup module).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
    pub(crate) lookup_seq: u64,
}

impl FieldSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the full sign-up form: one empty field per kind, in form order.
    pub fn signup_form() -> Self {
        Self {
            fields: FieldKind::ALL.into_iter().map(Field::new).collect(),
            lookup_seq: 0,
        }
    }

    /// Adds a field.  Multiple fields of the same kind are allowed; queries
    /// return the first match, like `querySelector` in the original form.
    pub fn insert(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The first field of the given kind.
    pub fn get(&self, kind: FieldKind) -> Option<&Field> {
        self.fields.iter().find(|f| f.kind == kind)
    }

    /// Mutable access to the first field of the given kind.
    pub fn get_mut(&mut self, kind: FieldKind) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.kind == kind)
    }

    /// Sets the value of the first field of the given kind.  Returns `false`
    /// when no such field is registered.
    pub fn set_value(&mut self, kind: FieldKind, value: impl Into<String>) -> bool {
        match self.get_mut(kind) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Iterates over all fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Mutably iterates over all fields in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(FieldKind, String)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (FieldKind, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (kind, value) in iter {
            set.insert(Field::with_value(kind, value));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::from_tag("desconhecido"), None);
    }

    #[test]
    fn kind_serde_uses_form_tags() {
        let json = serde_json::to_string(&FieldKind::BirthDate).expect("serialize");
        assert_eq!(json, "\"dataNascimento\"");
        let kind: FieldKind = serde_json::from_str("\"cep\"").expect("deserialize");
        assert_eq!(kind, FieldKind::Cep);
    }

    #[test]
    fn signup_form_has_one_field_per_kind() {
        let form = FieldSet::signup_form();
        assert_eq!(form.len(), FieldKind::ALL.len());
        for kind in FieldKind::ALL {
            assert!(form.get(kind).is_some(), "{kind} missing");
        }
    }

    #[test]
    fn get_returns_first_match() {
        let mut set = FieldSet::new();
        set.insert(Field::with_value(FieldKind::Street, "primeira"));
        set.insert(Field::with_value(FieldKind::Street, "segunda"));
        assert_eq!(
            set.get(FieldKind::Street).map(|f| f.value.as_str()),
            Some("primeira")
        );
    }

    #[test]
    fn set_value_reports_missing_field() {
        let mut set = FieldSet::new();
        assert!(!set.set_value(FieldKind::City, "São Paulo"));
        set.insert(Field::new(FieldKind::City));
        assert!(set.set_value(FieldKind::City, "São Paulo"));
        assert_eq!(
            set.get(FieldKind::City).map(|f| f.value.as_str()),
            Some("São Paulo")
        );
    }

    #[test]
    fn refresh_validity_keeps_value() {
        let mut field = Field::with_value(FieldKind::Email, "usuario@exemplo.com");
        field.refresh_validity();
        assert_eq!(field.value, "usuario@exemplo.com");
        assert!(field.validity.valid());
    }
}
