//! Implementation of `cadastro check`.
//!
//! Builds a field set from a JSON form snapshot (`{"email": "...", ...}`,
//! keyed by `data-tipo` tag) or from repeated `--field tag=value` arguments,
//! runs the validation dispatch over every field, and prints one diagnostic
//! line per invalid field to stderr.
//!
//! Only the fields present in the input are validated; an omitted field is
//! treated as not on the form, not as empty.
//!
//! Exit codes:
//! - 0 = every provided field is valid
//! - 1 = at least one field is invalid
//! - 2 = the snapshot could not be read or decoded

use std::collections::BTreeMap;

use cadastro_core::{FieldKind, FieldSet, validate_all};

use crate::error::CliError;

/// Parses a `tag=value` pair from a `--field` argument.
pub fn parse_field_arg(arg: &str) -> Result<(FieldKind, String), CliError> {
    let Some((tag, value)) = arg.split_once('=') else {
        return Err(CliError::MalformedFieldArg {
            arg: arg.to_owned(),
        });
    };
    let kind = FieldKind::from_tag(tag).ok_or_else(|| CliError::UnknownField {
        tag: tag.to_owned(),
    })?;
    Ok((kind, value.to_owned()))
}

/// Decodes a JSON form snapshot into `(kind, value)` pairs, in tag order.
pub fn parse_snapshot(content: &str) -> Result<Vec<(FieldKind, String)>, CliError> {
    let map: BTreeMap<String, String> =
        serde_json::from_str(content).map_err(|e| CliError::InvalidSnapshot {
            detail: e.to_string(),
        })?;
    map.into_iter()
        .map(|(tag, value)| {
            let kind = FieldKind::from_tag(&tag)
                .ok_or(CliError::UnknownField { tag })?;
            Ok((kind, value))
        })
        .collect()
}

/// Runs the `check` command over the given `(kind, value)` pairs.
///
/// Writes one `campo <tag>: <message>` line per invalid field to stderr.
/// Returns [`CliError::ValidationErrors`] when any field is invalid.
pub fn run(entries: Vec<(FieldKind, String)>) -> Result<(), CliError> {
    let mut fields: FieldSet = entries.into_iter().collect();
    validate_all(&mut fields);

    let mut count = 0usize;
    for field in fields.iter() {
        if field.presentation.invalid {
            count += 1;
            eprintln!("campo {}: {}", field.kind, field.presentation.message);
        }
    }

    if count > 0 {
        return Err(CliError::ValidationErrors { count });
    }
    Ok(())
}
