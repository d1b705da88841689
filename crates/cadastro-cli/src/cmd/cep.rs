//! Implementation of `cadastro cep <code>`.
//!
//! Resolves a postal code against the live ViaCEP service and prints the
//! street, city, and state on success.
//!
//! Exit codes:
//! - 0 = resolved
//! - 1 = the service reports the code as unknown
//! - 2 = implausible code, or the service could not be reached

use cadastro_core::{Field, FieldKind, FieldSet, LookupOutcome};
use cadastro_viacep::ViaCepClient;

use crate::error::CliError;

/// Runs the `cep` command.
pub async fn run(code: &str) -> Result<(), CliError> {
    let mut fields = FieldSet::new();
    fields.insert(Field::with_value(FieldKind::Cep, code));
    let Some(request) = fields.begin_cep_lookup() else {
        return Err(CliError::ImplausibleCep {
            code: code.to_owned(),
        });
    };

    let client = ViaCepClient::new().map_err(|e| CliError::Transport {
        detail: e.to_string(),
    })?;
    let outcome = client
        .fetch(&request)
        .await
        .map_err(|e| CliError::Transport {
            detail: e.to_string(),
        })?;

    match outcome {
        LookupOutcome::Found(address) => {
            println!("logradouro: {}", address.street);
            println!("cidade:     {}", address.city);
            println!("estado:     {}", address.state);
            Ok(())
        }
        LookupOutcome::NotFound => Err(CliError::CepNotFound {
            code: request.code().to_owned(),
        }),
    }
}
