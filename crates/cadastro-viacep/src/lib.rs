//! Async ViaCEP client: the concrete address service behind the CEP lookup.
//!
//! `cadastro-core` performs no I/O; it produces a `LookupRequest` and
//! consumes a `LookupOutcome`.  This crate bridges the two over the public
//! ViaCEP API (`https://viacep.com.br/ws/{code}/json/`, unauthenticated
//! GET).  A payload carrying the `erro` marker maps to
//! [`LookupOutcome::NotFound`]; anything else maps to the resolved address.
//!
//! Transport failures (DNS, timeout, non-JSON body) surface as
//! [`LookupError`] — the continuation is never called with a made-up
//! outcome, and the form is left exactly as it was.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;

use cadastro_core::{Address, FieldSet, LookupOutcome, LookupRequest};

/// Base of the ViaCEP web service.
pub const BASE_URL: &str = "https://viacep.com.br/ws";

/// Builds the lookup URL for a cleaned postal code.
pub fn endpoint(code: &str) -> String {
    format!("{BASE_URL}/{code}/json/")
}

/// The wire shape of a ViaCEP response.
///
/// On success the payload carries the full address record; only the three
/// fields the form consumes are modeled.  On an unknown code the service
/// answers `{"erro": true}` with every address field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressPayload {
    /// Street.
    #[serde(default)]
    pub logradouro: String,
    /// City.
    #[serde(default)]
    pub localidade: String,
    /// Two-letter state code.
    #[serde(default)]
    pub uf: String,
    /// Unknown-code marker; absent on success.
    #[serde(default)]
    pub erro: bool,
}

impl AddressPayload {
    /// Maps the payload to the logical outcome the form consumes.
    pub fn into_outcome(self) -> LookupOutcome {
        if self.erro {
            return LookupOutcome::NotFound;
        }
        LookupOutcome::Found(Address {
            street: self.logradouro,
            city: self.localidade,
            state: self.uf,
        })
    }
}

/// Failures between issuing the GET and decoding the payload.
#[derive(Debug)]
pub enum LookupError {
    /// The request could not be built or sent, or the response status was
    /// not readable.
    Request(reqwest::Error),
    /// The response body was not a decodable ViaCEP payload.
    Decode(reqwest::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "viacep request failed: {e}"),
            Self::Decode(e) => write!(f, "viacep response could not be decoded: {e}"),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) | Self::Decode(e) => Some(e),
        }
    }
}

/// An HTTP client for the ViaCEP service.
///
/// Wraps a [`reqwest::Client`] configured with the
/// `application/json; charset=utf-8` content type the service expects.
/// Cheap to clone; reuse one instance across lookups.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
}

impl ViaCepClient {
    /// Builds a client with the default headers.
    pub fn new() -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(LookupError::Request)?;
        Ok(Self { http })
    }

    /// Resolves one lookup request against the service.
    pub async fn fetch(&self, request: &LookupRequest) -> Result<LookupOutcome, LookupError> {
        let response = self
            .http
            .get(endpoint(request.code()))
            .send()
            .await
            .map_err(LookupError::Request)?;
        let payload: AddressPayload = response.json().await.map_err(LookupError::Decode)?;
        Ok(payload.into_outcome())
    }

    /// Runs the full lookup cycle on a form: begin, fetch, apply.
    ///
    /// Returns `Ok(false)` without any network traffic when the CEP field is
    /// absent or syntactically implausible, and `Ok(false)` when the outcome
    /// arrives stale (a newer lookup began while this one was in flight).
    /// Returns `Ok(true)` when the outcome was applied.
    pub async fn resolve(&self, fields: &mut FieldSet) -> Result<bool, LookupError> {
        let Some(request) = fields.begin_cep_lookup() else {
            return Ok(false);
        };
        let outcome = self.fetch(&request).await?;
        Ok(fields.apply_cep_lookup(&request, outcome))
    }
}
