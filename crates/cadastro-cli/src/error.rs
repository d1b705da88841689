/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `cadastro` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2** — input or transport failure: the tool could not read
///   or decode its input, or could not reach the address service.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   result is a well-defined failure (invalid fields, CEP not found).
use std::fmt;
use std::path::PathBuf;

/// All error conditions the `cadastro` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input and transport failures ---
    /// A file argument could not be read.
    FileUnreadable {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The form snapshot is not a JSON object of string values.
    InvalidSnapshot {
        /// Decoder detail.
        detail: String,
    },

    /// A field tag is not one of the ten known `data-tipo` tags.
    UnknownField {
        /// The unrecognized tag.
        tag: String,
    },

    /// A `--field` argument is not in `tag=value` form.
    MalformedFieldArg {
        /// The offending argument.
        arg: String,
    },

    /// The CEP argument is not a syntactically plausible postal code.
    ImplausibleCep {
        /// The offending code.
        code: String,
    },

    /// The address service could not be reached or its answer not decoded.
    Transport {
        /// The underlying error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// One or more fields failed validation.
    ValidationErrors {
        /// Number of invalid fields.
        count: usize,
    },

    /// The address service reports the CEP as unknown.
    CepNotFound {
        /// The cleaned code that was looked up.
        code: String,
    },
}

impl CliError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileUnreadable { .. }
            | Self::InvalidSnapshot { .. }
            | Self::UnknownField { .. }
            | Self::MalformedFieldArg { .. }
            | Self::ImplausibleCep { .. }
            | Self::Transport { .. } => 2,
            Self::ValidationErrors { .. } | Self::CepNotFound { .. } => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileUnreadable { path, detail } => {
                write!(f, "cannot read {}: {detail}", path.display())
            }
            Self::InvalidSnapshot { detail } => {
                write!(f, "form snapshot must be a JSON object of strings: {detail}")
            }
            Self::UnknownField { tag } => write!(f, "unknown field tag {tag:?}"),
            Self::MalformedFieldArg { arg } => {
                write!(f, "--field expects tag=value, got {arg:?}")
            }
            Self::ImplausibleCep { code } => {
                write!(f, "{code:?} is not a valid CEP (expected 01001-000 or 01001000)")
            }
            Self::Transport { detail } => write!(f, "address service unavailable: {detail}"),
            Self::ValidationErrors { count } => {
                write!(f, "{count} field(s) failed validation")
            }
            Self::CepNotFound { code } => write!(f, "CEP {code} not found"),
        }
    }
}

impl std::error::Error for CliError {}
