mod cmd;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cadastro_core::FieldKind;
use error::CliError;

#[derive(Parser)]
#[command(name = "cadastro", about = "Form field validation for Brazilian sign-up forms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate form fields from a JSON snapshot or --field pairs
    Check {
        /// Path to a JSON object {tag: value}; use "-" for stdin
        #[arg(value_name = "FILE", conflicts_with = "fields")]
        input: Option<PathBuf>,

        /// A single field as tag=value (repeatable)
        #[arg(long = "field", value_name = "TAG=VALUE")]
        fields: Vec<String>,
    },

    /// Resolve a CEP against the live ViaCEP service
    Cep {
        /// The postal code, with or without the hyphen
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print the cadastro-core library version
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { input, fields } => run_check(input, &fields),
        Command::Cep { code } => cmd::cep::run(&code).await,
        Command::Version => {
            println!("{}", cadastro_core::version());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cadastro: {err}");
            u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
        }
    }
}

fn run_check(input: Option<PathBuf>, field_args: &[String]) -> Result<(), CliError> {
    let entries: Vec<(FieldKind, String)> = if field_args.is_empty() {
        let content = read_input(input)?;
        cmd::check::parse_snapshot(&content)?
    } else {
        field_args
            .iter()
            .map(|arg| cmd::check::parse_field_arg(arg))
            .collect::<Result<_, _>>()?
    };
    cmd::check::run(entries)
}

fn read_input(input: Option<PathBuf>) -> Result<String, CliError> {
    let path = input.unwrap_or_else(|| PathBuf::from("-"));
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut content).map_err(|e| {
            CliError::FileUnreadable {
                path,
                detail: e.to_string(),
            }
        })?;
        Ok(content)
    } else {
        std::fs::read_to_string(&path).map_err(|e| CliError::FileUnreadable {
            path,
            detail: e.to_string(),
        })
    }
}
