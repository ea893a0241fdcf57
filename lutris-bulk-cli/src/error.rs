use lutris_bulk_db::DbError;
use lutris_bulk_lib::{ImportError, LookupError, OptionError, ScanError, SettingsError};
use thiserror::Error;

/// Errors that end a CLI invocation with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Unknown platform, runner or core
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Malformed --game-options
    #[error(transparent)]
    Option(#[from] OptionError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Import(#[from] ImportError),

    /// A required argument was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}
