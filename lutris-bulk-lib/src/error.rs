use lutris_bulk_db::DbError;
use thiserror::Error;

/// Errors from scanning the ROM directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// A `--game-options` pair that is not of the form `key=value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Option \"{0}\" is not formatted correctly (expected key=value)")]
    Malformed(String),
}

/// Errors while writing config files or database rows.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Config directory {0} does not exist")]
    MissingConfigDir(String),

    /// Paths end up as text in the YAML file and the database row.
    #[error("Path {0} is not valid UTF-8")]
    NonUtf8Path(String),
}

/// Errors reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
