//! Error types for annotation runs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for annotation operations
pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Error type for annotation operations
///
/// Files that are not interfaces, interfaces that already carry their
/// annotations and adapters that already exist are not errors; they are
/// reported through outcomes and log lines instead.
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// A configured directory does not exist
    #[error("directory {} does not exist", path.display())]
    MissingDirectory { path: PathBuf },

    /// Interface and implementation directory lists differ in length
    #[error(
        "interface and implementation directory lists differ: {interfaces} interface directories, {impls} implementation directories"
    )]
    DirectoryCountMismatch { interfaces: usize, impls: usize },

    /// A sub-interface mapping entry could not be parsed
    #[error("malformed sub-interface entry: '{0}' (expected Name:sub1,sub2,...)")]
    MalformedSubInterfaceEntry(String),

    /// A source directory is not below the base directory
    #[error("directory {} is not inside base directory {}", dir.display(), base.display())]
    OutsideBaseDirectory { dir: PathBuf, base: PathBuf },

    /// Any other invalid configuration value
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Reading or writing a single file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnnotateError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnnotateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised while loading or validating configuration
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, AnnotateError::Io { .. })
    }

    /// Process exit code for the command line front end
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration_error() { 2 } else { 1 }
    }
}

impl From<toml::de::Error> for AnnotateError {
    fn from(err: toml::de::Error) -> Self {
        AnnotateError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
