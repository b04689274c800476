//! Error types for theme compilation.
//!
//! Only structural failures are errors: theme data whose top-level shape is
//! wrong, or data that cannot be deserialized at all. Everything else (a bad
//! color value, a bad color-scheme directive) is recoverable and reported
//! through [`CompilerOutput::warnings`](crate::CompilerOutput).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal error for a single compilation invocation.
///
/// A fatal error means no fragment is produced at all. Hosts that process
/// several invocations in one document should report the error for the
/// failing invocation and continue with the others.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The top-level theme-data shape is wrong: not an object, or the
    /// `themes` key is missing or not an object.
    #[error("Invalid theme structure: expected {{ themes: {{ ... }} }}")]
    InvalidStructure,

    /// The theme data could not be parsed or deserialized.
    ///
    /// The path is optional because this crate never touches the filesystem.
    /// Hosts that loaded the data from a file attach the path with
    /// [`with_path`](CompileError::with_path) before reporting.
    #[error("Failed to load or parse theme file{loc}: {message}", loc = display_path(.path))]
    Parse {
        /// Source file path, if the host supplied one.
        path: Option<PathBuf>,
        /// Message from the underlying JSON parser or deserializer.
        message: String,
    },
}

impl CompileError {
    /// Attaches the originating file path, for host-side error reporting.
    #[must_use]
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            CompileError::Parse { message, .. } => CompileError::Parse {
                path: Some(path.as_ref().to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
