//! Error types for the embedder crate.

use bytembed_core::ErrorCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embed operations.
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Errors that can occur while embedding a resource.
///
/// Every variant is terminal for the invocation. Bytes already flushed to the
/// output before a failure stay in place.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The resource could not be opened
    #[error("{} - {}", os_message(.source), .path.display())]
    OpenInput {
        /// Resource path as given
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },

    /// The output could not be opened for appending
    #[error("{} - {}", os_message(.source), .path.display())]
    OpenOutput {
        /// Output path as given
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },

    /// Reading the resource failed part-way
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Resource path, or `<reader>` for in-memory sources
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },

    /// Writing the declaration failed part-way
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Output path, or `<writer>` for in-memory sinks
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },
}

impl EmbedError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::OpenOutput { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// Classify the failure in the shared error-code space.
    pub fn code(&self) -> ErrorCode {
        let source = match self {
            Self::OpenInput { source, .. }
            | Self::OpenOutput { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. } => source,
        };
        match source.kind() {
            io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        }
    }

    pub(crate) fn read(path: Option<&std::path::Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.map_or_else(|| PathBuf::from("<reader>"), Into::into),
            source,
        }
    }

    pub(crate) fn write(path: Option<&std::path::Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.map_or_else(|| PathBuf::from("<writer>"), Into::into),
            source,
        }
    }
}

/// `strerror` text of an OS error, without the ` (os error N)` suffix std adds.
fn os_message(err: &io::Error) -> String {
    let text = err.to_string();
    match (err.raw_os_error(), text.rfind(" (os error ")) {
        (Some(_), Some(at)) => text[..at].to_string(),
        _ => text,
    }
}

impl From<EmbedError> for bytembed_core::Error {
    fn from(err: EmbedError) -> Self {
        let code = err.code();
        let message = err.to_string();
        bytembed_core::Error::new(code, message).with_source(err)
    }
}
