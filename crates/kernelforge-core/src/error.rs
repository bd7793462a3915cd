//! Error types for kernelforge-core.

use thiserror::Error;

use crate::compile::BuildPhase;

/// Result type for kernelforge-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while orchestrating a kernel build.
#[derive(Debug, Error)]
pub enum Error {
    /// The configure phase failed; the build phase was never attempted.
    #[error("configure phase failed: {message}")]
    ConfigureFailed { message: String, stdout: String },

    /// The build phase exited nonzero.
    #[error("build phase failed: {message}")]
    BuildFailed { message: String, stdout: String },

    /// The requested numeric type has no native spelling in the type table.
    #[error("unknown numeric type: {0}")]
    UnknownNumericType(String),

    /// The external build toolchain could not be located or queried.
    #[error("toolchain error: {0}")]
    Toolchain(String),

    /// IO error while preparing the build tree.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The phase a failed toolchain invocation originated from, if any.
    pub fn phase(&self) -> Option<BuildPhase> {
        match self {
            Self::ConfigureFailed { .. } => Some(BuildPhase::Configure),
            Self::BuildFailed { .. } => Some(BuildPhase::Build),
            _ => None,
        }
    }

    /// Verbatim stdout captured from the failed toolchain invocation, if any.
    pub fn captured_stdout(&self) -> Option<&str> {
        match self {
            Self::ConfigureFailed { stdout, .. } | Self::BuildFailed { stdout, .. } => {
                Some(stdout)
            }
            _ => None,
        }
    }
}
