//! External CMake toolchain: discovery, invocation, output capture.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

use super::types::BuildSettings;

/// Outcome of one toolchain invocation: captured stdout on success,
/// [`ToolchainFailure`] otherwise.
pub type ToolchainResult = std::result::Result<String, ToolchainFailure>;

/// A failed toolchain invocation.
///
/// Launch errors and nonzero exits are both normalized into this shape;
/// nothing escapes the invocation boundary as a panic or raw IO error.
#[derive(Debug, Clone)]
pub struct ToolchainFailure {
    /// Verbatim stdout captured up to the failure.
    pub stdout: String,

    /// Diagnostic derived from the process's own error signal.
    pub message: String,
}

/// The external build toolchain as an injectable capability.
///
/// Production code uses [`CmakeToolchain`]; tests substitute a scripted
/// implementation so no process is spawned.
pub trait Toolchain {
    /// Run the configure phase with the given argument tail.
    fn configure(&self, args: &[String]) -> ToolchainResult;

    /// Run the build phase scoped to a single target.
    fn build(&self, target: &str) -> ToolchainResult;
}

/// Invokes `cmake` synchronously in a fixed build tree.
#[derive(Debug, Clone)]
pub struct CmakeToolchain {
    /// Path to the cmake executable.
    cmake_path: PathBuf,

    /// Working directory for both phases.
    build_dir: PathBuf,

    /// Echo captured stdout through tracing.
    verbose: bool,
}

impl CmakeToolchain {
    /// Locate `cmake` on PATH and bind the toolchain to the settings'
    /// build tree.
    pub fn new(settings: &BuildSettings) -> Result<Self> {
        let cmake_path = which::which("cmake")
            .map_err(|_| Error::Toolchain("cmake not found in PATH".to_string()))?;
        Ok(Self::with_cmake(cmake_path, settings))
    }

    /// Bind an explicit cmake executable, bypassing PATH discovery.
    pub fn with_cmake(cmake_path: PathBuf, settings: &BuildSettings) -> Self {
        Self {
            cmake_path,
            build_dir: settings.build_dir.clone(),
            verbose: settings.verbose,
        }
    }

    /// Get the cmake executable path.
    pub fn cmake_path(&self) -> &Path {
        &self.cmake_path
    }

    /// Launch cmake with `args`, wait, and classify by exit status.
    fn run_and_capture(&self, args: &[String]) -> ToolchainResult {
        let output = Command::new(&self.cmake_path)
            .args(args)
            .current_dir(&self.build_dir)
            .output()
            .map_err(|e| ToolchainFailure {
                stdout: String::new(),
                message: format!("failed to launch {}: {}", self.cmake_path.display(), e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if output.status.success() {
            if self.verbose {
                tracing::info!("{}", stdout);
            }
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ToolchainFailure {
                stdout,
                message: format!("cmake {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

impl Toolchain for CmakeToolchain {
    fn configure(&self, args: &[String]) -> ToolchainResult {
        self.run_and_capture(args)
    }

    fn build(&self, target: &str) -> ToolchainResult {
        let args = [
            "--build".to_string(),
            ".".to_string(),
            "--target".to_string(),
            target.to_string(),
        ];
        self.run_and_capture(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> BuildSettings {
        BuildSettings::new("/src", "/build", "/inc")
    }

    #[test]
    fn test_with_cmake_binds_path() {
        let tc = CmakeToolchain::with_cmake(PathBuf::from("/usr/bin/cmake"), &settings());
        assert_eq!(tc.cmake_path(), Path::new("/usr/bin/cmake"));
    }

    #[test]
    fn test_launch_failure_is_normalized() {
        let tc = CmakeToolchain::with_cmake(
            PathBuf::from("/nonexistent/kernelforge-cmake"),
            &settings(),
        );
        let failure = tc.configure(&["-GNinja".to_string()]).unwrap_err();
        assert!(failure.message.contains("failed to launch"));
        assert!(failure.stdout.is_empty());
    }
}
