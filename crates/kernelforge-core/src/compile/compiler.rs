//! The build invoker: assembles per-kind configuration and drives the
//! external toolchain through its configure and build phases.

use std::fs;

use crate::error::{Error, Result};

use super::aliases::normalize_aliases;
use super::dtype::TypeTable;
use super::toolchain::{Toolchain, ToolchainFailure};
use super::types::{BuildPhase, BuildSettings, ConvKernel, FshapeKernel, GenericKernel};

/// Compiles kernel requests into shared objects via the injected toolchain.
///
/// Each entry point resolves the dtype first (an unknown dtype fails before
/// any process is launched), emits a provenance event, then runs configure
/// and build. A configure failure short-circuits the build phase.
pub struct KernelCompiler<T: Toolchain> {
    /// Build settings threaded through every request.
    settings: BuildSettings,

    /// Externally supplied dtype → native spelling table.
    types: TypeTable,

    /// Injected external toolchain.
    toolchain: T,
}

impl<T: Toolchain> KernelCompiler<T> {
    /// Create a new compiler.
    pub fn new(settings: BuildSettings, types: TypeTable, toolchain: T) -> Self {
        Self {
            settings,
            types,
            toolchain,
        }
    }

    /// Get the settings this compiler was created with.
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Compile a generic formula kernel.
    pub fn compile_generic(&self, kernel: &GenericKernel) -> Result<()> {
        let native_type = self.types.lookup(&kernel.dtype)?;
        let aliases = normalize_aliases(&kernel.aliases);

        tracing::info!(
            target_name = %kernel.target,
            formula = %kernel.formula,
            aliases = %aliases.display,
            dtype = %kernel.dtype,
            "compiling formula kernel in {}",
            self.settings.build_dir.display()
        );

        let args = kernel.configure_args(&self.settings, native_type, &aliases);
        self.run_phases(&args, &kernel.target)
    }

    /// Compile a specialized convolution kernel.
    pub fn compile_conv(&self, kernel: &ConvKernel) -> Result<()> {
        let native_type = self.types.lookup(&kernel.dtype)?;

        tracing::info!(
            target_name = %kernel.target,
            dtype = %kernel.dtype,
            "compiling convolution kernel"
        );

        let args = kernel.configure_args(&self.settings, native_type);
        self.run_phases(&args, &kernel.target)
    }

    /// Compile a specialized shape/signature kernel.
    pub fn compile_fshape(&self, kernel: &FshapeKernel) -> Result<()> {
        let native_type = self.types.lookup(&kernel.dtype)?;

        tracing::info!(
            target_name = %kernel.target,
            kernel_geom = %kernel.kernel_geom,
            kernel_sig = %kernel.kernel_sig,
            kernel_sphere = %kernel.kernel_sphere,
            dtype = %kernel.dtype,
            "compiling fshape kernel"
        );

        let args = kernel.configure_args(&self.settings, native_type);
        self.run_phases(&args, &kernel.target)
    }

    /// Configure, then build one target. The build tree is created on
    /// demand; both phases run synchronously in it.
    fn run_phases(&self, configure_args: &[String], target: &str) -> Result<()> {
        fs::create_dir_all(&self.settings.build_dir)?;

        self.toolchain
            .configure(configure_args)
            .map_err(|f| phase_error(BuildPhase::Configure, f))?;

        self.toolchain
            .build(target)
            .map_err(|f| phase_error(BuildPhase::Build, f))?;

        tracing::info!(target_name = %target, "kernel build finished");
        Ok(())
    }
}

fn phase_error(phase: BuildPhase, failure: ToolchainFailure) -> Error {
    match phase {
        BuildPhase::Configure => Error::ConfigureFailed {
            message: failure.message,
            stdout: failure.stdout,
        },
        BuildPhase::Build => Error::BuildFailed {
            message: failure.message,
            stdout: failure.stdout,
        },
    }
}
