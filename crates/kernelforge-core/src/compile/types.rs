//! Common types for the build pipeline.
//!
//! Each build kind is a typed request record serialized to the CMake
//! argument format only at the invocation boundary, so every cache key
//! appears exactly once and a stale `shared_obj_name` from a prior generic
//! build cannot collide with a specialized build in the same tree.

use std::fmt;
use std::path::PathBuf;

use super::aliases::NormalizedAliases;

/// Phase of the two-step external build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// CMake generates toolchain-native build instructions.
    Configure,
    /// CMake compiles and links the requested target.
    Build,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configure => write!(f, "configure"),
            Self::Build => write!(f, "build"),
        }
    }
}

/// Value handed to `CMAKE_BUILD_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Release,
    Debug,
    RelWithDebInfo,
}

impl BuildType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Debug => "Debug",
            Self::RelWithDebInfo => "RelWithDebInfo",
        }
    }
}

/// Settings threaded through every build entry point.
///
/// Nothing here is ambient process state; isolated build trees can run
/// side by side from the same process as long as each request uses its own
/// `build_dir`.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Template source tree the toolchain configures from.
    pub source_dir: PathBuf,

    /// CMake build tree; working directory for both phases.
    pub build_dir: PathBuf,

    /// Interop header directory handed to the template tree.
    pub interop_include_dir: PathBuf,

    /// Value for `CMAKE_BUILD_TYPE`.
    pub build_type: BuildType,

    /// CMake generator selector (`-G`).
    pub generator: String,

    /// Echo captured toolchain stdout through tracing.
    pub verbose: bool,
}

impl BuildSettings {
    /// Release settings with the Ninja generator.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        interop_include_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            build_dir: build_dir.into(),
            interop_include_dir: interop_include_dir.into(),
            build_type: BuildType::Release,
            generator: "Ninja".to_string(),
            verbose: false,
        }
    }

    /// Debug settings: unoptimized kernels, toolchain stdout echoed.
    pub fn debug(
        source_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        interop_include_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            build_type: BuildType::Debug,
            verbose: true,
            ..Self::new(source_dir, build_dir, interop_include_dir)
        }
    }

    /// Arguments common to every configure invocation: source tree,
    /// generator, build type.
    fn base_configure_args(&self) -> Vec<String> {
        vec![
            self.source_dir.display().to_string(),
            format!("-G{}", self.generator),
            format!("-DCMAKE_BUILD_TYPE={}", self.build_type.as_str()),
        ]
    }
}

/// A generic formula build request.
#[derive(Debug, Clone)]
pub struct GenericKernel {
    /// Symbolic formula compiled into the shared object.
    pub formula: String,

    /// Alias expressions, in caller order. Assumed pre-validated.
    pub aliases: Vec<String>,

    /// Shared-object name; doubles as the build target identifier.
    pub target: String,

    /// Logical dtype name, resolved through the type table.
    pub dtype: String,

    /// Host binding language identifier.
    pub lang: String,
}

impl GenericKernel {
    /// Serialize to the configure-phase argument tail. Each cache key is
    /// written literally once.
    pub(crate) fn configure_args(
        &self,
        settings: &BuildSettings,
        native_type: &str,
        aliases: &NormalizedAliases,
    ) -> Vec<String> {
        let mut args = settings.base_configure_args();
        args.push(format!("-DFORMULA_OBJ={}", self.formula));
        args.push(format!("-DVAR_ALIASES={}", aliases.declarations));
        args.push(format!("-Dshared_obj_name={}", self.target));
        args.push(format!("-D__TYPE__={native_type}"));
        args.push(format!("-DPYTHON_LANG={}", self.lang));
        args.push(format!(
            "-DPYTORCH_INCLUDE_DIR={}",
            settings.interop_include_dir.display()
        ));
        args
    }
}

/// A specialized convolution kernel build request.
#[derive(Debug, Clone)]
pub struct ConvKernel {
    /// Build target identifier.
    pub target: String,

    /// Logical dtype name, resolved through the type table.
    pub dtype: String,
}

impl ConvKernel {
    pub(crate) fn configure_args(&self, settings: &BuildSettings, native_type: &str) -> Vec<String> {
        let mut args = settings.base_configure_args();
        // A prior generic build may have cached shared_obj_name in this
        // tree; specialized targets name themselves.
        args.push("-Ushared_obj_name".to_string());
        args.push(format!("-D__TYPE__={native_type}"));
        args
    }
}

/// A specialized shape/signature kernel build request.
///
/// The three kernel selectors are opaque identifiers from the template
/// tree's own enumeration; they are passed through verbatim.
#[derive(Debug, Clone)]
pub struct FshapeKernel {
    /// Build target identifier.
    pub target: String,

    /// Geometry kernel selector.
    pub kernel_geom: String,

    /// Signal kernel selector.
    pub kernel_sig: String,

    /// Sphere kernel selector.
    pub kernel_sphere: String,

    /// Logical dtype name, resolved through the type table.
    pub dtype: String,
}

impl FshapeKernel {
    pub(crate) fn configure_args(&self, settings: &BuildSettings, native_type: &str) -> Vec<String> {
        let mut args = settings.base_configure_args();
        args.push("-Ushared_obj_name".to_string());
        args.push(format!("-DKERNEL_GEOM={}", self.kernel_geom));
        args.push(format!("-DKERNEL_SIG={}", self.kernel_sig));
        args.push(format!("-DKERNEL_SPHERE={}", self.kernel_sphere));
        args.push(format!("-D__TYPE__={native_type}"));
        args
    }
}
