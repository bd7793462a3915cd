//! Core engine for kernelforge just-in-time kernel compilation.
//!
//! This crate provides:
//! - Alias normalization for generic formula builds
//! - Typed per-kind build configuration (generic, conv, fshape)
//! - CMake toolchain invocation with captured diagnostics
//! - A structured error taxonomy for configure/build failures

pub mod compile;
pub mod error;

pub use compile::{
    BuildPhase, BuildSettings, BuildType, CmakeToolchain, ConvKernel, FshapeKernel, GenericKernel,
    KernelCompiler, NormalizedAliases, Toolchain, ToolchainFailure, ToolchainResult, TypeTable,
    normalize_aliases,
};
pub use error::{Error, Result};
