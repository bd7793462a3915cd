//! Just-in-time build pipeline for kernel formulas.
//!
//! This module provides:
//! - Alias normalization (caller aliases → declaration/display fragments)
//! - The numeric-type table (logical dtype → native spelling)
//! - Toolchain abstraction (CMake discovery, invocation, output capture)
//! - The build invoker (per-kind configuration assembly, two-phase build)
//!
//! # Architecture
//!
//! ```text
//! Build request
//!     │
//!     ├── aliases ──► normalize_aliases ──► VAR_ALIASES fragment
//!     │
//!     └── dtype ──► TypeTable ──► __TYPE__ spelling
//!                       │
//!               KernelCompiler ──► cmake <source> -G… -D…          (configure)
//!                       │
//!                       └────────► cmake --build . --target <t>    (build)
//! ```

mod aliases;
mod compiler;
mod dtype;
mod toolchain;
mod types;

pub use aliases::{NormalizedAliases, normalize_aliases};
pub use compiler::KernelCompiler;
pub use dtype::TypeTable;
pub use toolchain::{CmakeToolchain, Toolchain, ToolchainFailure, ToolchainResult};
pub use types::{BuildPhase, BuildSettings, BuildType, ConvKernel, FshapeKernel, GenericKernel};
