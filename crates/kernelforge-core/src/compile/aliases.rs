//! Alias normalization for generic formula builds.
//!
//! Callers describe their formula variables as alias expressions, either
//! `name = expression` or a bare identifier. The build tree needs two derived
//! strings: a compilable declaration fragment injected into the generated
//! source, and a display fragment used for progress reporting.

/// The two fragments derived from a caller's alias list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAliases {
    /// Compilable fragment: one `auto` binding per assignment-form alias.
    pub declarations: String,

    /// Human-readable fragment: one terminated statement per alias.
    pub display: String,
}

/// Normalize a list of alias expressions, in input order.
///
/// An alias of the form `name = expression` becomes a locally typed binding
/// in the declaration fragment. A bare identifier refers to a variable that
/// is already named elsewhere and contributes nothing there. Every alias
/// appears verbatim in the display fragment.
///
/// Validation (duplicates, shadowing, syntax) is the caller's and the
/// toolchain's responsibility; this step cannot fail on well-formed input.
pub fn normalize_aliases(aliases: &[String]) -> NormalizedAliases {
    let mut declarations = String::new();
    let mut display = String::new();

    for alias in aliases {
        if alias.contains('=') {
            declarations.push_str("auto ");
            declarations.push_str(alias);
            declarations.push_str("; ");
        }
        display.push_str(alias);
        display.push_str("; ");
    }

    NormalizedAliases {
        declarations,
        display,
    }
}
