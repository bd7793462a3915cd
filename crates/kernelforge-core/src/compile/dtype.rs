//! Numeric-type table mapping logical dtype names to native spellings.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Maps logical dtype names (e.g. `float32`) to the native spelling the
/// kernel is compiled with (e.g. `float`).
///
/// The table is supplied by the host binding; [`TypeTable::default`] covers
/// the standard single/double precision pair.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entries: HashMap<String, String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("float32", "float");
        table.insert("float64", "double");
        table
    }
}

impl TypeTable {
    /// An empty table, for host bindings that supply every spelling.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register or replace a dtype spelling.
    pub fn insert(&mut self, dtype: impl Into<String>, native: impl Into<String>) {
        self.entries.insert(dtype.into(), native.into());
    }

    /// Resolve the native spelling for `dtype`.
    ///
    /// An unknown dtype is a precondition violation and fails before any
    /// toolchain process is launched.
    pub fn lookup(&self, dtype: &str) -> Result<&str> {
        self.entries
            .get(dtype)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownNumericType(dtype.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spellings() {
        let table = TypeTable::default();
        assert_eq!(table.lookup("float32").unwrap(), "float");
        assert_eq!(table.lookup("float64").unwrap(), "double");
    }

    #[test]
    fn test_unknown_dtype_fails() {
        let table = TypeTable::default();
        let err = table.lookup("int8").unwrap_err();
        assert!(matches!(err, Error::UnknownNumericType(ref d) if d == "int8"));
    }

    #[test]
    fn test_host_extension() {
        let mut table = TypeTable::default();
        table.insert("float16", "half");
        assert_eq!(table.lookup("float16").unwrap(), "half");
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = TypeTable::default();
        table.insert("float32", "float32_t");
        assert_eq!(table.lookup("float32").unwrap(), "float32_t");
    }
}
