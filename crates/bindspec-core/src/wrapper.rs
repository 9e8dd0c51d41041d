//! Function wrapper specifications.

/// Describes a user-supplied replacement for an exported function.
///
/// The `code`, when present, is placed in the declaration section of the
/// generated module, while `name` is what gets bound in place of the
/// original function. A wrapper without code names an existing function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSpec {
    /// Name of the wrapper function.
    pub name: String,
    /// Source of the wrapper function, if it has to be generated.
    pub code: Option<String>,
}

impl WrapperSpec {
    /// Create a wrapper that refers to an existing function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
        }
    }

    /// Create a wrapper whose implementation is emitted with the module.
    pub fn with_code(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: Some(code.into()),
        }
    }

    /// Check if this wrapper carries its own implementation.
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    /// Name to bind, qualified with `namespace` when the wrapper is generated.
    pub fn full_name(&self, namespace: &str) -> String {
        if self.has_code() {
            format!("{namespace}{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl From<&str> for WrapperSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for WrapperSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
