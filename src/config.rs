//! Session configuration.

use bindspec_core::WrapperSpec;

/// Default namespace for wrappers that are emitted with the module.
pub const DEFAULT_WRAPPER_NAMESPACE: &str = "bindspec::";

/// Settings shared by every declaration built in one [`Session`].
///
/// The model itself does not interpret these values; they are carried for
/// the generation pass that walks the registry afterwards.
///
/// [`Session`]: crate::Session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Namespace prefix for wrappers that carry their own code.
    pub wrapper_namespace: String,
    /// Name of the module the generation pass will emit.
    pub module_name: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wrapper_namespace: DEFAULT_WRAPPER_NAMESPACE.to_string(),
            module_name: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrapper namespace.
    pub fn with_wrapper_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.wrapper_namespace = namespace.into();
        self
    }

    /// Set the module name.
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    /// The name to bind for `wrapper` under this configuration.
    pub fn wrapper_name(&self, wrapper: &WrapperSpec) -> String {
        wrapper.full_name(&self.wrapper_namespace)
    }
}
