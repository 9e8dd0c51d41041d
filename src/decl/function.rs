use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// A free function to export.
///
/// Overloads are addressed as children of the function's node.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub(super) proxy: InfoProxy,
}

impl FunctionInfo {
    /// Describe function `name`, declared in header `include`.
    pub fn new(
        session: &mut Session,
        name: &str,
        include: &str,
    ) -> Result<Self, RegistrationError> {
        Self::with_options(session, name, include, DeclOptions::default())
    }

    /// Describe a function with a tail fragment and/or a base to inherit from.
    pub fn with_options(
        session: &mut Session,
        name: &str,
        include: &str,
        options: DeclOptions<'_>,
    ) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Function, Some(name), include, options)?;
        Ok(Self { proxy })
    }
}
