use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// A class to export.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub(super) proxy: InfoProxy,
}

impl ClassInfo {
    /// Describe class `name`, declared in header `include`.
    pub fn new(
        session: &mut Session,
        name: &str,
        include: &str,
    ) -> Result<Self, RegistrationError> {
        Self::with_options(session, name, include, DeclOptions::default())
    }

    /// Describe a class with a tail fragment and/or a base to inherit from.
    pub fn with_options(
        session: &mut Session,
        name: &str,
        include: &str,
        options: DeclOptions<'_>,
    ) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Class, Some(name), include, options)?;
        Ok(Self { proxy })
    }
}
