use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// An enumeration to export.
#[derive(Debug, Clone)]
pub struct EnumInfo {
    pub(super) proxy: InfoProxy,
}

impl EnumInfo {
    pub fn new(
        session: &mut Session,
        name: &str,
        include: &str,
    ) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Enum, Some(name), include, DeclOptions::default())?;
        Ok(Self { proxy })
    }
}
