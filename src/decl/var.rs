use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// A global variable to export.
#[derive(Debug, Clone)]
pub struct VarInfo {
    pub(super) proxy: InfoProxy,
}

impl VarInfo {
    pub fn new(
        session: &mut Session,
        name: &str,
        include: &str,
    ) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Var, Some(name), include, DeclOptions::default())?;
        Ok(Self { proxy })
    }
}
