use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// Makes a header available to the generated code without exporting
/// anything from it.
#[derive(Debug, Clone)]
pub struct IncludeInfo {
    pub(super) proxy: InfoProxy,
}

impl IncludeInfo {
    pub fn new(session: &mut Session, include: &str) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Include, None, include, DeclOptions::default())?;
        Ok(Self { proxy })
    }
}
