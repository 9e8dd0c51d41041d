use bindspec_core::{DeclKind, InfoProxy, RegistrationError};

use super::{DeclOptions, construct};
use crate::Session;

/// Exports every declaration found in a header.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub(super) proxy: InfoProxy,
}

impl HeaderInfo {
    pub fn new(session: &mut Session, include: &str) -> Result<Self, RegistrationError> {
        let proxy = construct(session, DeclKind::Header, None, include, DeclOptions::default())?;
        Ok(Self { proxy })
    }
}
