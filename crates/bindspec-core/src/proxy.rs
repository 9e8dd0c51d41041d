//! Attribute-style access to declaration nodes.
//!
//! Scripts and exporters never touch nodes directly; they go through an
//! [`InfoProxy`], which offers exactly three operations: read an attribute,
//! write an attribute, and address a child.

use crate::{AttributeValue, DeclarationInfo, InfoError};

/// A view over one declaration node.
///
/// The proxy keeps no state besides its handle to the node, so proxies can
/// be created and dropped freely.
#[derive(Debug, Clone)]
pub struct InfoProxy {
    info: DeclarationInfo,
}

impl InfoProxy {
    /// Bind a proxy to `info`.
    pub fn new(info: DeclarationInfo) -> Self {
        Self { info }
    }

    /// Read an attribute of the bound node.
    pub fn get(&self, name: &str) -> Option<AttributeValue> {
        self.info.get_attribute(name)
    }

    /// Write an attribute of the bound node.
    pub fn set(&self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.info.set_attribute(name, value);
    }

    /// A proxy over the child called `name`, created on first access.
    pub fn child(&self, name: &str) -> Result<InfoProxy, InfoError> {
        self.info.child(name).map(InfoProxy::new)
    }

    /// The node this proxy is bound to.
    pub fn info(&self) -> &DeclarationInfo {
        &self.info
    }
}

impl From<DeclarationInfo> for InfoProxy {
    fn from(info: DeclarationInfo) -> Self {
        Self::new(info)
    }
}

impl AsRef<InfoProxy> for InfoProxy {
    fn as_ref(&self) -> &InfoProxy {
        self
    }
}
