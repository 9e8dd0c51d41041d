//! Declaration kinds.
//!
//! Each constructor seeds a fresh attribute tree (optionally a deep copy of
//! a base declaration), sets its identity attributes on top, and registers
//! exactly one exporter with the session:
//!
//! | Type              | `name` | `include` | `exclude` | tail / base |
//! |-------------------|--------|-----------|-----------|-------------|
//! | [`ClassInfo`]     | yes    | yes       | `false`   | yes         |
//! | [`FunctionInfo`]  | yes    | yes       | `false`   | yes         |
//! | [`EnumInfo`]      | yes    | yes       | `false`   | no          |
//! | [`VarInfo`]       | yes    | yes       | -         | no          |
//! | [`IncludeInfo`]   | -      | yes       | -         | no          |
//! | [`HeaderInfo`]    | -      | yes       | -         | no          |
//!
//! Class templates are declarations too, but are never exported themselves;
//! see [`crate::template`].

mod class;
mod enum_info;
mod function;
mod header;
mod include;
mod var;

pub use class::ClassInfo;
pub use enum_info::EnumInfo;
pub use function::FunctionInfo;
pub use header::HeaderInfo;
pub use include::IncludeInfo;
pub use var::VarInfo;

use bindspec_core::{DeclKind, DeclarationInfo, InfoError, InfoProxy, RegistrationError};

use crate::Session;

/// Common access to a declaration's attribute tree.
pub trait Declaration: AsRef<InfoProxy> {
    /// Proxy over the declaration node.
    fn proxy(&self) -> &InfoProxy {
        self.as_ref()
    }

    /// The declaration node itself.
    fn info(&self) -> &DeclarationInfo {
        self.as_ref().info()
    }

    /// Proxy over the sub-declaration called `name`, created on first access.
    fn child(&self, name: &str) -> Result<InfoProxy, InfoError> {
        self.as_ref().child(name)
    }
}

/// Optional construction inputs for classes and functions.
#[derive(Debug, Clone, Default)]
pub struct DeclOptions<'a> {
    /// Source text the exporter splices verbatim into its output.
    pub tail: Option<String>,
    /// Declaration whose attributes are deep-copied as a starting point.
    pub base: Option<&'a DeclarationInfo>,
}

impl<'a> DeclOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tail fragment.
    pub fn tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Inherit the attributes of `base`.
    pub fn inherit(mut self, base: &'a DeclarationInfo) -> Self {
        self.base = Some(base);
        self
    }
}

/// Build the node for a new declaration and register its exporter.
///
/// Identity attributes are written after the base is copied, so they always
/// override inherited values.
fn construct(
    session: &mut Session,
    kind: DeclKind,
    name: Option<&str>,
    include: &str,
    options: DeclOptions<'_>,
) -> Result<InfoProxy, RegistrationError> {
    let info = DeclarationInfo::derived_from(options.base);
    if let Some(name) = name {
        info.set_attribute("name", name);
    }
    info.set_attribute("include", include);
    if kind.has_exclude_flag() {
        info.set_attribute("exclude", false);
    }

    session.register(kind, &info, options.tail)?;
    Ok(InfoProxy::new(info))
}

/// Implement the proxy plumbing shared by every declaration type.
macro_rules! impl_declaration {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsRef<InfoProxy> for $ty {
                fn as_ref(&self) -> &InfoProxy {
                    &self.proxy
                }
            }

            impl Declaration for $ty {}
        )*
    };
}

pub(crate) use impl_declaration;

impl_declaration!(ClassInfo, FunctionInfo, EnumInfo, VarInfo, IncludeInfo, HeaderInfo);
