//! Declaration model for binding generation.
//!
//! Scripts describe a foreign API surface (classes, functions, enums,
//! variables, headers and class template instances) by constructing
//! declarations in a [`Session`]. Each declaration owns a lazily populated
//! attribute tree and registers exactly one exporter; the free functions in
//! [`modifiers`] refine the tree afterwards. A later generation pass walks the
//! session's registry and reads the attributes back.
//!
//! ```
//! use bindspec::prelude::*;
//!
//! let mut session = Session::default();
//! let shape = ClassInfo::new(&mut session, "geo::Shape", "shape.h").unwrap();
//! set_policy(
//!     &shape.child("clone").unwrap(),
//!     CallPolicy::return_value(ReturnValueKind::ManageNewObject),
//! );
//! use_shared_ptr(&shape);
//!
//! let vec = ClassTemplateInfo::new("geo::Vec", "vec.h");
//! vec.call(&mut session, "float 3", Some("Vec3f")).unwrap();
//!
//! assert_eq!(session.registry().len(), 2);
//! ```

mod config;
pub mod decl;
pub mod modifiers;
mod session;
pub mod template;

pub use config::{DEFAULT_WRAPPER_NAMESPACE, SessionConfig};
pub use decl::{
    ClassInfo, DeclOptions, Declaration, EnumInfo, FunctionInfo, HeaderInfo, IncludeInfo, VarInfo,
};
pub use modifiers::{
    ADDED_METHODS, AUTO_PTR_TEMPLATE, SHARED_PTR_TEMPLATE, add_method, added_methods, exclude,
    format_smart_ptr, instantiate, rename, set_policy, set_wrapper, use_auto_ptr, use_shared_ptr,
};
pub use session::Session;
pub use template::{ClassTemplateInfo, TypeArgs, generate_name, instantiation_tail};

pub use bindspec_core::{
    AddedMethod, AttributeNode, AttributeValue, CallPolicy, DeclKind, DeclarationInfo, ExportError,
    InfoError, InfoProxy, RegistrationError, ReturnValueKind, WrapperSpec, is_identifier,
    is_reserved_name, make_id,
};
pub use bindspec_registry::{
    DeferredExporter, DeferredExporterFactory, Exporter, ExporterFactory, ExporterRegistry,
};

/// Everything a binding script usually needs.
pub mod prelude {
    pub use crate::decl::*;
    pub use crate::modifiers::*;
    pub use crate::template::{ClassTemplateInfo, TypeArgs};
    pub use crate::{Session, SessionConfig};
    pub use bindspec_core::{CallPolicy, InfoProxy, ReturnValueKind, WrapperSpec};
}
