//! Class templates and their instantiation.
//!
//! A [`ClassTemplateInfo`] describes a class template. It is never exported
//! itself; instead each instantiation produces a [`ClassInfo`] that inherits
//! the template's attributes and carries a tail fragment forcing the compiler
//! to instantiate the concrete type.
//!
//! # Example
//!
//! ```
//! use bindspec::{ClassTemplateInfo, Declaration, Session};
//!
//! let mut session = Session::default();
//! let vec = ClassTemplateInfo::new("ns::Vec", "vec.h");
//!
//! let vec_int = vec.call(&mut session, "int int", None).unwrap();
//! assert_eq!(vec_int.proxy().get("name"), Some("ns_Vec_int_int".into()));
//! assert_eq!(session.registry().len(), 1);
//! ```

use bindspec_core::{AttributeValue, DeclarationInfo, InfoProxy, RegistrationError, make_id};
use log::debug;

use crate::Session;
use crate::decl::{ClassInfo, DeclOptions, Declaration, impl_declaration};

/// Type arguments for a template instantiation.
///
/// Built from a whitespace-separated string (`"int double"`) or from an
/// explicit list; both forms instantiate the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeArgs(pub Vec<String>);

impl TypeArgs {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for TypeArgs {
    fn from(types: &str) -> Self {
        TypeArgs(types.split_whitespace().map(str::to_string).collect())
    }
}

impl From<String> for TypeArgs {
    fn from(types: String) -> Self {
        TypeArgs::from(types.as_str())
    }
}

impl From<Vec<String>> for TypeArgs {
    fn from(types: Vec<String>) -> Self {
        TypeArgs(types)
    }
}

impl From<Vec<&str>> for TypeArgs {
    fn from(types: Vec<&str>) -> Self {
        TypeArgs(types.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TypeArgs {
    fn from(types: &[&str]) -> Self {
        TypeArgs(types.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TypeArgs {
    fn from(types: [&str; N]) -> Self {
        TypeArgs(types.iter().map(|t| t.to_string()).collect())
    }
}

/// Synthesize the identifier of a template instance.
///
/// Scope separators in `base_name` become underscores, the base name and
/// the type arguments are joined with underscores, and the result is
/// sanitized with [`make_id`].
///
/// ```
/// use bindspec::generate_name;
///
/// assert_eq!(generate_name("ns::Vec", &["int", "int"]), "ns_Vec_int_int");
/// ```
pub fn generate_name<S: AsRef<str>>(base_name: &str, type_args: &[S]) -> String {
    let mut parts = vec![base_name.replace("::", "_")];
    parts.extend(type_args.iter().map(|t| t.as_ref().to_string()));
    make_id(&parts.join("_"))
}

/// Source fragment that aliases and forces instantiation of a template.
///
/// The alias binds `identifier` to `template_name< type_args... >`, and the
/// `__instantiate_<identifier>` function takes its size so the type is fully
/// instantiated.
pub fn instantiation_tail<S: AsRef<str>>(
    template_name: &str,
    type_args: &[S],
    identifier: &str,
) -> String {
    let types = type_args
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "typedef {template_name}< {types} > {identifier};\n\
         void __instantiate_{identifier}()\n\
         {{ sizeof({identifier}); }}\n\n"
    )
}

/// A class template that produces classes on instantiation.
#[derive(Debug, Clone)]
pub struct ClassTemplateInfo {
    proxy: InfoProxy,
}

impl_declaration!(ClassTemplateInfo);

impl ClassTemplateInfo {
    /// Describe template `name`, declared in header `include`.
    ///
    /// Nothing is registered: only instantiations are exported.
    pub fn new(name: &str, include: &str) -> Self {
        let info = DeclarationInfo::named(name);
        info.set_attribute("include", include);
        Self {
            proxy: InfoProxy::new(info),
        }
    }

    /// The template's current `name` attribute.
    pub fn name(&self) -> Option<String> {
        self.proxy.get("name").and_then(AttributeValue::into_string)
    }

    /// The template's current `include` attribute.
    pub fn include(&self) -> Option<String> {
        self.proxy.get("include").and_then(AttributeValue::into_string)
    }

    /// Instantiate the template with `type_args`.
    ///
    /// The class is named `rename` if given and non-empty, otherwise by
    /// [`generate_name`]. It inherits a deep copy of the template's
    /// attributes and registers its own exporter with `session`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn instantiate<S: AsRef<str>>(
        &self,
        session: &mut Session,
        type_args: &[S],
        rename: Option<&str>,
    ) -> Result<ClassInfo, RegistrationError> {
        let template_name = self.name().unwrap_or_default();
        let identifier = match rename.filter(|r| !r.is_empty()) {
            Some(rename) => rename.to_string(),
            None => generate_name(&template_name, type_args),
        };
        debug!("instantiating template '{template_name}' as '{identifier}'");

        let tail = instantiation_tail(&template_name, type_args, &identifier);
        let include = self.include().unwrap_or_default();
        let options = DeclOptions::new().tail(tail).inherit(self.info());
        ClassInfo::with_options(session, &identifier, &include, options)
    }

    /// Instantiate from a whitespace-separated string or a list of types.
    pub fn call(
        &self,
        session: &mut Session,
        types: impl Into<TypeArgs>,
        rename: Option<&str>,
    ) -> Result<ClassInfo, RegistrationError> {
        let types = types.into();
        self.instantiate(session, types.as_slice(), rename)
    }
}
