//! Free functions that refine declarations.
//!
//! Every function works through a proxy, so it applies equally to a whole
//! declaration and to any of its sub-declarations:
//!
//! ```
//! use bindspec::{ClassInfo, Declaration, Session, exclude, rename};
//!
//! let mut session = Session::default();
//! let point = ClassInfo::new(&mut session, "geo::Point", "point.h").unwrap();
//!
//! rename(&point, "Point2D");
//! exclude(&point.child("debug_dump").unwrap());
//! ```

use bindspec_core::{AddedMethod, AttributeValue, CallPolicy, InfoProxy, RegistrationError, WrapperSpec};

use crate::{ClassInfo, ClassTemplateInfo, Session, TypeArgs};

/// Smart pointer template selected by [`use_shared_ptr`].
pub const SHARED_PTR_TEMPLATE: &str = "boost::shared_ptr< %s >";

/// Smart pointer template selected by [`use_auto_ptr`].
pub const AUTO_PTR_TEMPLATE: &str = "std::auto_ptr< %s >";

/// Attribute holding the methods added with [`add_method`].
pub const ADDED_METHODS: &str = "__added__";

/// Leave the declaration out of the generated code.
pub fn exclude(info: &impl AsRef<InfoProxy>) {
    info.as_ref().set("exclude", true);
}

/// Set the call policy used when exporting the declaration.
pub fn set_policy(info: &impl AsRef<InfoProxy>, policy: CallPolicy) {
    info.as_ref().set("policy", policy);
}

/// Export the declaration under another name.
///
/// The `name` attribute is left alone so lookups by the original name keep
/// working.
pub fn rename(info: &impl AsRef<InfoProxy>, name: impl Into<String>) {
    info.as_ref().set("rename", name.into());
}

/// Replace the exported function with a wrapper.
///
/// Raw text is turned into a [`WrapperSpec`] naming an existing function.
pub fn set_wrapper(info: &impl AsRef<InfoProxy>, wrapper: impl Into<WrapperSpec>) {
    info.as_ref().set("wrapper", wrapper.into());
}

/// Hold instances of the class in a `boost::shared_ptr`.
///
/// Overrides an earlier [`use_auto_ptr`].
pub fn use_shared_ptr(info: &impl AsRef<InfoProxy>) {
    info.as_ref().set("smart_ptr", SHARED_PTR_TEMPLATE);
}

/// Hold instances of the class in a `std::auto_ptr`.
///
/// Overrides an earlier [`use_shared_ptr`].
pub fn use_auto_ptr(info: &impl AsRef<InfoProxy>) {
    info.as_ref().set("smart_ptr", AUTO_PTR_TEMPLATE);
}

/// Expose an additional method, optionally under another name.
///
/// Methods are kept in the order they were added.
pub fn add_method(info: &impl AsRef<InfoProxy>, name: impl Into<String>, rename: Option<&str>) {
    let proxy = info.as_ref();
    let mut added = added_methods(proxy);
    added.push(AddedMethod::new(name, rename.map(str::to_string)));
    proxy.set(ADDED_METHODS, added);
}

/// The methods added so far with [`add_method`], in insertion order.
pub fn added_methods(info: &impl AsRef<InfoProxy>) -> Vec<AddedMethod> {
    info.as_ref()
        .get(ADDED_METHODS)
        .and_then(AttributeValue::into_methods)
        .unwrap_or_default()
}

/// Substitute `class_name` into a smart pointer template.
pub fn format_smart_ptr(template: &str, class_name: &str) -> String {
    template.replace("%s", class_name)
}

/// Instantiate `template`; same as [`ClassTemplateInfo::call`].
pub fn instantiate(
    session: &mut Session,
    template: &ClassTemplateInfo,
    types: impl Into<TypeArgs>,
    rename: Option<&str>,
) -> Result<ClassInfo, RegistrationError> {
    template.call(session, types, rename)
}
