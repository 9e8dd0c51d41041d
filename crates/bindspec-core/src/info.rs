//! The declaration attribute tree.
//!
//! A [`DeclarationInfo`] is a shared handle to an [`AttributeNode`]: a bag of
//! attributes plus lazily created, named sub-nodes. Sub-nodes describe parts
//! of a declaration (a method of a class, an overload of a function) and are
//! created on first access with their `name` attribute preset.
//!
//! # Ownership
//!
//! Nodes are reference counted so that the declaration, its exporter and any
//! number of proxies can all address the same node. Children only point away
//! from the root, so the tree never forms a cycle and is released with the
//! last handle to its root.
//!
//! The tree is not thread-safe. It is built by a single script-evaluation
//! pass and read afterwards by the generation pass.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;
use rustc_hash::FxHashMap;

use crate::{AttributeValue, InfoError};

/// Prefix marking internal names that never address a child.
pub const RESERVED_PREFIX: &str = "__";

/// Check if `name` is reserved for internal state.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Attributes and children of one declaration node.
///
/// The two maps are independent; writing an attribute never touches the
/// children and vice versa.
#[derive(Debug, Default)]
pub struct AttributeNode {
    attributes: FxHashMap<String, AttributeValue>,
    children: FxHashMap<String, DeclarationInfo>,
}

impl AttributeNode {
    /// Get an attribute, or `None` if it was never set.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Set an attribute. The last write wins.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Names of all attributes set on this node, in no particular order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Names of all children created so far, in no particular order.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Copy this node and every node below it.
    fn deep_copy(&self) -> AttributeNode {
        AttributeNode {
            attributes: self.attributes.clone(),
            children: self
                .children
                .iter()
                .map(|(name, child)| (name.clone(), child.deep_copy()))
                .collect(),
        }
    }
}

/// Shared handle to a node of the attribute tree.
///
/// Cloning the handle does not copy the node; use [`deep_copy`] for that.
///
/// [`deep_copy`]: DeclarationInfo::deep_copy
#[derive(Debug, Clone, Default)]
pub struct DeclarationInfo(Rc<RefCell<AttributeNode>>);

impl DeclarationInfo {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node whose `name` attribute is preset.
    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        let info = Self::new();
        info.set_attribute("name", name);
        info
    }

    /// Create a node seeded with a deep copy of `source`, if given.
    pub fn derived_from(source: Option<&DeclarationInfo>) -> Self {
        source.map(DeclarationInfo::deep_copy).unwrap_or_default()
    }

    /// Get a copy of an attribute value, or `None` if it was never set.
    pub fn get_attribute(&self, name: &str) -> Option<AttributeValue> {
        self.0.borrow().attribute(name).cloned()
    }

    /// Set an attribute, overwriting any previous value.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.borrow_mut().set_attribute(name, value);
    }

    /// Get the child called `name`, creating it on first access.
    ///
    /// A new child starts with a single `name` attribute equal to `name`.
    /// Every later call with the same name returns the same node.
    ///
    /// # Errors
    ///
    /// Returns [`InfoError::ReservedName`] for names starting with `__`;
    /// no child is created in that case.
    pub fn child(&self, name: &str) -> Result<DeclarationInfo, InfoError> {
        if is_reserved_name(name) {
            return Err(InfoError::ReservedName {
                name: name.to_string(),
            });
        }

        let mut node = self.0.borrow_mut();
        let child = node
            .children
            .entry(name.to_string())
            .or_insert_with(|| {
                trace!("creating child declaration '{name}'");
                DeclarationInfo::named(name)
            })
            .clone();
        Ok(child)
    }

    /// Get the child called `name` without creating it.
    pub fn existing_child(&self, name: &str) -> Option<DeclarationInfo> {
        self.0.borrow().children.get(name).cloned()
    }

    /// Copy this node and its whole subtree.
    ///
    /// The copy shares no node and no attribute value with the original, so
    /// later changes to either tree are invisible to the other.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn deep_copy(&self) -> DeclarationInfo {
        let node = self.0.borrow();
        trace!(
            "deep copying declaration with {} attributes and {} children",
            node.attribute_count(),
            node.child_count()
        );
        DeclarationInfo(Rc::new(RefCell::new(node.deep_copy())))
    }

    /// Check if both handles address the same node.
    pub fn ptr_eq(&self, other: &DeclarationInfo) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run `f` with read access to the underlying node.
    pub fn with_node<R>(&self, f: impl FnOnce(&AttributeNode) -> R) -> R {
        f(&self.0.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddedMethod, WrapperSpec};

    fn name_of(info: &DeclarationInfo) -> Option<String> {
        info.get_attribute("name").and_then(AttributeValue::into_string)
    }

    #[test]
    fn unset_attribute_is_none() {
        let info = DeclarationInfo::new();
        assert_eq!(info.get_attribute("rename"), None);
    }

    #[test]
    fn set_attribute_last_write_wins() {
        let info = DeclarationInfo::new();
        info.set_attribute("rename", "first");
        info.set_attribute("rename", "second");
        assert_eq!(info.get_attribute("rename"), Some("second".into()));
    }

    #[test]
    fn child_is_created_with_name_only() {
        let info = DeclarationInfo::named("Foo");
        let child = info.child("bar").unwrap();
        assert_eq!(name_of(&child).as_deref(), Some("bar"));
        child.with_node(|node| {
            assert_eq!(node.attribute_count(), 1);
            assert_eq!(node.child_count(), 0);
        });
    }

    #[test]
    fn child_is_reference_stable() {
        let info = DeclarationInfo::new();
        let first = info.child("method").unwrap();
        let second = info.child("method").unwrap();
        assert!(first.ptr_eq(&second));

        first.set_attribute("exclude", true);
        assert_eq!(second.get_attribute("exclude"), Some(true.into()));
    }

    #[test]
    fn distinct_names_give_distinct_children() {
        let info = DeclarationInfo::new();
        let a = info.child("a").unwrap();
        let b = info.child("b").unwrap();
        assert!(!a.ptr_eq(&b));
        assert_eq!(name_of(&a).as_deref(), Some("a"));
        assert_eq!(name_of(&b).as_deref(), Some("b"));
    }

    #[test]
    fn reserved_name_does_not_create_child() {
        let info = DeclarationInfo::new();
        let err = info.child("__added__").unwrap_err();
        assert_eq!(
            err,
            InfoError::ReservedName {
                name: "__added__".into()
            }
        );
        info.with_node(|node| assert_eq!(node.child_count(), 0));
    }

    #[test]
    fn attributes_and_children_are_independent() {
        let info = DeclarationInfo::new();
        info.set_attribute("size", "3");
        assert!(info.existing_child("size").is_none());

        let child = info.child("method").unwrap();
        child.set_attribute("rename", "other");
        assert_eq!(info.get_attribute("method"), None);
        assert_eq!(info.get_attribute("rename"), None);
    }

    #[test]
    fn deep_copy_is_independent_both_ways() {
        let original = DeclarationInfo::named("Foo");
        original.set_attribute("wrapper", WrapperSpec::new("w"));
        original
            .child("method")
            .unwrap()
            .set_attribute("rename", "m");

        let copy = original.deep_copy();
        assert!(!copy.ptr_eq(&original));

        copy.set_attribute("name", "Bar");
        copy.child("method").unwrap().set_attribute("rename", "changed");
        copy.child("extra").unwrap();
        assert_eq!(name_of(&original).as_deref(), Some("Foo"));
        assert_eq!(
            original.child("method").unwrap().get_attribute("rename"),
            Some("m".into())
        );
        assert!(original.existing_child("extra").is_none());

        original.set_attribute("wrapper", WrapperSpec::new("other"));
        original
            .child("method")
            .unwrap()
            .set_attribute("exclude", true);
        assert_eq!(
            copy.get_attribute("wrapper"),
            Some(WrapperSpec::new("w").into())
        );
        assert_eq!(copy.child("method").unwrap().get_attribute("exclude"), None);
    }

    #[test]
    fn deep_copy_keeps_nested_structure() {
        let original = DeclarationInfo::new();
        let nested = original.child("a").unwrap().child("b").unwrap();
        nested.set_attribute(
            "__added__",
            vec![AddedMethod::new("foo", None)],
        );

        let copy = original.deep_copy();
        let copied = copy.existing_child("a").and_then(|a| a.existing_child("b"));
        let copied = copied.expect("nested child is copied");
        assert!(!copied.ptr_eq(&nested));
        assert_eq!(copied.get_attribute("__added__"), nested.get_attribute("__added__"));
    }

    #[test]
    fn derived_from_none_is_empty() {
        let info = DeclarationInfo::derived_from(None);
        info.with_node(|node| {
            assert_eq!(node.attribute_count(), 0);
            assert_eq!(node.child_count(), 0);
        });
    }
}
