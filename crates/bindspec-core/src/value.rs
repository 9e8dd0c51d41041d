//! Attribute values.
//!
//! Attribute values form a closed set so exporters can read them back
//! without downcasting. Every variant owns its data, so cloning a value
//! never aliases the original.

use crate::{CallPolicy, WrapperSpec};

/// A method exposed in addition to the ones found by the header parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedMethod {
    /// Name of the method in the foreign API.
    pub name: String,
    /// Name to expose it under, if different.
    pub rename: Option<String>,
}

impl AddedMethod {
    pub fn new(name: impl Into<String>, rename: Option<String>) -> Self {
        Self {
            name: name.into(),
            rename,
        }
    }
}

/// A value stored under an attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Bool(bool),
    /// Ordered sequence of additionally exposed methods.
    Methods(Vec<AddedMethod>),
    Wrapper(WrapperSpec),
    Policy(CallPolicy),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_methods(&self) -> Option<&[AddedMethod]> {
        match self {
            AttributeValue::Methods(methods) => Some(methods.as_slice()),
            _ => None,
        }
    }

    pub fn as_wrapper(&self) -> Option<&WrapperSpec> {
        match self {
            AttributeValue::Wrapper(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    pub fn as_policy(&self) -> Option<&CallPolicy> {
        match self {
            AttributeValue::Policy(policy) => Some(policy),
            _ => None,
        }
    }

    /// Consume the value, returning the string if it is one.
    pub fn into_string(self) -> Option<String> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Consume the value, returning the method list if it is one.
    pub fn into_methods(self) -> Option<Vec<AddedMethod>> {
        match self {
            AttributeValue::Methods(methods) => Some(methods),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Str(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Str(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<Vec<AddedMethod>> for AttributeValue {
    fn from(methods: Vec<AddedMethod>) -> Self {
        AttributeValue::Methods(methods)
    }
}

impl From<WrapperSpec> for AttributeValue {
    fn from(wrapper: WrapperSpec) -> Self {
        AttributeValue::Wrapper(wrapper)
    }
}

impl From<CallPolicy> for AttributeValue {
    fn from(policy: CallPolicy) -> Self {
        AttributeValue::Policy(policy)
    }
}
