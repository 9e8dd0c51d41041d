//! Core declaration model.
//!
//! This crate provides the leaves of the binding description model:
//!
//! - [`DeclarationInfo`] / [`AttributeNode`] - the lazily populated attribute tree
//! - [`InfoProxy`] - attribute-style access used by scripts and exporters
//! - [`AttributeValue`] - the closed set of values an attribute can hold
//! - [`WrapperSpec`], [`CallPolicy`] - structured attribute payloads
//! - [`DeclKind`] - the exportable declaration kinds
//! - [`make_id`] - identifier sanitizing for synthesized names
//! - [`InfoError`], [`ExportError`], [`RegistrationError`] - error types

mod error;
mod ident;
mod info;
mod kind;
mod policy;
mod proxy;
mod value;
mod wrapper;

pub use error::{ExportError, InfoError, RegistrationError};
pub use ident::{is_identifier, make_id};
pub use info::{AttributeNode, DeclarationInfo, RESERVED_PREFIX, is_reserved_name};
pub use kind::DeclKind;
pub use policy::{CallPolicy, ReturnValueKind};
pub use proxy::InfoProxy;
pub use value::{AddedMethod, AttributeValue};
pub use wrapper::WrapperSpec;
