//! Call policy tokens.
//!
//! Policies tell the downstream exporter how ownership of returned values
//! and arguments is managed across the binding boundary. They chain: each
//! policy may wrap a `next` policy, rendered as its last template argument.

use std::fmt;

/// Result conversion used by [`CallPolicy::ReturnValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnValueKind {
    ReferenceExistingObject,
    CopyConstReference,
    CopyNonConstReference,
    ManageNewObject,
    ReturnOpaquePointer,
}

impl ReturnValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnValueKind::ReferenceExistingObject => "reference_existing_object",
            ReturnValueKind::CopyConstReference => "copy_const_reference",
            ReturnValueKind::CopyNonConstReference => "copy_non_const_reference",
            ReturnValueKind::ManageNewObject => "manage_new_object",
            ReturnValueKind::ReturnOpaquePointer => "return_opaque_pointer",
        }
    }
}

/// An opaque call policy token stored under the `policy` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallPolicy {
    /// Returned reference points into the argument at `owner_arg`.
    ReturnInternalReference {
        owner_arg: u32,
        next: Option<Box<CallPolicy>>,
    },
    /// Keep `ward` alive for as long as `custodian` is alive.
    WithCustodianAndWard {
        custodian: u32,
        ward: u32,
        next: Option<Box<CallPolicy>>,
    },
    /// Like `WithCustodianAndWard`, applied after the call returns.
    WithCustodianAndWardPostcall {
        custodian: u32,
        ward: u32,
        next: Option<Box<CallPolicy>>,
    },
    /// Convert the result with the given conversion.
    ReturnValue {
        kind: ReturnValueKind,
        next: Option<Box<CallPolicy>>,
    },
}

impl CallPolicy {
    /// `return_internal_reference< owner_arg >`.
    pub fn return_internal_reference(owner_arg: u32) -> Self {
        CallPolicy::ReturnInternalReference {
            owner_arg,
            next: None,
        }
    }

    /// `with_custodian_and_ward< custodian, ward >`.
    pub fn with_custodian_and_ward(custodian: u32, ward: u32) -> Self {
        CallPolicy::WithCustodianAndWard {
            custodian,
            ward,
            next: None,
        }
    }

    /// `with_custodian_and_ward_postcall< custodian, ward >`.
    pub fn with_custodian_and_ward_postcall(custodian: u32, ward: u32) -> Self {
        CallPolicy::WithCustodianAndWardPostcall {
            custodian,
            ward,
            next: None,
        }
    }

    /// `return_value_policy< kind >`.
    pub fn return_value(kind: ReturnValueKind) -> Self {
        CallPolicy::ReturnValue { kind, next: None }
    }

    /// Chain `next` after this policy, replacing any previous one.
    pub fn then(mut self, policy: CallPolicy) -> Self {
        let slot = match &mut self {
            CallPolicy::ReturnInternalReference { next, .. }
            | CallPolicy::WithCustodianAndWard { next, .. }
            | CallPolicy::WithCustodianAndWardPostcall { next, .. }
            | CallPolicy::ReturnValue { next, .. } => next,
        };
        *slot = Some(Box::new(policy));
        self
    }

    /// The chained policy, if any.
    pub fn next(&self) -> Option<&CallPolicy> {
        match self {
            CallPolicy::ReturnInternalReference { next, .. }
            | CallPolicy::WithCustodianAndWard { next, .. }
            | CallPolicy::WithCustodianAndWardPostcall { next, .. }
            | CallPolicy::ReturnValue { next, .. } => next.as_deref(),
        }
    }

    /// Render the policy as template text, e.g. `return_internal_reference< 1 >`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallPolicy::ReturnInternalReference { owner_arg, .. } => {
                write!(f, "return_internal_reference< {owner_arg}")?
            }
            CallPolicy::WithCustodianAndWard { custodian, ward, .. } => {
                write!(f, "with_custodian_and_ward< {custodian}, {ward}")?
            }
            CallPolicy::WithCustodianAndWardPostcall { custodian, ward, .. } => {
                write!(f, "with_custodian_and_ward_postcall< {custodian}, {ward}")?
            }
            CallPolicy::ReturnValue { kind, .. } => {
                write!(f, "return_value_policy< {}", kind.as_str())?
            }
        }
        if let Some(next) = self.next() {
            write!(f, ", {next}")?;
        }
        f.write_str(" >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_policy_code() {
        assert_eq!(
            CallPolicy::return_internal_reference(1).code(),
            "return_internal_reference< 1 >"
        );
        assert_eq!(
            CallPolicy::return_value(ReturnValueKind::ManageNewObject).code(),
            "return_value_policy< manage_new_object >"
        );
    }

    #[test]
    fn chained_policy_code() {
        let policy = CallPolicy::return_internal_reference(1)
            .then(CallPolicy::with_custodian_and_ward(1, 2));
        assert_eq!(
            policy.code(),
            "return_internal_reference< 1, with_custodian_and_ward< 1, 2 > >"
        );
    }

    #[test]
    fn then_replaces_previous_next() {
        let policy = CallPolicy::with_custodian_and_ward_postcall(0, 1)
            .then(CallPolicy::return_internal_reference(1))
            .then(CallPolicy::return_value(ReturnValueKind::CopyConstReference));
        assert_eq!(
            policy.next(),
            Some(&CallPolicy::return_value(ReturnValueKind::CopyConstReference))
        );
    }
}
