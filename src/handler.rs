//! Collaborator traits supplied by the embedding application
//!
//! The evaluator owns none of these. A `Handler` is resolved per request by
//! the caller (from whatever registry the embedding application keeps) and
//! passed down explicitly, along with the already-resolved `RoleHolder`.

use std::collections::BTreeSet;

use crate::context::RequestContext;
use crate::error::Result;

/// The authenticated subject's role-bearing identity.
///
/// Absence of a subject is expressed as `Option<&dyn RoleHolder>` at the
/// call sites; it is a valid, meaningful state, not an error.
pub trait RoleHolder {
    /// Whether the subject holds the named role
    fn has_role(&self, name: &str) -> bool;

    /// All role names held by the subject
    fn role_names(&self) -> Vec<String>;
}

/// Application-defined check for a named resource outside the static role
/// model
pub trait DynamicResourceHandler {
    /// Whether access to the named resource is allowed.
    ///
    /// `meta` is opaque metadata from the query; `ctx` is the per-request
    /// context. Failures propagate to the caller unchanged.
    fn is_allowed(&self, name: &str, meta: &str, ctx: &RequestContext) -> Result<bool>;
}

/// Capability set of the embedding application.
///
/// Variants are selected at construction by the embedder; the evaluator
/// performs no runtime type lookup.
pub trait Handler {
    /// Resolve the current subject for this request, if any
    fn role_holder(&self, ctx: &RequestContext) -> Option<Box<dyn RoleHolder>>;

    /// The dynamic resource handler, if this application registers one
    fn dynamic_handler(&self) -> Option<&dyn DynamicResourceHandler> {
        None
    }

    /// Evaluate a custom pattern against the subject.
    ///
    /// The pattern value and context pass through unchanged; failures
    /// propagate to the caller.
    fn check_custom_pattern(
        &self,
        holder: Option<&dyn RoleHolder>,
        ctx: &RequestContext,
        value: &str,
    ) -> Result<bool>;
}

/// Set-backed `RoleHolder` for embedders with a flat role model
#[derive(Debug, Clone, Default)]
pub struct StaticRoleHolder {
    roles: BTreeSet<String>,
}

impl StaticRoleHolder {
    /// Create a holder with the given roles
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

impl RoleHolder for StaticRoleHolder {
    fn has_role(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    fn role_names(&self) -> Vec<String> {
        self.roles.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_role_holder() {
        let holder = StaticRoleHolder::new(["editor", "publisher"]);

        assert!(holder.has_role("editor"));
        assert!(!holder.has_role("admin"));
        assert_eq!(holder.role_names(), vec!["editor", "publisher"]);
    }
}
