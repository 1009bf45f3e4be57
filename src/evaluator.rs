//! Permission evaluator
//!
//! The entry point for template-layer checks. Every operation takes the
//! resolved subject and handler as explicit parameters; the caller resolves
//! ambient request state once and passes it down.

use tracing::{debug, error};

use crate::analyzer;
use crate::context::RequestContext;
use crate::error::{Error, Result};
use crate::handler::{Handler, RoleHolder};
use crate::pattern::PatternCache;
use crate::types::{DynamicQuery, PatternKind, PatternQuery, RoleQuery};

/// Request-scoped permission evaluator.
///
/// Stateless apart from the shared compiled-pattern cache; safe to share
/// across concurrent requests behind an `Arc`.
pub struct PermissionEvaluator {
    patterns: PatternCache,
}

impl PermissionEvaluator {
    /// Evaluator with a default unbounded pattern cache
    pub fn new() -> Self {
        Self::with_pattern_cache(PatternCache::new())
    }

    /// Evaluator with a caller-supplied pattern cache
    pub fn with_pattern_cache(patterns: PatternCache) -> Self {
        Self { patterns }
    }

    /// The shared pattern cache
    pub fn pattern_cache(&self) -> &PatternCache {
        &self.patterns
    }

    /// Whether the subject satisfies the role query.
    ///
    /// Role-sets are tried in sequence order; the first set whose roles are
    /// all held grants access. An empty query denies, as does an absent
    /// subject. Never fails.
    pub fn evaluate_roles(&self, query: &RoleQuery, holder: Option<&dyn RoleHolder>) -> bool {
        for set in query.sets() {
            if analyzer::check_role(holder, set.roles()) {
                debug!(set = ?set, "role query satisfied");
                return true;
            }
        }
        false
    }

    /// Whether the handler's dynamic resource check allows access.
    ///
    /// # Errors
    ///
    /// [`Error::MissingDynamicHandler`] when the handler registers no
    /// dynamic resource capability; this is a configuration fault of the
    /// embedding application, surfaced rather than treated as a denial.
    /// Failures reported by the dynamic handler itself propagate unchanged.
    pub fn evaluate_dynamic(
        &self,
        query: &DynamicQuery,
        handler: &dyn Handler,
        ctx: &RequestContext,
    ) -> Result<bool> {
        let dynamic = handler
            .dynamic_handler()
            .ok_or(Error::MissingDynamicHandler)?;

        let allowed = dynamic.is_allowed(&query.name, &query.meta, ctx)?;
        debug!(name = %query.name, allowed, "dynamic resource check");

        Ok(allowed)
    }

    /// Whether the subject satisfies the pattern query.
    ///
    /// Dispatches on the pattern kind: equality and regex match against the
    /// subject's roles, custom delegates entirely to the handler. An
    /// unrecognized kind logs one error event and denies without failing.
    ///
    /// # Errors
    ///
    /// [`Error::PatternCompilation`] for a malformed regex value; custom
    /// evaluator failures propagate unchanged.
    pub fn evaluate_pattern(
        &self,
        query: &PatternQuery,
        holder: Option<&dyn RoleHolder>,
        handler: &dyn Handler,
        ctx: &RequestContext,
    ) -> Result<bool> {
        match &query.kind {
            PatternKind::Equality => Ok(analyzer::check_equality(holder, &query.value)),
            PatternKind::Regex => {
                let pattern = self.patterns.get_or_compile(&query.value)?;
                Ok(analyzer::check_regex(holder, &pattern))
            }
            PatternKind::Custom => handler.check_custom_pattern(holder, ctx, &query.value),
            PatternKind::Unknown(kind) => {
                error!(kind = %kind, "unknown pattern kind");
                Ok(false)
            }
        }
    }

    /// Whether an authenticated subject is present
    pub fn role_holder_present(&self, holder: Option<&dyn RoleHolder>) -> bool {
        holder.is_some()
    }

    /// Whether no authenticated subject is present
    pub fn role_holder_absent(&self, holder: Option<&dyn RoleHolder>) -> bool {
        holder.is_none()
    }
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::StaticRoleHolder;
    use crate::types::RoleSet;

    struct BareHandler;

    impl Handler for BareHandler {
        fn role_holder(&self, _ctx: &RequestContext) -> Option<Box<dyn RoleHolder>> {
            None
        }

        fn check_custom_pattern(
            &self,
            _holder: Option<&dyn RoleHolder>,
            _ctx: &RequestContext,
            _value: &str,
        ) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_roles_first_match_wins() {
        let evaluator = PermissionEvaluator::new();
        let holder = StaticRoleHolder::new(["editor", "publisher"]);
        let query = RoleQuery::any_of([
            RoleSet::all_of(["admin"]),
            RoleSet::all_of(["editor", "publisher"]),
        ]);

        assert!(evaluator.evaluate_roles(&query, Some(&holder)));
    }

    #[test]
    fn test_roles_empty_query_denies() {
        let evaluator = PermissionEvaluator::new();
        let holder = StaticRoleHolder::new(["admin"]);

        assert!(!evaluator.evaluate_roles(&RoleQuery::default(), Some(&holder)));
    }

    #[test]
    fn test_dynamic_without_handler_is_configuration_fault() {
        let evaluator = PermissionEvaluator::new();
        let query = DynamicQuery::new("invoice-42", "owner");
        let ctx = RequestContext::new();

        let result = evaluator.evaluate_dynamic(&query, &BareHandler, &ctx);
        assert!(matches!(result, Err(Error::MissingDynamicHandler)));
    }

    #[test]
    fn test_presence_checks() {
        let evaluator = PermissionEvaluator::new();
        let holder = StaticRoleHolder::new(["viewer"]);

        assert!(evaluator.role_holder_present(Some(&holder)));
        assert!(!evaluator.role_holder_present(None));
        assert!(evaluator.role_holder_absent(None));
        assert!(!evaluator.role_holder_absent(Some(&holder)));
    }
}
