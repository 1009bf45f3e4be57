//! Role and pattern checks against a subject
//!
//! Pure functions; an absent subject holds no roles, so every check here
//! resolves to false without one.

use regex::Regex;

use crate::handler::RoleHolder;

/// Whether the subject holds every one of the given role names.
///
/// An empty name list matches trivially (there is nothing to lack); callers
/// decide whether to admit empty sets.
pub fn check_role(holder: Option<&dyn RoleHolder>, names: impl IntoIterator<Item = impl AsRef<str>>) -> bool {
    match holder {
        Some(holder) => names.into_iter().all(|name| holder.has_role(name.as_ref())),
        None => false,
    }
}

/// Whether the subject holds a role named exactly `value`
pub fn check_equality(holder: Option<&dyn RoleHolder>, value: &str) -> bool {
    holder.is_some_and(|h| h.has_role(value))
}

/// Whether any of the subject's role names matches the compiled regex
pub fn check_regex(holder: Option<&dyn RoleHolder>, pattern: &Regex) -> bool {
    holder.is_some_and(|h| h.role_names().iter().any(|name| pattern.is_match(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::StaticRoleHolder;

    fn holder(roles: &[&str]) -> StaticRoleHolder {
        StaticRoleHolder::new(roles.iter().copied())
    }

    #[test]
    fn test_check_role_all_required() {
        let h = holder(&["editor", "publisher"]);

        assert!(check_role(Some(&h), ["editor"]));
        assert!(check_role(Some(&h), ["editor", "publisher"]));
        assert!(!check_role(Some(&h), ["editor", "admin"]));
    }

    #[test]
    fn test_check_role_absent_holder() {
        assert!(!check_role(None, ["editor"]));
        // No subject means no match, even with nothing required
        assert!(!check_role(None, Vec::<&str>::new()));
    }

    #[test]
    fn test_check_equality() {
        let h = holder(&["abcz"]);

        assert!(check_equality(Some(&h), "abcz"));
        assert!(!check_equality(Some(&h), "abc"));
        assert!(!check_equality(None, "abcz"));
    }

    #[test]
    fn test_check_regex() {
        let h = holder(&["abcz", "other"]);
        let pattern = Regex::new("^a.*z$").unwrap();

        assert!(check_regex(Some(&h), &pattern));
        assert!(!check_regex(Some(&holder(&["other"])), &pattern));
        assert!(!check_regex(None, &pattern));
    }
}
