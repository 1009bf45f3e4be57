//! Core query types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of role names that must ALL be held for the set to match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: BTreeSet<String>,
}

impl RoleSet {
    /// Create a role-set from the given role names
    pub fn all_of<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Role names in this set
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Whether this set names no roles
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// An ordered list of role-sets; ANY set fully held grants access.
///
/// Within a set the roles are ANDed, the sets themselves are OR'd in
/// sequence order. An empty query denies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleQuery {
    sets: Vec<RoleSet>,
}

impl RoleQuery {
    /// Create a query from an ordered list of role-sets
    pub fn any_of<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = RoleSet>,
    {
        Self {
            sets: sets.into_iter().collect(),
        }
    }

    /// Query requiring a single role
    pub fn single(role: impl Into<String>) -> Self {
        Self::any_of([RoleSet::all_of([role.into()])])
    }

    /// Role-sets in sequence order
    pub fn sets(&self) -> &[RoleSet] {
        &self.sets
    }

    /// Whether the query names no role-sets
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// A named, application-defined permission check outside the static role model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicQuery {
    /// Name of the resource being checked
    pub name: String,

    /// Opaque metadata interpreted only by the dynamic resource handler
    pub meta: String,
}

impl DynamicQuery {
    /// Create a dynamic query
    pub fn new(name: impl Into<String>, meta: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: meta.into(),
        }
    }
}

/// Strategy used to match a pattern value against the subject's roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Exact string equality against a held role name
    Equality,
    /// Regular expression match against held role names
    Regex,
    /// Delegated entirely to the handler's custom pattern evaluator
    Custom,
    /// Unrecognized kind string; evaluates to a logged denial
    #[serde(untagged)]
    Unknown(String),
}

impl FromStr for PatternKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "equality" => PatternKind::Equality,
            "regex" => PatternKind::Regex,
            "custom" => PatternKind::Custom,
            _ => PatternKind::Unknown(s.to_string()),
        })
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Equality => f.write_str("equality"),
            PatternKind::Regex => f.write_str("regex"),
            PatternKind::Custom => f.write_str("custom"),
            PatternKind::Unknown(s) => write!(f, "unknown({s})"),
        }
    }
}

/// A pattern kind plus the value to match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternQuery {
    /// Matching strategy
    pub kind: PatternKind,

    /// Pattern value; its meaning depends on the kind
    pub value: String,
}

impl PatternQuery {
    /// Create a pattern query
    pub fn new(kind: PatternKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Equality pattern
    pub fn equality(value: impl Into<String>) -> Self {
        Self::new(PatternKind::Equality, value)
    }

    /// Regex pattern
    pub fn regex(value: impl Into<String>) -> Self {
        Self::new(PatternKind::Regex, value)
    }

    /// Custom pattern
    pub fn custom(value: impl Into<String>) -> Self {
        Self::new(PatternKind::Custom, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_query_construction() {
        let query = RoleQuery::any_of([
            RoleSet::all_of(["admin"]),
            RoleSet::all_of(["editor", "publisher"]),
        ]);

        assert_eq!(query.sets().len(), 2);
        assert!(!query.is_empty());
        assert!(RoleQuery::default().is_empty());
    }

    #[test]
    fn test_pattern_kind_parsing() {
        assert_eq!("equality".parse::<PatternKind>().unwrap(), PatternKind::Equality);
        assert_eq!("REGEX".parse::<PatternKind>().unwrap(), PatternKind::Regex);
        assert_eq!("custom".parse::<PatternKind>().unwrap(), PatternKind::Custom);
        assert_eq!(
            "tree".parse::<PatternKind>().unwrap(),
            PatternKind::Unknown("tree".to_string())
        );
    }

    #[test]
    fn test_role_set_deduplicates() {
        let set = RoleSet::all_of(["admin", "admin", "editor"]);
        assert_eq!(set.roles().count(), 2);
    }
}
