//! # Viewguard
//!
//! Request-scoped permission evaluator for template-layer authorization
//! checks.
//!
//! ## Features
//!
//! - **Role restriction** with AND-within-set, OR-across-sets semantics
//! - **Dynamic resource checks** delegated to an application handler
//! - **Pattern matching** by equality, regex, or a custom evaluator
//! - **Compiled pattern caching** with pluggable backing stores
//!
//! Every decision is delegated to collaborators the caller resolves once
//! per request and passes down explicitly; the evaluator itself holds no
//! request state.
//!
//! ## Example
//!
//! ```rust
//! use viewguard::{PermissionEvaluator, RoleQuery, RoleSet, StaticRoleHolder};
//!
//! let evaluator = PermissionEvaluator::new();
//! let holder = StaticRoleHolder::new(["editor", "publisher"]);
//!
//! let query = RoleQuery::any_of([
//!     RoleSet::all_of(["admin"]),
//!     RoleSet::all_of(["editor", "publisher"]),
//! ]);
//!
//! assert!(evaluator.evaluate_roles(&query, Some(&holder)));
//! ```

pub mod analyzer;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod handler;
pub mod pattern;
pub mod types;

// Re-export commonly used types
pub use context::RequestContext;
pub use error::{Error, Result};
pub use evaluator::PermissionEvaluator;
pub use handler::{DynamicResourceHandler, Handler, RoleHolder, StaticRoleHolder};
pub use pattern::{CacheStats, LruPatternStore, MemoryPatternStore, PatternCache, PatternStore, Ttl};
pub use types::{DynamicQuery, PatternKind, PatternQuery, RoleQuery, RoleSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
