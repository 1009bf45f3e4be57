//! Error types for the permission evaluator

use thiserror::Error;

/// Permission evaluation errors
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamic check was issued but the handler exposes no dynamic
    /// resource capability. This is a configuration fault of the embedding
    /// application, not a denial.
    #[error("a dynamic resource check was requested but no dynamic resource handler is registered")]
    MissingDynamicHandler,

    /// A regex pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    PatternCompilation(#[from] regex::Error),

    /// A collaborator (dynamic resource handler, custom pattern evaluator)
    /// reported a failure of its own
    #[error("handler error: {0}")]
    Handler(String),
}

/// Result type for permission evaluation operations
pub type Result<T> = std::result::Result<T, Error>;
