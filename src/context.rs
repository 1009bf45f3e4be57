//! Per-request context passed through to handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Opaque per-request attribute bag.
///
/// The evaluator never interprets the contents; it is resolved once per
/// request by the caller and carried through verbatim to the dynamic
/// resource handler and custom pattern evaluator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Request attributes (remote address, session data, route params, etc.)
    attributes: HashMap<String, Value>,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// All attributes
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }
}
