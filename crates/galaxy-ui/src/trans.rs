//! Per-request context consumed by page rendering

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request-scoped user state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransContext {
    /// Whether the current user is an administrator
    pub user_is_admin: bool,

    /// Current-user summary, passed through to the client as-is
    pub user_json: Value,

    /// Application root path, `/` unless Galaxy is served under a prefix
    pub root: String,
}

impl TransContext {
    pub fn new(user_is_admin: bool, user_json: Value, root: impl Into<String>) -> Self {
        Self {
            user_is_admin,
            user_json,
            root: root.into(),
        }
    }

    /// Context for a visitor who is not logged in
    pub fn anonymous(root: impl Into<String>) -> Self {
        Self::new(false, Value::Object(Default::default()), root)
    }
}

impl Default for TransContext {
    fn default() -> Self {
        Self::anonymous("/")
    }
}
