//! Session context
//!
//! The surrounding application owns authentication. Callers hand an
//! explicit context to each operation instead of relying on a global
//! accessor.

use serde::{Deserialize, Serialize};

/// Read-only view of the current session
pub trait SessionContext: Send + Sync {
    /// Identifier of the authenticated user, if any
    fn user_id(&self) -> Option<&str>;

    /// Base URL of the Galaxy application, e.g. `https://usegalaxy.org/`
    fn base_url(&self) -> &str;
}

/// Plain session snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    pub base_url: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            base_url: base_url.into(),
        }
    }

    /// Session with no logged-in user
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            user_id: None,
            base_url: base_url.into(),
        }
    }
}

impl SessionContext for Session {
    fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_accessors() {
        let session = Session::new("f2db41e1fa331b3e", "https://usegalaxy.org/");
        assert_eq!(session.user_id(), Some("f2db41e1fa331b3e"));
        assert_eq!(session.base_url(), "https://usegalaxy.org/");
    }

    #[test]
    fn test_anonymous_session_has_no_user() {
        let session = Session::anonymous("http://localhost:8080");
        assert!(session.user_id().is_none());
    }
}
