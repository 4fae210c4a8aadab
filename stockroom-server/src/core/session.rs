//! Session Identity
//!
//! The catalog layer consumes authentication through a narrow contract: a
//! read-only "current user id" accessor, consulted only when stamping record
//! ownership on create. Session management itself lives outside this service.

/// Read-only authenticated identity
#[derive(Debug, Clone, Default)]
pub struct SessionIdentity {
    user_id: Option<String>,
}

impl SessionIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// An identity with no user attached; created records carry no owner
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_user() {
        assert_eq!(SessionIdentity::anonymous().current_user_id(), None);
    }

    #[test]
    fn identity_exposes_user_id() {
        let session = SessionIdentity::new("user-42");
        assert_eq!(session.current_user_id(), Some("user-42"));
    }
}
