use crate::credential;
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Explicit session context passed to the view derivation — who is looking
/// at the dashboard and in which mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    /// Set only after a successful credential check.
    pub identity: Option<String>,
}

impl Session {
    /// The default anonymous session: client role, no identity.
    pub fn client() -> Self {
        Self {
            role: Role::Client,
            identity: None,
        }
    }

    pub fn owner(identity: impl Into<String>) -> Self {
        Self {
            role: Role::Owner,
            identity: Some(identity.into()),
        }
    }

    /// Flip the view mode. Independent of authentication: an owner-mode
    /// session without identity falls back to the login prompt.
    pub fn toggle_role(&mut self) {
        self.role = self.role.toggle();
    }

    /// Run the credential check. Success switches to the owner role with the
    /// configured identity and returns true; failure changes nothing and the
    /// caller clears the input field.
    pub fn login(&mut self, passphrase: &str, reference_hex: &str, owner: &str) -> bool {
        if credential::verify(passphrase, reference_hex) {
            self.role = Role::Owner;
            self.identity = Some(owner.to_string());
            true
        } else {
            false
        }
    }

    /// Clears identity only; the role keeps whatever mode was toggled.
    pub fn logout(&mut self) {
        self.identity = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

    #[test]
    fn login_with_correct_passphrase_sets_owner_identity() {
        let mut session = Session::client();
        assert!(session.login("password", HASH, "inkwell"));
        assert_eq!(session.role, Role::Owner);
        assert_eq!(session.identity.as_deref(), Some("inkwell"));
    }

    #[test]
    fn login_with_wrong_passphrase_changes_nothing() {
        let mut session = Session::client();
        assert!(!session.login("hunter2", HASH, "inkwell"));
        assert_eq!(session.role, Role::Client);
        assert_eq!(session.identity, None);
    }

    #[test]
    fn logout_clears_identity_but_not_role() {
        let mut session = Session::owner("inkwell");
        session.logout();
        assert_eq!(session.role, Role::Owner);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn toggle_is_independent_of_authentication() {
        let mut session = Session::client();
        session.toggle_role();
        assert_eq!(session.role, Role::Owner);
        assert!(!session.is_authenticated());
        session.toggle_role();
        assert_eq!(session.role, Role::Client);
    }
}
