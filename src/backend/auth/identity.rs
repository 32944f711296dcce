/**
 * Request Identity
 *
 * The authorization-relevant part of a user: who they are and which role
 * they hold. Created from verified token claims by the authentication
 * middleware and discarded with the request.
 */

use serde::{Deserialize, Serialize};

/// Role string that bypasses ownership checks
pub const ADMIN_ROLE: &str = "Admin";

/// Role assigned to every newly registered user
pub const DEFAULT_ROLE: &str = "user";

/// Identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    /// Role comparison is exact and case-sensitive.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        assert!(Identity::new("root", "Admin").is_admin());
        assert!(!Identity::new("root", "admin").is_admin());
        assert!(!Identity::new("alice", DEFAULT_ROLE).is_admin());
    }
}
