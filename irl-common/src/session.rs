//! Session identity and login gate
//!
//! A participant identity is created once at a successful login and lives
//! only for that session. It is never persisted on its own; it survives only
//! as the `user_id`/`display_name` snapshot embedded in the feedback records
//! it authors, and the token is the sole basis for delete authorization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name substituted for blank or missing names.
pub const ANONYMOUS: &str = "Anonymous";

/// Per-participant identity, immutable for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Opaque token, generated once at login, never reused.
    pub user_id: String,
    /// Display name snapshot; "Anonymous" when the participant left it blank.
    pub display_name: String,
}

impl SessionIdentity {
    /// Create a fresh identity with a unique token. A blank or
    /// whitespace-only display name normalizes to "Anonymous".
    pub fn new(display_name: &str) -> Self {
        let trimmed = display_name.trim();
        SessionIdentity {
            user_id: Uuid::new_v4().to_string(),
            display_name: if trimmed.is_empty() {
                ANONYMOUS.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }
}

/// Shared-secret login gate: plain string equality against the configured
/// passcode. Anything stronger is out of scope for this tool.
pub fn verify_passcode(provided: &str, expected: &str) -> bool {
    provided == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_normalizes_to_anonymous() {
        assert_eq!(SessionIdentity::new("").display_name, ANONYMOUS);
        assert_eq!(SessionIdentity::new("   ").display_name, ANONYMOUS);
        assert_eq!(SessionIdentity::new("\t\n").display_name, ANONYMOUS);
    }

    #[test]
    fn test_name_is_trimmed_not_rewritten() {
        let identity = SessionIdentity::new("  A. Partner  ");
        assert_eq!(identity.display_name, "A. Partner");
    }

    #[test]
    fn test_tokens_are_unique_per_login() {
        let a = SessionIdentity::new("Same Name");
        let b = SessionIdentity::new("Same Name");
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn test_passcode_gate_is_exact_match() {
        assert!(verify_passcode("DECODE", "DECODE"));
        assert!(!verify_passcode("decode", "DECODE"));
        assert!(!verify_passcode("", "DECODE"));
    }
}
