use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::auth::AuthError;

/// Account role discriminant.
///
/// A role claim in a credential proves which side of the platform the caller
/// registered on; it never grants access to a specific resource. Ownership is
/// always re-checked against the store (see `domains::applications::guard`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Veterinarian,
    Hospital,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Veterinarian => write!(f, "veterinarian"),
            Role::Hospital => write!(f, "hospital"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "veterinarian" => Ok(Role::Veterinarian),
            "hospital" => Ok(Role::Hospital),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

/// A resolved caller: who is acting, and on which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

/// The raw credential attached to an inbound request.
///
/// Both forms carry the same signed token; the session cookie exists for
/// browser clients that cannot set an Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Bearer(String),
    SessionCookie(String),
    Missing,
}

impl Credential {
    /// The signed token inside the credential, or `MissingCredential`.
    pub fn token(&self) -> Result<&str, AuthError> {
        match self {
            Credential::Bearer(token) | Credential::SessionCookie(token) => Ok(token),
            Credential::Missing => Err(AuthError::MissingCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Veterinarian, Role::Hospital] {
            let parsed = Role::from_str(&role.to_string()).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Role::from_str("admin").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_missing_credential_has_no_token() {
        assert_eq!(
            Credential::Missing.token(),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(Credential::Bearer("abc".to_string()).token(), Ok("abc"));
        assert_eq!(
            Credential::SessionCookie("xyz".to_string()).token(),
            Ok("xyz")
        );
    }
}
