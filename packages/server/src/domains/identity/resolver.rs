//! Identity resolution - credential in, identity out
//!
//! A pure function of its inputs, called explicitly at the top of every
//! operation. No ambient request state: a handler that forgets to resolve
//! has no identity to act with.

use sqlx::PgPool;

use crate::common::auth::{AuthError, Credential, Identity};
use crate::domains::identity::jwt::JwtService;
use crate::domains::identity::models::User;
use crate::error::Result;

/// Resolve a credential to an identity.
///
/// The signed token proves who the caller is; the stored row is always
/// consulted so that deleted accounts and stale role claims fail closed:
/// - no credential: `MissingCredential`
/// - bad signature, expiry, issuer, unknown subject, or a role claim that
///   no longer matches the stored row: `InvalidCredential`
/// - soft-deleted account: `AccountDeleted`
pub async fn resolve(
    credential: &Credential,
    jwt_service: &JwtService,
    pool: &PgPool,
) -> Result<Identity> {
    let token = credential.token()?;

    let claims = jwt_service
        .verify_token(token)
        .map_err(|_| AuthError::InvalidCredential)?;

    let user = User::find_by_id(claims.user_id, pool)
        .await?
        .ok_or(AuthError::InvalidCredential)?;

    if user.deleted_at.is_some() {
        return Err(AuthError::AccountDeleted.into());
    }

    if user.role != claims.role {
        return Err(AuthError::InvalidCredential.into());
    }

    Ok(Identity {
        user_id: user.id,
        role: user.role,
    })
}
