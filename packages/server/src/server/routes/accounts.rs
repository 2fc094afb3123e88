use axum::extract::Extension;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::accounts;
use crate::domains::identity;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::credential_from_headers;

#[derive(Debug, Deserialize)]
pub struct WithdrawalRequest {
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct WithdrawalResponse {
    pub deleted_at: DateTime<Utc>,
}

/// POST /account/withdrawal
///
/// Self-service withdrawal of the authenticated account. The credential is
/// resolved first, so a repeat call after withdrawal fails as unauthenticated.
pub async fn withdraw_account(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Json(body): Json<WithdrawalRequest>,
) -> Result<Json<WithdrawalResponse>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let deleted_at = accounts::withdraw_account(
        identity.user_id,
        &body.reason,
        &identity,
        &state.db_pool,
    )
    .await?;

    Ok(Json(WithdrawalResponse { deleted_at }))
}
