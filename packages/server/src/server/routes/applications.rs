use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::applications::actions;
use crate::domains::applications::data::ApplicationData;
use crate::domains::identity;
use crate::error::Error;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::credential_from_headers;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// POST /jobs/:job_id/applications
pub async fn create_application(
    Extension(state): Extension<AppState>,
    Path(job_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<ApplicationData>), ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let application = actions::apply(job_id, &identity, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(application.into())))
}

/// GET /applications/:id
pub async fn get_application(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApplicationData>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let application = actions::get_application(id, &identity, &state.db_pool).await?;

    Ok(Json(application.into()))
}

/// PUT /applications/:id/status
pub async fn update_application_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ApplicationData>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let requested = body.status.parse().map_err(|_: Error| {
        Error::Validation(format!("unknown application status: {}", body.status))
    })?;

    let application = actions::transition(id, requested, &identity, &state.db_pool).await?;

    Ok(Json(application.into()))
}

/// DELETE /applications/:id
pub async fn withdraw_application(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    actions::withdraw(id, &identity, &state.db_pool).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /my/applications
pub async fn list_my_applications(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ApplicationData>>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let applications = actions::list_my_applications(&identity, &state.db_pool).await?;

    Ok(Json(applications.into_iter().map(Into::into).collect()))
}
