use axum::extract::{Extension, Path};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::domains::identity;
use crate::domains::notifications::data::NotificationData;
use crate::domains::notifications::models::Notification;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::credential_from_headers;

/// GET /my/notifications
pub async fn list_my_notifications(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<NotificationData>>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let notifications =
        Notification::find_by_recipient(identity.user_id, &state.db_pool).await?;

    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

/// PATCH /notifications/:id/read
pub async fn mark_notification_read(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<NotificationData>, ApiError> {
    let credential = credential_from_headers(&headers);
    let identity = identity::resolve(&credential, &state.jwt_service, &state.db_pool).await?;

    let notification = Notification::mark_read(id, &identity, &state.db_pool).await?;

    Ok(Json(notification.into()))
}
