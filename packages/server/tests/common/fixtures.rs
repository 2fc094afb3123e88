//! Raw-SQL fixtures for integration tests.

use sqlx::PgPool;
use uuid::Uuid;

use server_core::common::auth::{Identity, Role};

/// Insert a user row and return its identity.
pub async fn create_user(role: Role, pool: &PgPool) -> Identity {
    let user_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO users (id, name, phone_hash, role)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(format!("test-user-{}", user_id))
    .bind(format!("phone-hash-{}", user_id))
    .bind(role.to_string())
    .execute(pool)
    .await
    .expect("Failed to create user");

    Identity { user_id, role }
}

/// Insert an open job owned by the given hospital.
pub async fn create_open_job(hospital: &Identity, pool: &PgPool) -> Uuid {
    create_job_with_status(hospital, "open", pool).await
}

pub async fn create_job_with_status(hospital: &Identity, status: &str, pool: &PgPool) -> Uuid {
    let job_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO jobs (id, hospital_id, title, status)
         VALUES ($1, $2, '내과 수의사 채용', $3)",
    )
    .bind(job_id)
    .bind(hospital.user_id)
    .bind(status)
    .execute(pool)
    .await
    .expect("Failed to create job");

    job_id
}

/// Insert a bookmark row owned by the given user.
pub async fn create_bookmark(owner: &Identity, job_id: Uuid, pool: &PgPool) -> Uuid {
    let bookmark_id = Uuid::new_v4();
    sqlx::query("INSERT INTO job_bookmarks (id, user_id, job_id) VALUES ($1, $2, $3)")
        .bind(bookmark_id)
        .bind(owner.user_id)
        .bind(job_id)
        .execute(pool)
        .await
        .expect("Failed to create bookmark");

    bookmark_id
}

/// Read back the stored status string for an application.
pub async fn stored_status(application_id: Uuid, pool: &PgPool) -> String {
    sqlx::query_scalar("SELECT status FROM applications WHERE id = $1")
        .bind(application_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read application status")
}
