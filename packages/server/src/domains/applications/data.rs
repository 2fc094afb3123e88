use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::applications::models::Application;

/// Application API representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationData {
    pub id: String,
    pub job_id: String,
    pub veterinarian_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationData {
    fn from(application: Application) -> Self {
        Self {
            id: application.id.to_string(),
            job_id: application.job_id.to_string(),
            veterinarian_id: application.veterinarian_id.to_string(),
            status: application.status.to_string(),
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}
