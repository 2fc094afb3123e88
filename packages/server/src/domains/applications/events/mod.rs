use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::applications::models::ApplicationStatus;

/// Application domain events - FACT EVENTS ONLY
///
/// Immutable facts about what happened. Errors go in Result::Err, not in
/// events. The notification dispatcher consumes these synchronously inside
/// the transition transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApplicationEvent {
    /// An application moved to a new review stage
    StatusChanged {
        application_id: Uuid,
        veterinarian_id: Uuid,
        job_id: Uuid,
        new_status: ApplicationStatus,
    },
}
