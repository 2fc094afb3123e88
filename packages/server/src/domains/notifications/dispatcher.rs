//! Notification dispatcher - turns a status-change event into an inbox row
//!
//! Runs inside the transition transaction: the caller's success response
//! guarantees the notification row is committed, never fire-and-forget.

use sqlx::{Postgres, Transaction};

use crate::domains::applications::events::ApplicationEvent;
use crate::domains::applications::models::ApplicationStatus;
use crate::domains::notifications::models::{NewNotification, Notification};
use crate::error::Result;

/// Type tag for status-change notifications.
pub const APPLICATION_STATUS_TYPE: &str = "application_status";

/// Where the recipient is sent when opening the notification.
pub const APPLICATIONS_URL: &str = "/my/applications";

/// Human-readable copy for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// Copy for every status. Total by construction: a new status without an arm
/// here is a compile error, not a runtime fallback.
pub const fn copy_for(status: ApplicationStatus) -> StatusCopy {
    match status {
        ApplicationStatus::Pending => StatusCopy {
            title: "지원 완료",
            description: "지원서가 정상적으로 접수되었습니다.",
        },
        ApplicationStatus::Reviewing => StatusCopy {
            title: "서류 검토 중",
            description: "지원하신 공고의 서류 검토가 시작되었습니다.",
        },
        ApplicationStatus::DocumentPass => StatusCopy {
            title: "서류 합격",
            description: "축하합니다! 서류 전형에 합격하셨습니다.",
        },
        ApplicationStatus::InterviewPass => StatusCopy {
            title: "면접 합격",
            description: "축하합니다! 면접 전형에 합격하셨습니다.",
        },
        ApplicationStatus::Accepted => StatusCopy {
            title: "최종 합격",
            description: "축하합니다! 최종 합격하셨습니다.",
        },
        ApplicationStatus::Rejected => StatusCopy {
            title: "지원 결과 안내",
            description: "아쉽지만 이번 채용에서는 모시지 못하게 되었습니다.",
        },
    }
}

/// Persist the notification for a status-change event, addressed to the
/// application's veterinarian, inside the caller's transaction.
pub async fn dispatch(
    event: &ApplicationEvent,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Notification> {
    let ApplicationEvent::StatusChanged {
        application_id,
        veterinarian_id,
        new_status,
        ..
    } = event;

    let copy = copy_for(*new_status);

    Notification::insert(
        NewNotification {
            recipient_id: *veterinarian_id,
            notification_type: APPLICATION_STATUS_TYPE,
            title: copy.title,
            description: copy.description,
            related_application_id: Some(*application_id),
            related_status: Some(*new_status),
            url: APPLICATIONS_URL,
        },
        &mut **tx,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_copy() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Reviewing,
            ApplicationStatus::DocumentPass,
            ApplicationStatus::InterviewPass,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            let copy = copy_for(status);
            assert!(!copy.title.is_empty());
            assert!(!copy.description.is_empty());
        }
    }

    #[test]
    fn test_terminal_copy_is_distinct() {
        assert_ne!(
            copy_for(ApplicationStatus::Accepted),
            copy_for(ApplicationStatus::Rejected)
        );
        assert_eq!(copy_for(ApplicationStatus::Accepted).title, "최종 합격");
        assert_eq!(copy_for(ApplicationStatus::Rejected).title, "지원 결과 안내");
    }
}
