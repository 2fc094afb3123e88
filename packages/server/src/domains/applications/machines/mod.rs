//! Application state machine - pure decision logic
//!
//! The transition table is exhaustive: any (from, to) pair not produced by
//! `successors` is illegal. Terminal states allow only the idempotent
//! self-loop, which is a no-op (no write, no notification).

use crate::domains::applications::models::ApplicationStatus;
use crate::error::{Error, Result};

/// Outcome of validating a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Legal move; persist the new status and notify.
    Apply,
    /// Terminal self-loop; succeed without writing anything.
    NoOp,
}

/// Allowed successor statuses for each stage.
pub const fn successors(status: ApplicationStatus) -> &'static [ApplicationStatus] {
    match status {
        ApplicationStatus::Pending => {
            &[ApplicationStatus::Reviewing, ApplicationStatus::Rejected]
        }
        ApplicationStatus::Reviewing => {
            &[ApplicationStatus::DocumentPass, ApplicationStatus::Rejected]
        }
        ApplicationStatus::DocumentPass => {
            &[ApplicationStatus::InterviewPass, ApplicationStatus::Rejected]
        }
        ApplicationStatus::InterviewPass => {
            &[ApplicationStatus::Accepted, ApplicationStatus::Rejected]
        }
        ApplicationStatus::Accepted | ApplicationStatus::Rejected => &[],
    }
}

/// Whether a status admits no further transitions.
pub const fn is_terminal(status: ApplicationStatus) -> bool {
    matches!(
        status,
        ApplicationStatus::Accepted | ApplicationStatus::Rejected
    )
}

/// Validate a requested move against the transition table.
pub fn validate_transition(
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> Result<Transition> {
    if is_terminal(from) && from == to {
        return Ok(Transition::NoOp);
    }
    if successors(from).contains(&to) {
        return Ok(Transition::Apply);
    }
    Err(Error::IllegalTransition { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationStatus::*;

    const ALL: [ApplicationStatus; 6] = [
        Pending,
        Reviewing,
        DocumentPass,
        InterviewPass,
        Accepted,
        Rejected,
    ];

    #[test]
    fn test_happy_path_is_legal() {
        assert_eq!(validate_transition(Pending, Reviewing).unwrap(), Transition::Apply);
        assert_eq!(validate_transition(Reviewing, DocumentPass).unwrap(), Transition::Apply);
        assert_eq!(validate_transition(DocumentPass, InterviewPass).unwrap(), Transition::Apply);
        assert_eq!(validate_transition(InterviewPass, Accepted).unwrap(), Transition::Apply);
    }

    #[test]
    fn test_rejection_is_reachable_from_every_non_terminal_stage() {
        for from in [Pending, Reviewing, DocumentPass, InterviewPass] {
            assert_eq!(validate_transition(from, Rejected).unwrap(), Transition::Apply);
        }
    }

    #[test]
    fn test_terminal_self_loops_are_no_ops() {
        assert_eq!(validate_transition(Accepted, Accepted).unwrap(), Transition::NoOp);
        assert_eq!(validate_transition(Rejected, Rejected).unwrap(), Transition::NoOp);
    }

    #[test]
    fn test_every_pair_outside_the_table_is_illegal() {
        for from in ALL {
            for to in ALL {
                let in_table = successors(from).contains(&to) || (is_terminal(from) && from == to);
                let result = validate_transition(from, to);
                if in_table {
                    assert!(result.is_ok(), "{} -> {} should be allowed", from, to);
                } else {
                    match result {
                        Err(Error::IllegalTransition { from: f, to: t }) => {
                            assert_eq!(f, from);
                            assert_eq!(t, to);
                        }
                        other => panic!("{} -> {} should be illegal, got {:?}", from, to, other),
                    }
                }
            }
        }
    }

    #[test]
    fn test_stage_skips_are_illegal() {
        // Open product question resolved as: the table is authoritative,
        // screening stages cannot be skipped.
        assert!(validate_transition(Pending, DocumentPass).is_err());
        assert!(validate_transition(Pending, Accepted).is_err());
        assert!(validate_transition(Reviewing, Accepted).is_err());
    }

    #[test]
    fn test_terminal_states_cannot_be_corrected() {
        assert!(validate_transition(Accepted, Rejected).is_err());
        assert!(validate_transition(Rejected, Accepted).is_err());
        assert!(validate_transition(Accepted, Reviewing).is_err());
    }

    #[test]
    fn test_no_backwards_moves() {
        assert!(validate_transition(Reviewing, Pending).is_err());
        assert!(validate_transition(DocumentPass, Reviewing).is_err());
        assert!(validate_transition(InterviewPass, DocumentPass).is_err());
    }

    #[test]
    fn test_non_terminal_self_loops_are_illegal() {
        for from in [Pending, Reviewing, DocumentPass, InterviewPass] {
            assert!(validate_transition(from, from).is_err());
        }
    }
}
