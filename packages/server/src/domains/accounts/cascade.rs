//! Cascading soft-delete edges from the users table
//!
//! Account withdrawal marks every dependent row in one transaction. The
//! dependents are declared as data: supporting a new entity means adding one
//! edge here, not a new hand-written query.

/// One (entity-table, owner-column) edge from User.
#[derive(Debug, Clone, Copy)]
pub struct CascadeEdge {
    pub table: &'static str,
    pub owner_column: &'static str,
    /// Extra predicate limiting which owned rows are marked.
    pub condition: Option<&'static str>,
}

/// Every entity soft-deleted alongside an account.
///
/// Terminal applications are excluded: they remain the hiring hospital's
/// record of a completed process. The predicate lists the legacy terminal
/// spellings too since older rows still carry them (see
/// `ApplicationStatus::from_db_value`).
pub const SOFT_DELETE_EDGES: &[CascadeEdge] = &[
    CascadeEdge {
        table: "veterinarian_profiles",
        owner_column: "user_id",
        condition: None,
    },
    CascadeEdge {
        table: "resumes",
        owner_column: "user_id",
        condition: None,
    },
    CascadeEdge {
        table: "job_bookmarks",
        owner_column: "user_id",
        condition: None,
    },
    CascadeEdge {
        table: "forum_posts",
        owner_column: "user_id",
        condition: None,
    },
    CascadeEdge {
        table: "applications",
        owner_column: "veterinarian_id",
        condition: Some("status NOT IN ('accepted', 'rejected', 'final_pass', 'failed')"),
    },
];

impl CascadeEdge {
    /// The UPDATE statement marking this edge's rows for one owner ($1).
    pub fn soft_delete_sql(&self) -> String {
        let mut sql = format!(
            "UPDATE {} SET deleted_at = NOW() WHERE {} = $1 AND deleted_at IS NULL",
            self.table, self.owner_column
        );
        if let Some(condition) = self.condition {
            sql.push_str(" AND ");
            sql.push_str(condition);
        }
        sql
    }
}
