//! Platform entities shown in the dashboard.
//!
//! These are the normalized forms produced by the schema boundary in
//! [`crate::api::schema`]; nothing here carries serde derives on purpose,
//! so view and handler code never touches raw wire shapes.

/// Identifier type shared by all platform entities except categories.
pub type EntityId = u64;

/// The signed-in account, as reported by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
}

/// Top-level tenant container grouping projects and datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: EntityId,
    pub name: String,
    pub created_at: String,
}

/// The labeling/training discipline of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectType {
    Classification,
    #[default]
    Detection,
    Segmentation,
}

impl ProjectType {
    pub fn name(&self) -> &'static str {
        match self {
            ProjectType::Classification => "Classification",
            ProjectType::Detection => "Detection",
            ProjectType::Segmentation => "Segmentation",
        }
    }

    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::Classification,
            ProjectType::Detection,
            ProjectType::Segmentation,
        ]
    }
}

/// A labeling/training unit within a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: EntityId,
    pub workspace_id: EntityId,
    pub name: String,
    pub project_type: ProjectType,
    pub created_at: String,
}

/// A named collection of images, associable with projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub id: EntityId,
    pub workspace_id: EntityId,
    pub name: String,
    pub image_count: u64,
}

/// One image in a dataset. The binary lives behind the asset base URL;
/// `relative_path` is appended to it when fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub id: EntityId,
    pub file_name: String,
    pub relative_path: String,
    pub width: u32,
    pub height: u32,
}

/// Server-side training job lifecycle. Jobs execute remotely; this client
/// only displays the reported status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn name(&self) -> &'static str {
        match self {
            JobStatus::Queued => "Queued",
            JobStatus::Running => "Running",
            JobStatus::Succeeded => "Succeeded",
            JobStatus::Failed => "Failed",
        }
    }

    /// Terminal jobs no longer change on refresh.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

/// A server-side model training task.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingJob {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub status: JobStatus,
    /// Completion fraction in `[0.0, 1.0]` as reported by the server.
    pub progress: f32,
    pub created_at: String,
}

/// A platform notification addressed to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
}

/// Usage against one quota dimension of the workspace subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaUsage {
    pub resource: String,
    pub used: u64,
    pub limit: u64,
}

impl QuotaUsage {
    /// Used fraction for progress display, saturating at 1.0.
    pub fn ratio(&self) -> f32 {
        if self.limit == 0 {
            return 0.0;
        }
        (self.used as f32 / self.limit as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_ratio() {
        let quota = QuotaUsage {
            resource: "images".to_string(),
            used: 250,
            limit: 1000,
        };
        assert!((quota.ratio() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_quota_ratio_over_limit_saturates() {
        let quota = QuotaUsage {
            resource: "jobs".to_string(),
            used: 12,
            limit: 10,
        };
        assert_eq!(quota.ratio(), 1.0);
    }

    #[test]
    fn test_quota_ratio_zero_limit() {
        let quota = QuotaUsage {
            resource: "storage".to_string(),
            used: 5,
            limit: 0,
        };
        assert_eq!(quota.ratio(), 0.0);
    }

    #[test]
    fn test_job_status_terminal() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }
}
