//! Bundled offline dataset.
//!
//! Served when the backend is unreachable or no credential is available. The
//! dataset is read-only: fallback writes produce records but never store
//! them.

use focus_models::{ActivityItem, Class, DashboardStats, Student, Teacher, User};
use serde::Deserialize;

use crate::error::ClientError;

const BUNDLED: &str = include_str!("../data/fallback.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackDataset {
    /// Demo accounts, one per role.
    pub users: Vec<User>,
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub classes: Vec<Class>,
    /// Most recent first.
    pub activity: Vec<ActivityItem>,
    pub dashboard_stats: DashboardStats,
}

impl FallbackDataset {
    /// The demo dataset shipped with the client.
    pub fn bundled() -> Result<Self, ClientError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The first `limit` activity items.
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityItem> {
        self.activity.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_models::UserRole;

    #[test]
    fn test_bundled_dataset_loads() {
        let dataset = FallbackDataset::bundled().unwrap();
        assert_eq!(dataset.students.len(), 5);
        assert_eq!(dataset.teachers.len(), 5);
        assert_eq!(dataset.classes.len(), 6);
        assert_eq!(dataset.activity.len(), 5);
        assert_eq!(dataset.dashboard_stats.total_students, 320);
    }

    #[test]
    fn test_roster_starts_with_emma() {
        let dataset = FallbackDataset::bundled().unwrap();
        let first = &dataset.students[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.name, "Emma Wilson");
        assert_eq!(first.attendance, Some(94));
    }

    #[test]
    fn test_every_bundled_class_is_schedulable() {
        let dataset = FallbackDataset::bundled().unwrap();
        assert!(dataset.classes.iter().all(|c| c.is_schedulable()));
    }

    #[test]
    fn test_demo_users_cover_every_role() {
        let dataset = FallbackDataset::bundled().unwrap();
        for role in UserRole::ALL {
            assert!(dataset.users.iter().any(|u| u.role == role));
        }
    }

    #[test]
    fn test_recent_activity_truncates() {
        let dataset = FallbackDataset::bundled().unwrap();
        assert_eq!(dataset.recent_activity(2).len(), 2);
        assert_eq!(dataset.recent_activity(2)[0].id, "1");
        assert_eq!(dataset.recent_activity(50).len(), 5);
        assert!(dataset.recent_activity(0).is_empty());
    }

    #[test]
    fn test_malformed_dataset_is_an_error() {
        assert!(matches!(
            FallbackDataset::from_json("{\"students\": 3}"),
            Err(ClientError::Dataset(_))
        ));
    }
}
