//! Dashboard reporting records.
//!
//! Read-only aggregates; the client never mutates them.

use crate::ids::{ActivityId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: u32,
    pub total_teachers: u32,
    /// Percentage.
    pub average_attendance: u8,
    /// Percentage.
    pub average_grade: u8,
    pub pending_payments: u32,
    pub upcoming_events: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Message,
    Grade,
    Attendance,
    Payment,
    System,
}

/// One entry of the recent activity feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: ActivityId,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub action: String,
    pub target: String,
    pub date: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

impl ActivityItem {
    /// Sentence form, e.g. "John Smith marked attendance for Class 10A".
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.user_name, self.action, self.target)
    }
}
