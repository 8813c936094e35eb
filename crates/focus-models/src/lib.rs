//! # Focus Models
//!
//! Domain models and DTOs for the Focus dashboard client.
//!
//! All types serialize to the JSON shapes served by the remote API
//! (camelCase field names).
//!
//! # Modules
//!
//! - [`auth`]: Login request/response and the bearer [`AccessToken`]
//! - [`classes`]: Classes and their weekly meetings
//! - [`dashboard`]: Dashboard statistics and the activity feed
//! - [`ids`]: Strongly-typed string identifiers
//! - [`schedule`]: Timetable views derived from class lists
//! - [`students`]: Student records and commands
//! - [`teachers`]: Teacher records and commands
//! - [`users`]: Users and dashboard roles
//!
//! # Example
//!
//! ```ignore
//! use focus_models::{Student, UpdateStudentDto};
//!
//! let updated = student.apply(UpdateStudentDto {
//!     grade: Some("11th".to_string()),
//!     ..Default::default()
//! });
//! ```

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod ids;
pub mod schedule;
pub mod students;
pub mod teachers;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AccessToken, LoginRequest, LoginResponse};
pub use classes::{Class, ClassSchedule, CreateClassDto, UpdateClassDto, Weekday};
pub use dashboard::{ActivityItem, ActivityType, DashboardStats};
pub use ids::{ActivityId, ClassId, StudentId, TeacherId, UserId};
pub use schedule::ScheduleSlot;
pub use students::{CreateStudentDto, Student, StudentStatus, UpdateStudentDto};
pub use teachers::{CreateTeacherDto, Teacher, UpdateTeacherDto};
pub use users::{UnknownRole, User, UserRole};
