//! Student domain models and DTOs.
//!
//! This module contains the student entity as served by the remote API, the
//! create command (a student without an id) and the update command (every
//! field optional).

use crate::ids::{StudentId, UserId};
use chrono::NaiveDate;
use focus_core::serde::deserialize_optional_nonempty;
use serde::{Deserialize, Serialize};

/// Enrollment status of a student.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
}

/// A student record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub grade: String,
    pub enrollment_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_nonempty",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub status: StudentStatus,
    /// Attendance percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u8>,
    /// Average grade percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_grade: Option<u8>,
}

impl Student {
    /// Shallow merge: every field present in `dto` replaces the stored one.
    pub fn apply(mut self, dto: UpdateStudentDto) -> Self {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(email) = dto.email {
            self.email = email;
        }
        if let Some(grade) = dto.grade {
            self.grade = grade;
        }
        if let Some(enrollment_date) = dto.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
        if let Some(parent_id) = dto.parent_id {
            self.parent_id = Some(parent_id);
        }
        if let Some(avatar) = dto.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(address) = dto.address {
            self.address = Some(address);
        }
        if let Some(phone_number) = dto.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(date_of_birth) = dto.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(status) = dto.status {
            self.status = status;
        }
        if let Some(attendance) = dto.attendance {
            self.attendance = Some(attendance);
        }
        if let Some(average_grade) = dto.average_grade {
            self.average_grade = Some(average_grade);
        }
        self
    }
}

/// DTO for creating a new student: the record without its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub name: String,
    pub email: String,
    pub grade: String,
    pub enrollment_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub status: StudentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_grade: Option<u8>,
}

impl CreateStudentDto {
    /// Attach an id, producing the full record.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            grade: self.grade,
            enrollment_date: self.enrollment_date,
            parent_id: self.parent_id,
            avatar: self.avatar,
            address: self.address,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            status: self.status,
            attendance: self.attendance,
            average_grade: self.average_grade,
        }
    }
}

/// DTO for updating an existing student.
///
/// All fields are optional; only provided fields are sent and merged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_grade: Option<u8>,
}
