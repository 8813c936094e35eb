//! Teacher domain models and DTOs.

use crate::ids::TeacherId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A teacher record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub join_date: NaiveDate,
}

impl Teacher {
    /// Shallow merge: every field present in `dto` replaces the stored one.
    pub fn apply(mut self, dto: UpdateTeacherDto) -> Self {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(email) = dto.email {
            self.email = email;
        }
        if let Some(subject) = dto.subject {
            self.subject = subject;
        }
        if let Some(avatar) = dto.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(phone_number) = dto.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(department) = dto.department {
            self.department = Some(department);
        }
        if let Some(qualification) = dto.qualification {
            self.qualification = Some(qualification);
        }
        if let Some(join_date) = dto.join_date {
            self.join_date = join_date;
        }
        self
    }
}

/// DTO for creating a new teacher: the record without its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub join_date: NaiveDate,
}

impl CreateTeacherDto {
    pub fn into_teacher(self, id: TeacherId) -> Teacher {
        Teacher {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            avatar: self.avatar,
            phone_number: self.phone_number,
            department: self.department,
            qualification: self.qualification,
            join_date: self.join_date,
        }
    }
}

/// DTO for updating an existing teacher. Only provided fields are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
}
