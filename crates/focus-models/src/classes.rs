//! Class domain models and DTOs.
//!
//! A class carries a denormalized copy of its teacher's name next to the
//! teacher id. [`Class::assign_teacher`] and [`UpdateClassDto::with_teacher`]
//! set both together so they cannot drift apart through this crate.

use crate::ids::{ClassId, TeacherId};
use crate::teachers::Teacher;
use chrono::NaiveTime;
use focus_core::serde::hour_minute;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the school week, serialized by its English name.
///
/// Parsing ignores case and accepts three-letter abbreviations, since the
/// backend stores the day as free text.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_lowercase();
                wanted == name || (wanted.len() == 3 && name.starts_with(&wanted))
            })
            .ok_or_else(|| format!("Unknown weekday: {s}"))
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One weekly meeting of a class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub day: Weekday,
    #[serde(with = "hour_minute")]
    pub start_time: NaiveTime,
    #[serde(with = "hour_minute")]
    pub end_time: NaiveTime,
    pub room: String,
}

/// A class record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub subject: String,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    #[serde(default)]
    pub schedule: Vec<ClassSchedule>,
    pub student_count: u32,
}

impl Class {
    /// A class needs at least one meeting to appear on a timetable.
    pub fn is_schedulable(&self) -> bool {
        !self.schedule.is_empty()
    }

    pub fn assign_teacher(&mut self, teacher: &Teacher) {
        self.teacher_id = teacher.id.clone();
        self.teacher_name = teacher.name.clone();
    }

    /// Shallow merge: every field present in `dto` replaces the stored one.
    pub fn apply(mut self, dto: UpdateClassDto) -> Self {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(subject) = dto.subject {
            self.subject = subject;
        }
        if let Some(teacher_id) = dto.teacher_id {
            self.teacher_id = teacher_id;
        }
        if let Some(teacher_name) = dto.teacher_name {
            self.teacher_name = teacher_name;
        }
        if let Some(schedule) = dto.schedule {
            self.schedule = schedule;
        }
        if let Some(student_count) = dto.student_count {
            self.student_count = student_count;
        }
        self
    }
}

/// DTO for creating a new class: the record without its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    pub name: String,
    pub subject: String,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub schedule: Vec<ClassSchedule>,
    pub student_count: u32,
}

impl CreateClassDto {
    /// Build a create command taught by `teacher`.
    pub fn taught_by(
        name: impl Into<String>,
        subject: impl Into<String>,
        teacher: &Teacher,
        schedule: Vec<ClassSchedule>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.name.clone(),
            schedule,
            student_count: 0,
        }
    }

    pub fn into_class(self, id: ClassId) -> Class {
        Class {
            id,
            name: self.name,
            subject: self.subject,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            schedule: self.schedule,
            student_count: self.student_count,
        }
    }
}

/// DTO for updating an existing class. Only provided fields are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ClassSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
}

impl UpdateClassDto {
    /// Reassign the class to `teacher`, updating id and cached name together.
    pub fn with_teacher(mut self, teacher: &Teacher) -> Self {
        self.teacher_id = Some(teacher.id.clone());
        self.teacher_name = Some(teacher.name.clone());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn math() -> Class {
        Class {
            id: ClassId::from("1"),
            name: "Math 101".to_string(),
            subject: "Mathematics".to_string(),
            teacher_id: TeacherId::from("2"),
            teacher_name: "John Smith".to_string(),
            schedule: vec![ClassSchedule {
                day: Weekday::Monday,
                start_time: time(9, 0),
                end_time: time(10, 30),
                room: "A101".to_string(),
            }],
            student_count: 28,
        }
    }

    fn sarah() -> Teacher {
        Teacher {
            id: TeacherId::from("5"),
            name: "Sarah Johnson".to_string(),
            email: "sarah@focus.edu".to_string(),
            subject: "English".to_string(),
            avatar: None,
            phone_number: None,
            department: None,
            qualification: None,
            join_date: NaiveDate::from_ymd_opt(2019, 7, 10).unwrap(),
        }
    }

    #[test]
    fn test_class_wire_format() {
        let json = serde_json::to_value(math()).unwrap();
        assert_eq!(json["teacherName"], "John Smith");
        assert_eq!(json["studentCount"], 28);
        assert_eq!(json["schedule"][0]["day"], "Monday");
        assert_eq!(json["schedule"][0]["startTime"], "09:00");
        assert_eq!(json["schedule"][0]["endTime"], "10:30");
    }

    #[test]
    fn test_weekday_order_starts_monday() {
        assert!(Weekday::Monday < Weekday::Friday);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
    }

    #[test]
    fn test_weekday_parsing_ignores_case() {
        assert_eq!("monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!(" WEDNESDAY ".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("Fri".parse::<Weekday>(), Ok(Weekday::Friday));
        assert!("Mo".parse::<Weekday>().is_err());

        let raw = r#"{"day":"tuesday","startTime":"9:00 AM","endTime":"10:15","room":"B12"}"#;
        let meeting: ClassSchedule = serde_json::from_str(raw).unwrap();
        assert_eq!(meeting.day, Weekday::Tuesday);
        assert_eq!(meeting.start_time, time(9, 0));
    }

    #[test]
    fn test_unknown_weekday_is_rejected() {
        let raw = r#"{"day":"Funday","startTime":"09:00","endTime":"10:00","room":"X"}"#;
        assert!(serde_json::from_str::<ClassSchedule>(raw).is_err());
    }

    #[test]
    fn test_schedulable_requires_a_meeting() {
        let mut class = math();
        assert!(class.is_schedulable());
        class.schedule.clear();
        assert!(!class.is_schedulable());
    }

    #[test]
    fn test_assign_teacher_sets_id_and_name() {
        let mut class = math();
        class.assign_teacher(&sarah());
        assert_eq!(class.teacher_id, "5");
        assert_eq!(class.teacher_name, "Sarah Johnson");
    }

    #[test]
    fn test_update_with_teacher_sets_both_fields() {
        let updated = math().apply(UpdateClassDto::default().with_teacher(&sarah()));
        assert_eq!(updated.teacher_id, "5");
        assert_eq!(updated.teacher_name, "Sarah Johnson");
        assert_eq!(updated.name, "Math 101");
    }

    #[test]
    fn test_taught_by_starts_empty() {
        let dto = CreateClassDto::taught_by("Poetry", "English", &sarah(), vec![]);
        assert_eq!(dto.teacher_name, "Sarah Johnson");
        assert_eq!(dto.student_count, 0);
    }
}
