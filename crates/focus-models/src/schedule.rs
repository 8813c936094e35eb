//! Timetable views derived from class lists.
//!
//! These are read-only projections used by the schedule and teacher pages.
//! They never fetch anything themselves; pass in whatever class list the
//! client returned.

use crate::classes::{Class, ClassSchedule, Weekday};
use crate::ids::{ClassId, TeacherId};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// One meeting of one class, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub class_id: ClassId,
    pub class_name: String,
    pub subject: String,
    pub teacher_name: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
}

impl ScheduleSlot {
    fn new(class: &Class, meeting: &ClassSchedule) -> Self {
        Self {
            class_id: class.id.clone(),
            class_name: class.name.clone(),
            subject: class.subject.clone(),
            teacher_name: class.teacher_name.clone(),
            day: meeting.day,
            start_time: meeting.start_time,
            end_time: meeting.end_time,
            room: meeting.room.clone(),
        }
    }
}

fn slots<'a>(classes: impl IntoIterator<Item = &'a Class>) -> Vec<ScheduleSlot> {
    classes
        .into_iter()
        .flat_map(|class| {
            class
                .schedule
                .iter()
                .map(move |meeting| ScheduleSlot::new(class, meeting))
        })
        .collect()
}

pub fn classes_for_teacher<'a>(classes: &'a [Class], teacher_id: &TeacherId) -> Vec<&'a Class> {
    classes
        .iter()
        .filter(|class| &class.teacher_id == teacher_id)
        .collect()
}

/// Every meeting of the teacher's classes, ordered by weekday then start time.
pub fn teacher_schedule(classes: &[Class], teacher_id: &TeacherId) -> Vec<ScheduleSlot> {
    let mut slots = slots(classes_for_teacher(classes, teacher_id));
    slots.sort_by(|a, b| a.day.cmp(&b.day).then(a.start_time.cmp(&b.start_time)));
    slots
}

/// Meetings grouped by weekday; days without meetings are absent.
pub fn weekly_schedule(classes: &[Class]) -> BTreeMap<Weekday, Vec<ScheduleSlot>> {
    let mut by_day: BTreeMap<Weekday, Vec<ScheduleSlot>> = BTreeMap::new();
    for slot in slots(classes) {
        by_day.entry(slot.day).or_default().push(slot);
    }
    for day_slots in by_day.values_mut() {
        day_slots.sort_by_key(|slot| slot.start_time);
    }
    by_day
}

/// Distinct subjects in first-seen order.
pub fn subjects(classes: &[Class]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for class in classes {
        if !seen.contains(&class.subject) {
            seen.push(class.subject.clone());
        }
    }
    seen
}

/// Exact subject filter; `None` keeps everything.
pub fn filter_by_subject<'a>(classes: &'a [Class], subject: Option<&str>) -> Vec<&'a Class> {
    classes
        .iter()
        .filter(|class| subject.is_none_or(|s| class.subject == s))
        .collect()
}

/// Distinct meeting days of a class, e.g. `"Monday, Wednesday"`.
pub fn schedule_summary(class: &Class) -> String {
    let mut days: Vec<&'static str> = Vec::new();
    for meeting in &class.schedule {
        let day = meeting.day.as_str();
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days.join(", ")
}
