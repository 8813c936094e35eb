//! Search policy shared by the remote and fallback paths.
//!
//! A query matches a record when the lowercased query is a substring of the
//! lowercased value of any of the record's search fields. Fields are OR-ed.
//! A missing or empty query matches everything and is not sent to the
//! backend.

use focus_models::{Class, Student, Teacher};

/// Records that can be matched against a free-text query.
pub trait Searchable {
    /// Values the query is matched against. Absent optional fields are
    /// skipped.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.grade.as_str(),
        ]
    }
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.email.as_str(),
            self.subject.as_str(),
        ];
        fields.extend(self.department.as_deref());
        fields.extend(self.qualification.as_deref());
        fields
    }
}

impl Searchable for Class {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.subject.as_str(),
            self.teacher_name.as_str(),
        ]
    }
}

/// The query as it should be applied: `None` when it would match everything.
pub fn effective_query(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.is_empty())
}

pub fn matches_query<T: Searchable>(record: &T, query: Option<&str>) -> bool {
    let Some(query) = effective_query(query) else {
        return true;
    };
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Clone the matching records, preserving order.
pub fn filter_by_query<T: Searchable + Clone>(records: &[T], query: Option<&str>) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .cloned()
        .collect()
}
