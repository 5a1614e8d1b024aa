use std::collections::BTreeMap;

use roster_types::{Grade, Student};
use serde::Serialize;

/// A query result: the matching students in collection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub count: usize,
    pub students: Vec<Student>,
}

impl From<Vec<Student>> for Listing {
    fn from(students: Vec<Student>) -> Self {
        Self {
            count: students.len(),
            students,
        }
    }
}

/// Aggregate counts over the whole collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub total_students: usize,
    pub active_students: usize,
    /// Only grades held by at least one student appear.
    pub grade_distribution: BTreeMap<Grade, usize>,
}

impl StudentStats {
    pub fn collect<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        students
            .into_iter()
            .fold(Self::default(), |mut stats, student| {
                stats.total_students += 1;
                if student.is_active {
                    stats.active_students += 1;
                }
                *stats.grade_distribution.entry(student.grade).or_insert(0) += 1;
                stats
            })
    }
}

/// Per-entry failure inside a bulk import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BulkError {
    pub index: usize,
    pub message: String,
}

/// Outcome of a bulk import. Partial success is normal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub added: Vec<Student>,
    pub errors: Vec<BulkError>,
}

impl BulkReport {
    pub fn success_count(&self) -> usize {
        self.added.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
