use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::grade::Grade;

/// Store-assigned student identifier.
///
/// Identifiers are positive and assigned as `max(existing) + 1`, so they are
/// unique among live records but a gap left by a delete may be reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    /// The identifier handed out when the collection is empty.
    pub const FIRST: StudentId = StudentId(1);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }
}

impl From<u64> for StudentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A student record.
///
/// `id` and `enrollment_date` are set once by the store at creation time and
/// never change afterwards. `grade` is always canonical upper-case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub grade: Grade,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub enrollment_date: NaiveDate,
    pub is_active: bool,
}

impl Student {
    /// Display name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Case-insensitive exact match against any subject.
    pub fn takes_subject(&self, subject: &str) -> bool {
        let subject = subject.to_lowercase();
        self.subjects.iter().any(|s| s.to_lowercase() == subject)
    }
}
