use chrono::NaiveDate;
use roster_types::{Grade, Student, StudentId};
use serde::{Deserialize, Serialize};

use crate::validation::{self, field, FieldViolation, Violations};

/// Fields supplied when creating a student.
///
/// Every field is optional at the type level so a missing field surfaces as
/// a validation violation instead of a decoding failure. `subjects` defaults
/// to empty and `isActive` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl StudentDraft {
    /// A draft carrying the five required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            age: Some(age),
            grade: Some(grade.into()),
            subjects: None,
            is_active: None,
        }
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = Some(subjects.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
        let mut missing = Vec::new();
        if blank(&self.first_name) {
            missing.push(field::FIRST_NAME);
        }
        if blank(&self.last_name) {
            missing.push(field::LAST_NAME);
        }
        if blank(&self.email) {
            missing.push(field::EMAIL);
        }
        if self.age.is_none() {
            missing.push(field::AGE);
        }
        if blank(&self.grade) {
            missing.push(field::GRADE);
        }
        missing
    }

    /// Run every field check and collect all failures.
    pub fn validate(&self) -> Result<NewStudent, Violations> {
        let mut violations = Violations::new();

        let first_name = violations.check(required_name(field::FIRST_NAME, &self.first_name));
        let last_name = violations.check(required_name(field::LAST_NAME, &self.last_name));
        let email = violations.check(match self.email.as_deref() {
            None | Some("") => Err(FieldViolation::required(field::EMAIL)),
            Some(email) => validation::validate_email(email).map(|()| email.to_string()),
        });
        let age = violations.check(match self.age {
            None => Err(FieldViolation::required(field::AGE)),
            Some(age) => validation::validate_age(age),
        });
        let grade = violations.check(match self.grade.as_deref() {
            None | Some("") => Err(FieldViolation::required(field::GRADE)),
            Some(grade) => validation::parse_grade(grade),
        });

        match (first_name, last_name, email, age, grade) {
            (Some(first_name), Some(last_name), Some(email), Some(age), Some(grade))
                if violations.is_empty() =>
            {
                Ok(NewStudent {
                    first_name,
                    last_name,
                    email,
                    age,
                    grade,
                    subjects: self.subjects.clone().unwrap_or_default(),
                    is_active: self.is_active.unwrap_or(true),
                })
            }
            _ => Err(violations),
        }
    }
}

fn required_name(name: &'static str, value: &Option<String>) -> Result<String, FieldViolation> {
    match value.as_deref() {
        None | Some("") => Err(FieldViolation::required(name)),
        Some(v) => validation::validate_name(name, v).map(|()| v.to_string()),
    }
}

/// A draft that passed validation, with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub grade: Grade,
    pub subjects: Vec<String>,
    pub is_active: bool,
}

impl NewStudent {
    pub fn into_student(self, id: StudentId, enrolled: NaiveDate) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
            grade: self.grade,
            subjects: self.subjects,
            enrollment_date: enrolled,
            is_active: self.is_active,
        }
    }
}

/// Partial update: each present field replaces the stored value.
///
/// Fields are checked in declaration order (firstName, lastName, email, age,
/// grade, subjects, isActive); the first failure rejects the whole patch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Conjunctive filter for [`list`](crate::StudentStore::list).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub is_active: Option<bool>,
    /// Compared against the stored grade after upper-casing.
    pub grade: Option<String>,
    /// Case-insensitive exact match against any subject.
    pub subject: Option<String>,
}

impl StudentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.grade.is_none() && self.subject.is_none()
    }

    pub fn matches(&self, student: &Student) -> bool {
        if let Some(active) = self.is_active {
            if student.is_active != active {
                return false;
            }
        }
        if let Some(grade) = &self.grade {
            if student.grade.as_str() != grade.to_uppercase() {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            if !student.takes_subject(subject) {
                return false;
            }
        }
        true
    }
}
