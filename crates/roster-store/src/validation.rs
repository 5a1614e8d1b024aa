//! Field-level rules shared by create, bulk import, and partial update.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use roster_types::Grade;

/// JSON field names, used to label violations.
pub mod field {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const AGE: &str = "age";
    pub const GRADE: &str = "grade";
}

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const AGE_MIN: i64 = 16;
pub const AGE_MAX: i64 = 100;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// A single failed field check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every check that failed for one request, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Record the error side of `result`, passing the success value through.
    pub fn check<T>(&mut self, result: Result<T, FieldViolation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(violation);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// Names of the offending fields.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl From<FieldViolation> for Violations {
    fn from(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Names are measured in characters, not bytes.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), FieldViolation> {
    let len = value.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(FieldViolation::new(
            field,
            format!("must be {NAME_MIN_CHARS}-{NAME_MAX_CHARS} characters"),
        ))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn validate_email(value: &str) -> Result<(), FieldViolation> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldViolation::new(field::EMAIL, "must look like local@domain.tld"))
    }
}

pub fn validate_age(value: i64) -> Result<u32, FieldViolation> {
    if (AGE_MIN..=AGE_MAX).contains(&value) {
        // Range check above keeps this in bounds.
        Ok(value as u32)
    } else {
        Err(FieldViolation::new(
            field::AGE,
            format!("must be between {AGE_MIN} and {AGE_MAX}"),
        ))
    }
}

pub fn parse_grade(value: &str) -> Result<Grade, FieldViolation> {
    value
        .parse()
        .map_err(|_| FieldViolation::new(field::GRADE, "must be one of A, B, C, D, F"))
}
