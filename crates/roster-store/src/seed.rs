//! The fixed collection the service starts with.

use chrono::NaiveDate;
use roster_types::{Grade, Student, StudentId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn subjects(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Four students with grades A, B, C, A; the third is inactive.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: StudentId::new(1),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@school.com".into(),
            age: 20,
            grade: Grade::A,
            subjects: subjects(&["Math", "Physics", "Chemistry"]),
            enrollment_date: date(2024, 1, 15),
            is_active: true,
        },
        Student {
            id: StudentId::new(2),
            first_name: "mike".into(),
            last_name: "rop".into(),
            email: "mike.rop@school.com".into(),
            age: 22,
            grade: Grade::B,
            subjects: subjects(&["biology", "Chemistry"]),
            enrollment_date: date(2022, 2, 15),
            is_active: true,
        },
        Student {
            id: StudentId::new(3),
            first_name: "collo".into(),
            last_name: "igwe".into(),
            email: "collo.igwe@school.com".into(),
            age: 24,
            grade: Grade::C,
            subjects: subjects(&["Geography", "Agriculture"]),
            enrollment_date: date(2020, 2, 15),
            is_active: false,
        },
        Student {
            id: StudentId::new(4),
            first_name: "Emma".into(),
            last_name: "kin".into(),
            email: "emma.kin@school.com".into(),
            age: 18,
            grade: Grade::A,
            subjects: subjects(&["History", "Art"]),
            enrollment_date: date(2024, 1, 10),
            is_active: true,
        },
    ]
}
