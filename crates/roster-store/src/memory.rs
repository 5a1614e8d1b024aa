use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use roster_types::{Student, StudentId};
use serde_json::Value;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{StoreError, StoreResult};
use crate::report::{BulkError, BulkReport, Listing, StudentStats};
use crate::request::{NewStudent, StudentDraft, StudentFilter, StudentPatch};
use crate::seed::seed_students;
use crate::traits::StudentStore;
use crate::validation::{self, field, Violations};

const BULK_INVALID_TYPES: &str = "Invalid field types";
const BULK_MISSING_FIELDS: &str = "Missing required fields";
const BULK_INVALID_EMAIL: &str = "Invalid email";
const BULK_DUPLICATE_EMAIL: &str = "Email already exists";

/// In-memory, `Vec`-based student store.
///
/// The collection sits behind a single `RwLock`: every mutation holds the
/// write lock for its whole duration (id generation, uniqueness checks and
/// the write itself), reads share the read lock and return clones.
pub struct InMemoryStudentStore {
    students: RwLock<Vec<Student>>,
    clock: Box<dyn Clock>,
}

impl InMemoryStudentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_students(Vec::new())
    }

    /// Create a store holding `students` in the given order.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
            clock: Box::new(SystemClock),
        }
    }

    /// Create a store holding the fixed seed collection.
    pub fn seeded() -> Self {
        Self::with_students(seed_students())
    }

    /// Replace the clock used to stamp `enrollmentDate`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Number of students currently stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A copy of the whole collection in insertion order.
    pub fn snapshot(&self) -> Vec<Student> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Student>> {
        self.students.read().expect("lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Student>> {
        self.students.write().expect("lock poisoned")
    }

    fn select(&self, pred: impl Fn(&Student) -> bool) -> Listing {
        let students = self.read();
        students
            .iter()
            .filter(|s| pred(s))
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(students: &[Student]) -> StudentId {
    students
        .iter()
        .map(|s| s.id)
        .max()
        .map_or(StudentId::FIRST, |id| id.next())
}

fn position(students: &[Student], id: StudentId) -> StoreResult<usize> {
    students
        .iter()
        .position(|s| s.id == id)
        .ok_or(StoreError::NotFound(id))
}

fn email_taken(students: &[Student], email: &str, except: Option<StudentId>) -> bool {
    students
        .iter()
        .any(|s| Some(s.id) != except && s.has_email(email))
}

/// Apply `patch` to a copy of `current`, field by field.
fn apply_patch(
    students: &[Student],
    current: &Student,
    patch: &StudentPatch,
) -> StoreResult<Student> {
    let mut next = current.clone();

    if let Some(first_name) = &patch.first_name {
        validation::validate_name(field::FIRST_NAME, first_name).map_err(invalid_field)?;
        next.first_name = first_name.clone();
    }
    if let Some(last_name) = &patch.last_name {
        validation::validate_name(field::LAST_NAME, last_name).map_err(invalid_field)?;
        next.last_name = last_name.clone();
    }
    if let Some(email) = &patch.email {
        validation::validate_email(email).map_err(invalid_field)?;
        if email_taken(students, email, Some(current.id)) {
            return Err(StoreError::Conflict {
                email: email.clone(),
            });
        }
        next.email = email.clone();
    }
    if let Some(age) = patch.age {
        next.age = validation::validate_age(age).map_err(invalid_field)?;
    }
    if let Some(grade) = &patch.grade {
        next.grade = validation::parse_grade(grade).map_err(invalid_field)?;
    }
    if let Some(subjects) = &patch.subjects {
        next.subjects = subjects.clone();
    }
    if let Some(is_active) = patch.is_active {
        next.is_active = is_active;
    }

    Ok(next)
}

fn invalid_field(violation: validation::FieldViolation) -> StoreError {
    StoreError::Validation(Violations::from(violation))
}

/// Decide whether one bulk entry may be inserted given the current
/// collection, which already includes earlier entries of the same batch.
fn admit_entry(students: &[Student], entry: &Value) -> Result<NewStudent, String> {
    let draft: StudentDraft =
        serde_json::from_value(entry.clone()).map_err(|_| BULK_INVALID_TYPES.to_string())?;

    if !draft.missing_fields().is_empty() {
        return Err(BULK_MISSING_FIELDS.into());
    }
    let email = draft.email.as_deref().unwrap_or_default();
    if !validation::is_valid_email(email) {
        return Err(BULK_INVALID_EMAIL.into());
    }
    if email_taken(students, email, None) {
        return Err(BULK_DUPLICATE_EMAIL.into());
    }
    draft.validate().map_err(|v| v.to_string())
}

impl StudentStore for InMemoryStudentStore {
    fn list(&self, filter: &StudentFilter) -> StoreResult<Listing> {
        Ok(self.select(|s| filter.matches(s)))
    }

    fn get(&self, id: StudentId) -> StoreResult<Student> {
        let students = self.read();
        let index = position(&students, id)?;
        Ok(students[index].clone())
    }

    fn search(&self, term: Option<&str>) -> StoreResult<Listing> {
        let term = match term {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return Err(StoreError::invalid("search term is required")),
        };
        let hit = |text: &str| text.to_lowercase().contains(&term);
        Ok(self.select(|s| {
            hit(&s.first_name)
                || hit(&s.last_name)
                || hit(&s.email)
                || s.subjects.iter().any(|sub| hit(sub))
        }))
    }

    fn by_grade(&self, grade: &str) -> StoreResult<Listing> {
        let grade = validation::parse_grade(grade)
            .map_err(|_| StoreError::invalid(format!("invalid grade {grade:?}, use A-F")))?;
        Ok(self.select(|s| s.grade == grade))
    }

    fn stats(&self) -> StoreResult<StudentStats> {
        Ok(StudentStats::collect(self.read().iter()))
    }

    fn create(&self, draft: StudentDraft) -> StoreResult<Student> {
        let new = draft.validate().map_err(StoreError::Validation)?;
        let enrolled = self.clock.today();

        let mut students = self.write();
        if email_taken(&students, &new.email, None) {
            return Err(StoreError::Conflict { email: new.email });
        }
        let student = new.into_student(next_id(&students), enrolled);
        students.push(student.clone());

        debug!(id = %student.id, email = %student.email, "student created");
        Ok(student)
    }

    fn create_bulk(&self, payload: &Value) -> StoreResult<BulkReport> {
        let entries = payload
            .as_array()
            .ok_or_else(|| StoreError::invalid("request body must be an array of students"))?;
        if let Some(index) = entries.iter().position(|e| !e.is_object()) {
            return Err(StoreError::invalid(format!(
                "entry at index {index} is not a student object"
            )));
        }

        let enrolled = self.clock.today();
        let mut students = self.write();
        let mut report = BulkReport::default();

        for (index, entry) in entries.iter().enumerate() {
            match admit_entry(&students, entry) {
                Ok(new) => {
                    let student = new.into_student(next_id(&students), enrolled);
                    students.push(student.clone());
                    report.added.push(student);
                }
                Err(message) => {
                    debug!(index, %message, "bulk entry rejected");
                    report.errors.push(BulkError { index, message });
                }
            }
        }

        info!(
            added = report.success_count(),
            rejected = report.error_count(),
            "bulk import finished"
        );
        Ok(report)
    }

    fn update(&self, id: StudentId, patch: &StudentPatch) -> StoreResult<Student> {
        let mut students = self.write();
        let index = position(&students, id)?;
        let updated = apply_patch(&students, &students[index], patch)?;
        students[index] = updated.clone();

        debug!(%id, "student updated");
        Ok(updated)
    }

    fn update_grade(&self, id: StudentId, grade: Option<&str>) -> StoreResult<Student> {
        let mut students = self.write();
        let index = position(&students, id)?;
        let grade = grade
            .and_then(|g| validation::parse_grade(g).ok())
            .ok_or_else(|| StoreError::invalid("invalid grade, must be one of A, B, C, D, F"))?;
        students[index].grade = grade;

        debug!(%id, %grade, "student grade updated");
        Ok(students[index].clone())
    }

    fn delete(&self, id: StudentId) -> StoreResult<Student> {
        let mut students = self.write();
        let index = position(&students, id)?;
        let removed = students.remove(index);

        debug!(%id, "student deleted");
        Ok(removed)
    }
}

impl std::fmt::Debug for InMemoryStudentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryStudentStore")
            .field("student_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use roster_types::Grade;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn seeded() -> InMemoryStudentStore {
        InMemoryStudentStore::seeded().with_clock(FixedClock(today()))
    }

    fn empty() -> InMemoryStudentStore {
        InMemoryStudentStore::new().with_clock(FixedClock(today()))
    }

    fn jane() -> StudentDraft {
        StudentDraft::new("Jane", "Smith", "jane.smith@school.com", 21, "b")
    }

    fn ids(listing: &Listing) -> Vec<u64> {
        listing.students.iter().map(|s| s.id.get()).collect()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    #[test]
    fn list_without_filters_returns_everything_in_order() {
        let store = seeded();
        let all = store.list(&StudentFilter::new()).unwrap();
        assert_eq!(all.count, 4);
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
    }

    #[test]
    fn list_filters_combine() {
        let store = seeded();
        let active = store.list(&StudentFilter::new().active(true)).unwrap();
        assert_eq!(ids(&active), vec![1, 2, 4]);

        let inactive = store.list(&StudentFilter::new().active(false)).unwrap();
        assert_eq!(ids(&inactive), vec![3]);

        let chem = store.list(&StudentFilter::new().subject("chemistry")).unwrap();
        assert_eq!(ids(&chem), vec![1, 2]);

        let both = store
            .list(&StudentFilter::new().grade("a").subject("CHEMISTRY"))
            .unwrap();
        assert_eq!(ids(&both), vec![1]);
    }

    #[test]
    fn list_grade_filter_ignores_case() {
        let store = seeded();
        let lower = store.list(&StudentFilter::new().grade("a")).unwrap();
        let upper = store.list(&StudentFilter::new().grade("A")).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(ids(&lower), vec![1, 4]);
    }

    #[test]
    fn list_with_unknown_grade_is_empty() {
        let store = seeded();
        let none = store.list(&StudentFilter::new().grade("Z")).unwrap();
        assert_eq!(none.count, 0);
    }

    #[test]
    fn get_existing_and_missing() {
        let store = seeded();
        assert_eq!(store.get(StudentId::new(2)).unwrap().first_name, "mike");
        assert!(matches!(
            store.get(StudentId::new(99)),
            Err(StoreError::NotFound(id)) if id == StudentId::new(99)
        ));
    }

    #[test]
    fn search_matches_names_email_and_subjects() {
        let store = seeded();
        assert_eq!(ids(&store.search(Some("JOHN")).unwrap()), vec![1]);
        assert_eq!(ids(&store.search(Some("igwe")).unwrap()), vec![3]);
        assert_eq!(ids(&store.search(Some("school.com")).unwrap()), vec![1, 2, 3, 4]);
        // Subject substring, not just exact match.
        assert_eq!(ids(&store.search(Some("chem")).unwrap()), vec![1, 2]);
        assert_eq!(store.search(Some("nobody")).unwrap().count, 0);
    }

    #[test]
    fn search_requires_a_term() {
        let store = seeded();
        assert!(matches!(store.search(None), Err(StoreError::InvalidArgument(_))));
        assert!(matches!(store.search(Some("")), Err(StoreError::InvalidArgument(_))));
    }

    #[test]
    fn by_grade_normalizes_and_rejects() {
        let store = seeded();
        assert!(matches!(store.by_grade("Z"), Err(StoreError::InvalidArgument(_))));
        assert_eq!(ids(&store.by_grade("a").unwrap()), vec![1, 4]);
        assert_eq!(ids(&store.by_grade("c").unwrap()), vec![3]);
        assert_eq!(store.by_grade("f").unwrap().count, 0);
    }

    #[test]
    fn stats_on_seed() {
        let stats = seeded().stats().unwrap();
        assert_eq!(stats.total_students, 4);
        assert_eq!(stats.active_students, 3);
        assert_eq!(stats.grade_distribution.get(&Grade::A), Some(&2));
        assert_eq!(stats.grade_distribution.get(&Grade::B), Some(&1));
        assert_eq!(stats.grade_distribution.get(&Grade::C), Some(&1));
        assert_eq!(stats.grade_distribution.len(), 3);
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    #[test]
    fn create_assigns_next_id_and_defaults() {
        let store = seeded();
        let created = store.create(jane()).unwrap();
        assert_eq!(created.id, StudentId::new(5));
        assert_eq!(created.grade, Grade::B);
        assert!(created.is_active);
        assert!(created.subjects.is_empty());
        assert_eq!(created.enrollment_date, today());
        assert_eq!(store.get(created.id).unwrap(), created);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn create_on_empty_store_starts_at_one() {
        let store = empty();
        assert!(store.is_empty());
        assert_eq!(store.create(jane()).unwrap().id, StudentId::FIRST);
    }

    #[test]
    fn create_rejects_case_insensitive_duplicate_email() {
        let store = seeded();
        let draft = StudentDraft::new("Johnny", "Doe", "JOHN.DOE@school.com", 30, "A");
        assert!(matches!(
            store.create(draft),
            Err(StoreError::Conflict { email }) if email == "JOHN.DOE@school.com"
        ));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn create_reports_all_violations_without_touching_collection() {
        let store = seeded();
        let draft = StudentDraft::new("J", "D", "nope", 12, "Z");
        match store.create(draft) {
            Err(StoreError::Validation(v)) => {
                assert_eq!(v.fields(), vec!["firstName", "lastName", "email", "age", "grade"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn ids_never_collide_with_live_records() {
        let store = empty();
        for i in 0..20 {
            let draft =
                StudentDraft::new("Stu", "Dent", format!("s{i}@school.com"), 20, "C");
            store.create(draft).unwrap();
            if i % 3 == 0 {
                store.delete(StudentId::new(1 + i as u64 / 2)).ok();
            }
        }
        let mut seen: Vec<StudentId> = store.snapshot().iter().map(|s| s.id).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn deleted_max_id_gap_is_reused() {
        let store = seeded();
        store.delete(StudentId::new(4)).unwrap();
        let created = store.create(jane()).unwrap();
        assert_eq!(created.id, StudentId::new(4));
    }

    // -----------------------------------------------------------------------
    // Bulk
    // -----------------------------------------------------------------------

    #[test]
    fn bulk_partial_success() {
        let store = seeded();
        let payload = json!([
            {"firstName": "Jane", "lastName": "Smith", "email": "jane@school.com", "age": 21, "grade": "a"},
            {"firstName": "Ken", "lastName": "Adams", "email": "ken@school.com", "grade": "B"}
        ]);
        let report = store.create_bulk(&payload).unwrap();
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].index, 1);
        assert_eq!(report.errors[0].message, "Missing required fields");
        assert_eq!(report.added[0].id, StudentId::new(5));
        assert_eq!(report.added[0].grade, Grade::A);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn bulk_detects_duplicates_within_batch_and_collection() {
        let store = seeded();
        let payload = json!([
            {"firstName": "Jane", "lastName": "Smith", "email": "jane@school.com", "age": 21, "grade": "A"},
            {"firstName": "Janet", "lastName": "Smith", "email": "JANE@school.com", "age": 22, "grade": "B"},
            {"firstName": "John", "lastName": "Doe", "email": "john.doe@school.com", "age": 22, "grade": "B"},
            {"firstName": "Lee", "lastName": "Park", "email": "lee@school", "age": 22, "grade": "B"},
            {"firstName": "Mo", "lastName": "Salah", "email": "mo@school.com", "age": 23, "grade": "D",
             "subjects": ["Art"]}
        ]);
        let report = store.create_bulk(&payload).unwrap();
        let added: Vec<u64> = report.added.iter().map(|s| s.id.get()).collect();
        assert_eq!(added, vec![5, 6]);
        assert_eq!(report.added[1].subjects, vec!["Art".to_string()]);

        let errors: Vec<(usize, &str)> = report
            .errors
            .iter()
            .map(|e| (e.index, e.message.as_str()))
            .collect();
        assert_eq!(
            errors,
            vec![
                (1, "Email already exists"),
                (2, "Email already exists"),
                (3, "Invalid email"),
            ]
        );
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn bulk_applies_field_rules_and_type_checks() {
        let store = empty();
        let payload = json!([
            {"firstName": "Jane", "lastName": "Smith", "email": "jane@school.com", "age": 12, "grade": "A"},
            {"firstName": "Jane", "lastName": "Smith", "email": "jane@school.com", "age": "old", "grade": "A"},
            {}
        ]);
        let report = store.create_bulk(&payload).unwrap();
        assert_eq!(report.success_count(), 0);
        assert_eq!(report.errors[0].message, "age: must be between 16 and 100");
        assert_eq!(report.errors[1].message, "Invalid field types");
        assert_eq!(report.errors[2].message, "Missing required fields");
        assert!(store.is_empty());
    }

    #[test]
    fn bulk_rejects_non_array_payloads() {
        let store = seeded();
        assert!(matches!(
            store.create_bulk(&json!({"firstName": "Jane"})),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            store.create_bulk(&json!([{"firstName": "Jane"}, 42])),
            Err(StoreError::InvalidArgument(_))
        ));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn bulk_empty_array_is_a_no_op() {
        let store = seeded();
        let report = store.create_bulk(&json!([])).unwrap();
        assert_eq!(report, BulkReport::default());
        assert_eq!(store.len(), 4);
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[test]
    fn update_applies_present_fields_only() {
        let store = seeded();
        let patch = StudentPatch {
            last_name: Some("Dough".into()),
            grade: Some("d".into()),
            subjects: Some(vec![]),
            is_active: Some(false),
            ..Default::default()
        };
        let updated = store.update(StudentId::new(1), &patch).unwrap();
        assert_eq!(updated.first_name, "John");
        assert_eq!(updated.last_name, "Dough");
        assert_eq!(updated.grade, Grade::D);
        assert!(updated.subjects.is_empty());
        assert!(!updated.is_active);
        assert_eq!(updated.enrollment_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(store.get(StudentId::new(1)).unwrap(), updated);
    }

    #[test]
    fn update_with_invalid_age_changes_nothing() {
        let store = seeded();
        let before = store.get(StudentId::new(2)).unwrap();
        let patch = StudentPatch {
            first_name: Some("Michael".into()),
            age: Some(10),
            ..Default::default()
        };
        match store.update(StudentId::new(2), &patch) {
            Err(StoreError::Validation(v)) => assert_eq!(v.fields(), vec!["age"]),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.get(StudentId::new(2)).unwrap(), before);
    }

    #[test]
    fn update_reports_first_failing_field() {
        let store = seeded();
        let patch = StudentPatch {
            email: Some("broken".into()),
            grade: Some("Z".into()),
            ..Default::default()
        };
        match store.update(StudentId::new(1), &patch) {
            Err(StoreError::Validation(v)) => assert_eq!(v.fields(), vec!["email"]),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn update_email_uniqueness_excludes_self() {
        let store = seeded();
        let own = StudentPatch {
            email: Some("JOHN.DOE@SCHOOL.COM".into()),
            ..Default::default()
        };
        let updated = store.update(StudentId::new(1), &own).unwrap();
        assert_eq!(updated.email, "JOHN.DOE@SCHOOL.COM");

        let taken = StudentPatch {
            email: Some("Mike.Rop@school.com".into()),
            ..Default::default()
        };
        assert!(matches!(
            store.update(StudentId::new(1), &taken),
            Err(StoreError::Conflict { .. })
        ));
    }

    #[test]
    fn update_missing_student() {
        let store = seeded();
        assert!(matches!(
            store.update(StudentId::new(42), &StudentPatch::default()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn empty_patch_is_identity() {
        let store = seeded();
        let before = store.get(StudentId::new(3)).unwrap();
        let after = store.update(StudentId::new(3), &StudentPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn update_grade_paths() {
        let store = seeded();
        let updated = store.update_grade(StudentId::new(3), Some("f")).unwrap();
        assert_eq!(updated.grade, Grade::F);

        assert!(matches!(
            store.update_grade(StudentId::new(3), Some("G")),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            store.update_grade(StudentId::new(3), None),
            Err(StoreError::InvalidArgument(_))
        ));
        // Missing student wins over a bad grade.
        assert!(matches!(
            store.update_grade(StudentId::new(30), Some("G")),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.get(StudentId::new(3)).unwrap().grade, Grade::F);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_then_get_is_not_found() {
        let store = seeded();
        let removed = store.delete(StudentId::new(2)).unwrap();
        assert_eq!(removed.first_name, "mike");
        assert!(matches!(store.get(StudentId::new(2)), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(StudentId::new(2)), Err(StoreError::NotFound(_))));
        let remaining: Vec<u64> = store.snapshot().iter().map(|s| s.id.get()).collect();
        assert_eq!(remaining, vec![1, 3, 4]);
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(empty());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..10 {
                        let email = format!("t{t}.s{i}@school.com");
                        store
                            .create(StudentDraft::new("Stu", "Dent", email, 20, "B"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        let mut ids: Vec<u64> = store.snapshot().iter().map(|s| s.id.get()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=80).collect::<Vec<_>>());
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Box<dyn StudentStore> = Box::new(seeded());
        assert_eq!(store.stats().unwrap().total_students, 4);
    }

    #[test]
    fn debug_format() {
        let debug = format!("{:?}", seeded());
        assert!(debug.contains("InMemoryStudentStore"));
        assert!(debug.contains("student_count"));
    }
}
