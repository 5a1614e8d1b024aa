use roster_types::{Student, StudentId};

use crate::error::StoreResult;
use crate::report::{BulkReport, Listing, StudentStats};
use crate::request::{StudentDraft, StudentFilter, StudentPatch};

/// The student record store.
///
/// All implementations must satisfy these invariants:
/// - Ids are unique among live records and assigned as `max + 1` (1 when
///   empty) under the same exclusive access as the insert.
/// - Emails are unique, compared case-insensitively.
/// - Grades are stored upper-case; `enrollmentDate` is write-once.
/// - Mutations are all-or-nothing per record; readers never observe a
///   partially applied write.
/// - Results are owned copies; no caller holds a reference into the
///   collection.
pub trait StudentStore: Send + Sync {
    /// Students matching every present filter, in insertion order.
    fn list(&self, filter: &StudentFilter) -> StoreResult<Listing>;

    /// The student with `id`, or `NotFound`.
    fn get(&self, id: StudentId) -> StoreResult<Student>;

    /// Students whose first name, last name, email or any subject contains
    /// `term`, ignoring case.
    ///
    /// Returns `InvalidArgument` if `term` is absent or empty.
    fn search(&self, term: Option<&str>) -> StoreResult<Listing>;

    /// Students holding `grade` (case-insensitive).
    ///
    /// Returns `InvalidArgument` if `grade` is not one of A, B, C, D, F.
    fn by_grade(&self, grade: &str) -> StoreResult<Listing>;

    /// Total, active and per-grade counts.
    fn stats(&self) -> StoreResult<StudentStats>;

    /// Validate and insert one student.
    ///
    /// Returns `Validation` listing every failed check, or `Conflict` if the
    /// email is taken.
    fn create(&self, draft: StudentDraft) -> StoreResult<Student>;

    /// Import a JSON array of student objects, entry by entry.
    ///
    /// Returns `InvalidArgument` if `payload` is not an array of objects.
    /// Otherwise failing entries are reported by index and skipped; the
    /// rest are inserted in order.
    fn create_bulk(&self, payload: &serde_json::Value) -> StoreResult<BulkReport>;

    /// Apply a partial update, all-or-nothing.
    fn update(&self, id: StudentId, patch: &StudentPatch) -> StoreResult<Student>;

    /// Replace only the grade.
    ///
    /// Returns `NotFound` before checking the grade, then `InvalidArgument`
    /// if the grade is absent or not a valid letter.
    fn update_grade(&self, id: StudentId, grade: Option<&str>) -> StoreResult<Student>;

    /// Remove a student and return it.
    fn delete(&self, id: StudentId) -> StoreResult<Student>;
}
