//! Record store for the Roster student registry.
//!
//! The store is the sole owner of the student collection. Every read and
//! every mutation goes through the [`StudentStore`] trait; callers receive
//! owned copies and never a reference into the collection.
//!
//! # Operations
//!
//! - Reads: [`list`](StudentStore::list), [`get`](StudentStore::get),
//!   [`search`](StudentStore::search), [`by_grade`](StudentStore::by_grade),
//!   [`stats`](StudentStore::stats)
//! - Writes: [`create`](StudentStore::create),
//!   [`create_bulk`](StudentStore::create_bulk),
//!   [`update`](StudentStore::update),
//!   [`update_grade`](StudentStore::update_grade),
//!   [`delete`](StudentStore::delete)
//!
//! # Storage Backends
//!
//! - [`InMemoryStudentStore`] -- `RwLock<Vec<Student>>`, insertion-ordered
//!
//! # Design Rules
//!
//! 1. New ids are `max(existing) + 1`, or 1 for an empty collection, computed
//!    under the same write lock as the insert that consumes them.
//! 2. Email uniqueness is case-insensitive and checked on every create and
//!    every email-changing update.
//! 3. A mutation is validated in full before the collection is touched;
//!    readers observe either the state before or after a write.
//! 4. `enrollmentDate` is stamped once at creation.

pub mod clock;
pub mod error;
pub mod memory;
pub mod report;
pub mod request;
pub mod seed;
pub mod traits;
pub mod validation;

// Re-export primary types at crate root for ergonomic imports.
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStudentStore;
pub use report::{BulkError, BulkReport, Listing, StudentStats};
pub use request::{StudentDraft, StudentFilter, StudentPatch};
pub use seed::seed_students;
pub use traits::StudentStore;
pub use validation::{FieldViolation, Violations};
