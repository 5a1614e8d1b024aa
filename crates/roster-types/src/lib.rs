//! Foundation types for the Roster student registry.
//!
//! Every other Roster crate depends on `roster-types`.
//!
//! # Key Types
//!
//! - [`Student`] — The single record type held by the registry
//! - [`StudentId`] — Store-assigned numeric identifier
//! - [`Grade`] — Letter grade, always upper-case (`A`–`D`, `F`)

pub mod error;
pub mod grade;
pub mod student;

pub use error::TypeError;
pub use grade::Grade;
pub use student::{Student, StudentId};
