//! Business logic layer
//!
//! Services apply validation and not-found rules on top of the record store.

pub mod courses;

pub use courses::CourseService;
