//! Domain models

pub mod course;
pub mod filter;

pub use course::{Course, CoursePatch, CoursePayload, NewCourse, MAX_NAME_LENGTH};
pub use filter::{CourseFilter, ListCoursesQuery};
