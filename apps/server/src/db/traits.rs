//! Record store abstraction

use crate::{
    models::{Course, CourseFilter, CoursePatch, NewCourse},
    Result,
};
use async_trait::async_trait;

/// Durable mapping from course id to course record.
///
/// Every method is atomic with respect to a single record. Ids are assigned by the
/// store, increase monotonically and are never reused.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persist a new course and return it with its assigned id.
    async fn create(&self, course: NewCourse) -> Result<Course>;

    /// Fetch a course by id.
    async fn read(&self, id: i64) -> Result<Option<Course>>;

    /// List courses matching `filter`, in insertion order.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    /// Merge `patch` into an existing course. Returns `None` if the id is unknown.
    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Option<Course>>;

    /// Hard-delete a course. Returns `false` if the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Number of stored courses.
    async fn count(&self) -> Result<i64>;
}
