//! Course service - business logic for course operations

use crate::{
    db::CourseStore,
    models::{Course, CourseFilter, CoursePatch, CoursePayload, ListCoursesQuery, NewCourse},
    Error, Result,
};
use std::sync::Arc;

pub struct CourseService {
    store: Arc<dyn CourseStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// List courses (GET /courses/)
    ///
    /// - `id` and `name` are exact-match filters, combined with AND
    /// - Empty filter values are ignored
    /// - Results are in insertion order
    pub async fn list_courses(&self, query: ListCoursesQuery) -> Result<Vec<Course>> {
        let filter = CourseFilter::from_query(query)?;
        let courses = self.store.list(&filter).await?;

        tracing::debug!(
            filter_id = ?filter.id,
            filter_name = ?filter.name,
            result_count = courses.len(),
            "Listed courses"
        );

        Ok(courses)
    }

    /// Read a course (GET /courses/{id}/)
    pub async fn get_course(&self, raw_id: &str) -> Result<Course> {
        let id = parse_course_id(raw_id)?;

        self.store
            .read(id)
            .await?
            .ok_or_else(|| Error::not_found(raw_id))
    }

    /// Create a course (POST /courses/)
    ///
    /// - `name` is required, trimmed, non-blank
    /// - Any client-supplied `id` is ignored; the store assigns one
    pub async fn create_course(&self, payload: CoursePayload) -> Result<Course> {
        let new_course = NewCourse::from_payload(payload)?;
        let created = self.store.create(new_course).await?;

        tracing::info!(course_id = created.id, name = %created.name, "Course created");

        Ok(created)
    }

    /// Partially update a course (PATCH /courses/{id}/)
    ///
    /// Only supplied fields change. A body with no recognised fields is a no-op
    /// that still returns the current representation. An unknown id is 404 even
    /// when the body is also invalid.
    pub async fn update_course(&self, raw_id: &str, payload: CoursePayload) -> Result<Course> {
        let id = parse_course_id(raw_id)?;
        let current = self
            .store
            .read(id)
            .await?
            .ok_or_else(|| Error::not_found(raw_id))?;

        let patch = CoursePatch::from_payload(payload)?;
        if patch.is_empty() {
            return Ok(current);
        }

        let updated = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| Error::not_found(raw_id))?;

        tracing::info!(course_id = updated.id, name = %updated.name, "Course updated");

        Ok(updated)
    }

    /// Delete a course (DELETE /courses/{id}/)
    pub async fn delete_course(&self, raw_id: &str) -> Result<()> {
        let id = parse_course_id(raw_id)?;

        if !self.store.delete(id).await? {
            return Err(Error::not_found(raw_id));
        }

        tracing::info!(course_id = id, "Course deleted");

        Ok(())
    }

    pub async fn count_courses(&self) -> Result<i64> {
        self.store.count().await
    }
}

/// A path segment that is not an integer cannot name a stored course.
fn parse_course_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| Error::not_found(raw))
}
