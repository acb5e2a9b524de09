//! In-process `CourseStore` implementation.
//!
//! Keeps every course in a `BTreeMap` keyed by id. Ids are allocated from a
//! monotonic counter, so map order is insertion order.
//!
//! Primary use-cases: integration tests and running the server without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::{
    db::traits::CourseStore,
    models::{Course, CourseFilter, CoursePatch, NewCourse},
    Result,
};

pub struct InMemoryCourseStore {
    courses: RwLock<BTreeMap<i64, Course>>,
    next_id: AtomicI64,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryCourseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn create(&self, course: NewCourse) -> Result<Course> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let course = Course {
            id,
            name: course.name,
        };

        let mut courses = self.courses.write().await;
        courses.insert(id, course.clone());
        Ok(course)
    }

    async fn read(&self, id: i64) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(&id).cloned())
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let courses = self.courses.read().await;

        // An id filter can be answered with a point lookup.
        if let Some(id) = filter.id {
            return Ok(courses
                .get(&id)
                .filter(|course| filter.matches(course))
                .cloned()
                .into_iter()
                .collect());
        }

        Ok(courses
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Option<Course>> {
        let mut courses = self.courses.write().await;
        let Some(course) = courses.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(course);
        Ok(Some(course.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut courses = self.courses.write().await;
        Ok(courses.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64> {
        let courses = self.courses.read().await;
        Ok(courses.len() as i64)
    }
}
