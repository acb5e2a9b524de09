//! PostgreSQL-backed `CourseStore` implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::{
    db::traits::CourseStore,
    models::{Course, CourseFilter, CoursePatch, NewCourse},
    Error, Result,
};

/// PostgreSQL-backed CourseStore implementation
#[derive(Clone)]
pub struct PostgresCourseStore {
    pub(crate) pool: PgPool,
}

impl PostgresCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    fn course_from_row(row: PgRow) -> Course {
        Course {
            id: row.get("id"),
            name: row.get("name"),
        }
    }
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn create(&self, course: NewCourse) -> Result<Course> {
        let row = sqlx::query(
            "INSERT INTO courses (name)
             VALUES ($1)
             RETURNING id, name",
        )
        .bind(&course.name)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(Self::course_from_row(row))
    }

    async fn read(&self, id: i64) -> Result<Option<Course>> {
        let row = sqlx::query(
            "SELECT id, name
             FROM courses
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(Self::course_from_row))
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        // Ids come from a sequence, so ordering by id is insertion order.
        let rows = sqlx::query(
            "SELECT id, name
             FROM courses
             WHERE ($1::BIGINT IS NULL OR id = $1)
               AND ($2::TEXT IS NULL OR name = $2)
             ORDER BY id ASC",
        )
        .bind(filter.id)
        .bind(filter.name.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(Self::course_from_row).collect())
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Option<Course>> {
        let row = sqlx::query(
            "UPDATE courses
             SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING id, name",
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(Self::course_from_row))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(count)
    }
}
