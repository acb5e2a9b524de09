//! Persistence layer
//!
//! `CourseStore` is the seam between the service layer and storage. Postgres is the
//! durable backend; the in-memory store serves tests and database-less runs.

pub mod memory;
pub mod store;
pub mod traits;

pub use memory::InMemoryCourseStore;
pub use store::PostgresCourseStore;
pub use traits::CourseStore;
