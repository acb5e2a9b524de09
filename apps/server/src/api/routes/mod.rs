pub mod courses;

pub use courses::course_routes;
