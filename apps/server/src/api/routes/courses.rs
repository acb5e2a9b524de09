use crate::api::handlers::courses;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Course resource routes, served with and without the trailing slash.
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/courses/",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/courses/:id",
            get(courses::get_course)
                .patch(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/courses/:id/",
            get(courses::get_course)
                .patch(courses::update_course)
                .delete(courses::delete_course),
        )
}
