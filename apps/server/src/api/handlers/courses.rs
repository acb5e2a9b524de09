//! Course resource handlers

use crate::api::extract::Payload;
use crate::models::{CoursePayload, ListCoursesQuery};
use crate::{state::AppState, Error, Result};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /api/v1/courses/
pub async fn list_courses(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query.map_err(|r| Error::BadRequest(r.body_text()))?;
    let courses = state.course_service.list_courses(query).await?;
    Ok((StatusCode::OK, Json(courses)).into_response())
}

/// POST /api/v1/courses/
pub async fn create_course(
    State(state): State<AppState>,
    Payload(payload): Payload<CoursePayload>,
) -> Result<Response> {
    let course = state.course_service.create_course(payload).await?;
    Ok((StatusCode::CREATED, Json(course)).into_response())
}

/// GET /api/v1/courses/:id/
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let course = state.course_service.get_course(&id).await?;
    Ok((StatusCode::OK, Json(course)).into_response())
}

/// PATCH /api/v1/courses/:id/
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<CoursePayload>,
) -> Result<Response> {
    let course = state.course_service.update_course(&id, payload).await?;
    Ok((StatusCode::OK, Json(course)).into_response())
}

/// DELETE /api/v1/courses/:id/
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    state.course_service.delete_course(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
