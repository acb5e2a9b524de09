//! HTTP handlers

pub mod courses;
pub mod health;
