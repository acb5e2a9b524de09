//! Course API server library
//!
//! A REST CRUD service for `Course` records: axum handlers over a pluggable
//! `CourseStore` (Postgres via sqlx, or in-memory).

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use error::{Error, Result};
