//! Course list filtering

use super::Course;
use crate::{Error, Result};
use serde::Deserialize;

/// Query string accepted by `GET /courses/`. Unknown parameters are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListCoursesQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Exact-match filters, applied conjunctively.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    /// Parse a raw query. Empty values count as "not supplied".
    pub fn from_query(query: ListCoursesQuery) -> Result<Self> {
        let id = match query.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| Error::field("id", "Enter a number."))?,
            ),
        };

        let name = query.name.filter(|name| !name.is_empty());

        Ok(Self { id, name })
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.id.map_or(true, |id| course.id == id)
            && self.name.as_deref().map_or(true, |name| course.name == name)
    }
}
