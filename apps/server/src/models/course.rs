//! Course record and request payloads

use crate::{error::FieldErrors, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Longest accepted course name, in characters.
pub const MAX_NAME_LENGTH: u64 = 255;

const REQUIRED_MESSAGE: &str = "This field is required.";
const NULL_MESSAGE: &str = "This field may not be null.";

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Raw create/update body as sent by the client.
///
/// Unknown fields (including `id`, which is store-assigned) are ignored. `name` is
/// `None` when absent and `Some(None)` when sent as an explicit `null`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CoursePayload {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
}

impl CoursePayload {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
        }
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Validated input for creating a course.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewCourse {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LENGTH))]
    pub name: String,
}

impl NewCourse {
    pub fn from_payload(payload: CoursePayload) -> Result<Self> {
        let name = match payload.name {
            None => return Err(Error::field("name", REQUIRED_MESSAGE)),
            Some(None) => return Err(Error::field("name", NULL_MESSAGE)),
            Some(Some(name)) => name,
        };

        let course = Self {
            name: name.trim().to_string(),
        };
        course.validate().map_err(into_field_errors)?;
        Ok(course)
    }
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct CoursePatch {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LENGTH))]
    pub name: Option<String>,
}

impl CoursePatch {
    pub fn from_payload(payload: CoursePayload) -> Result<Self> {
        let name = match payload.name {
            None => None,
            Some(None) => return Err(Error::field("name", NULL_MESSAGE)),
            Some(Some(name)) => Some(name.trim().to_string()),
        };
        let patch = Self { name };
        patch.validate().map_err(into_field_errors)?;
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Merge supplied fields into `course`.
    pub fn apply(self, course: &mut Course) {
        if let Some(name) = self.name {
            course.name = name;
        }
    }
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("This field may not be blank."));
        return Err(error);
    }
    Ok(())
}

fn into_field_errors(errors: ValidationErrors) -> Error {
    let mut fields = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| match (&e.message, e.code.as_ref()) {
                (Some(message), _) => message.to_string(),
                (None, "length") => {
                    format!("Ensure this field has no more than {MAX_NAME_LENGTH} characters.")
                }
                (None, code) => code.to_string(),
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    Error::Validation(fields)
}
