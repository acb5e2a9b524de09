//! Request body extraction
//!
//! `Payload<T>` accepts either a JSON or a url-encoded form body and reports every
//! failure through the crate `Error`, so clients always get a JSON error body.

use crate::Error;
use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

pub struct Payload<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
    Unspecified,
    Other(String),
}

fn body_format(content_type: Option<&str>) -> BodyFormat {
    let Some(content_type) = content_type else {
        return BodyFormat::Unspecified;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "" => BodyFormat::Unspecified,
        "application/json" => BodyFormat::Json,
        "application/x-www-form-urlencoded" => BodyFormat::Form,
        m if m.starts_with("application/") && m.ends_with("+json") => BodyFormat::Json,
        other => BodyFormat::Other(other.to_string()),
    }
}

fn rejection_error(status: StatusCode, body_text: String) -> Error {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(body_text)
    } else {
        Error::BadRequest(body_text)
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = body_format(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        match format {
            BodyFormat::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|r| rejection_error(r.status(), r.body_text()))?;
                Ok(Payload(value))
            }
            BodyFormat::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|r| rejection_error(r.status(), r.body_text()))?;
                Ok(Payload(value))
            }
            BodyFormat::Unspecified => {
                // Only an empty body may omit its content type; it reads as `{}`.
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|r: BytesRejection| rejection_error(r.status(), r.body_text()))?;
                if !bytes.is_empty() {
                    return Err(Error::UnsupportedMediaType(
                        "Request body requires a Content-Type header".to_string(),
                    ));
                }
                let value = serde_json::from_slice(b"{}")
                    .map_err(|e| Error::BadRequest(e.to_string()))?;
                Ok(Payload(value))
            }
            BodyFormat::Other(mime) => Err(Error::UnsupportedMediaType(format!(
                "Unsupported media type \"{mime}\" in request."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_json_variants() {
        assert_eq!(body_format(Some("application/json")), BodyFormat::Json);
        assert_eq!(
            body_format(Some("Application/JSON; charset=utf-8")),
            BodyFormat::Json
        );
        assert_eq!(
            body_format(Some("application/merge-patch+json")),
            BodyFormat::Json
        );
    }

    #[test]
    fn recognises_form_bodies() {
        assert_eq!(
            body_format(Some("application/x-www-form-urlencoded")),
            BodyFormat::Form
        );
    }

    #[test]
    fn missing_content_type_is_unspecified() {
        assert_eq!(body_format(None), BodyFormat::Unspecified);
        assert_eq!(body_format(Some("")), BodyFormat::Unspecified);
    }

    #[test]
    fn other_types_are_reported() {
        assert_eq!(
            body_format(Some("text/plain")),
            BodyFormat::Other("text/plain".to_string())
        );
    }
}
