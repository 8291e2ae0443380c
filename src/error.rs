use axum::{
    extract::path::ErrorKind,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::store::StoreError;

/// One offending input location, e.g. `{"loc": ["body", "title"], "msg": "missing field"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound("Not Found".into()),
            StoreError::Database(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let inner = err.inner();
        let msg = serde_message(inner);

        match inner.classify() {
            serde_json::error::Category::Data => {
                let mut loc = vec!["body".to_string()];
                for segment in err.path().iter() {
                    use serde_path_to_error::Segment;
                    match segment {
                        Segment::Map { key } => loc.push(key.clone()),
                        Segment::Seq { index } => loc.push(index.to_string()),
                        Segment::Enum { variant } => loc.push(variant.clone()),
                        _ => {}
                    }
                }

                // serde reports a missing field on the enclosing struct, not on the field
                let msg = match msg
                    .strip_prefix("missing field `")
                    .and_then(|rest| rest.strip_suffix('`'))
                {
                    Some(field) => {
                        loc.push(field.to_string());
                        "missing field".to_string()
                    }
                    None => msg,
                };

                AppError::Validation(vec![FieldError::new(loc, msg)])
            }
            _ => AppError::BadRequest(format!("Failed to parse the request body as JSON: {}", msg)),
        }
    }
}

/// The serde message without serde_json's ` at line L column C` suffix.
fn serde_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    if err.line() == 0 {
        return full;
    }
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match full.strip_suffix(suffix.as_str()) {
        Some(msg) => msg.to_string(),
        None => full,
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let mut loc = vec!["path".to_string()];
        if let PathRejection::FailedToDeserializePathParams(inner) = &rejection {
            if let ErrorKind::ParseErrorAtKey { key, .. } = inner.kind() {
                loc.push(key.clone());
            }
        }
        AppError::Validation(vec![FieldError::new(loc, rejection.body_text())])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, json!(errors)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Value::String(msg)),
            AppError::UnsupportedMediaType(msg) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, Value::String(msg))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Value::String(msg)),
            AppError::Unavailable(msg) => {
                tracing::warn!("service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Value::String("Service Unavailable".to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String("Internal Server Error".to_string()),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schemas::TodoInput;
    use crate::domain::TodoId;

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn decode_error(body: &str) -> AppError {
        let de = &mut serde_json::Deserializer::from_str(body);
        let err = serde_path_to_error::deserialize::<_, TodoInput>(de).unwrap_err();
        err.into()
    }

    #[tokio::test]
    async fn test_store_not_found_maps_to_404() {
        let err: AppError = StoreError::NotFound(TodoId::new(1)).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
    }

    #[tokio::test]
    async fn test_internal_hides_message() {
        let err: AppError = StoreError::Database(sqlx::Error::PoolClosed).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Internal Server Error"})
        );
    }

    #[tokio::test]
    async fn test_unavailable_hides_message() {
        let err = AppError::Unavailable("attempted to acquire a connection on a closed pool".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Service Unavailable"})
        );
    }

    #[tokio::test]
    async fn test_validation_renders_field_list() {
        let err = AppError::Validation(vec![FieldError::new(
            vec!["body".into(), "title".into()],
            "missing field",
        )]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"detail": [{"loc": ["body", "title"], "msg": "missing field"}]})
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        match decode_error(r#"{"status": "pending"}"#) {
            AppError::Validation(errors) => assert_eq!(
                errors,
                vec![FieldError::new(
                    vec!["body".into(), "title".into()],
                    "missing field"
                )]
            ),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_names_the_field() {
        match decode_error(r#"{"title": 1, "status": "pending"}"#) {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].loc, vec!["body", "title"]);
                assert!(errors[0].msg.starts_with("invalid type: integer `1`"));
                assert!(!errors[0].msg.contains("line"));
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_error_is_bad_request() {
        assert!(matches!(
            decode_error(r#"{"title": "#),
            AppError::BadRequest(_)
        ));
    }
}
