pub mod recipes;

use crate::store::StoreError;
use crate::validation::SchemaErrors;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Body of every status and error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No input data provided")]
    NoInputData,

    #[error("BAD REQUEST !! Syntax,Invalid Request Message Framing,Or Deceptive Request Routing")]
    BadRequest,

    #[error("URL not found !!")]
    UrlNotFound,

    #[error("Method Not Allowed !!")]
    MethodNotAllowed,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("required fields failed schema validation")]
    Schema(SchemaErrors),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NoInputData | ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::UrlNotFound | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Schema(_) | ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self {
            ApiError::Schema(errors) => (status, Json(errors)).into_response(),
            ApiError::Store(e) => {
                tracing::error!("Store operation failed: {}", e);
                (status, Json(MessageResponse::new("Internal Server Error"))).into_response()
            }
            other => {
                tracing::debug!(status = %status, "rejecting request: {}", other);
                (status, Json(MessageResponse::new(other.to_string()))).into_response()
            }
        }
    }
}

/// Integer id taken from the `{id}` path segment.
///
/// Only a plain run of ASCII digits that fits a row id matches. Anything else
/// (signs, other characters, overflow) means the route does not exist, so it
/// is rejected as an unknown URL rather than a bad request.
pub struct RecipeId(pub i64);

fn parse_recipe_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::UrlNotFound)?;
        parse_recipe_id(&segment)
            .map(RecipeId)
            .ok_or(ApiError::UrlNotFound)
    }
}

/// A request body that decoded to a non-empty JSON object.
///
/// The body is only read as JSON when the request declares a JSON content
/// type; without one there is no input. A declared JSON body that is empty or
/// unparseable is a bad request, as is a truthy non-object value. "Falsy"
/// JSON values (`null`, `{}`, `[]`, `""`, `0`, `false`) count as no input.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest)?;

        if !declared_json {
            return Err(ApiError::NoInputData);
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|_| ApiError::BadRequest)?;
        if is_falsy(&value) {
            return Err(ApiError::NoInputData);
        }

        match value {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(ApiError::BadRequest),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

async fn url_not_found() -> ApiError {
    ApiError::UrlNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "recipe-server", description = "CRUD API for recipes"),
        components(schemas(MessageResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();
    spec.merge(recipes::ApiDoc::openapi());
    spec
}

/// Builds the application router around an explicitly constructed store.
pub fn router(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi());

    Router::new()
        .merge(recipes::router())
        .merge(swagger_ui)
        .fallback(url_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers("application/merge-patch+json")));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn test_falsy_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_falsy(&value), "{} should be falsy", value);
        }
        for value in [json!(true), json!(1), json!("x"), json!([0]), json!({"a": 1})] {
            assert!(!is_falsy(&value), "{} should not be falsy", value);
        }
    }

    #[test]
    fn test_recipe_id_segments() {
        assert_eq!(parse_recipe_id("7"), Some(7));
        assert_eq!(parse_recipe_id("2147483648"), Some(2_147_483_648));
        assert_eq!(parse_recipe_id("9223372036854775807"), Some(i64::MAX));
        for segment in ["", "-1", "+5", "1.5", "abc", " 1", "9223372036854775808"] {
            assert_eq!(parse_recipe_id(segment), None, "{:?} should not match", segment);
        }
    }

    #[tokio::test]
    async fn test_store_error_hides_cause() {
        let error = ApiError::Store(StoreError::Query(diesel::result::Error::NotFound));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"message": "Internal Server Error"}));
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (ApiError::NoInputData, StatusCode::BAD_REQUEST),
            (ApiError::BadRequest, StatusCode::BAD_REQUEST),
            (ApiError::UrlNotFound, StatusCode::NOT_FOUND),
            (ApiError::NotFound("recipe not found"), StatusCode::NOT_FOUND),
            (ApiError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                ApiError::Validation("dish cannot be empty".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Schema(SchemaErrors::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Store(StoreError::Query(diesel::result::Error::RollbackTransaction)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
