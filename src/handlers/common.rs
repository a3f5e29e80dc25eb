use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::{Page, PageRequest};
use crate::errors::ServiceError;

/// `{ success: true, data }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ success: true, message }`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// One page of results plus paging totals
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            success: true,
            data: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::new(data))).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::new(data))).into_response()
}

pub fn message_response(message: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            success: true,
            message: message.into(),
        }),
    )
        .into_response()
}

/// Pagination parameters for list operations.
///
/// Kept as raw strings so junk values fall back to defaults instead of
/// failing the request.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn to_request(&self, config: &AppConfig) -> PageRequest {
        PageRequest::from_query(
            self.page.as_deref(),
            self.limit.as_deref(),
            config.default_page_size,
        )
        .with_max_limit(config.max_page_size)
    }
}

/// Parses a path id. Ids that are not UUIDs cannot name a record, so they
/// are reported the same way as unknown ids.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::NotFound("Warehouse not found".to_string()))
}

/// Unwraps a JSON body, turning extractor rejections into validation errors.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ServiceError::invalid_field("body", rejection.body_text()))
}

/// Unwraps query-string parameters, turning extractor rejections into
/// validation errors.
pub fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ServiceError> {
    params
        .map(|Query(value)| value)
        .map_err(|rejection| ServiceError::invalid_field("query", rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn malformed_ids_are_not_found() {
        assert_matches!(parse_id("not-a-uuid"), Err(ServiceError::NotFound(_)));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn pagination_params_use_config_bounds() {
        let config = AppConfig::new("sqlite::memory:".into(), "127.0.0.1".into(), 0, "test".into());
        let params = PaginationParams {
            page: Some("x".into()),
            limit: Some("1000".into()),
        };
        let req = params.to_request(&config);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 100);
        assert_eq!(PaginationParams::default().to_request(&config).limit(), 7);
    }

    #[test]
    fn paginated_body_uses_total_pages_key() {
        let body = PaginatedResponse::from(Page::new(vec![1, 2], 9, PageRequest::new(1, 2)));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["totalPages"], 5);
        assert_eq!(json["success"], true);
    }
}
