//! 공통 응답 봉투
//!
//! 모든 API 응답은 같은 JSON 구조를 사용합니다.
//!
//! ```json
//! { "requestId": "5b0c...", "code": 200, "data": { ... }, "message": "조회 성공" }
//! { "requestId": "5b0c...", "code": 500, "message": "조회에 실패했습니다" }
//! ```
//!
//! 페이지 조회의 `data`는 [`PageData`] 형식입니다.
//!
//! ```json
//! { "list": [ ... ], "count": 42, "pageIndex": 1, "pageSize": 10 }
//! ```

use std::fmt;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use crate::domain::models::request_id::RequestId;

/// 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 성공 응답 (`code: 200`)
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            request_id: None,
            code: StatusCode::OK.as_u16(),
            data: Some(data),
            message: message.into(),
        }
    }

    pub fn with_request_id(mut self, request_id: &RequestId) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    /// HTTP 200 응답으로 변환합니다.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

impl ApiResponse<()> {
    /// 실패 응답 (`data` 없음)
    pub fn fail(code: u16, message: impl Into<String>) -> Self {
        Self {
            request_id: None,
            code,
            data: None,
            message: message.into(),
        }
    }
}

impl<T: Serialize> ApiResponse<PageData<T>> {
    /// 페이지 조회 성공 응답
    pub fn page_ok(list: Vec<T>, count: u64, page_index: u64, page_size: u64, message: impl Into<String>) -> Self {
        Self::ok(
            PageData {
                list,
                count,
                page_index,
                page_size,
            },
            message,
        )
    }
}

/// 페이지 조회 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub list: Vec<T>,
    /// 조건에 맞는 전체 레코드 수
    pub count: u64,
    pub page_index: u64,
    pub page_size: u64,
}

/// 컨트롤러 실패 응답
///
/// 바인딩 실패든 저장소 실패든 항상 HTTP 500과 작업별 메시지로 응답합니다.
/// 로그는 이 값을 만들기 전에 호출하는 쪽에서 남깁니다.
#[derive(Debug)]
pub struct ApiError {
    request_id: Option<String>,
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            request_id: None,
            message: message.into(),
        }
    }

    pub fn with_request_id(mut self, request_id: &RequestId) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ApiResponse::<()>::fail(self.status_code().as_u16(), self.message.clone());
        body.request_id = self.request_id.clone();

        HttpResponse::build(self.status_code()).json(body)
    }
}
