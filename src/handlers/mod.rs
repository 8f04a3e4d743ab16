//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 바인딩, 감사 필드 기록, 응답 봉투   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 바인딩 실패 처리
//!
//! actix-web 기본 추출기는 바인딩 실패 시 400을 반환합니다.
//! 이 서비스는 모든 처리된 실패를 HTTP 500 응답 봉투로 통일하므로
//! [`json_config`], [`query_config`], [`path_config`]를 스코프에 등록하여
//! 추출기 오류 메시지를 그대로 담은 [`ApiError`]로 바꿉니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1/dict/data")
//!     .app_data(handlers::json_config())
//!     .app_data(handlers::query_config())
//!     .app_data(handlers::path_config())
//!     .service(handlers::dict_data::insert)
//! ```

use std::fmt;
use actix_web::{error, web, HttpRequest};
use crate::domain::dto::common::ApiError;
use crate::domain::models::request_id::RequestId;

pub mod dict_data;

fn binding_error(req: &HttpRequest, source: &str, err: impl fmt::Display) -> actix_web::Error {
    let request_id = RequestId::of(req);
    log::error!("[{}] {} 바인딩 실패 ({} {}): {}", request_id, source, req.method(), req.path(), err);

    ApiError::new(err.to_string())
        .with_request_id(&request_id)
        .into()
}

/// JSON 본문 바인딩 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: error::JsonPayloadError, req| binding_error(req, "JSON 본문", err))
}

/// 쿼리 문자열 바인딩 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: error::QueryPayloadError, req| binding_error(req, "쿼리", err))
}

/// 경로 파라미터 바인딩 설정
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: error::PathError, req| binding_error(req, "경로", err))
}
