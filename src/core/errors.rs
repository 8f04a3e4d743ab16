//! 애플리케이션 에러 타입
//!
//! 저장소, 인증, 입력 해석 실패를 [`AppError`] 하나로 모읍니다.
//! 서비스와 리포지토리는 [`AppResult`]를 반환하고, 핸들러가 이를
//! 고정 메시지의 [`ApiError`](crate::domain::dto::common::ApiError)로 바꿔 응답합니다.
//!
//! `AppError`를 그대로 응답으로 돌려보낼 때는 상태 코드가 변형에 따라 달라집니다.
//!
//! | 변형 | 상태 |
//! |------|------|
//! | `ValidationError` | 400 |
//! | `AuthenticationError` | 401 |
//! | `NotFound` | 404 |
//! | `DatabaseError`, `InternalError` | 500 |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use crate::domain::dto::common::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패 (연결, 쿼리, 유니크 인덱스 위반)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 본문이나 파라미터를 해석할 수 없음
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 존재하지 않거나 이미 삭제된 딕셔너리 코드
    #[error("Not found: {0}")]
    NotFound(String),

    /// 토큰 누락, 형식 오류, 만료, 서명 불일치
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::fail(status.as_u16(), self.to_string()))
    }
}

/// 임의의 `Result`를 메시지를 덧붙인 `AppError::InternalError`로 바꿉니다.
///
/// ```rust,ignore
/// let seq = counter.context("딕셔너리 코드 시퀀스 발급 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> ErrorContext<T> for Result<T, E> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_variant() {
        let cases = [
            (AppError::ValidationError("dictType".into()), StatusCode::BAD_REQUEST),
            (AppError::AuthenticationError("expired".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("42".into()), StatusCode::NOT_FOUND),
            (AppError::DatabaseError("reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{}", error);
        }
    }

    #[test]
    fn test_context_keeps_cause() {
        let result: Result<(), &str> = Err("write conflict");

        match result.context("시퀀스 발급 실패") {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "시퀀스 발급 실패: write conflict"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
