//! 요청 추적 ID
//!
//! `X-Request-Id` 헤더가 있으면 그 값을, 없으면 UUID v4를 사용합니다.
//! 한 번 정해진 ID는 요청 Extensions에 저장되어 같은 요청 안에서 재사용됩니다.

use std::fmt;
use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// 요청의 추적 ID를 반환합니다. 처음 호출될 때 생성하여 Extensions에 저장합니다.
    pub fn of(req: &HttpRequest) -> Self {
        if let Some(existing) = req.extensions().get::<RequestId>() {
            return existing.clone();
        }

        let request_id = req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| RequestId(value.to_string()))
            .unwrap_or_else(RequestId::generate);

        req.extensions_mut().insert(request_id.clone());
        request_id
    }

    pub fn generate() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        RequestId(value.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for RequestId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(RequestId::of(req)))
    }
}
