//! 인증된 사용자 정보와 추출기
//!
//! `AuthMiddleware`가 토큰 검증 후 Request Extensions에 넣어 두고,
//! 핸들러는 인자로 `AuthenticatedUser`를 선언하여 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[post("/dict/data")]
//! pub async fn insert(user: AuthenticatedUser, ...) -> Result<HttpResponse, ApiError> {
//!     control.set_create_by(&user.user_id);
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// JWT `sub` 클레임
    pub user_id: String,

    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}
