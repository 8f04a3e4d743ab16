//! JWT 인증 미들웨어
//!
//! 스코프 단위로 감싸서 Bearer 토큰을 검증합니다. 판정은 `auth_inner::decide`가 내리고,
//! 거부 응답은 `{requestId, code, message}` 봉투로 나갑니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Clone)]
pub struct AuthMiddleware {
    mode: AuthMode,
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    fn with(mode: AuthMode, required_role: Option<RequiredRole>) -> Self {
        Self { mode, required_role }
    }

    /// 유효한 토큰만 요구합니다. 역할은 보지 않습니다.
    pub fn required() -> Self {
        Self::with(AuthMode::Required, None)
    }

    /// 토큰이 없어도 통과시키고, 유효한 토큰이면 사용자를 채워 둡니다.
    pub fn optional() -> Self {
        Self::with(AuthMode::Optional, None)
    }

    /// 유효한 토큰과 `role` 역할을 요구합니다. 역할이 없으면 403입니다.
    pub fn required_with_role(role: &str) -> Self {
        Self::with(AuthMode::Required, Some(RequiredRole::Single(role.to_string())))
    }

    pub fn required_with_any_role(roles: &[&str]) -> Self {
        let roles = roles.iter().map(|role| role.to_string()).collect();
        Self::with(AuthMode::Required, Some(RequiredRole::Any(roles)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}
