//! AuthMiddleware의 요청 단위 처리
//!
//! 토큰 검증 결과와 인증 모드, 필요 역할로 [`Decision`]을 내리고
//! 통과한 사용자는 Request Extensions에 넣어 핸들러가 추출할 수 있게 합니다.
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::dto::common::ApiResponse;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::domain::models::request_id::RequestId;
use crate::services::auth::TokenService;

const FORBIDDEN_MESSAGE: &str = "접근 권한이 부족합니다";

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

/// 인증 판정 결과
#[derive(Debug)]
pub(crate) enum Decision {
    /// 다음 서비스로 진행. 사용자가 있으면 Extensions에 저장합니다.
    Proceed(Option<AuthenticatedUser>),
    Reject(StatusCode, String),
}

pub(crate) fn decide(
    mode: &AuthMode,
    required_role: Option<&RequiredRole>,
    authenticated: Result<AuthenticatedUser, AppError>,
) -> Decision {
    let satisfied = |user: &AuthenticatedUser| {
        required_role.is_none_or(|required| required.is_satisfied(&user.roles))
    };

    match (mode, authenticated) {
        (AuthMode::Required, Err(err)) => Decision::Reject(StatusCode::UNAUTHORIZED, err.to_string()),
        (AuthMode::Required, Ok(user)) if !satisfied(&user) => {
            log::warn!("권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}", user.user_id, user.roles, required_role);
            Decision::Reject(StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE.to_string())
        },
        (AuthMode::Required, Ok(user)) => Decision::Proceed(Some(user)),
        // 선택적 인증은 역할이 맞지 않으면 익명으로 진행
        (AuthMode::Optional, Ok(user)) if satisfied(&user) => Decision::Proceed(Some(user)),
        (AuthMode::Optional, _) => Decision::Proceed(None),
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let decision = decide(
            &self.mode,
            self.required_role.as_ref(),
            authenticate(&req, &TokenService::instance()),
        );

        Box::pin(async move {
            match decision {
                Decision::Reject(status, message) => {
                    log::warn!("인증 거부 {} {} {}: {}", status.as_u16(), req.method(), req.path(), message);
                    Ok(reject(req, status, message))
                },
                Decision::Proceed(user) => {
                    if let Some(user) = user {
                        log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    }
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                },
            }
        })
    }
}

/// 거부 응답도 공통 응답 봉투로 만듭니다.
fn reject<B>(req: ServiceRequest, status: StatusCode, message: String) -> ServiceResponse<EitherBody<B>> {
    let mut body = ApiResponse::<()>::fail(status.as_u16(), message);
    body.request_id = Some(RequestId::of(req.request()).to_string());

    let (req, _) = req.into_parts();
    ServiceResponse::new(req, HttpResponse::build(status).json(body)).map_into_right_body()
}

/// `Authorization: Bearer <jwt>` 헤더를 검증하여 사용자를 만듭니다.
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let header = req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let claims = token_service.verify_token(token_service.extract_bearer_token(header)?)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        roles: claims.roles,
    })
}
