//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 HS256 서명 검증
//! - 사용자 정보를 request extension에 저장
//! - 역할 검사 (`required_with_role`, `required_with_any_role`)
//! - 실패 시 401/403 공통 응답 봉투 반환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! cfg.service(
//!     web::scope("/api/v1/dict")
//!         .wrap(AuthMiddleware::required_with_role(&RoleConfig::admin_role()))
//!         .service(handlers::dict_data::list_page)
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
