//! 인증 서비스 모듈
//!
//! JWT 액세스 토큰의 생성과 검증을 담당합니다.
//! 토큰 발급 API는 제공하지 않으며, 외부 인증 서버가 같은 비밀 키로 서명한 토큰을 검증합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
