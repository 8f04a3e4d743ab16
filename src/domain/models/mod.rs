//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 저장되는 객체 (`DictData`)
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/          ← AuthenticatedUser, AuthMode, RequiredRole
//! ├── token/         ← TokenClaims
//! └── request_id.rs  ← 요청 추적 ID
//! ```

pub mod auth;
pub mod token;
pub mod request_id;
