//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `#[service]`(singleton_macro) 또는 같은 형태의 `OnceCell` 싱글톤으로 관리되며 `inventory`로 `ServiceLocator`에 등록됩니다.
//!
//! - `dict_data` - 딕셔너리 데이터 조회/생성/수정/삭제
//! - `auth` - JWT 액세스 토큰 발급과 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, dict_data::DictDataService};
//!
//! let dict_data_service = DictDataService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod dict_data;
pub mod auth;
