//! 환경 변수 기반 설정
//!
//! 모든 값은 호출 시점에 환경 변수에서 읽으며 잘못된 값은 기본값으로 대체됩니다.
//! 기동 시 [`Profile::load`]가 `PROFILE`에 맞는 `.env` 파일을 먼저 읽어 둡니다.
//!
//! - [`data_config`]: 프로필, 실행 환경, 서버, 저장소, 페이지네이션, Rate Limiting
//! - [`auth_config`]: JWT 서명 키, 관리자 역할
//!
//! ```bash
//! PROFILE=prod               # dev(기본), prod
//! STORAGE_BACKEND=mongo      # mongo, memory
//! PAGE_SIZE_DEFAULT=10
//! JWT_SECRET=change-me
//! ADMIN_ROLE=admin
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
