//! 공통 기반: 에러 타입과 싱글톤 레지스트리
//!
//! - [`errors`]: `AppError`, `AppResult`, `ErrorContext`
//! - [`registry`]: `ServiceLocator`와 `inventory` 기반 리포지토리/서비스 등록
//!
//! MongoDB 모드의 기동 순서는 다음과 같습니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::set(Arc::new(RedisClient::new().await?));
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
