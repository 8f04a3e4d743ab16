//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시 클라이언트를 제공합니다.
//! 딕셔너리 타입별 옵션 목록(option-select)이 주요 캐시 대상입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("dict_data:type:sys_user_sex", &list, 600).await?;
//!
//! let cached: Option<Vec<DictData>> = cache.get("dict_data:type:sys_user_sex").await?;
//! let stale = cache.keys("dict_data:type:*").await?;
//! cache.del_multiple(&stale).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
