//! 딕셔너리 데이터 관리 백엔드
//!
//! 관리자 화면의 딕셔너리 데이터(타입별 라벨/값 목록)를 다루는 actix-web REST API입니다.
//! 페이지 조회, 단건 조회, 생성, 수정, 논리 삭제와 선택 상자용 전체 조회를 제공합니다.
//!
//! 요청은 `routes` → `handlers` → `services` → `repositories` 순으로 흐릅니다.
//! 저장소는 [`repositories::DictDataStore`] 뒤에 숨겨져 있어 MongoDB(+ Redis 캐시)와
//! 프로세스 메모리 구현을 `STORAGE_BACKEND`로 바꿔 끼울 수 있습니다.
//!
//! ```rust,ignore
//! use dict_admin_backend::services::dict_data::DictDataService;
//!
//! let service = DictDataService::instance();
//! let code = service.insert(control).await?;
//! let data = service.get(code).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
