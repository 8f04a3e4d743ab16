//! 딕셔너리 데이터 저장소
//!
//! 서비스 계층은 [`DictDataStore`] trait에만 의존하며, 실행 시 설정에 따라 구현체가 정해집니다.
//!
//! | 구현체 | 백엔드 | 용도 |
//! |--------|--------|------|
//! | [`DictDataRepository`] | MongoDB + Redis | 운영 |
//! | [`MemoryDictDataStore`] | 프로세스 메모리 | 테스트, 로컬 개발 |
//!
//! 모든 구현체는 다음 규칙을 지킵니다.
//!
//! - 논리 삭제된 레코드(`deleted_at` 존재)는 조회, 수정, 삭제 대상에서 제외
//! - 정렬은 `dict_sort` 오름차순, 같으면 `dict_code` 오름차순
//! - `dict_code`는 증가만 하며 재사용하지 않음

pub mod dict_data_repo;
pub mod memory_store;

use async_trait::async_trait;
use crate::config::StorageBackend;
use crate::core::errors::AppResult;
use crate::domain::dto::dict_data::{DictDataControl, DictDataSearch};
use crate::domain::entities::DictData;

pub use dict_data_repo::DictDataRepository;
pub use memory_store::MemoryDictDataStore;

#[async_trait]
pub trait DictDataStore: Send + Sync {
    /// 구현체의 백엔드 종류
    fn backend(&self) -> StorageBackend;

    /// 조건에 맞는 한 페이지와 전체 개수를 반환합니다.
    async fn find_page(&self, search: &DictDataSearch) -> AppResult<(Vec<DictData>, u64)>;

    /// 조건에 맞는 모든 레코드를 반환합니다. 페이지 정보는 무시합니다.
    async fn find_all(&self, search: &DictDataSearch) -> AppResult<Vec<DictData>>;

    async fn find_by_code(&self, dict_code: i64) -> AppResult<Option<DictData>>;

    /// 새 코드를 발급하여 저장하고, 저장된 레코드를 반환합니다.
    async fn insert(&self, data: DictData) -> AppResult<DictData>;

    /// 수정 후 레코드를 반환합니다. 대상이 없으면 `None`입니다.
    async fn update(&self, dict_code: i64, control: &DictDataControl) -> AppResult<Option<DictData>>;

    /// 논리 삭제하고 실제로 삭제된 개수를 반환합니다.
    async fn soft_delete(&self, dict_codes: &[i64], update_by: &str) -> AppResult<u64>;
}
