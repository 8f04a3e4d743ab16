//! 딕셔너리 데이터 서비스 구현
//!
//! 핸들러와 저장소 사이에서 엔티티/DTO 변환, 감사 필드 기록,
//! 존재하지 않는 레코드 처리(`AppError::NotFound`)를 담당합니다.
//!
//! ```text
//! Handlers ──▶ DictDataService ──▶ dyn DictDataStore
//!                                   ├── DictDataRepository   (MongoDB + Redis)
//!                                   └── MemoryDictDataStore  (테스트/로컬)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use crate::config::{StorageBackend, StorageConfig};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::Service;
use crate::domain::dto::dict_data::{DictCodes, DictDataById, DictDataControl, DictDataResponse, DictDataSearch};
use crate::domain::entities::DictData;
use crate::repositories::{DictDataRepository, DictDataStore, MemoryDictDataStore};

static DICT_DATA_SERVICE_INSTANCE: OnceCell<Arc<DictDataService>> = OnceCell::new();

pub struct DictDataService {
    store: Arc<dyn DictDataStore>,
}

impl DictDataService {
    pub fn new(store: Arc<dyn DictDataStore>) -> Self {
        Self { store }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    ///
    /// 저장소는 `StorageConfig::backend()`에 따라 처음 한 번 결정됩니다.
    /// `dyn DictDataStore`는 `ServiceLocator`에서 꺼낼 수 없어 `#[service]` 대신 직접 구성합니다.
    pub fn instance() -> Arc<Self> {
        DICT_DATA_SERVICE_INSTANCE
            .get_or_init(|| {
                let store: Arc<dyn DictDataStore> = match StorageConfig::backend() {
                    StorageBackend::Mongo => DictDataRepository::instance(),
                    StorageBackend::Memory => MemoryDictDataStore::shared(),
                };
                Arc::new(Self::new(store))
            })
            .clone()
    }

    pub fn backend(&self) -> StorageBackend {
        self.store.backend()
    }

    /// 페이지 조회
    ///
    /// # Returns
    ///
    /// * `(목록, 전체 건수)` - 전체 건수는 페이지와 무관하게 조건에 맞는 레코드 수
    pub async fn get_page(&self, search: &DictDataSearch) -> AppResult<(Vec<DictDataResponse>, u64)> {
        let (list, count) = self.store.find_page(search).await?;

        Ok((list.into_iter().map(DictDataResponse::from).collect(), count))
    }

    /// 코드로 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없거나 삭제된 코드
    pub async fn get(&self, dict_code: i64) -> AppResult<DictDataResponse> {
        self.store
            .find_by_code(dict_code)
            .await?
            .map(DictDataResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("딕셔너리 데이터를 찾을 수 없습니다: {}", dict_code)))
    }

    /// 생성 후 새로 발급된 코드를 반환합니다.
    pub async fn insert(&self, control: DictDataControl) -> AppResult<i64> {
        let saved = self.store.insert(DictData::new(control)).await?;

        log::info!("딕셔너리 데이터 생성: code={}, type={}", saved.dict_code, saved.dict_type);
        Ok(saved.dict_code)
    }

    /// 수정 후 대상 코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없거나 삭제된 코드
    pub async fn update(&self, dict_code: i64, control: &DictDataControl) -> AppResult<i64> {
        let updated = self.store
            .update(dict_code, control)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("딕셔너리 데이터를 찾을 수 없습니다: {}", dict_code)))?;

        log::info!("딕셔너리 데이터 수정: code={}", updated.dict_code);
        Ok(updated.dict_code)
    }

    /// 논리 삭제
    ///
    /// 단건은 경로 코드, 일괄 삭제는 요청한 코드 목록을 그대로 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 삭제된 레코드가 하나도 없는 경우
    pub async fn remove(&self, key: DictDataById) -> AppResult<DictCodes> {
        let codes = key.codes();
        let update_by = key.update_by.clone().unwrap_or_default();

        let deleted = self.store.soft_delete(&codes, &update_by).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("삭제할 딕셔너리 데이터가 없습니다: {:?}", codes)));
        }

        log::info!("딕셔너리 데이터 삭제: {}/{}건 {:?}", deleted, codes.len(), codes);

        if key.is_batch() {
            Ok(DictCodes::Batch(codes))
        } else {
            Ok(DictCodes::Single(key.dict_code))
        }
    }

    /// 조건에 맞는 전체 목록 (페이지 없음)
    pub async fn get_all(&self, search: &DictDataSearch) -> AppResult<Vec<DictDataResponse>> {
        let list = self.store.find_all(search).await?;

        Ok(list.into_iter().map(DictDataResponse::from).collect())
    }
}

#[async_trait]
impl Service for DictDataService {
    fn name(&self) -> &str {
        "dict_data_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("딕셔너리 데이터 서비스 초기화 (저장소: {})", self.backend());
        Ok(())
    }
}

fn dict_data_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(DictDataService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "dict_data_service",
        constructor: dict_data_service_constructor,
    }
}
