//! 메모리 기반 딕셔너리 데이터 저장소
//!
//! 외부 의존성 없이 동작하므로 테스트와 로컬 개발에 사용합니다.
//! 락은 `.await` 지점을 넘어 보유하지 않습니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use crate::config::StorageBackend;
use crate::core::errors::AppResult;
use crate::domain::dto::dict_data::{DictDataControl, DictDataSearch};
use crate::domain::entities::DictData;
use super::DictDataStore;

static SHARED_MEMORY_STORE: OnceCell<Arc<MemoryDictDataStore>> = OnceCell::new();

pub struct MemoryDictDataStore {
    records: RwLock<BTreeMap<i64, DictData>>,
    next_code: AtomicI64,
}

impl MemoryDictDataStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_code: AtomicI64::new(1),
        }
    }

    /// 프로세스 전역에서 공유하는 인스턴스
    pub fn shared() -> Arc<Self> {
        SHARED_MEMORY_STORE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<i64, DictData>> {
        self.records.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, DictData>> {
        self.records.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 조건에 맞는 살아 있는 레코드를 정렬하여 반환합니다.
    fn matching(&self, search: &DictDataSearch) -> Vec<DictData> {
        let mut list: Vec<DictData> = self.read()
            .values()
            .filter(|data| !data.is_deleted() && matches(data, search))
            .cloned()
            .collect();
        list.sort_by_key(|data| (data.dict_sort, data.dict_code));
        list
    }

    /// 논리 삭제된 레코드까지 포함하여 조회합니다.
    #[cfg(test)]
    pub fn find_any(&self, dict_code: i64) -> Option<DictData> {
        self.read().get(&dict_code).cloned()
    }
}

impl Default for MemoryDictDataStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(data: &DictData, search: &DictDataSearch) -> bool {
    if let Some(status) = search.status {
        if data.status != status {
            return false;
        }
    }
    if let Some(code) = search.dict_code {
        if data.dict_code != code {
            return false;
        }
    }
    if let Some(dict_type) = search.dict_type_filter() {
        if data.dict_type != dict_type {
            return false;
        }
    }
    if let Some(label) = search.dict_label_filter() {
        if !data.dict_label.contains(label) {
            return false;
        }
    }
    true
}

#[async_trait]
impl DictDataStore for MemoryDictDataStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Memory
    }

    async fn find_page(&self, search: &DictDataSearch) -> AppResult<(Vec<DictData>, u64)> {
        let list = self.matching(search);
        let count = list.len() as u64;
        let page = list
            .into_iter()
            .skip(search.offset() as usize)
            .take(search.page_size() as usize)
            .collect();
        Ok((page, count))
    }

    async fn find_all(&self, search: &DictDataSearch) -> AppResult<Vec<DictData>> {
        Ok(self.matching(search))
    }

    async fn find_by_code(&self, dict_code: i64) -> AppResult<Option<DictData>> {
        Ok(self.read()
            .get(&dict_code)
            .filter(|data| !data.is_deleted())
            .cloned())
    }

    async fn insert(&self, mut data: DictData) -> AppResult<DictData> {
        data.dict_code = self.next_code.fetch_add(1, Ordering::SeqCst);
        self.write().insert(data.dict_code, data.clone());
        Ok(data)
    }

    async fn update(&self, dict_code: i64, control: &DictDataControl) -> AppResult<Option<DictData>> {
        let mut records = self.write();
        let updated = records
            .get_mut(&dict_code)
            .filter(|data| !data.is_deleted())
            .map(|data| {
                data.apply(control);
                data.clone()
            });
        Ok(updated)
    }

    async fn soft_delete(&self, dict_codes: &[i64], update_by: &str) -> AppResult<u64> {
        let mut records = self.write();
        let mut deleted = 0;
        for code in dict_codes {
            if let Some(data) = records.get_mut(code).filter(|data| !data.is_deleted()) {
                data.mark_deleted(update_by);
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DictStatus;

    fn record(dict_type: &str, label: &str, sort: i32) -> DictData {
        DictData::new(DictDataControl {
            dict_sort: sort,
            dict_label: label.to_string(),
            dict_value: label.to_lowercase(),
            dict_type: dict_type.to_string(),
            create_by: Some("u-1".to_string()),
            ..Default::default()
        })
    }

    async fn seeded() -> MemoryDictDataStore {
        let store = MemoryDictDataStore::new();
        store.insert(record("sys_user_sex", "Male", 2)).await.unwrap();
        store.insert(record("sys_user_sex", "Female", 1)).await.unwrap();
        store.insert(record("sys_yes_no", "Yes", 1)).await.unwrap();
        store
    }

    #[actix_web::test]
    async fn test_insert_allocates_increasing_codes() {
        let store = MemoryDictDataStore::new();

        let first = store.insert(record("t", "A", 0)).await.unwrap();
        let second = store.insert(record("t", "B", 0)).await.unwrap();

        assert_eq!(first.dict_code, 1);
        assert_eq!(second.dict_code, 2);
    }

    #[actix_web::test]
    async fn test_find_all_filters_and_sorts() {
        let store = seeded().await;

        let list = store.find_all(&DictDataSearch::by_type("sys_user_sex")).await.unwrap();
        let labels: Vec<&str> = list.iter().map(|d| d.dict_label.as_str()).collect();

        assert_eq!(labels, vec!["Female", "Male"]);
    }

    #[actix_web::test]
    async fn test_find_page_counts_all_matches() {
        let store = seeded().await;
        let search = DictDataSearch {
            page_index: Some(2),
            page_size: Some(2),
            ..Default::default()
        };

        let (page, count) = store.find_page(&search).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(page.len(), 1);
    }

    #[actix_web::test]
    async fn test_label_and_status_filters() {
        let store = seeded().await;
        let disabled = DictDataControl {
            dict_label: "Male".to_string(),
            dict_value: "m".to_string(),
            dict_type: "sys_user_sex".to_string(),
            status: DictStatus::Disabled,
            update_by: Some("u-2".to_string()),
            ..Default::default()
        };
        store.update(1, &disabled).await.unwrap();

        let by_label = DictDataSearch {
            dict_label: Some("ale".to_string()),
            ..Default::default()
        };
        assert_eq!(store.find_all(&by_label).await.unwrap().len(), 2);

        let enabled_only = DictDataSearch {
            status: Some(DictStatus::Enabled),
            ..Default::default()
        };
        assert_eq!(store.find_all(&enabled_only).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_soft_delete_hides_record() {
        let store = seeded().await;

        let deleted = store.soft_delete(&[1, 99], "u-7").await.unwrap();

        assert_eq!(deleted, 1);
        assert!(store.find_by_code(1).await.unwrap().is_none());
        assert_eq!(store.find_any(1).map(|d| d.update_by), Some("u-7".to_string()));
        assert_eq!(store.soft_delete(&[1], "u-7").await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_update_missing_returns_none() {
        let store = seeded().await;

        let result = store.update(42, &DictDataControl::default()).await.unwrap();

        assert!(result.is_none());
    }
}
