//! MongoDB 기반 딕셔너리 데이터 리포지토리
//!
//! - 컬렉션: `sys_dict_data`
//! - 코드 시퀀스: `counters` 컬렉션의 `{ _id: "sys_dict_data", seq }` 문서를 `$inc`로 발급
//! - 캐시: 타입별 전체 목록(option-select)을 Redis에 10분간 저장, 쓰기 시 무효화

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::config::{StorageBackend, StorageConfig};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::registry::Repository;
use crate::db::Database;
use crate::domain::dto::dict_data::{DictDataControl, DictDataSearch};
use crate::domain::entities::DictData;
use super::DictDataStore;

const COUNTER_COLLECTION_NAME: &str = "counters";
const TYPE_CACHE_PREFIX: &str = "dict_data:type:";

/// 시퀀스 카운터 문서
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

/// `instance()`는 `Database`와 `RedisClient`가 `ServiceLocator`에 등록된 뒤에만 호출할 수 있습니다.
#[repository(name = "dict_data", collection = "sys_dict_data")]
pub struct DictDataRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl DictDataRepository {
    fn type_cache_key(dict_type: &str) -> String {
        format!("{}{}", TYPE_CACHE_PREFIX, dict_type)
    }

    /// 타입 하나만으로 조회하는 경우에만 캐시를 사용합니다.
    fn cacheable_type(search: &DictDataSearch) -> Option<&str> {
        if search.status.is_some() || search.dict_code.is_some() || search.dict_label_filter().is_some() {
            return None;
        }
        search.dict_type_filter()
    }

    async fn invalidate_type_cache(&self) {
        let result = self.invalidate_pattern_cache(&format!("{}*", TYPE_CACHE_PREFIX)).await;
        cache_ok("무효화", TYPE_CACHE_PREFIX, result);
    }

    /// 다음 딕셔너리 코드를 발급합니다.
    async fn next_code(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db
            .collection::<Counter>(COUNTER_COLLECTION_NAME)
            .find_one_and_update(
                doc! { "_id": self.collection_name() },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        counter
            .map(|counter| counter.seq)
            .ok_or("카운터 문서가 반환되지 않았습니다")
            .context("딕셔너리 코드 시퀀스 발급 실패")
    }

    /// 인덱스를 생성합니다.
    ///
    /// - `dict_code` 유니크
    /// - `(dict_type, dict_sort)` 타입별 정렬 조회용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let code_index = IndexModel::builder()
            .keys(doc! { "dict_code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("dict_code_unique".to_string())
                .build())
            .build();

        let type_sort_index = IndexModel::builder()
            .keys(doc! { "dict_type": 1, "dict_sort": 1 })
            .options(IndexOptions::builder()
                .name("dict_type_sort".to_string())
                .build())
            .build();

        self.collection::<DictData>()
            .create_indexes([code_index, type_sort_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 캐시 연산 결과를 확인하고 실패하면 경고를 남깁니다. 조회와 쓰기는 캐시 실패와 무관하게 진행됩니다.
fn cache_ok<E: std::fmt::Display>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("딕셔너리 타입 캐시 {} 실패 ({}): {}", action, key, e);
            false
        },
    }
}

/// 검색 조건을 MongoDB 필터로 변환합니다. 논리 삭제된 문서는 항상 제외합니다.
fn filter_document(search: &DictDataSearch) -> Document {
    let mut filter = doc! { "deleted_at": Bson::Null };

    if let Some(status) = search.status {
        filter.insert("status", status.code());
    }
    if let Some(code) = search.dict_code {
        filter.insert("dict_code", code);
    }
    if let Some(dict_type) = search.dict_type_filter() {
        filter.insert("dict_type", dict_type);
    }
    if let Some(label) = search.dict_label_filter() {
        filter.insert("dict_label", doc! { "$regex": escape_regex(label) });
    }

    filter
}

fn sort_document() -> Document {
    doc! { "dict_sort": 1, "dict_code": 1 }
}

fn update_document(control: &DictDataControl) -> Document {
    doc! {
        "$set": {
            "dict_sort": control.dict_sort,
            "dict_label": control.dict_label.as_str(),
            "dict_value": control.dict_value.as_str(),
            "dict_type": control.dict_type.as_str(),
            "css_class": control.css_class.as_str(),
            "list_class": control.list_class.as_str(),
            "is_default": control.is_default.as_str(),
            "status": control.status.code(),
            "default": control.default.as_str(),
            "remark": control.remark.as_str(),
            "update_by": control.update_by.clone().unwrap_or_default(),
            "updated_at": DateTime::now(),
        }
    }
}

/// 정규식 메타 문자를 이스케이프하여 부분 일치 검색에 사용합니다.
fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if "\\.+*?()|[]{}^$".contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl DictDataStore for DictDataRepository {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Mongo
    }

    async fn find_page(&self, search: &DictDataSearch) -> AppResult<(Vec<DictData>, u64)> {
        let filter = filter_document(search);

        let count = self.collection::<DictData>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let list: Vec<DictData> = self.collection::<DictData>()
            .find(filter)
            .sort(sort_document())
            .skip(search.offset())
            .limit(search.page_size() as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((list, count))
    }

    async fn find_all(&self, search: &DictDataSearch) -> AppResult<Vec<DictData>> {
        let cache_key = Self::cacheable_type(search).map(Self::type_cache_key);

        if let Some(ref key) = cache_key {
            if let Ok(Some(cached)) = self.redis.get::<Vec<DictData>>(key).await {
                return Ok(cached);
            }
        }

        let list: Vec<DictData> = self.collection::<DictData>()
            .find(filter_document(search))
            .sort(sort_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref key) = cache_key {
            let ttl = StorageConfig::cache_ttl_seconds();
            cache_ok("저장", key, self.redis.set_with_expiry(key, &list, ttl).await);
        }

        Ok(list)
    }

    async fn find_by_code(&self, dict_code: i64) -> AppResult<Option<DictData>> {
        self.collection::<DictData>()
            .find_one(doc! { "dict_code": dict_code, "deleted_at": Bson::Null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut data: DictData) -> AppResult<DictData> {
        data.dict_code = self.next_code().await?;

        let result = self.collection::<DictData>()
            .insert_one(&data)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        data.id = result.inserted_id.as_object_id();

        self.invalidate_type_cache().await;

        Ok(data)
    }

    async fn update(&self, dict_code: i64, control: &DictDataControl) -> AppResult<Option<DictData>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<DictData>()
            .find_one_and_update(
                doc! { "dict_code": dict_code, "deleted_at": Bson::Null },
                update_document(control),
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            self.invalidate_type_cache().await;
        }

        Ok(updated)
    }

    async fn soft_delete(&self, dict_codes: &[i64], update_by: &str) -> AppResult<u64> {
        let now = DateTime::now();

        let result = self.collection::<DictData>()
            .update_many(
                doc! { "dict_code": { "$in": dict_codes.to_vec() }, "deleted_at": Bson::Null },
                doc! { "$set": { "deleted_at": now, "updated_at": now, "update_by": update_by } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.modified_count > 0 {
            self.invalidate_type_cache().await;
        }

        Ok(result.modified_count)
    }
}
