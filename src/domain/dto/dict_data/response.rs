//! 딕셔너리 데이터 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::{DictData, DictStatus};

/// 딕셔너리 데이터 응답
///
/// 내부 ObjectId와 논리 삭제 정보는 노출하지 않습니다.
/// 시각은 RFC 3339 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictDataResponse {
    pub dict_code: i64,
    pub dict_sort: i32,
    pub dict_label: String,
    pub dict_value: String,
    pub dict_type: String,
    pub css_class: String,
    pub list_class: String,
    pub is_default: String,
    pub status: DictStatus,
    pub default: String,
    pub remark: String,
    pub create_by: String,
    pub update_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DictData> for DictDataResponse {
    fn from(data: DictData) -> Self {
        Self {
            dict_code: data.dict_code,
            dict_sort: data.dict_sort,
            dict_label: data.dict_label,
            dict_value: data.dict_value,
            dict_type: data.dict_type,
            css_class: data.css_class,
            list_class: data.list_class,
            is_default: data.is_default,
            status: data.status,
            default: data.default,
            remark: data.remark,
            create_by: data.create_by,
            update_by: data.update_by,
            created_at: data.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: data.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 쓰기 작업이 돌려주는 딕셔너리 코드
///
/// 단건 작업은 숫자 하나, 일괄 삭제는 숫자 배열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictCodes {
    Single(i64),
    Batch(Vec<i64>),
}
