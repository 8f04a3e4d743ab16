//! 딕셔너리 데이터 요청 DTO
//!
//! - [`DictDataSearch`] - 목록 조회 쿼리 (`?dictType=...&pageIndex=1&pageSize=10`)
//! - [`DictDataById`] - 단건 조회/삭제 키
//! - [`DictDataControl`] - 생성/수정 요청 본문

use std::fmt;
use std::str::FromStr;
use serde::{de, Deserialize, Deserializer};
use validator::Validate;
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::DictStatus;

/// 목록 조회 조건
///
/// 빈 문자열 쿼리 값(`status=`)은 조건 없음으로 취급합니다.
///
/// ```text
/// GET /api/v1/dict/data?dictType=sys_user_sex&status=2&pageIndex=1&pageSize=10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictDataSearch {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<DictStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub dict_code: Option<i64>,
    #[serde(default)]
    pub dict_type: Option<String>,
    /// 라벨 부분 일치 검색
    #[serde(default)]
    pub dict_label: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_index: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

impl DictDataSearch {
    /// 딕셔너리 타입 하나로 조회하는 조건을 만듭니다.
    pub fn by_type(dict_type: impl Into<String>) -> Self {
        Self {
            dict_type: Some(dict_type.into()),
            ..Default::default()
        }
    }

    /// 1부터 시작하는 페이지 번호. 1 미만이면 1입니다.
    pub fn page_index(&self) -> u64 {
        match self.page_index {
            Some(index) if index > 0 => index as u64,
            _ => 1,
        }
    }

    /// 페이지 크기
    ///
    /// 없거나 1 미만이면 기본값, 최대값을 넘으면 최대값으로 제한합니다.
    pub fn page_size(&self) -> u64 {
        let max = PaginationConfig::max_page_size();
        match self.page_size {
            Some(size) if size > 0 => (size as u64).min(max),
            _ => PaginationConfig::default_page_size().min(max),
        }
    }

    /// 건너뛸 레코드 수
    pub fn offset(&self) -> u64 {
        (self.page_index() - 1).saturating_mul(self.page_size())
    }

    pub fn dict_type_filter(&self) -> Option<&str> {
        non_blank(self.dict_type.as_deref())
    }

    pub fn dict_label_filter(&self) -> Option<&str> {
        non_blank(self.dict_label.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 빈 문자열을 `None`으로, 나머지는 `FromStr`로 파싱합니다.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// 단건 조회/삭제 키
///
/// 삭제 시 본문에 `{"ids": [1, 2]}`가 있으면 경로의 코드 대신 일괄 삭제 대상으로 사용합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictDataById {
    #[serde(skip)]
    pub dict_code: i64,
    #[serde(default)]
    pub ids: Vec<i64>,
    #[serde(skip)]
    pub update_by: Option<String>,
}

impl DictDataById {
    pub fn new(dict_code: i64) -> Self {
        Self {
            dict_code,
            ..Default::default()
        }
    }

    /// 경로 코드와 (선택적) JSON 본문으로 키를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문이 비어 있지 않은데 JSON으로 해석할 수 없는 경우
    pub fn from_path_and_body(dict_code: i64, body: &[u8]) -> AppResult<Self> {
        let mut key = if body.iter().all(u8::is_ascii_whitespace) {
            Self::default()
        } else {
            serde_json::from_slice::<Self>(body)
                .map_err(|e| AppError::ValidationError(e.to_string()))?
        };
        key.dict_code = dict_code;
        Ok(key)
    }

    /// 삭제 대상 코드 목록
    ///
    /// `ids`가 있으면 중복을 제거한 `ids`, 없으면 경로 코드 하나입니다.
    pub fn codes(&self) -> Vec<i64> {
        if self.ids.is_empty() {
            return vec![self.dict_code];
        }
        let mut codes = self.ids.clone();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    pub fn is_batch(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn set_update_by(&mut self, user_id: &str) {
        self.update_by = Some(user_id.to_string());
    }
}

/// 생성/수정 요청 본문
///
/// `createBy`/`updateBy`는 클라이언트가 보내더라도 서버가 인증된 사용자 ID로 덮어씁니다.
/// 본문의 `dictCode`는 무시하며, 수정 대상은 경로 파라미터로 정해집니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DictDataControl {
    #[serde(default)]
    #[validate(range(min = 0, message = "정렬 순서는 0 이상이어야 합니다"))]
    pub dict_sort: i32,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "라벨은 1-100자 사이여야 합니다"))]
    pub dict_label: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "값은 1-255자 사이여야 합니다"))]
    pub dict_value: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "딕셔너리 타입은 1-100자 사이여야 합니다"))]
    pub dict_type: String,

    #[serde(default)]
    pub css_class: String,
    #[serde(default)]
    pub list_class: String,
    #[serde(default)]
    pub is_default: String,
    #[serde(default)]
    pub status: DictStatus,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub remark: String,

    #[serde(default)]
    pub create_by: Option<String>,
    #[serde(default)]
    pub update_by: Option<String>,
}

impl DictDataControl {
    pub fn set_create_by(&mut self, user_id: &str) {
        self.create_by = Some(user_id.to_string());
    }

    pub fn set_update_by(&mut self, user_id: &str) {
        self.update_by = Some(user_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_from_query(query: &str) -> DictDataSearch {
        actix_web::web::Query::<DictDataSearch>::from_query(query)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_search_defaults() {
        let search = DictDataSearch::default();

        assert_eq!(search.page_index(), 1);
        assert_eq!(search.offset(), 0);
        if std::env::var("PAGE_SIZE_DEFAULT").is_err() {
            assert_eq!(search.page_size(), 10);
        }
    }

    #[test]
    fn test_search_from_query_string() {
        let search = search_from_query("dictType=sys_user_sex&status=2&pageIndex=3&pageSize=5&dictCode=");

        assert_eq!(search.dict_type_filter(), Some("sys_user_sex"));
        assert_eq!(search.status, Some(DictStatus::Enabled));
        assert_eq!(search.dict_code, None);
        assert_eq!(search.page_index(), 3);
        assert_eq!(search.page_size(), 5);
        assert_eq!(search.offset(), 10);
    }

    #[test]
    fn test_search_rejects_non_numeric_values() {
        assert!(actix_web::web::Query::<DictDataSearch>::from_query("pageSize=abc").is_err());
        assert!(actix_web::web::Query::<DictDataSearch>::from_query("status=9").is_err());
    }

    #[test]
    fn test_search_clamps_page_size() {
        let search = DictDataSearch {
            page_index: Some(-4),
            page_size: Some(1_000_000),
            ..Default::default()
        };

        assert_eq!(search.page_index(), 1);
        assert_eq!(search.page_size(), PaginationConfig::max_page_size());
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let search = search_from_query("dictType=%20&dictLabel=");

        assert_eq!(search.dict_type_filter(), None);
        assert_eq!(search.dict_label_filter(), None);
    }

    #[test]
    fn test_by_id_from_empty_body() {
        let key = DictDataById::from_path_and_body(7, b"").unwrap();

        assert_eq!(key.codes(), vec![7]);
        assert!(!key.is_batch());
    }

    #[test]
    fn test_by_id_batch_body() {
        let key = DictDataById::from_path_and_body(7, br#"{"ids":[3,1,3]}"#).unwrap();

        assert_eq!(key.codes(), vec![1, 3]);
        assert!(key.is_batch());
    }

    #[test]
    fn test_by_id_malformed_body() {
        let result = DictDataById::from_path_and_body(7, b"{ids:");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_control_validation() {
        let valid = DictDataControl {
            dict_label: "남".to_string(),
            dict_value: "0".to_string(),
            dict_type: "sys_user_sex".to_string(),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let missing_type = DictDataControl {
            dict_type: String::new(),
            ..valid.clone()
        };
        assert!(missing_type.validate().is_err());

        let negative_sort = DictDataControl {
            dict_sort: -1,
            ..valid
        };
        assert!(negative_sort.validate().is_err());
    }

    #[test]
    fn test_control_deserializes_camel_case() {
        let control: DictDataControl = serde_json::from_str(
            r#"{"dictCode":99,"dictSort":1,"dictLabel":"여","dictValue":"1","dictType":"sys_user_sex","status":1,"createBy":"mallory"}"#,
        ).unwrap();

        assert_eq!(control.dict_label, "여");
        assert_eq!(control.status, DictStatus::Disabled);
        assert_eq!(control.create_by.as_deref(), Some("mallory"));
    }
}
