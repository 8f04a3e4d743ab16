//! Dictionary Data Entity Implementation
//!
//! 딕셔너리 데이터 엔티티입니다. 하나의 딕셔너리 타입(`dict_type`) 아래에
//! 라벨/값 쌍을 묶어 UI 선택 상자 등을 채우는 데 사용됩니다.
//!
//! `deleted_at`이 설정된 레코드는 논리 삭제된 것으로 간주되며 모든 조회에서 제외됩니다.

use std::fmt;
use std::str::FromStr;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::dto::dict_data::request::DictDataControl;

/// 딕셔너리 데이터 사용 상태
///
/// 저장소와 API 모두 숫자로 표현합니다. (`1` 비활성, `2` 활성)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DictStatus {
    Disabled,
    #[default]
    Enabled,
}

impl DictStatus {
    pub fn code(self) -> i32 {
        match self {
            DictStatus::Disabled => 1,
            DictStatus::Enabled => 2,
        }
    }
}

impl TryFrom<i32> for DictStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DictStatus::Disabled),
            2 => Ok(DictStatus::Enabled),
            other => Err(format!("알 수 없는 상태 값입니다: {}", other)),
        }
    }
}

impl From<DictStatus> for i32 {
    fn from(status: DictStatus) -> Self {
        status.code()
    }
}

impl FromStr for DictStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim()
            .parse::<i32>()
            .map_err(|_| format!("상태 값은 숫자여야 합니다: {}", s))?;
        DictStatus::try_from(code)
    }
}

impl fmt::Display for DictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 딕셔너리 데이터 레코드
///
/// MongoDB `sys_dict_data` 컬렉션의 문서 구조와 같습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictData {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 딕셔너리 코드 (저장소가 발급하는 고유 식별자)
    pub dict_code: i64,
    /// 같은 타입 안에서의 정렬 순서
    pub dict_sort: i32,
    pub dict_label: String,
    pub dict_value: String,
    /// 묶음 키
    pub dict_type: String,
    #[serde(default)]
    pub css_class: String,
    #[serde(default)]
    pub list_class: String,
    #[serde(default)]
    pub is_default: String,
    pub status: DictStatus,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub remark: String,
    pub create_by: String,
    #[serde(default)]
    pub update_by: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl DictData {
    /// 쓰기 요청으로부터 새 레코드를 만듭니다.
    ///
    /// `dict_code`는 0으로 두며 저장소가 저장 시점에 발급합니다.
    /// 감사 필드는 요청에 이미 서버 측에서 기록된 `create_by`/`update_by`를 사용합니다.
    pub fn new(control: DictDataControl) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            dict_code: 0,
            dict_sort: control.dict_sort,
            dict_label: control.dict_label,
            dict_value: control.dict_value,
            dict_type: control.dict_type,
            css_class: control.css_class,
            list_class: control.list_class,
            is_default: control.is_default,
            status: control.status,
            default: control.default,
            remark: control.remark,
            create_by: control.create_by.unwrap_or_default(),
            update_by: control.update_by.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 수정 요청의 내용을 반영합니다.
    ///
    /// `dict_code`, `create_by`, `created_at`은 변경하지 않습니다.
    pub fn apply(&mut self, control: &DictDataControl) {
        self.dict_sort = control.dict_sort;
        self.dict_label = control.dict_label.clone();
        self.dict_value = control.dict_value.clone();
        self.dict_type = control.dict_type.clone();
        self.css_class = control.css_class.clone();
        self.list_class = control.list_class.clone();
        self.is_default = control.is_default.clone();
        self.status = control.status;
        self.default = control.default.clone();
        self.remark = control.remark.clone();
        self.update_by = control.update_by.clone().unwrap_or_default();
        self.updated_at = DateTime::now();
    }

    /// 논리 삭제 처리합니다.
    pub fn mark_deleted(&mut self, update_by: &str) {
        let now = DateTime::now();
        self.update_by = update_by.to_string();
        self.updated_at = now;
        self.deleted_at = Some(now);
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(label: &str) -> DictDataControl {
        DictDataControl {
            dict_sort: 3,
            dict_label: label.to_string(),
            dict_value: "1".to_string(),
            dict_type: "sys_user_sex".to_string(),
            create_by: Some("u-1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DictStatus::try_from(1), Ok(DictStatus::Disabled));
        assert_eq!(DictStatus::try_from(2), Ok(DictStatus::Enabled));
        assert!(DictStatus::try_from(0).is_err());
        assert_eq!("2".parse::<DictStatus>(), Ok(DictStatus::Enabled));
        assert!("on".parse::<DictStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_number() {
        let json = serde_json::to_string(&DictStatus::Disabled).unwrap();
        assert_eq!(json, "1");

        let parsed: DictStatus = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, DictStatus::Enabled);
        assert!(serde_json::from_str::<DictStatus>("7").is_err());
    }

    #[test]
    fn test_new_uses_stamped_creator() {
        let data = DictData::new(control("남"));

        assert_eq!(data.dict_code, 0);
        assert_eq!(data.create_by, "u-1");
        assert!(data.update_by.is_empty());
        assert_eq!(data.created_at, data.updated_at);
        assert!(!data.is_deleted());
    }

    #[test]
    fn test_apply_keeps_creation_audit() {
        let mut data = DictData::new(control("남"));
        data.dict_code = 9;
        let created_at = data.created_at;

        let mut change = control("여");
        change.create_by = Some("intruder".to_string());
        change.update_by = Some("u-2".to_string());
        data.apply(&change);

        assert_eq!(data.dict_code, 9);
        assert_eq!(data.dict_label, "여");
        assert_eq!(data.create_by, "u-1");
        assert_eq!(data.update_by, "u-2");
        assert_eq!(data.created_at, created_at);
    }

    #[test]
    fn test_mark_deleted() {
        let mut data = DictData::new(control("남"));
        data.mark_deleted("u-3");

        assert!(data.is_deleted());
        assert_eq!(data.update_by, "u-3");
    }
}
