//! # Domain Entities
//!
//! MongoDB에 영속화되는 도메인 엔티티들입니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`DictData`] | `sys_dict_data` | 딕셔너리 타입별 라벨/값 항목 |

pub mod dict_data;

pub use dict_data::{DictData, DictStatus};
