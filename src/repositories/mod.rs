//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. Spring Data의 `@Repository`와 같은 역할을 합니다.
//!
//! - [`dict_data`] - 딕셔너리 데이터 저장소 trait과 MongoDB/메모리 구현체

pub mod dict_data;

pub use dict_data::{DictDataRepository, DictDataStore, MemoryDictDataStore};
