//! 딕셔너리 데이터 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{DictDataById, DictDataControl, DictDataSearch};
pub use response::{DictCodes, DictDataResponse};
