//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `dict_data::request` | HTTP 요청 본문/쿼리 매핑 |
//! | `@ResponseBody` | `dict_data::response` | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `common::ApiResponse<T>` | 공통 응답 봉투 |
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── common/        - 응답 봉투, 페이지 데이터, 컨트롤러 에러
//! └── dict_data/
//!     ├── request    - DictDataSearch, DictDataById, DictDataControl
//!     └── response   - DictDataResponse, DictCodes
//! ```

pub mod common;
pub mod dict_data;
