//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 객체 (DictData)
//! ├── DTOs      - 요청/응답 객체와 공통 응답 봉투
//! └── Models    - 인증 사용자, 토큰 클레임, 요청 ID
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 영속 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Valid` | `validator` derive | 데이터 유효성 검사 |
//!
//! ## 딕셔너리 데이터 흐름
//!
//! ```rust,ignore
//! use crate::domain::dto::dict_data::{DictDataControl, DictDataResponse};
//! use crate::domain::entities::DictData;
//!
//! // 1. DTO로 입력 받기 + 서버 측 생성자 기록
//! control.validate()?;
//! control.set_create_by(&user.user_id);
//!
//! // 2. 엔티티 생성 및 저장
//! let saved = store.insert(DictData::new(control)).await?;
//!
//! // 3. 응답 DTO로 변환
//! let response = DictDataResponse::from(saved);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
