//! 공통 응답 DTO (응답 봉투, 페이지네이션)

pub mod api_response;

pub use api_response::{ApiError, ApiResponse, PageData};
