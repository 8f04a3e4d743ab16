//! JWT 액세스 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)에 역할 목록을 더한 구조입니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}
