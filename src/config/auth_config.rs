//! # Authentication Configuration
//!
//! JWT Bearer 인증 관련 설정을 관리합니다.
//! Spring Security의 `jwt.secret`, `jwt.expiration` 프로퍼티와 같은 역할을 합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export ADMIN_ROLE="admin"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;

/// 개발용 기본 서명 키
const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// JWT 토큰 설정
///
/// 토큰 서명은 HS256 대칭키 방식을 사용합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 키를 사용하고 경고 로그를 남깁니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_JWT_SECRET.to_string()
            })
    }

    /// 액세스 토큰 만료 시간(시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(24)
    }
}

/// 역할 기반 접근 설정
pub struct RoleConfig;

impl RoleConfig {
    /// 딕셔너리 데이터 관리 API에 필요한 역할. 기본값: "admin"
    pub fn admin_role() -> String {
        env::var("ADMIN_ROLE").unwrap_or_else(|_| "admin".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), DEFAULT_JWT_SECRET);
        }

        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_admin_role_default() {
        if env::var("ADMIN_ROLE").is_err() {
            assert_eq!(RoleConfig::admin_role(), "admin");
        }
    }
}
