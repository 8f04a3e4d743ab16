//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256(HS256) 서명의 액세스 토큰을 발급하고 검증합니다.
//! 관리 API는 토큰의 `sub`를 감사 필드(`createBy`/`updateBy`)에, `roles`를 권한 검사에 사용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// 서명 키는 호출 시점의 `JwtConfig::secret()`을 사용합니다.
#[service(name = "token")]
pub struct TokenService {}

impl TokenService {
    /// 사용자 ID와 역할로 액세스 토큰을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::instance()
    ///     .generate_access_token("u-1", &["admin".to_string()])?;
    /// ```
    pub fn generate_access_token(&self, user_id: &str, roles: &[String]) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        sign(&claims, &JwtConfig::secret())
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 형식 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        verify(token, &JwtConfig::secret())
    }

    /// "Bearer {token}" 형식의 헤더에서 토큰 부분만 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

fn sign(claims: &TokenClaims, secret: &str) -> Result<String, AppError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
}

fn verify(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            },
            _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
        })
}
