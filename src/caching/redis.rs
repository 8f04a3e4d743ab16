//! Redis 캐시 클라이언트
//!
//! 값은 JSON 문자열로 저장합니다. 연결은 `ConnectionManager` 하나를 복제해서 공유하며,
//! 끊어지면 관리자가 재연결합니다.

use std::env;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError, RedisResult};
use serde::{Serialize, de::DeserializeOwned};

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`(기본 "redis://localhost:6379")에 연결하고 `PING`으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        let manager = Client::open(redis_url)?.get_connection_manager().await?;
        redis::cmd("PING").query_async::<()>(&mut manager.clone()).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// JSON 값을 읽습니다. 키가 없으면 `Ok(None)`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<T>> {
        let raw: Option<String> = self.manager.clone().get(key).await?;
        decode(raw)
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> RedisResult<()> {
        let json = encode(value)?;
        self.manager.clone().set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> RedisResult<()> {
        self.manager.clone().del(key).await
    }

    /// 여러 키를 한 번의 `DEL`로 지웁니다. 빈 목록이면 아무것도 하지 않습니다.
    pub async fn del_multiple(&self, keys: &[String]) -> RedisResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        self.manager.clone().del(keys).await
    }

    /// 패턴에 일치하는 키 목록
    ///
    /// ```rust,ignore
    /// let keys = cache.keys("dict_data:type:*").await?;
    /// ```
    pub async fn keys(&self, pattern: &str) -> RedisResult<Vec<String>> {
        self.manager.clone().keys(pattern).await
    }
}

fn encode<T: Serialize>(value: &T) -> RedisResult<String> {
    serde_json::to_string(value)
        .map_err(|e| RedisError::from((ErrorKind::TypeError, "Serialization failed", e.to_string())))
}

fn decode<T: DeserializeOwned>(raw: Option<String>) -> RedisResult<Option<T>> {
    raw.map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| RedisError::from((ErrorKind::TypeError, "Deserialization failed", e.to_string())))
}
