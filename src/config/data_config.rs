//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 백엔드, 페이지네이션 관련 설정을 관리합니다.

use std::env;
use std::fmt;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 기본 저장소가 메모리로 바뀝니다
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// actix-web 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 딕셔너리 데이터 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB + Redis 캐시
    Mongo,
    /// 프로세스 내 메모리 저장소
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Mongo => "mongo",
            StorageBackend::Memory => "memory",
        }
    }

    /// 문자열에서 백엔드를 파싱합니다. 알 수 없는 값이면 `None`입니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Some(StorageBackend::Mongo),
            "memory" | "mem" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 사용할 저장소 백엔드를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `STORAGE_BACKEND`: `mongo` 또는 `memory`
    ///
    /// 설정되지 않았거나 알 수 없는 값이면 환경별 기본값을 사용합니다.
    pub fn backend() -> StorageBackend {
        match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).unwrap_or_else(|| {
                log::warn!("알 수 없는 STORAGE_BACKEND 값: {}. 환경 기본값 사용", value);
                Self::backend_for_env(&Environment::current())
            }),
            Err(_) => Self::backend_for_env(&Environment::current()),
        }
    }

    /// 특정 환경의 기본 저장소 백엔드
    ///
    /// - Test: Memory
    /// - 그 외: Mongo
    pub fn backend_for_env(env: &Environment) -> StorageBackend {
        match env {
            Environment::Test => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    /// 딕셔너리 목록 캐시 유지 시간(초). 기본값: 600
    pub fn cache_ttl_seconds() -> usize {
        env::var("DICT_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(600)
    }
}

/// 페이지네이션 설정
pub struct PaginationConfig;

impl PaginationConfig {
    /// 요청에 pageSize가 없거나 1 미만일 때 사용하는 값. 기본값: 10
    pub fn default_page_size() -> u64 {
        env::var("PAGE_SIZE_DEFAULT")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(10)
    }

    /// 한 페이지에 허용하는 최대 레코드 수. 기본값: 100
    pub fn max_page_size() -> u64 {
        env::var("PAGE_SIZE_MAX")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(100)
    }
}

/// 설정 파일 프로필
///
/// `PROFILE` 환경 변수로 어떤 `.env` 파일을 읽을지 정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
    Default,
}

impl Profile {
    /// `PROFILE` 값. 없으면 `Dev`입니다.
    pub fn current() -> Self {
        Self::parse(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dev" => Profile::Dev,
            "prod" => Profile::Prod,
            _ => Profile::Default,
        }
    }

    pub fn env_file(self) -> &'static str {
        match self {
            Profile::Dev => ".env.dev",
            Profile::Prod => ".env.prod",
            Profile::Default => ".env",
        }
    }

    /// 프로필의 `.env` 파일을 환경 변수로 읽어 들입니다.
    ///
    /// 이미 설정된 환경 변수는 덮어쓰지 않습니다. 로거 초기화 전에 호출되므로
    /// 결과 기록은 호출하는 쪽에서 합니다.
    pub fn load(self) -> Result<(), dotenv::Error> {
        dotenv::from_filename(self.env_file()).map(|_| ())
    }
}

/// 요청 빈도 제한 설정 (actix-governor)
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수. 기본값: 100
    pub fn per_second() -> u64 {
        parse_or("RATE_LIMIT_PER_SECOND", 100)
    }

    /// 순간 허용량. 기본값: 200
    pub fn burst_size() -> u32 {
        parse_or("RATE_LIMIT_BURST_SIZE", 200)
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
