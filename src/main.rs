//! 딕셔너리 데이터 관리 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! `STORAGE_BACKEND=mongo`이면 MongoDB, Redis 연결을 설정하고,
//! `memory`이면 외부 의존성 없이 프로세스 메모리 저장소로 동작합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{info, warn};
use dict_admin_backend::caching::redis::RedisClient;
use dict_admin_backend::config::{Profile, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig};
use dict_admin_backend::core::registry::ServiceLocator;
use dict_admin_backend::db::Database;
use dict_admin_backend::repositories::DictDataRepository;
use dict_admin_backend::routes::configure_all_routes;
use dict_admin_backend::services::dict_data::DictDataService;
use dict_admin_backend::utils::display_terminal::print_startup_banner;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let profile = Profile::current();
    let loaded = profile.load();
    init_logging();

    match loaded {
        Ok(()) => info!("{} 파일 로드 됨 (profile: {:?})", profile.env_file(), profile),
        Err(e) => warn!("{} 파일 로드 실패: {}", profile.env_file(), e),
    }

    info!("🚀 딕셔너리 데이터 관리 서비스 시작중...");

    let backend = StorageConfig::backend();
    info!("🗄️ 저장소 백엔드: {}", backend);

    if backend == StorageBackend::Mongo {
        initialize_mongo_backend()
            .await
            .map_err(|e| io::Error::other(format!("저장소 초기화 실패: {}", e)))?;
    }

    let dict_data_service = DictDataService::instance();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(dict_data_service).await
}

/// MongoDB와 Redis를 연결하고 등록된 리포지토리/서비스를 생성합니다.
///
/// 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_mongo_backend() -> Result<(), Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await?);

    let redis_client = Arc::new(RedisClient::new().await?);

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all().await?;

    let repository = DictDataRepository::instance();
    repository.create_indexes().await?;
    info!("✅ {} 인덱스 준비 완료", repository.collection_name());

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(dict_data_service: Arc<DictDataService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    print_startup_banner(dict_data_service.backend().as_str(), &bind_address);

    let (per_second, burst_size) = (RateLimitConfig::per_second(), RateLimitConfig::burst_size());
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let service_data = web::Data::from(dict_data_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service_data.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=dict_admin_backend::handlers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 관리자 화면 개발 서버(`localhost:3000`)와 자체 서버를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .supports_credentials()
        .max_age(3600)
}
