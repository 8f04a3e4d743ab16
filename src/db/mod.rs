//! MongoDB 연결
//!
//! `STORAGE_BACKEND=mongo`일 때 기동 시 한 번 생성되어 `ServiceLocator`에 등록되고,
//! `DictDataRepository`가 여기서 컬렉션 핸들을 얻습니다.
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `dict_admin_dev` |

use std::env;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "dict_admin_dev";
const APP_NAME: &str = "dict_admin";

#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// 연결 후 `ping`으로 서버 응답을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let mut options = ClientOptions::parse(&uri).await?;
        options.app_name = Some(APP_NAME.to_string());

        let inner = Client::with_options(options)?.database(&name);
        inner.run_command(doc! { "ping": 1 }).await?;

        log::info!("✅ MongoDB 연결 성공: {}", name);

        Ok(Self { inner })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.inner.clone()
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection::<T>(name)
    }
}
