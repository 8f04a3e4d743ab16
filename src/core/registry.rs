//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! Spring Framework의 ApplicationContext 역할을 하는 타입 기반 인스턴스 보관소입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Repository` | `#[repository]` | `RepositoryRegistration` 자동 등록 |
//! | `@Service` | `#[service]` | `ServiceRegistration` 자동 등록 |
//! | `@Lazy` | 기본 동작 | 첫 `get` 호출 시 생성 |
//! | `CircularDependencyException` | 런타임 패닉 | 초기화 중인 타입 재요청 시 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ #[repository] / #[service] (singleton_macro) → inventory 등록 정보 수집
//!
//! 2. 런타임 초기화
//!    ├─ Database, RedisClient 등 인프라 컴포넌트 직접 등록 (ServiceLocator::set)
//!    └─ initialize_all → 등록된 생성자 호출
//!
//! 3. 조회
//!    ├─ TypeId로 캐시 조회
//!    ├─ 타입 이름 → 등록 이름 매칭 ("DictDataRepository" → "dict_data_repository")
//!    └─ 생성자 호출 후 캐싱
//! ```
//!
//! 등록 이름은 타입 이름을 snake_case로 바꾼 값이어야 합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스 이름
    fn name(&self) -> &str;

    /// 서버 기동 시 한 번 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 계층을 위한 공통 인터페이스
///
/// 컬렉션 이름과 초기화 훅(인덱스 생성 등)을 제공합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리 이름
    fn name(&self) -> &str;

    /// 사용하는 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 서버 기동 시 한 번 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// ```rust,ignore
/// inventory::submit! {
///     crate::core::registry::ServiceRegistration {
///         name: "dict_data_service",
///         constructor: dict_data_service_constructor,
///     }
/// }
/// ```
pub struct ServiceRegistration {
    pub name: &'static str,
    /// `Box<Arc<T>>`를 `Box<dyn Any>`로 감싸서 반환해야 합니다.
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

// 컴파일 타임에 모든 등록 정보를 수집합니다.
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 등록 이름 → 생성자 조회 캐시
static REGISTRATION_CACHE: Lazy<HashMap<&'static str, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let mut cache = HashMap::new();
    let mut repositories = 0;
    let mut services = 0;

    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(registration.name, registration.constructor);
        repositories += 1;
    }

    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(registration.name, registration.constructor);
        services += 1;
    }

    print_cache_initialized("Repository", repositories);
    print_cache_initialized("Service", services);
    cache
});

/// 전역 인스턴스 보관소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입인 경우
    /// * 생성 도중 같은 타입을 다시 요청한 경우 (순환 참조)
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
                std::any::type_name::<T>()
            ),
        }
    }

    /// 타입 `T`의 싱글톤 인스턴스를 찾거나 생성합니다.
    ///
    /// 등록 정보가 없으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.lookup::<T>() {
            return Some(instance);
        }

        {
            let mut initializing = LOCATOR.initializing.write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자는 내부에서 다른 의존성을 get 할 수 있으므로 락 밖에서 호출합니다.
        let created = Self::registration_name(type_name)
            .and_then(|name| REGISTRATION_CACHE.get(name.as_str()).copied())
            .and_then(|constructor| constructor().downcast::<Arc<T>>().ok())
            .map(|boxed| *boxed);

        LOCATOR.initializing.write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&type_id);

        let instance = created?;
        let mut instances = LOCATOR.instances.write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().ok()
    }

    /// 직접 생성한 인스턴스를 등록합니다.
    ///
    /// Database, RedisClient처럼 비동기 연결이 필요한 인프라 컴포넌트에 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();

        println!("📦 Registering: {}", Self::extract_clean_type_name(type_name));

        LOCATOR.instances.write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    fn lookup<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        self.instances.read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// "crate::repositories::DictDataRepository" → "DictDataRepository"
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// "DictDataRepository" → "dict_data_repository"
    ///
    /// `Repository`/`Service`로 끝나지 않는 타입은 자동 생성 대상이 아닙니다.
    fn registration_name(type_name: &str) -> Option<String> {
        let clean = Self::extract_clean_type_name(type_name);
        if !clean.ends_with("Repository") && !clean.ends_with("Service") {
            return None;
        }
        Some(to_snake_case(&clean))
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 생성하고 서비스를 나중에 생성합니다.
    /// 인프라 컴포넌트(Database, RedisClient)는 호출 전에 `set`으로 등록되어 있어야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }
    snake
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
