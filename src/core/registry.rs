//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 서비스와 리포지토리를 타입별 싱글톤으로 관리하는 전역 컨테이너입니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ inventory::submit! → ServiceRegistration / RepositoryRegistration
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 (Lazy Singleton)
//!    ├─ ServiceLocator::get::<T>() 호출
//!    ├─ 캐시된 인스턴스가 있으면 즉시 반환
//!    ├─ 타입 이름으로 등록 정보 조회 ("UserService" → "user")
//!    ├─ 생성자 실행 (내부에서 의존성을 다시 try_get::<D>()?로 해결)
//!    └─ 인스턴스 캐시 후 반환
//! ```
//!
//! 각 컴포넌트의 `instance()`는 `ServiceLocator::get::<Self>()`에 위임하며,
//! 싱글톤 캐시는 로케이터 하나뿐입니다.
//!
//! ## 순환 참조
//!
//! 생성 중인 타입이 다시 요청되면 `try_get`은 `AppError::InternalError`를 반환하고,
//! 에러는 생성자 체인을 따라 최초 호출자까지 전파됩니다. `get`은 이 에러로 패닉합니다.
//! 의존성 그래프는 항상 단방향이어야 합니다:
//!
//! ```text
//! PostService ──► UserService ──► AuthService ──► UserRepository
//!      │               └──────────────────────────► UserRepository
//!      └──► PostRepository
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 비즈니스 로직 컴포넌트
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

/// 데이터 액세스 컴포넌트
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    /// 이 리포지토리가 다루는 데이터 묶음의 이름
    fn collection_name(&self) -> &str;

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

/// 등록된 생성자. 의존성 해결 실패(순환 참조 포함)를 그대로 전파합니다.
pub type Constructor = fn() -> AppResult<Arc<dyn Any + Send + Sync>>;

/// 서비스 등록 정보
///
/// `name`은 `"<entity>_service"` 형식이며, 타입 이름 `<Entity>Service`와 매칭됩니다.
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: Constructor,
}

/// 리포지토리 등록 정보
///
/// `name`은 `"<entity>_repository"` 형식입니다.
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: Constructor,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_entity_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> =
    Lazy::new(|| {
        let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
            .map(|registration| (extract_entity_name(registration.name), registration))
            .collect();

        print_cache_initialized("Repository", cache.len());
        cache
    });

/// `"user_service"` → `"user"`, `"post_repository"` → `"post"`
fn extract_entity_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .replace('_', "")
        .to_lowercase()
}

/// 타입 경로의 마지막 세그먼트만 남깁니다.
fn extract_clean_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

thread_local! {
    // 순환은 항상 한 스레드의 생성자 호출 스택 안에서만 생기므로 스레드별로 추적
    static INITIALIZING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

/// 생성 중 표시를 스코프 종료 시 자동으로 해제합니다.
struct InitializingGuard {
    type_id: TypeId,
}

impl InitializingGuard {
    /// 이미 생성 중인 타입이면 `None`
    fn enter(type_id: TypeId) -> Option<Self> {
        INITIALIZING
            .with(|initializing| initializing.borrow_mut().insert(type_id))
            .then(|| Self { type_id })
    }
}

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        INITIALIZING.with(|initializing| {
            initializing.borrow_mut().remove(&self.type_id);
        });
    }
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 참조가 감지되면 패닉합니다.
    /// 둘 다 배선 오류이므로 애플리케이션 시작 시점에 드러나야 합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Ok(instance) => instance,
            Err(e) => {
                log::error!("❌ {}", e);
                panic!("{}", e);
            }
        }
    }

    /// `get`의 에러 반환 버전
    pub fn try_get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>()? {
            return Ok(instance);
        }

        // 순환 참조 감지
        let _guard = InitializingGuard::enter(type_id).ok_or_else(|| {
            AppError::InternalError(format!(
                "Circular dependency detected: {} is already being initialized",
                type_name
            ))
        })?;

        // 생성자는 내부에서 다른 get()을 호출하므로 쓰기 락을 잡지 않은 채 실행
        let instance = Self::construct(type_name)?;

        let typed = instance.clone().downcast::<T>().map_err(|_| {
            AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name))
        })?;

        let stored = Self::store(type_id, instance)?;

        Ok(stored.downcast::<T>().unwrap_or(typed))
    }

    /// 먼저 저장된 인스턴스가 있으면 그것을 유지하고 반환합니다.
    fn store(
        type_id: TypeId,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> AppResult<Arc<dyn Any + Send + Sync>> {
        let mut instances = LOCATOR
            .instances
            .write()
            .context("registry lock poisoned")?;

        Ok(instances.entry(type_id).or_insert(instance).clone())
    }

    fn cached<T: 'static + Send + Sync>() -> AppResult<Option<Arc<T>>> {
        let instances = LOCATOR
            .instances
            .read()
            .context("registry lock poisoned")?;

        Ok(instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok()))
    }

    fn construct(type_name: &str) -> AppResult<Arc<dyn Any + Send + Sync>> {
        let clean_type_name = extract_clean_type_name(type_name);

        // "UserRepository" -> "user"
        if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            let registration = REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .ok_or_else(|| {
                    AppError::InternalError(format!("No repository found for entity: {}", entity))
                })?;
            return (registration.constructor)();
        }

        // "UserService" -> "user"
        if let Some(entity) = clean_type_name.strip_suffix("Service") {
            let registration = SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .ok_or_else(|| {
                    AppError::InternalError(format!("No service found for entity: {}", entity))
                })?;
            return (registration.constructor)();
        }

        Err(AppError::InternalError(format!(
            "Service not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
            type_name
        )))
    }

    /// 외부에서 생성한 인스턴스를 등록합니다.
    ///
    /// 이미 같은 타입이 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", extract_clean_type_name(type_name));

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
            }
            Err(_) => log::error!("registry lock poisoned while registering {}", type_name),
        }
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                Self::register(registration.name, registration.constructor)?;
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
                Self::register(registration.name, registration.constructor)?;
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }

    /// 생성자를 실행하고 결과를 구체 타입의 `TypeId`로 캐시합니다.
    fn register(name: &str, constructor: Constructor) -> AppResult<()> {
        let instance = constructor().map_err(|e| {
            log::error!("❌ {} 생성 실패: {}", name, e);
            e
        })?;

        // Arc가 아닌 내부 값의 TypeId
        let type_id = (*instance).type_id();
        Self::store(type_id, instance)?;
        Ok(())
    }
}
