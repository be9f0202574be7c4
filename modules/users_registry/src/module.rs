use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::UsersRegistryConfig;
use crate::contract::client::UsersRegistryApi;
use crate::domain::ports::{Clock, SystemClock};
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersRegistryLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

/// Name of the module's section under `modules:` in the app config.
pub const MODULE_NAME: &str = "users_registry";

/// The users module: storage, domain service and REST surface wired together
#[derive(Clone)]
pub struct UsersRegistry {
    service: Arc<Service>,
}

impl UsersRegistry {
    /// Run the module's database migrations.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running users_registry database migrations");
        Migrator::up(db, None).await?;
        info!("Users database migrations completed successfully");
        Ok(())
    }

    /// Wire the module against the host clock.
    pub fn init(cfg: UsersRegistryConfig, db: DatabaseConnection) -> Self {
        Self::with_clock(cfg, db, Arc::new(SystemClock))
    }

    pub fn with_clock(
        cfg: UsersRegistryConfig,
        db: DatabaseConnection,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!("Initializing users_registry module");
        debug!("Loaded users_registry config: min_age={}", cfg.min_age);

        // Wire repository (infra) to domain service (port)
        let repo = SeaOrmUsersRepository::new(db);
        let service_config = ServiceConfig {
            min_age: cfg.min_age,
        };
        let service = Service::new(Arc::new(repo), clock, service_config);

        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules.
    pub fn client(&self) -> Arc<dyn UsersRegistryApi> {
        Arc::new(UsersRegistryLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering users_registry REST routes");
        let router = routes::register_routes(router, self.service.clone());
        info!("Users REST routes registered successfully");
        router
    }
}
