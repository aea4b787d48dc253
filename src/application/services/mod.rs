// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        authorization::{PermissionPolicyProvider, PolicyDecision, PolicyRegistry, Principal},
        commands::{
            contact::ContactCommandService, content::ContentCommandService,
            users::UserCommandService,
        },
        error::{ApplicationError, ApplicationResult},
        notifications::{CacheInvalidated, NotificationPublisher},
        ports::{
            cache::CacheStore,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            contact::ContactQueryService, content::ContentQueryService,
            dashboard::DashboardQueryService, users::UserQueryService,
        },
    },
    domain::{
        contact::ContactMessageRepository,
        content::{
            ContentReadRepository, ContentWriteRepository,
            services::{ContentSlugService, DEFAULT_MAX_SLUG_ATTEMPTS},
        },
        user::UserRepository,
    },
};

/// Tunables that shape service behaviour rather than wiring.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub cache_ttl: Duration,
    pub slug_max_attempts: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            slug_max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }
}

/// Ports the application layer is built from.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub content_write_repo: Arc<dyn ContentWriteRepository>,
    pub content_read_repo: Arc<dyn ContentReadRepository>,
    pub contact_repo: Arc<dyn ContactMessageRepository>,
    pub cache: Arc<dyn CacheStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub invalidations: NotificationPublisher<CacheInvalidated>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub content_commands: Arc<ContentCommandService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
    policy_provider: Arc<PermissionPolicyProvider>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies, settings: ServiceSettings) -> Self {
        let ServiceDependencies {
            user_repo,
            content_write_repo,
            content_read_repo,
            contact_repo,
            cache,
            password_hasher,
            token_manager,
            clock,
            slugger,
            invalidations,
        } = deps;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ContentSlugService::new(
            Arc::clone(&content_read_repo),
            slugger,
            settings.slug_max_attempts,
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            content_write_repo,
            Arc::clone(&content_read_repo),
            slug_service,
            Arc::clone(&clock),
            invalidations.clone(),
        ));
        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&clock),
            invalidations,
        ));

        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&cache),
            settings.cache_ttl,
        ));
        let contact_queries = Arc::new(ContactQueryService::new(Arc::clone(&contact_repo)));
        let dashboard_queries = Arc::new(DashboardQueryService::new(
            content_read_repo,
            contact_repo,
            cache,
            settings.cache_ttl,
        ));
        let user_queries = Arc::new(UserQueryService::new(clock));

        Self {
            user_commands,
            content_commands,
            contact_commands,
            content_queries,
            contact_queries,
            dashboard_queries,
            user_queries,
            token_manager,
            policy_provider: Arc::new(PermissionPolicyProvider::new(
                PolicyRegistry::with_defaults(),
            )),
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve `policy` and evaluate it against the (optional) bearer token.
    /// Unknown policy names are a server misconfiguration, not a client error.
    pub async fn authorize(
        &self,
        token: Option<&str>,
        policy: &str,
    ) -> ApplicationResult<Option<Principal>> {
        let resolved = self.policy_provider.resolve(policy).ok_or_else(|| {
            tracing::error!(policy, "no authorization policy registered");
            ApplicationError::infrastructure(format!("unknown authorization policy {policy}"))
        })?;

        let principal = match token {
            Some(token) => Some(self.token_manager.authenticate(token).await?),
            None => None,
        };

        match resolved.evaluate(principal.as_ref()) {
            PolicyDecision::Allowed => Ok(principal),
            PolicyDecision::Unauthenticated => {
                Err(ApplicationError::unauthorized("authentication required"))
            }
            PolicyDecision::Forbidden => Err(ApplicationError::forbidden(format!(
                "policy {} not satisfied",
                resolved.name()
            ))),
        }
    }
}
