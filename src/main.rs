use showcase_cms::application::{
    cancellation::CancellationSource,
    notifications::{self, CacheInvalidated, CacheInvalidationHandler},
    ports::{
        cache::CacheStore,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies, ServiceSettings},
};
use showcase_cms::config::AppConfig;
use showcase_cms::infrastructure::{
    cache::{InMemoryCacheStore, RedisCacheStore},
    database,
    repositories::{
        PostgresContactMessageRepository, PostgresContentReadRepository,
        PostgresContentWriteRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use showcase_cms::presentation::http::{routes::build_router_with_options, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DISPATCHER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let cache: Arc<dyn CacheStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis cache store");
            Arc::new(RedisCacheStore::from_url(url)?)
        }
        None => {
            tracing::info!("REDIS_URL not set; using in-memory cache store");
            Arc::new(InMemoryCacheStore::new())
        }
    };

    let (invalidations, dispatcher) =
        notifications::channel::<CacheInvalidated>(config.invalidation_queue_capacity());
    let dispatcher_task = tokio::spawn(
        dispatcher.run(Arc::new(CacheInvalidationHandler::new(Arc::clone(&cache)))),
    );

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
            content_write_repo: Arc::new(PostgresContentWriteRepository::new(pool.clone())),
            content_read_repo: Arc::new(PostgresContentReadRepository::new(pool.clone())),
            contact_repo: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
            cache,
            password_hasher,
            token_manager,
            clock,
            slugger,
            invalidations,
        },
        ServiceSettings {
            cache_ttl: config.cache_ttl(),
            slug_max_attempts: config.slug_max_attempts(),
        },
    ));

    let shutdown = CancellationSource::new();
    let state = HttpState {
        services,
        shutdown: shutdown.signal(),
    };

    let app = build_router_with_options(
        state,
        config.rate_limit_enabled(),
        config.allowed_origins(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        shutdown.cancel();
    })
    .await?;

    // The router held the last publisher; the dispatcher drains and exits.
    match tokio::time::timeout(DISPATCHER_DRAIN_TIMEOUT, dispatcher_task).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "cache invalidation dispatcher ended abnormally");
        }
        Err(_) => tracing::warn!("cache invalidation dispatcher did not drain in time"),
    }
    pool.close().await;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
