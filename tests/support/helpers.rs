// tests/support/helpers.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    InMemoryContactRepo, InMemoryContentRepo, InMemoryUserRepo, PlainPasswordHasher,
    RecordingCache, TickingClock,
};
use showcase_cms::application::{
    cancellation::CancellationSource,
    dto::TokenSubject,
    notifications::{self, CacheInvalidated, CacheInvalidationHandler, NotificationPublisher},
    ports::security::TokenManager,
    services::{ApplicationServices, ServiceDependencies, ServiceSettings},
};
use showcase_cms::domain::user::{Role, UserId};
use showcase_cms::infrastructure::{security::token::BiscuitTokenManager, util::DefaultSlugGenerator};
use showcase_cms::presentation::http::{routes::build_router_with_options, state::HttpState};

pub const TEST_PRIVATE_KEY: &str =
    "8b4f7e1c2d3a4b5c6d7e8f9012345678abcdef0123456789abcdef0123456789";

/// Router plus the backing fakes, so tests can inspect side effects.
pub struct TestApp {
    pub router: axum::Router,
    pub content: Arc<InMemoryContentRepo>,
    pub contacts: Arc<InMemoryContactRepo>,
    pub cache: Arc<RecordingCache>,
    pub services: Arc<ApplicationServices>,
    pub shutdown: CancellationSource,
    invalidations: NotificationPublisher<CacheInvalidated>,
}

static DRAIN_MARKERS: AtomicUsize = AtomicUsize::new(0);

impl TestApp {
    /// Wait until every invalidation queued so far has been handled. The
    /// dispatcher is FIFO, so once a marker key reaches the cache everything
    /// queued before it is done. The marker is then scrubbed from `removals`.
    pub async fn settle(&self) {
        let marker = format!("test:drained:{}", DRAIN_MARKERS.fetch_add(1, Ordering::SeqCst));
        self.invalidations
            .invalidate(CacheInvalidated::new([marker.clone()]))
            .await;

        tokio::time::timeout(Duration::from_secs(5), async {
            while !self.cache.removals.lock().unwrap().contains(&marker) {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("dispatcher drains queued invalidations");

        self.cache.removals.lock().unwrap().retain(|key| key != &marker);
    }
}

pub fn token_manager() -> BiscuitTokenManager {
    BiscuitTokenManager::new(TEST_PRIVATE_KEY, Duration::from_secs(3600))
        .expect("test key is valid")
}

pub async fn build_test_app() -> TestApp {
    let content = Arc::new(InMemoryContentRepo::default());
    let contacts = Arc::new(InMemoryContactRepo::default());
    let cache = Arc::new(RecordingCache::default());

    let (invalidations, dispatcher) = notifications::channel::<CacheInvalidated>(64);
    tokio::spawn(dispatcher.run(Arc::new(CacheInvalidationHandler::new(cache.clone()))));

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            user_repo: Arc::new(InMemoryUserRepo::default()),
            content_write_repo: content.clone(),
            content_read_repo: content.clone(),
            contact_repo: contacts.clone(),
            cache: cache.clone(),
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(token_manager()),
            clock: Arc::new(TickingClock::default()),
            slugger: Arc::new(DefaultSlugGenerator),
            invalidations: invalidations.clone(),
        },
        ServiceSettings::default(),
    ));

    let shutdown = CancellationSource::new();
    let state = HttpState {
        services: Arc::clone(&services),
        shutdown: shutdown.signal(),
    };

    TestApp {
        router: build_router_with_options(state, false, &[]),
        content,
        contacts,
        cache,
        services,
        shutdown,
        invalidations,
    }
}

pub async fn make_test_router() -> axum::Router {
    build_test_app().await.router
}

/// Mint a token carrying the role's default permissions.
pub async fn token_for(role: Role) -> String {
    token_with(role, role.default_permissions().iter().map(|p| (*p).to_string()).collect()).await
}

pub async fn token_with(role: Role, permissions: Vec<String>) -> String {
    token_manager()
        .issue(TokenSubject {
            user_id: UserId::new(1).unwrap(),
            username: format!("{role}-tester"),
            role,
            permissions,
        })
        .await
        .expect("issue token")
        .token
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Create an item through the admin API and return its JSON.
pub async fn create_content(router: &axum::Router, token: &str, body: Value) -> Value {
    let (status, json) = send(
        router,
        request(Method::POST, "/api/v1/admin/content", Some(token), Some(body)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("error body is json");
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message"
    );
}
