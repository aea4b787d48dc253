// tests/cache_invalidation.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use showcase_cms::application::cache_keys;
use showcase_cms::application::notifications::{CacheInvalidated, CacheInvalidationHandler};
use showcase_cms::application::ports::cache::CacheStore;
use showcase_cms::domain::content::ContentKind;
use showcase_cms::domain::user::Role;

mod support;

use support::{RecordingCache, request, send, token_for};

/// Collects the message of every INFO/WARN event.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::INFO || level == Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push((level, visitor.0));
        }
    }
}

impl CapturedLogs {
    fn count(&self, level: Level, message: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, m)| *l == level && m == message)
            .count()
    }
}

#[tokio::test]
async fn logs_one_info_line_per_key() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(logs.clone()));

    let cache = Arc::new(RecordingCache::default());
    cache.set("content:service:slug:web", "{}", Duration::from_secs(60)).await.unwrap();
    let handler = CacheInvalidationHandler::new(cache.clone());

    let event = CacheInvalidated::new([
        "content:service:slug:web",
        "content:service:slug:web-design",
        cache_keys::DASHBOARD_SUMMARY,
    ]);
    let report = handler.invalidate(&event).await;

    assert_eq!(report.removed, 1);
    assert_eq!(report.already_absent, 2);
    assert!(report.is_clean());
    assert_eq!(logs.count(Level::INFO, "removed cache entry"), 3);
    assert_eq!(
        *cache.removals.lock().unwrap(),
        [
            "content:service:slug:web",
            "content:service:slug:web-design",
            "dashboard:summary"
        ]
    );
}

#[tokio::test]
async fn empty_events_touch_nothing() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(logs.clone()));

    let cache = Arc::new(RecordingCache::default());
    let handler = CacheInvalidationHandler::new(cache.clone());
    let report = handler.invalidate(&CacheInvalidated::new(Vec::<String>::new())).await;

    assert_eq!(report.removed + report.already_absent, 0);
    assert!(cache.removals.lock().unwrap().is_empty());
    assert_eq!(logs.count(Level::INFO, "removed cache entry"), 0);
}

#[tokio::test]
async fn a_failing_key_does_not_stop_the_rest() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(logs.clone()));

    let cache = Arc::new(RecordingCache::default());
    cache.break_key("b");
    let handler = CacheInvalidationHandler::new(cache.clone());
    let report = handler.invalidate(&CacheInvalidated::new(["a", "b", "c"])).await;

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].key, "b");
    assert_eq!(report.already_absent, 2);
    assert_eq!(*cache.removals.lock().unwrap(), ["a", "b", "c"]);
    assert_eq!(logs.count(Level::INFO, "removed cache entry"), 2);
    assert_eq!(logs.count(Level::WARN, "failed to remove cache entry"), 1);
}

#[tokio::test]
async fn renaming_published_content_evicts_both_slugs() {
    let app = support::build_test_app().await;
    let admin = token_for(Role::Admin).await;

    let created = support::create_content(
        &app.router,
        &admin,
        json!({ "kind": "case_study", "title": "Harbor Lights", "publish": true }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    app.settle().await;

    let old_key = cache_keys::content_by_slug(ContentKind::CaseStudy, "harbor-lights");
    let (status, _) = send(
        &app.router,
        request(Method::GET, "/api/v1/content/case_study/harbor-lights", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.cache.contains(&old_key), "published item is cached on read");

    app.cache.removals.lock().unwrap().clear();
    let (status, _) = send(
        &app.router,
        request(
            Method::PUT,
            &format!("/api/v1/admin/content/{id}"),
            Some(&admin),
            Some(json!({ "title": "Harbor Lights Revisited" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    app.settle().await;

    assert!(!app.cache.contains(&old_key));
    assert_eq!(
        *app.cache.removals.lock().unwrap(),
        [
            old_key,
            cache_keys::content_by_slug(ContentKind::CaseStudy, "harbor-lights-revisited"),
            cache_keys::DASHBOARD_SUMMARY.to_string(),
        ]
    );
}

#[tokio::test]
async fn contact_submissions_refresh_the_dashboard() {
    let app = support::build_test_app().await;
    let (status, _) = send(
        &app.router,
        request(
            Method::POST,
            "/api/v1/contact",
            None,
            Some(json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    app.settle().await;

    assert_eq!(
        *app.cache.removals.lock().unwrap(),
        [cache_keys::DASHBOARD_SUMMARY]
    );
}
