// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

use showcase_cms::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{
        cache::{CacheRemoval, CacheStore},
        security::PasswordHasher,
        time::Clock,
    },
};
use showcase_cms::domain::contact::{ContactMessage, ContactMessageId, ContactMessageRepository, NewContactMessage};
use showcase_cms::domain::content::{
    ContentFilter, ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug,
    ContentUpdate, ContentWriteRepository, NewContentItem,
};
use showcase_cms::domain::errors::{DomainError, DomainResult};
use showcase_cms::domain::user::{NewUser, User, UserId, UserRepository, Username};

pub static EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());

/// Advances one second per reading so creation order is observable.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        *EPOCH + ChronoDuration::seconds(tick)
    }
}

/// Stores the password itself; hashing is not under test here.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain${password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn any_exist(&self) -> DomainResult<bool> {
        Ok(!self.users.lock().unwrap().is_empty())
    }

    async fn insert(&self, account: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == account.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            username: account.username,
            password_hash: account.password_hash,
            role: account.role,
            is_active: account.is_active,
            created_at: account.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn insert_bootstrap_admin(&self, account: NewUser) -> DomainResult<Option<User>> {
        if self.any_exist().await? {
            return Ok(None);
        }
        self.insert(account).await.map(Some)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }
}

/// Serves as both the read and the write side, like a single table would.
#[derive(Default)]
pub struct InMemoryContentRepo {
    items: Mutex<BTreeMap<i64, ContentItem>>,
    next_id: AtomicI64,
    pub slug_checks: AtomicUsize,
}

impl InMemoryContentRepo {
    fn matches(item: &ContentItem, filter: &ContentFilter) -> bool {
        if filter.kind.is_some_and(|kind| kind != item.kind) {
            return false;
        }
        if !filter.include_drafts && !item.published {
            return false;
        }
        match filter.search.as_deref() {
            Some(term) => {
                let term = term.to_lowercase();
                item.title.as_str().to_lowercase().contains(&term)
                    || item.summary.as_str().to_lowercase().contains(&term)
            }
            None => true,
        }
    }

    fn slug_taken(
        items: &BTreeMap<i64, ContentItem>,
        kind: ContentKind,
        slug: &str,
        exclude: Option<ContentId>,
    ) -> bool {
        items.values().any(|item| {
            item.kind == kind && item.slug.as_str() == slug && Some(item.id) != exclude
        })
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryContentRepo {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let mut items = self.items.lock().unwrap();
        if Self::slug_taken(&items, item.kind, item.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists for this kind".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = ContentItem {
            id: ContentId::new(id)?,
            kind: item.kind,
            title: item.title,
            slug: item.slug,
            summary: item.summary,
            body: item.body,
            published: item.published,
            published_at: item.published_at,
            sort_order: item.sort_order,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        items.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let mut items = self.items.lock().unwrap();
        if let Some(slug) = &update.slug {
            let kind = items
                .get(&update.id.0)
                .map(|item| item.kind)
                .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
            if Self::slug_taken(&items, kind, slug.as_str(), Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists for this kind".into()));
            }
        }
        let item = items
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        if item.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("content update conflict, please retry".into()));
        }
        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(slug) = update.slug {
            item.slug = slug;
        }
        if let Some(summary) = update.summary {
            item.summary = summary;
        }
        if let Some(body) = update.body {
            item.body = body;
        }
        if let Some(sort_order) = update.sort_order {
            item.sort_order = sort_order;
        }
        if let Some(state) = update.publish_state {
            item.published = state.published;
            item.published_at = state.published_at;
        }
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        self.items
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("content not found".into()))
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryContentRepo {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        Ok(self.items.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .find(|item| item.kind == kind && &item.slug == slug)
            .cloned())
    }

    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude: Option<ContentId>,
    ) -> DomainResult<bool> {
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        Ok(Self::slug_taken(&self.items.lock().unwrap(), kind, slug, exclude))
    }

    async fn count(&self, filter: &ContentFilter) -> DomainResult<u64> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| Self::matches(item, filter))
            .count() as u64)
    }

    async fn list_page(
        &self,
        filter: &ContentFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentItem>> {
        let mut matching: Vec<ContentItem> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| Self::matches(item, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.0.cmp(&a.id.0))
        });
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryContactRepo {
    messages: Mutex<BTreeMap<i64, ContactMessage>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactRepo {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = ContactMessage {
            id: ContactMessageId::new(id)?,
            reference: message.reference,
            name: message.name,
            email: message.email,
            subject: message.subject,
            body: message.body,
            is_read: false,
            created_at: message.created_at,
        };
        self.messages.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ContactMessageId) -> DomainResult<Option<ContactMessage>> {
        Ok(self.messages.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn set_read(&self, id: ContactMessageId, read: bool) -> DomainResult<ContactMessage> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;
        message.is_read = read;
        Ok(message.clone())
    }

    async fn delete(&self, id: ContactMessageId) -> DomainResult<()> {
        self.messages
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))
    }

    async fn count(&self, unread_only: bool) -> DomainResult<u64> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .values()
            .filter(|m| !unread_only || !m.is_read)
            .count() as u64)
    }

    async fn list_page(
        &self,
        unread_only: bool,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContactMessage>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .values()
            .rev()
            .filter(|m| !unread_only || !m.is_read)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Cache that records every removal and can be told to fail for some keys.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<BTreeMap<String, String>>,
    broken: Mutex<HashSet<String>>,
    pub removals: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn break_key(&self, key: &str) {
        self.broken.lock().unwrap().insert(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheStore for RecordingCache {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> ApplicationResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> ApplicationResult<CacheRemoval> {
        self.removals.lock().unwrap().push(key.to_string());
        if self.broken.lock().unwrap().contains(key) {
            return Err(ApplicationError::unavailable("cache backend unreachable"));
        }
        Ok(match self.entries.lock().unwrap().remove(key) {
            Some(_) => CacheRemoval::Removed,
            None => CacheRemoval::AlreadyAbsent,
        })
    }
}
