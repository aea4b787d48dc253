// src/application/pagination.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page coordinates as received from callers; may be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Page 1 for anything below 1.
    pub const fn page_number(&self) -> i64 {
        if self.page < 1 { 1 } else { self.page }
    }

    /// Zero for non-positive sizes, capped at `MAX_PAGE_SIZE`.
    pub const fn effective_page_size(&self) -> i64 {
        if self.page_size < 0 {
            0
        } else if self.page_size > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    pub fn offset(&self) -> u64 {
        let size = self.effective_page_size().unsigned_abs();
        (self.page_number().unsigned_abs() - 1).saturating_mul(size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// A lazily evaluated, already filtered query.
#[async_trait]
pub trait PagedSource: Send + Sync {
    type Item: Send;

    /// Total rows matching the filter, before paging.
    async fn count(&self) -> ApplicationResult<u64>;
    async fn fetch(&self, offset: u64, limit: u64) -> ApplicationResult<Vec<Self::Item>>;
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedList<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_number: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size.unsigned_abs())
        } else {
            0
        };
        let page = page_number.unsigned_abs();
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page < total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

/// Count against the unpaged source, fetch one page and project each row.
pub async fn paginate<S, T, F>(
    source: &S,
    request: PageRequest,
    project: F,
) -> ApplicationResult<PaginatedList<T>>
where
    S: PagedSource + ?Sized,
    F: FnMut(S::Item) -> T + Send,
{
    let page_number = request.page_number();
    let page_size = request.effective_page_size();
    let total_count = source.count().await?;

    if page_size == 0 {
        return Ok(PaginatedList::new(Vec::new(), total_count, page_number, 0));
    }

    let rows = source
        .fetch(request.offset(), page_size.unsigned_abs())
        .await?;
    let items = rows.into_iter().map(project).collect();

    Ok(PaginatedList::new(items, total_count, page_number, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Numbers {
        rows: Vec<u32>,
        fetches: Mutex<Vec<(u64, u64)>>,
    }

    impl Numbers {
        fn up_to(n: u32) -> Self {
            Self {
                rows: (1..=n).collect(),
                fetches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PagedSource for Numbers {
        type Item = u32;

        async fn count(&self) -> ApplicationResult<u64> {
            Ok(self.rows.len() as u64)
        }

        async fn fetch(&self, offset: u64, limit: u64) -> ApplicationResult<Vec<u32>> {
            self.fetches.lock().unwrap().push((offset, limit));
            Ok(self
                .rows
                .iter()
                .skip(usize::try_from(offset).unwrap())
                .take(usize::try_from(limit).unwrap())
                .copied()
                .collect())
        }
    }

    #[tokio::test]
    async fn second_page_is_projected() {
        let source = Numbers::up_to(25);
        let page = paginate(&source, PageRequest::new(2, 10), |n| format!("#{n}"))
            .await
            .unwrap();
        assert_eq!(page.items.first().map(String::as_str), Some("#11"));
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[tokio::test]
    async fn non_positive_page_behaves_as_first_page() {
        let source = Numbers::up_to(5);
        for page in [0, -1, i64::MIN] {
            let list = paginate(&source, PageRequest::new(page, 2), |n| n)
                .await
                .unwrap();
            assert_eq!(list.page_number, 1);
            assert_eq!(list.items, vec![1, 2]);
            assert!(!list.has_previous_page);
        }
    }

    #[tokio::test]
    async fn non_positive_size_returns_no_items_with_true_total() {
        let source = Numbers::up_to(7);
        for size in [0, -5] {
            let list = paginate(&source, PageRequest::new(1, size), |n| n)
                .await
                .unwrap();
            assert!(list.items.is_empty());
            assert_eq!(list.total_count, 7);
            assert_eq!(list.page_size, 0);
            assert_eq!(list.total_pages, 0);
        }
        assert!(source.fetches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_page_size_is_capped() {
        let source = Numbers::up_to(3);
        let list = paginate(&source, PageRequest::new(1, 10_000), |n| n)
            .await
            .unwrap();
        assert_eq!(list.page_size, MAX_PAGE_SIZE);
        assert_eq!(*source.fetches.lock().unwrap(), vec![(0, 100)]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let source = Numbers::up_to(3);
        let list = paginate(&source, PageRequest::new(9, 2), |n| n).await.unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.total_count, 3);
        assert!(!list.has_next_page);
    }

    #[test]
    fn huge_page_numbers_saturate_offset() {
        let request = PageRequest::new(i64::MAX, MAX_PAGE_SIZE);
        assert_eq!(request.offset(), u64::MAX);
    }
}
